//! Route templates for span names and metric labels.

/// `path` with every all-digit segment replaced by `{id}`, so `/product/42` and
/// `/product/7` share one span name and one metric series.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::route_template;

    #[test]
    fn numeric_product_ids_are_collapsed() {
        assert_eq!(route_template("/product/42"), "/product/{id}");
        assert_eq!(route_template("/product/0"), "/product/{id}");
    }

    #[test]
    fn non_numeric_segments_are_kept() {
        assert_eq!(route_template("/product/abc"), "/product/abc");
        assert_eq!(route_template("/product/-3"), "/product/-3");
        assert_eq!(route_template("/healthcheck"), "/healthcheck");
        assert_eq!(route_template("/"), "/");
    }
}
