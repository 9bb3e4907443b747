//! Products

use salvo::Router;

pub(crate) mod errors;
mod handlers;
mod requests;
mod responses;

pub(crate) use handlers::*;

/// Every product route, registered one handler at a time.
pub(crate) fn router() -> Router {
    Router::with_path("product")
        .get(index::handler)
        .post(create::handler)
        .push(
            Router::with_path("{id}")
                .get(get::handler)
                .put(edit::handler)
                .delete(delete::handler),
        )
}
