use clap::{Parser, Subcommand};

mod db;
mod product;

#[derive(Debug, Parser)]
#[command(name = "eshop-product-app", about = "Product service admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Product(product::ProductCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Product(command) => product::run(command).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_product_create() {
        let cli = Cli::try_parse_from([
            "eshop-product-app",
            "product",
            "create",
            "--name",
            "Socks",
            "--type",
            "5",
            "--database-url",
            "postgres://localhost/eshop",
        ]);

        assert!(cli.is_ok(), "expected parse success, got {cli:?}");
    }

    #[test]
    fn product_create_requires_type() {
        let cli = Cli::try_parse_from([
            "eshop-product-app",
            "product",
            "create",
            "--name",
            "Socks",
            "--database-url",
            "postgres://localhost/eshop",
        ]);

        assert!(cli.is_err());
    }
}
