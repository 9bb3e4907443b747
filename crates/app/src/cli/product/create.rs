use clap::Args;
use eshop_product_app::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService, data::NewProduct},
};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Numeric product type
    #[arg(long = "type")]
    kind: i32,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateProductArgs) -> Result<(), String> {
    if args.name.trim().is_empty() {
        return Err("name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    let product = service
        .create_product(NewProduct {
            name: args.name,
            kind: args.kind,
        })
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    println!("product_id: {}", product.id);
    println!("product_name: {}", product.name);
    println!("product_type: {}", product.kind);

    Ok(())
}
