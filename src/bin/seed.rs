use std::str::FromStr;

use inventory_tracker::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::products::ProductInput,
    entity::Products,
    services::product_service,
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let state = AppState { orm };
    let existing = Products::find().count(&state.orm).await?;
    if existing > 0 {
        println!("Products table already has {existing} rows, skipping seed");
        return Ok(());
    }

    seed_products(&state).await?;
    Ok(())
}

async fn seed_products(state: &AppState) -> anyhow::Result<()> {
    let products = vec![
        ("Widget", "A widget", "9.99", 5),
        ("Ferris Mug", "Coffee tastes better with Ferris", "12.00", 100),
        ("Sticker Pack", "Decorate your laptop", "5.00", 200),
        ("Shipping Box", "Corrugated cardboard, medium", "1.25", 0),
    ];

    for (name, description, price, quantity) in products {
        product_service::create_product(
            state,
            ProductInput {
                name: name.to_string(),
                description: description.to_string(),
                price: Decimal::from_str(price)?,
                quantity,
            },
        )
        .await?;
    }

    println!("Seeded products");
    Ok(())
}
