mod common;

use std::str::FromStr;

use inventory_tracker::{error::AppError, services::product_service};
use rust_decimal::Decimal;

use common::{input, setup_state};

// Widget lifecycle: create -> list -> update quantity -> delete.
#[tokio::test]
async fn widget_create_update_delete_flow() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let created =
        product_service::create_product(&state, input("Widget", "A widget", "9.99", 5)).await?;

    let listed = product_service::list_products(&state).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], created);
    assert_eq!(listed[0].price, Decimal::from_str("9.99")?);
    assert_eq!(listed[0].quantity, 5);

    let updated = product_service::update_product(
        &state,
        created.id,
        input("Widget", "A widget", "9.99", 10),
    )
    .await?;
    assert_eq!(updated.id, created.id);

    let fetched = product_service::get_product(&state, created.id).await?;
    assert_eq!(fetched.quantity, 10);
    assert_eq!(fetched.name, "Widget");

    product_service::delete_product(&state, created.id).await?;
    let missing = product_service::get_product(&state, created.id).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    assert!(product_service::list_products(&state).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn ids_are_assigned_fresh_and_listed_in_insertion_order() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let first = product_service::create_product(&state, input("First", "one", "1.00", 1)).await?;
    let second =
        product_service::create_product(&state, input("Second", "two", "2.00", 2)).await?;
    assert_ne!(first.id, second.id);

    let names: Vec<String> = product_service::list_products(&state)
        .await?
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["First", "Second"]);

    // Deleted ids are not handed out again.
    product_service::delete_product(&state, second.id).await?;
    let third = product_service::create_product(&state, input("Third", "three", "3.00", 3)).await?;
    assert_ne!(third.id, second.id);
    assert_ne!(third.id, first.id);

    Ok(())
}

#[tokio::test]
async fn update_replaces_all_editable_fields() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let product =
        product_service::create_product(&state, input("View Product", "View test.", "5.00", 2))
            .await?;

    product_service::update_product(
        &state,
        product.id,
        input("Updated Product", "Updated description.", "10.00", 4),
    )
    .await?;

    let fetched = product_service::get_product(&state, product.id).await?;
    assert_eq!(fetched.id, product.id);
    assert_eq!(fetched.name, "Updated Product");
    assert_eq!(fetched.description, "Updated description.");
    assert_eq!(fetched.price, Decimal::from(10));
    assert_eq!(fetched.quantity, 4);

    Ok(())
}

#[tokio::test]
async fn update_of_missing_id_is_not_found_and_changes_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let product =
        product_service::create_product(&state, input("Keep", "untouched", "1.50", 7)).await?;

    let result =
        product_service::update_product(&state, product.id + 100, input("X", "Y", "2.00", 1))
            .await;
    assert!(matches!(result, Err(AppError::NotFound)));

    let listed = product_service::list_products(&state).await?;
    assert_eq!(listed, vec![product]);

    Ok(())
}

#[tokio::test]
async fn delete_of_missing_id_is_not_found() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let result = product_service::delete_product(&state, 42).await;
    assert!(matches!(result, Err(AppError::NotFound)));

    Ok(())
}

#[tokio::test]
async fn zero_price_and_quantity_round_trip_through_storage() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let product =
        product_service::create_product(&state, input("Zero Product", "Zero values", "0.00", 0))
            .await?;

    let fetched = product_service::get_product(&state, product.id).await?;
    assert!(fetched.price.is_zero());
    assert_eq!(fetched.quantity, 0);

    Ok(())
}
