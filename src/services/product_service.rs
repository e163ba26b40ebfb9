use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::products::ProductInput,
    entity::products::{ActiveModel, Column, Entity as Products},
    error::{AppError, AppResult},
    models::Product,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(items)
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    let result = Products::find_by_id(id).one(&state.orm).await?;
    match result {
        Some(p) => Ok(p.into()),
        None => Err(AppError::NotFound),
    }
}

pub async fn create_product(state: &AppState, payload: ProductInput) -> AppResult<Product> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        quantity: Set(payload.quantity),
    };
    let product = active.insert(&state.orm).await?;

    tracing::info!(product_id = product.id, "product created");
    Ok(product.into())
}

/// Replaces every editable field of the product. Concurrent writers are not
/// detected; the last update to land wins.
pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: ProductInput,
) -> AppResult<Product> {
    let existing = Products::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    active.price = Set(payload.price);
    active.quantity = Set(payload.quantity);

    // The row can vanish between the read and the write.
    let product = active.update(&state.orm).await.map_err(|err| match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::NotFound,
        other => AppError::StorageUnavailable(other),
    })?;

    tracing::info!(product_id = product.id, "product updated");
    Ok(product.into())
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(product_id = id, "product deleted");
    Ok(())
}
