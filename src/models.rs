use rust_decimal::Decimal;

use crate::entity::products::Model as ProductModel;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            // SQLite hands decimals back through f64
            price: model.price.round_dp(2),
            quantity: model.quantity,
        }
    }
}
