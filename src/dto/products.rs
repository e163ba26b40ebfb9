use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    models::Product,
    validation::{
        FormErrors, PriceLiteral, REQUIRED, validate_non_negative_price,
        validate_non_negative_quantity, validate_not_blank,
    },
};

const NOT_A_NUMBER: &str = "Enter a number.";

/// Raw values as submitted by the product form. Missing fields arrive empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    #[schema(example = "9.99")]
    pub price: String,
    #[schema(example = "5")]
    pub quantity: String,
}

/// A product payload that passed validation and may be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}

#[derive(Debug, Validate)]
struct CleanedProduct {
    #[validate(
        custom(function = "validate_not_blank"),
        length(max = 100, message = "Ensure this value has at most 100 characters.")
    )]
    name: String,
    #[validate(custom(function = "validate_not_blank"))]
    description: String,
    #[validate(custom(function = "validate_non_negative_price"))]
    price: Option<Decimal>,
    #[validate(custom(function = "validate_non_negative_quantity"))]
    quantity: Option<i32>,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
        }
    }

    pub fn validate(&self) -> Result<ProductInput, FormErrors> {
        let mut errors = FormErrors::default();

        let price = match self.price.trim() {
            "" => {
                errors.add("price", REQUIRED);
                None
            }
            raw => match PriceLiteral::parse(raw) {
                None => {
                    errors.add("price", NOT_A_NUMBER);
                    None
                }
                Some(literal) => match literal.check_precision() {
                    Err(error) => {
                        errors.add_error("price", &error);
                        None
                    }
                    Ok(()) => {
                        let price = literal.to_decimal();
                        if price.is_none() {
                            errors.add("price", NOT_A_NUMBER);
                        }
                        price
                    }
                },
            },
        };

        let quantity = match self.quantity.trim() {
            "" => {
                errors.add("quantity", REQUIRED);
                None
            }
            raw => match raw.parse::<i32>() {
                Ok(quantity) => Some(quantity),
                Err(_) => {
                    errors.add("quantity", "Enter a whole number.");
                    None
                }
            },
        };

        let cleaned = CleanedProduct {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            quantity,
        };
        if let Err(rule_errors) = cleaned.validate() {
            errors.merge(rule_errors);
        }

        match (cleaned.price, cleaned.quantity) {
            (Some(price), Some(quantity)) if errors.is_empty() => Ok(ProductInput {
                name: cleaned.name,
                description: cleaned.description,
                price,
                quantity,
            }),
            _ => Err(errors),
        }
    }
}
