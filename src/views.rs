//! Server-rendered HTML pages. `maud` escapes every interpolated value.

use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, html};

use crate::{dto::products::ProductForm, models::Product, validation::FormErrors};

pub const LIST_PATH: &str = "/products/";
pub const CREATE_PATH: &str = "/products/create/";

pub fn update_path(id: i32) -> String {
    format!("/products/update/{id}/")
}

pub fn delete_path(id: i32) -> String {
    format!("/products/delete/{id}/")
}

/// Which page the product form is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(i32),
}

impl FormMode {
    fn title(self) -> &'static str {
        match self {
            FormMode::Create => "Add product",
            FormMode::Update(_) => "Edit product",
        }
    }

    fn action(self) -> String {
        match self {
            FormMode::Create => CREATE_PATH.to_string(),
            FormMode::Update(id) => update_path(id),
        }
    }
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) " | Inventory" }
            }
            body {
                header { a href=(LIST_PATH) { "Inventory" } }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}

pub fn product_list(products: &[Product]) -> Markup {
    layout(
        "Products",
        html! {
            p { a href=(CREATE_PATH) { "Add product" } }
            @if products.is_empty() {
                p { "No products yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Description" }
                            th { "Price" }
                            th { "Quantity" }
                            th {}
                        }
                    }
                    tbody {
                        @for product in products {
                            tr {
                                td { (product.name) }
                                td { (product.description) }
                                td { (product.price.to_string()) }
                                td { (product.quantity) }
                                td {
                                    a href=(update_path(product.id)) { "Edit" }
                                    " "
                                    a href=(delete_path(product.id)) { "Delete" }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn field_errors(errors: &FormErrors, field: &str) -> Markup {
    let messages = errors.get(field);
    html! {
        @if !messages.is_empty() {
            ul.errorlist {
                @for message in messages {
                    li { (message) }
                }
            }
        }
    }
}

pub fn product_form(mode: FormMode, form: &ProductForm, errors: &FormErrors) -> Markup {
    layout(
        mode.title(),
        html! {
            form method="post" action=(mode.action()) {
                p {
                    label for="id_name" { "Name" }
                    (field_errors(errors, "name"))
                    input type="text" id="id_name" name="name" maxlength="100" value=(form.name) required;
                }
                p {
                    label for="id_description" { "Description" }
                    (field_errors(errors, "description"))
                    textarea id="id_description" name="description" required { (form.description) }
                }
                p {
                    label for="id_price" { "Price" }
                    (field_errors(errors, "price"))
                    input type="number" id="id_price" name="price" step="0.01" value=(form.price) required;
                }
                p {
                    label for="id_quantity" { "Quantity" }
                    (field_errors(errors, "quantity"))
                    input type="number" id="id_quantity" name="quantity" value=(form.quantity) required;
                }
                button type="submit" { "Save" }
                " "
                a href=(LIST_PATH) { "Cancel" }
            }
        },
    )
}

pub fn confirm_delete(product: &Product) -> Markup {
    layout(
        "Delete product",
        html! {
            p { "Are you sure you want to delete \"" (product.name) "\"?" }
            form method="post" action=(delete_path(product.id)) {
                button type="submit" { "Delete" }
                " "
                a href=(LIST_PATH) { "Cancel" }
            }
        },
    )
}

pub fn error_page(status: StatusCode, title: &str, detail: &str) -> Markup {
    layout(
        title,
        html! {
            p { (detail) }
            p {
                a href=(LIST_PATH) { "Back to products" }
                " (" (status.as_u16()) ")"
            }
        },
    )
}
