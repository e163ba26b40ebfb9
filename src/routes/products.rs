use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};

use crate::{
    dto::products::ProductForm,
    error::AppResult,
    services::product_service,
    state::AppState,
    validation::FormErrors,
    views::{self, FormMode, LIST_PATH},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products/", get(list_products))
        .route("/products/create/", get(create_form).post(create_product))
        .route(
            "/products/update/{id}/",
            get(update_form).post(update_product),
        )
        .route(
            "/products/delete/{id}/",
            get(confirm_delete).post(delete_product),
        )
}

fn form_with_errors(mode: FormMode, form: &ProductForm, errors: &FormErrors) -> Response {
    tracing::debug!(fields = errors.len(), "product form rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(views::product_form(mode, form, errors).into_string()),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "Product list page", content_type = "text/html", body = String)
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Html<String>> {
    let products = product_service::list_products(&state).await?;
    Ok(Html(views::product_list(&products).into_string()))
}

#[utoipa::path(
    get,
    path = "/products/create/",
    responses(
        (status = 200, description = "Empty product form", content_type = "text/html", body = String)
    ),
    tag = "Products"
)]
pub async fn create_form() -> Html<String> {
    Html(
        views::product_form(
            FormMode::Create,
            &ProductForm::default(),
            &FormErrors::default(),
        )
        .into_string(),
    )
}

#[utoipa::path(
    post,
    path = "/products/create/",
    request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, redirect to the list"),
        (status = 422, description = "Form re-rendered with errors", content_type = "text/html", body = String),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> AppResult<Response> {
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => return Ok(form_with_errors(FormMode::Create, &form, &errors)),
    };

    product_service::create_product(&state, payload).await?;
    Ok(Redirect::to(LIST_PATH).into_response())
}

#[utoipa::path(
    get,
    path = "/products/update/{id}/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product form pre-filled from storage", content_type = "text/html", body = String),
        (status = 404, description = "Product not found", content_type = "text/html", body = String),
    ),
    tag = "Products"
)]
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let product = product_service::get_product(&state, id).await?;
    let form = ProductForm::from_product(&product);
    Ok(Html(
        views::product_form(FormMode::Update(product.id), &form, &FormErrors::default())
            .into_string(),
    ))
}

#[utoipa::path(
    post,
    path = "/products/update/{id}/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, redirect to the list"),
        (status = 404, description = "Product not found", content_type = "text/html", body = String),
        (status = 422, description = "Form re-rendered with errors", content_type = "text/html", body = String),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> AppResult<Response> {
    let existing = product_service::get_product(&state, id).await?;

    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(errors) => return Ok(form_with_errors(FormMode::Update(existing.id), &form, &errors)),
    };

    product_service::update_product(&state, existing.id, payload).await?;
    Ok(Redirect::to(LIST_PATH).into_response())
}

#[utoipa::path(
    get,
    path = "/products/delete/{id}/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Delete confirmation page", content_type = "text/html", body = String),
        (status = 404, description = "Product not found", content_type = "text/html", body = String),
    ),
    tag = "Products"
)]
pub async fn confirm_delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let product = product_service::get_product(&state, id).await?;
    Ok(Html(views::confirm_delete(&product).into_string()))
}

#[utoipa::path(
    post,
    path = "/products/delete/{id}/",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 303, description = "Deleted, redirect to the list"),
        (status = 404, description = "Product not found", content_type = "text/html", body = String),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    product_service::delete_product(&state, id).await?;
    Ok(Redirect::to(LIST_PATH))
}
