use inventory_tracker::routes::doc::ApiDoc;
use utoipa::OpenApi;

#[test]
fn openapi_lists_every_product_page() {
    let spec = ApiDoc::openapi();
    let paths = &spec.paths.paths;
    for path in [
        "/health",
        "/products/",
        "/products/create/",
        "/products/update/{id}/",
        "/products/delete/{id}/",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
