// src/presentation/http/controllers/products.rs
use crate::application::{
    commands::products::{CreateProductCommand, DeleteProductCommand, UpdateProductCommand},
    dto::ProductDto,
    queries::products::{GetProductByIdQuery, GetProductBySlugQuery, ListProductsByCategoryQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub image: Option<String>,
    pub category_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "All products, newest first.", body = [ProductDto])
    ),
    tag = "Products"
)]
pub async fn list_products(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .product_queries
        .list_products()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/by-id/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found.", body = ProductDto),
        (status = 404, description = "No such product.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_id(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_id(GetProductByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/by-slug/{slug}",
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Product found.", body = ProductDto),
        (status = 400, description = "Malformed slug.", body = ErrorResponse),
        (status = 404, description = "No such product.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn get_product_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ProductDto>> {
    state
        .services
        .product_queries
        .get_product_by_slug(GetProductBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/products/by-category/{category_slug}",
    params(("category_slug" = String, Path, description = "Slug of the owning category")),
    responses(
        (status = 200, description = "Products in the category, newest first.", body = [ProductDto]),
        (status = 404, description = "No such category.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn list_products_by_category(
    Extension(state): Extension<HttpState>,
    Path(category_slug): Path<String>,
) -> HttpResult<Json<Vec<ProductDto>>> {
    state
        .services
        .product_queries
        .list_products_by_category(ListProductsByCategoryQuery { category_slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created with a unique slug.", body = ProductDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 404, description = "Referenced category does not exist.", body = ErrorResponse),
        (status = 409, description = "No free slug could be found.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn create_product(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> HttpResult<(StatusCode, Json<ProductDto>)> {
    let command = CreateProductCommand {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image: payload.image,
        category_id: payload.category_id,
    };

    state
        .services
        .product_commands
        .create_product(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated.", body = ProductDto),
        (status = 400, description = "Invalid payload.", body = ErrorResponse),
        (status = 404, description = "No such product or category.", body = ErrorResponse),
        (status = 409, description = "No free slug could be found.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn update_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> HttpResult<Json<ProductDto>> {
    let command = UpdateProductCommand {
        id,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image: payload.image,
        category_id: payload.category_id,
    };

    state
        .services
        .product_commands
        .update_product(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted.", body = StatusResponse),
        (status = 404, description = "No such product.", body = ErrorResponse)
    ),
    tag = "Products"
)]
pub async fn delete_product(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .product_commands
        .delete_product(DeleteProductCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
