use axum::{
    Json, Router,
    extract::{OriginalUri, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiQuery, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, IntegrityViolationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CategoryDto, ProductDto};
use crate::page::{Page, PageQuery, PageRequest, SortDirection, SortField};
use crate::repository::{CategoryRepository, ProductRepository};
use crate::service::{CategoryService, ProductService};

pub const PRODUCTS_TAG: &str = "products";
pub const CATEGORIES_TAG: &str = "categories";

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product, get_product, update_product, delete_product),
    components(
        schemas(ProductDto, CategoryDto, SortField, SortDirection),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            IntegrityViolationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = PRODUCTS_TAG, description = "Product catalog endpoints")
    )
)]
pub struct ProductsApiDoc;

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, get_category),
    components(
        schemas(CategoryDto),
        responses(NotFoundResponse, BadRequestIdResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = CATEGORIES_TAG, description = "Category lookup endpoints")
    )
)]
pub struct CategoriesApiDoc;

/// Create the product router with all HTTP endpoints
pub fn products_router<P, C>(service: ProductService<P, C>) -> Router
where
    P: ProductRepository + 'static,
    C: CategoryRepository + 'static,
{
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(Arc::new(service))
}

pub fn categories_router<C>(service: CategoryService<C>) -> Router
where
    C: CategoryRepository + 'static,
{
    Router::new()
        .route("/", get(list_categories))
        .route("/{id}", get(get_category))
        .with_state(Arc::new(service))
}

/// List products one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = PRODUCTS_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of products", body = Page<ProductDto>),
        (status = 400, description = "Malformed paging parameters"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<ProductService<P, C>>>,
    ApiQuery(request): ApiQuery<PageRequest>,
) -> CatalogResult<Json<Page<ProductDto>>> {
    let page = service.find_all_paged(request).await?;
    Ok(Json(page))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = PRODUCTS_TAG,
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto,
            headers(("Location" = String, description = "URI of the new product"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<ProductService<P, C>>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.insert(input).await?;
    // Resolved against the mount point so the header survives nesting
    let location = format!(
        "{}/{}",
        uri.path().trim_end_matches('/'),
        product.id.unwrap_or_default()
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<ProductService<P, C>>>,
    IdPath(id): IdPath,
) -> CatalogResult<Json<ProductDto>> {
    let product = service.find_by_id(id).await?;
    Ok(Json(product))
}

/// Replace a product's fields and categories
#[utoipa::path(
    put,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<ProductService<P, C>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<ProductDto>,
) -> CatalogResult<Json<ProductDto>> {
    let product = service.update(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = PRODUCTS_TAG,
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = IntegrityViolationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<P: ProductRepository, C: CategoryRepository>(
    State(service): State<Arc<ProductService<P, C>>>,
    IdPath(id): IdPath,
) -> CatalogResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List categories one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = CATEGORIES_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of categories", body = Page<CategoryDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_categories<C: CategoryRepository>(
    State(service): State<Arc<CategoryService<C>>>,
    ApiQuery(request): ApiQuery<PageRequest>,
) -> CatalogResult<Json<Page<CategoryDto>>> {
    let page = service.find_all_paged(request).await?;
    Ok(Json(page))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = CATEGORIES_TAG,
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_category<C: CategoryRepository>(
    State(service): State<Arc<CategoryService<C>>>,
    IdPath(id): IdPath,
) -> CatalogResult<Json<CategoryDto>> {
    let category = service.find_by_id(id).await?;
    Ok(Json(category))
}
