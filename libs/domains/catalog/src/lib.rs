//! Catalog Domain
//!
//! Products and the categories they are filed under.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /products, /categories
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← validation, category resolution, error mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← trait + PostgreSQL / in-memory implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, Category, DTOs, paging
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     repository::{InMemoryCategoryRepository, InMemoryProductRepository},
//!     service::ProductService,
//! };
//!
//! let service = ProductService::new(
//!     InMemoryProductRepository::new(),
//!     InMemoryCategoryRepository::new(),
//! );
//!
//! let router = handlers::products_router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod page;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use handlers::{CategoriesApiDoc, ProductsApiDoc};
pub use models::{Category, CategoryDto, Product, ProductDto};
pub use page::{Page, PageQuery, PageRequest, SortDirection, SortField};
pub use postgres::{PgCategoryRepository, PgProductRepository};
pub use repository::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryProductRepository, ProductRepository,
};
pub use service::{CategoryService, ProductService};
