use chrono::Utc;
use database::DatabaseError;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, CategoryDto, Product, ProductDto};
use crate::page::{Page, PageRequest};
use crate::repository::{CategoryRepository, ProductRepository};

/// Service layer for Product business logic
pub struct ProductService<P: ProductRepository, C: CategoryRepository> {
    products: Arc<P>,
    categories: Arc<C>,
}

impl<P: ProductRepository, C: CategoryRepository> Clone for ProductService<P, C> {
    fn clone(&self) -> Self {
        Self {
            products: Arc::clone(&self.products),
            categories: Arc::clone(&self.categories),
        }
    }
}

impl<P: ProductRepository, C: CategoryRepository> ProductService<P, C> {
    pub fn new(products: P, categories: C) -> Self {
        Self {
            products: Arc::new(products),
            categories: Arc::new(categories),
        }
    }

    pub async fn find_all_paged(&self, request: PageRequest) -> CatalogResult<Page<ProductDto>> {
        debug!(
            page = request.page(),
            size = request.size(),
            sort = %request.sort(),
            direction = %request.direction(),
            "Listing products"
        );

        let page = self.products.find_all_paged(request).await?;
        Ok(page.map(ProductDto::from))
    }

    pub async fn find_by_id(&self, id: i64) -> CatalogResult<ProductDto> {
        debug!(product_id = id, "Fetching product");
        self.products
            .find_by_id(id)
            .await?
            .map(ProductDto::from)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Create a product. Any id in the DTO is ignored.
    pub async fn insert(&self, dto: ProductDto) -> CatalogResult<ProductDto> {
        dto.validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let mut product = Product::new(
            dto.name.clone(),
            dto.description.clone(),
            dto.price,
            dto.image_url.clone(),
            dto.date.unwrap_or_else(Utc::now),
        );
        product.set_categories(self.resolve_categories(&dto.categories).await?);

        let saved = self.products.save(product).await?;

        info!(product_id = ?saved.id, name = %saved.name, "Created product");
        Ok(saved.into())
    }

    /// Overwrite an existing product. Never creates one.
    pub async fn update(&self, id: i64, dto: ProductDto) -> CatalogResult<ProductDto> {
        dto.validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        let mut product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        product.apply(&dto);
        product.set_categories(self.resolve_categories(&dto.categories).await?);

        let saved = self.products.save(product).await.map_err(|e| match e {
            DatabaseError::RecordNotFound(_) => CatalogError::NotFound(id),
            other => other.into(),
        })?;

        info!(product_id = id, "Updated product");
        Ok(saved.into())
    }

    pub async fn delete(&self, id: i64) -> CatalogResult<()> {
        if !self.products.exists_by_id(id).await? {
            return Err(CatalogError::NotFound(id));
        }

        self.products.delete_by_id(id).await.map_err(|e| match e {
            DatabaseError::RecordNotFound(_) => CatalogError::NotFound(id),
            DatabaseError::IntegrityViolation(msg) => {
                warn!(product_id = id, reason = %msg, "Delete blocked by dependent rows");
                CatalogError::DatabaseIntegrity(msg)
            }
            other => other.into(),
        })?;

        info!(product_id = id, "Deleted product");
        Ok(())
    }

    /// Look up every referenced category, once per id
    async fn resolve_categories(&self, refs: &[CategoryDto]) -> CatalogResult<Vec<Category>> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(refs.len());

        for category_ref in refs.iter().filter(|c| seen.insert(c.id)) {
            let category = self
                .categories
                .get_reference_by_id(category_ref.id)
                .await
                .map_err(|e| match e {
                    DatabaseError::RecordNotFound(_) => CatalogError::CategoryNotFound(category_ref.id),
                    other => other.into(),
                })?;
            resolved.push(category);
        }

        Ok(resolved)
    }
}

/// Read-only access to categories
pub struct CategoryService<C: CategoryRepository> {
    categories: Arc<C>,
}

impl<C: CategoryRepository> Clone for CategoryService<C> {
    fn clone(&self) -> Self {
        Self {
            categories: Arc::clone(&self.categories),
        }
    }
}

impl<C: CategoryRepository> CategoryService<C> {
    pub fn new(categories: C) -> Self {
        Self {
            categories: Arc::new(categories),
        }
    }

    pub async fn find_all_paged(&self, request: PageRequest) -> CatalogResult<Page<CategoryDto>> {
        let page = self.categories.find_all_paged(request).await?;
        Ok(page.map(CategoryDto::from))
    }

    pub async fn find_by_id(&self, id: i64) -> CatalogResult<CategoryDto> {
        self.categories
            .find_by_id(id)
            .await?
            .map(CategoryDto::from)
            .ok_or(CatalogError::NoSuchCategory(id))
    }
}
