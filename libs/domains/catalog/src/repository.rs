use async_trait::async_trait;
use database::{DatabaseError, DatabaseResult};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use tokio::sync::RwLock;

use crate::models::{Category, Product};
use crate::page::{Page, PageRequest, SortDirection, SortField};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product with its categories
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Product>>;

    async fn exists_by_id(&self, id: i64) -> DatabaseResult<bool>;

    /// Insert when `product.id` is `None`, otherwise update the existing row.
    ///
    /// Updating an id that is not stored fails with `RecordNotFound`.
    async fn save(&self, product: Product) -> DatabaseResult<Product>;

    /// Fails with `RecordNotFound` when absent and `IntegrityViolation`
    /// when other rows still reference the product.
    async fn delete_by_id(&self, id: i64) -> DatabaseResult<()>;

    async fn find_all_paged(&self, request: PageRequest) -> DatabaseResult<Page<Product>>;

    async fn count(&self) -> DatabaseResult<u64>;
}

/// Repository trait for Category lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Handle used to attach a category to a product.
    ///
    /// Fails with `RecordNotFound` when the category does not exist.
    async fn get_reference_by_id(&self, id: i64) -> DatabaseResult<Category>;

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Category>>;

    async fn find_all_paged(&self, request: PageRequest) -> DatabaseResult<Page<Category>>;
}

fn compare_products(a: &Product, b: &Product, request: &PageRequest) -> Ordering {
    let primary = match request.sort() {
        SortField::Id => Ordering::Equal,
        SortField::Name => a.name.cmp(&b.name),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Date => a.date.cmp(&b.date),
    };
    let primary = match request.direction() {
        SortDirection::Asc => primary,
        SortDirection::Desc => primary.reverse(),
    };

    let by_id = match (request.sort(), request.direction()) {
        (SortField::Id, SortDirection::Desc) => b.id.cmp(&a.id),
        _ => a.id.cmp(&b.id),
    };

    primary.then(by_id)
}

fn slice_page<T: Clone>(items: &[T], request: &PageRequest) -> Page<T> {
    let content = usize::try_from(request.offset())
        .ok()
        .and_then(|offset| items.get(offset..))
        .unwrap_or_default()
        .iter()
        .take(request.size() as usize)
        .cloned()
        .collect();

    Page::new(content, request, items.len() as u64)
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
    dependents: Arc<HashSet<i64>>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            dependents: Arc::new(HashSet::new()),
        }
    }

    /// Seed the store. Products without an id get the next free one.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut stored = BTreeMap::new();
        let mut pending = Vec::new();

        for product in products {
            match product.id {
                Some(id) => {
                    stored.insert(id, product);
                }
                None => pending.push(product),
            }
        }

        let mut next_id = stored.keys().next_back().map_or(1, |max| max + 1);
        for product in pending {
            stored.insert(next_id, product.with_id(next_id));
            next_id += 1;
        }

        Self {
            products: Arc::new(RwLock::new(stored)),
            next_id: Arc::new(AtomicI64::new(next_id)),
            dependents: Arc::new(HashSet::new()),
        }
    }

    /// Mark ids as referenced from elsewhere; deleting them is an integrity violation.
    pub fn with_dependents(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.dependents = Arc::new(ids.into_iter().collect());
        self
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> DatabaseResult<bool> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }

    async fn save(&self, product: Product) -> DatabaseResult<Product> {
        let mut products = self.products.write().await;

        let product = match product.id {
            Some(id) if !products.contains_key(&id) => {
                return Err(DatabaseError::RecordNotFound(format!("product {}", id)));
            }
            Some(_) => product,
            None => {
                let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
                product.with_id(id)
            }
        };

        if let Some(id) = product.id {
            products.insert(id, product.clone());
        }
        Ok(product)
    }

    async fn delete_by_id(&self, id: i64) -> DatabaseResult<()> {
        let mut products = self.products.write().await;

        if !products.contains_key(&id) {
            return Err(DatabaseError::RecordNotFound(format!("product {}", id)));
        }
        if self.dependents.contains(&id) {
            return Err(DatabaseError::IntegrityViolation(format!(
                "product {} is still referenced",
                id
            )));
        }

        products.remove(&id);
        Ok(())
    }

    async fn find_all_paged(&self, request: PageRequest) -> DatabaseResult<Page<Product>> {
        let products = self.products.read().await;

        let mut sorted: Vec<Product> = products.values().cloned().collect();
        sorted.sort_by(|a, b| compare_products(a, b, &request));

        Ok(slice_page(&sorted, &request))
    }

    async fn count(&self) -> DatabaseResult<u64> {
        let products = self.products.read().await;
        Ok(products.len() as u64)
    }
}

/// In-memory implementation of CategoryRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<i64, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(
                categories.into_iter().map(|c| (c.id, c)).collect(),
            )),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_reference_by_id(&self, id: i64) -> DatabaseResult<Category> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DatabaseError::RecordNotFound(format!("category {}", id)))
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn find_all_paged(&self, request: PageRequest) -> DatabaseResult<Page<Category>> {
        let categories = self.categories.read().await;

        let mut sorted: Vec<Category> = categories.values().cloned().collect();
        if request.sort() == SortField::Name {
            sorted.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        }
        if request.direction() == SortDirection::Desc {
            sorted.reverse();
        }

        Ok(slice_page(&sorted, &request))
    }
}
