use async_trait::async_trait;
use database::{DatabaseError, DatabaseResult};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::{
    entity::{self, category, product, product_category},
    models::{Category, Product},
    page::{Page, PageRequest, SortDirection, SortField},
    repository::{CategoryRepository, ProductRepository},
};

fn order_of(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn active_model(product: &Product) -> product::ActiveModel {
        product::ActiveModel {
            id: product.id.map_or(NotSet, Unchanged),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            image_url: Set(product.image_url.clone()),
            date: Set(product.date.into()),
        }
    }

    /// Categories for a set of products, keyed by product id and ordered by category id
    async fn categories_of(
        &self,
        product_ids: Vec<i64>,
    ) -> DatabaseResult<HashMap<i64, Vec<category::Model>>> {
        let mut by_product: HashMap<i64, Vec<category::Model>> = HashMap::new();
        if product_ids.is_empty() {
            return Ok(by_product);
        }

        let rows = product_category::Entity::find()
            .filter(product_category::Column::ProductId.is_in(product_ids))
            .find_also_related(category::Entity)
            .order_by_asc(product_category::Column::CategoryId)
            .all(&self.db)
            .await?;

        for (link, category) in rows {
            if let Some(category) = category {
                by_product.entry(link.product_id).or_default().push(category);
            }
        }

        Ok(by_product)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Product>> {
        let Some(model) = product::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let categories = model
            .find_related(category::Entity)
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;

        Ok(Some(entity::to_product(model, categories)))
    }

    async fn exists_by_id(&self, id: i64) -> DatabaseResult<bool> {
        let count = product::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn save(&self, product: Product) -> DatabaseResult<Product> {
        let txn = self.db.begin().await?;

        let active_model = Self::active_model(&product);
        let model = match product.id {
            Some(_) => active_model.update(&txn).await?,
            None => active_model.insert(&txn).await?,
        };

        product_category::Entity::delete_many()
            .filter(product_category::Column::ProductId.eq(model.id))
            .exec(&txn)
            .await?;

        let links: Vec<product_category::ActiveModel> = product
            .categories()
            .iter()
            .map(|category| product_category::ActiveModel {
                product_id: Set(model.id),
                category_id: Set(category.id),
            })
            .collect();

        if !links.is_empty() {
            product_category::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        let categories = model
            .find_related(category::Entity)
            .order_by_asc(category::Column::Id)
            .all(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(product_id = model.id, categories = categories.len(), "Saved product");
        Ok(entity::to_product(model, categories))
    }

    async fn delete_by_id(&self, id: i64) -> DatabaseResult<()> {
        let txn = self.db.begin().await?;

        product_category::Entity::delete_many()
            .filter(product_category::Column::ProductId.eq(id))
            .exec(&txn)
            .await?;

        let result = product::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(DatabaseError::RecordNotFound(format!("product {}", id)));
        }

        txn.commit().await?;

        tracing::debug!(product_id = id, "Deleted product row");
        Ok(())
    }

    async fn find_all_paged(&self, request: PageRequest) -> DatabaseResult<Page<Product>> {
        let column = match request.sort() {
            SortField::Id => product::Column::Id,
            SortField::Name => product::Column::Name,
            SortField::Price => product::Column::Price,
            SortField::Date => product::Column::Date,
        };

        let mut query = product::Entity::find().order_by(column, order_of(request.direction()));
        if request.sort() != SortField::Id {
            query = query.order_by_asc(product::Column::Id);
        }

        let paginator = query.paginate(&self.db, request.size());
        let total = paginator.num_items().await?;
        if request.offset() >= total {
            return Ok(Page::new(Vec::new(), &request, total));
        }
        let models = paginator.fetch_page(request.page()).await?;

        let mut categories = self
            .categories_of(models.iter().map(|m| m.id).collect())
            .await?;

        let content = models
            .into_iter()
            .map(|model| {
                let linked = categories.remove(&model.id).unwrap_or_default();
                entity::to_product(model, linked)
            })
            .collect();

        Ok(Page::new(content, &request, total))
    }

    async fn count(&self) -> DatabaseResult<u64> {
        Ok(product::Entity::find().count(&self.db).await?)
    }
}

#[derive(Clone)]
pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn get_reference_by_id(&self, id: i64) -> DatabaseResult<Category> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DatabaseError::RecordNotFound(format!("category {}", id)))
    }

    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<Category>> {
        let model = category::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Category::from))
    }

    async fn find_all_paged(&self, request: PageRequest) -> DatabaseResult<Page<Category>> {
        let column = match request.sort() {
            SortField::Name => category::Column::Name,
            _ => category::Column::Id,
        };

        let mut query = category::Entity::find().order_by(column, order_of(request.direction()));
        if request.sort() == SortField::Name {
            query = query.order_by_asc(category::Column::Id);
        }

        let paginator = query.paginate(&self.db, request.size());
        let total = paginator.num_items().await?;
        if request.offset() >= total {
            return Ok(Page::new(Vec::new(), &request, total));
        }
        let models = paginator.fetch_page(request.page()).await?;

        let content = models.into_iter().map(Category::from).collect();
        Ok(Page::new(content, &request, total))
    }
}
