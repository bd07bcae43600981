use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A category products can be filed under. Shared between products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A catalog product
///
/// `id` is `None` until the product has been stored for the first time.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub date: DateTime<Utc>,
    categories: Vec<Category>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image_url: Option<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            image_url,
            date,
            categories: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Attach a category. A category already attached (same id) is ignored.
    pub fn add_category(&mut self, category: Category) {
        if !self.categories.iter().any(|c| c.id == category.id) {
            self.categories.push(category);
        }
    }

    pub fn set_categories(&mut self, categories: impl IntoIterator<Item = Category>) {
        self.categories.clear();
        for category in categories {
            self.add_category(category);
        }
    }

    /// Overwrite the mutable fields from a DTO. `id` and categories are untouched.
    pub fn apply(&mut self, dto: &ProductDto) {
        self.name = dto.name.clone();
        self.description = dto.description.clone();
        self.price = dto.price;
        self.image_url = dto.image_url.clone();
        if let Some(date) = dto.date {
            self.date = date;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    /// Ignored on input; filled from the stored category on output
    #[serde(default)]
    pub name: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Product as exchanged over HTTP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Assigned by the store; ignored on input
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 120))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[validate(length(max = 255))]
    #[serde(default)]
    pub image_url: Option<String>,

    /// Defaults to the time of creation when omitted
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub categories: Vec<CategoryDto>,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            date: Some(product.date),
            categories: product.categories.into_iter().map(Into::into).collect(),
        }
    }
}
