//! Sea-ORM entities for the `products`, `categories` and `product_categories` tables

use crate::models::{Category, Product};

pub mod product {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "products")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub name: String,
        #[sea_orm(column_type = "Text")]
        pub description: String,
        pub price: f64,
        pub image_url: Option<String>,
        pub date: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::product_category::Entity")]
        ProductCategory,
    }

    impl Related<super::product_category::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::ProductCategory.def()
        }
    }

    impl Related<super::category::Entity> for Entity {
        fn to() -> RelationDef {
            super::product_category::Relation::Category.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::product_category::Relation::Product.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod category {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "categories")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub name: String,
        pub created_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::product_category::Entity")]
        ProductCategory,
    }

    impl Related<super::product_category::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::ProductCategory.def()
        }
    }

    impl Related<super::product::Entity> for Entity {
        fn to() -> RelationDef {
            super::product_category::Relation::Product.def()
        }

        fn via() -> Option<RelationDef> {
            Some(super::product_category::Relation::Category.def().rev())
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Join table between products and categories
pub mod product_category {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "product_categories")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub product_id: i64,
        #[sea_orm(primary_key, auto_increment = false)]
        pub category_id: i64,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::product::Entity",
            from = "Column::ProductId",
            to = "super::product::Column::Id",
            on_delete = "Cascade"
        )]
        Product,
        #[sea_orm(
            belongs_to = "super::category::Entity",
            from = "Column::CategoryId",
            to = "super::category::Column::Id"
        )]
        Category,
    }

    impl Related<super::product::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Product.def()
        }
    }

    impl Related<super::category::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Category.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<category::Model> for Category {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Build a domain product from its row and the categories joined to it
pub(crate) fn to_product(model: product::Model, categories: Vec<category::Model>) -> Product {
    let mut product = Product::new(
        model.name,
        model.description,
        model.price,
        model.image_url,
        model.date.into(),
    )
    .with_id(model.id);
    product.set_categories(categories.into_iter().map(Category::from));
    product
}
