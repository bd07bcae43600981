//! Fixtures shared by the catalog test suites

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use domain_catalog::{Category, CategoryDto, Product, ProductDto};

pub fn fixed_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 10, 20, 3, 0, 0).unwrap()
}

pub fn create_category() -> Category {
    Category {
        id: 2,
        name: "Electronics".to_string(),
    }
}

pub fn create_product() -> Product {
    let mut product = Product::new(
        "Phone",
        "Good Phone",
        800.0,
        Some("https://img.example.com/phone.png".to_string()),
        fixed_date(),
    );
    product.add_category(create_category());
    product
}

pub fn create_product_dto() -> ProductDto {
    let mut dto = ProductDto::from(create_product());
    dto.id = None;
    dto.categories = vec![CategoryDto {
        id: create_category().id,
        name: String::new(),
    }];
    dto
}
