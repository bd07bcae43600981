//! Page requests and page envelopes shared by the product and category listings.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: u64 = 12;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Column a listing is ordered by. Ties are always broken by id.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Price,
    Date,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Raw paging query string, before defaults and clamping
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page number
    #[param(minimum = 0, example = 0)]
    pub page: Option<u64>,
    /// Page size, clamped to 1..=100
    #[param(minimum = 1, maximum = 100, example = 12)]
    pub size: Option<u64>,
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
}

/// A normalized page request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "PageQuery")]
pub struct PageRequest {
    page: u64,
    size: u64,
    sort: SortField,
    direction: SortDirection,
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort: SortField::default(),
            direction: SortDirection::default(),
        }
    }

    pub fn sorted_by(mut self, sort: SortField, direction: SortDirection) -> Self {
        self.sort = sort;
        self.direction = direction;
        self
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sort(&self) -> SortField {
        self.sort
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        Self::new(
            query.page.unwrap_or(0),
            query.size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
        .sorted_by(
            query.sort.unwrap_or_default(),
            query.direction.unwrap_or_default(),
        )
    }
}

/// One page of a listing plus metadata about the whole collection
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(request.size());
        let number = request.page();

        Self {
            number_of_elements: content.len() as u64,
            empty: content.is_empty(),
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
            content,
            number,
            size: request.size(),
            total_elements,
            total_pages,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_defaults_and_clamping() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(request.sort(), SortField::Id);
        assert_eq!(request.direction(), SortDirection::Asc);

        assert_eq!(PageRequest::new(0, 0).size(), 1);
        assert_eq!(PageRequest::new(0, 5000).size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(PageRequest::new(3, 10).offset(), 30);
        assert_eq!(PageRequest::new(u64::MAX, 10).offset(), u64::MAX);
    }

    #[test]
    fn test_from_query() {
        let request = PageRequest::from(PageQuery {
            page: Some(2),
            size: Some(500),
            sort: Some(SortField::Price),
            direction: Some(SortDirection::Desc),
        });

        assert_eq!(request.page(), 2);
        assert_eq!(request.size(), 100);
        assert_eq!(request.sort(), SortField::Price);
        assert_eq!(request.direction(), SortDirection::Desc);
    }

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!(SortField::from_str("name").unwrap(), SortField::Name);
        assert_eq!(SortField::Date.to_string(), "date");
        assert!(SortField::from_str("color").is_err());
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &PageRequest::new(0, 10), 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.number_of_elements, 10);
        assert!(page.first);
        assert!(!page.last);
        assert!(!page.empty);

        let last = Page::new(vec![21, 22, 23, 24, 25], &PageRequest::new(2, 10), 25);
        assert!(last.last);
        assert!(!last.first);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let page: Page<i32> = Page::new(vec![], &PageRequest::new(50, 10), 25);
        assert!(page.empty);
        assert!(page.last);
        assert_eq!(page.number, 50);
        assert_eq!(page.total_elements, 25);
    }

    #[test]
    fn test_empty_collection() {
        let page: Page<i32> = Page::new(vec![], &PageRequest::default(), 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.first && page.last && page.empty);
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], &PageRequest::new(1, 2), 6).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_serializes_camel_case() {
        let json = serde_json::to_value(Page::new(vec!["a"], &PageRequest::default(), 1)).unwrap();
        assert_eq!(json["totalElements"], 1);
        assert_eq!(json["numberOfElements"], 1);
        assert_eq!(json["totalPages"], 1);
    }
}
