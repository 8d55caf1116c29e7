//! Catalog payloads as the product API returns them.

use serde::{Deserialize, Deserializer, Serialize};

/// A catalog product. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub num_reviews: u32,
    #[serde(default)]
    pub count_in_stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.count_in_stock > 0
    }

    /// Location of the product's detail screen.
    pub fn location(&self) -> String {
        format!("/product/{}", self.slug)
    }
}

/// One page of search results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSet {
    pub products: Vec<Product>,
    #[serde(deserialize_with = "page_number")]
    pub page: u32,
    pub pages: u32,
    pub count_products: u64,
}

/// The search endpoint echoes `page` back as it received it, so it may be a
/// string.
fn page_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Page {
        Number(u32),
        Text(String),
    }

    match Page::deserialize(deserializer)? {
        Page::Number(page) => Ok(page),
        Page::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
