//! Cart and account state kept between runs.

use super::Product;
use serde::{Deserialize, Serialize};

/// A product in the cart with its quantity. Serialized flat, as the product
/// fields plus `quantity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Everything the session file holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionState {
    pub user_info: Option<UserInfo>,
    pub cart_items: Vec<CartItem>,
    pub shipping_address: Option<ShippingAddress>,
    pub payment_method: Option<String>,
}

impl SessionState {
    /// Cart badge value: the sum of all quantities.
    pub fn cart_count(&self) -> u32 {
        self.cart_items.iter().map(|item| item.quantity).sum()
    }

    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.cart_items
            .iter()
            .find(|item| item.product.id == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Inserts `item`, or replaces the entry for the same product in place.
    pub fn upsert(&mut self, item: CartItem) {
        match self
            .cart_items
            .iter_mut()
            .find(|existing| existing.product.id == item.product.id)
        {
            Some(existing) => *existing = item,
            None => self.cart_items.push(item),
        }
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.cart_items.len();
        self.cart_items.retain(|item| item.product.id != product_id);
        self.cart_items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            slug: format!("product-{id}"),
            category: "Shirts".into(),
            image: String::new(),
            price: 10.0,
            rating: 4.0,
            num_reviews: 1,
            count_in_stock: 5,
            description: None,
        }
    }

    #[test]
    fn test_upsert_keeps_position_and_counts() {
        let mut state = SessionState::default();
        state.upsert(CartItem { product: product("a"), quantity: 1 });
        state.upsert(CartItem { product: product("b"), quantity: 2 });
        state.upsert(CartItem { product: product("a"), quantity: 3 });

        assert_eq!(state.cart_items[0].product.id, "a");
        assert_eq!(state.quantity_of("a"), 3);
        assert_eq!(state.cart_count(), 5);

        assert!(state.remove("a"));
        assert!(!state.remove("a"));
        assert_eq!(state.cart_count(), 2);
    }

    #[test]
    fn test_cart_item_serializes_flat() {
        let item = CartItem { product: product("a"), quantity: 2 };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["_id"], "a");
        assert_eq!(value["quantity"], 2);
        assert_eq!(value["countInStock"], 5);

        let back: CartItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_missing_fields_default() {
        let state: SessionState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, SessionState::default());
    }
}
