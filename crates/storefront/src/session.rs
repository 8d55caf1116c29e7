//! # Session Store
//!
//! Cart and signed-in user, shared by every screen that needs them. The store
//! is created once with [`SessionStore::hydrate`], passed to whoever needs
//! it, and cleared with [`SessionStore::sign_out`]. Every change is written
//! back to a JSON file so the next run starts where this one stopped.

use crate::api::{ApiError, CatalogApi};
use crate::model::{CartItem, Product, SessionState, ShippingAddress, UserInfo};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// Adding one more would exceed the stock the backend reports.
    #[error("Sorry. Product is out of stock")]
    OutOfStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// The stock check request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Session file error: {0}")]
    Io(String),

    /// The session file exists but is not a valid session.
    #[error("Corrupt session file: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Io(err.to_string())
    }
}

/// Process-wide cart/user state backed by a JSON file.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    state: Mutex<SessionState>,
}

impl SessionStore {
    /// Loads the session persisted at `path`. A missing file is an empty
    /// session.
    pub async fn hydrate(path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let state = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| SessionError::Corrupt(e.to_string()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => SessionState::default(),
            Err(e) => return Err(e.into()),
        };
        info!(path = %path.display(), items = state.cart_items.len(), "Session hydrated");
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Cart badge value.
    pub async fn cart_count(&self) -> u32 {
        self.state.lock().await.cart_count()
    }

    /// Adds one more of `product` to the cart after checking the backend's
    /// current stock. Returns the new quantity.
    #[instrument(skip(self, api, product), fields(product_id = %product.id))]
    pub async fn add_to_cart(&self, api: &dyn CatalogApi, product: &Product) -> Result<u32, SessionError> {
        let mut state = self.state.lock().await;
        let quantity = state.quantity_of(&product.id) + 1;

        let latest = api.product_by_id(&product.id).await?;
        if latest.count_in_stock < quantity {
            warn!(requested = quantity, available = latest.count_in_stock, "Out of stock");
            return Err(SessionError::OutOfStock {
                product_id: product.id.clone(),
                requested: quantity,
                available: latest.count_in_stock,
            });
        }

        let mut next = state.clone();
        next.upsert(CartItem {
            product: product.clone(),
            quantity,
        });
        self.persist(&next).await?;
        *state = next;
        info!(quantity, "Added to cart");
        Ok(quantity)
    }

    /// Returns whether the product was in the cart.
    pub async fn remove_from_cart(&self, product_id: &str) -> Result<bool, SessionError> {
        let mut removed = false;
        self.update(|state| removed = state.remove(product_id)).await?;
        Ok(removed)
    }

    pub async fn sign_in(&self, user: UserInfo) -> Result<(), SessionError> {
        let name = user.name.clone();
        self.update(|state| state.user_info = Some(user)).await?;
        info!(user = %name, "Signed in");
        Ok(())
    }

    pub async fn save_shipping_address(&self, address: ShippingAddress) -> Result<(), SessionError> {
        self.update(|state| state.shipping_address = Some(address)).await
    }

    pub async fn save_payment_method(&self, method: impl Into<String>) -> Result<(), SessionError> {
        let method = method.into();
        self.update(|state| state.payment_method = Some(method)).await
    }

    /// Clears user, cart, shipping address and payment method, and deletes
    /// the session file. If the file cannot be deleted the session stays
    /// signed in.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        let mut state = self.state.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        *state = SessionState::default();
        info!("Signed out");
        Ok(())
    }

    /// Applies `change` to a copy, writes the copy, then commits it. A failed
    /// write leaves the in-memory session untouched.
    async fn update<F>(&self, change: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut SessionState) + Send,
    {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        change(&mut next);
        if next != *state {
            self.persist(&next).await?;
            *state = next;
        }
        Ok(())
    }

    async fn persist(&self, state: &SessionState) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(state).map_err(|e| SessionError::Io(e.to_string()))?;
        tokio::fs::write(&self.path, bytes).await?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }
}
