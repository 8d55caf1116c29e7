//! Runtime configuration: command-line flags with environment fallbacks.

use crate::product_screen::slug_from_location;
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

pub const DEFAULT_SCREEN_BUFFER: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API URL {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Screen buffer must be at least 1")]
    ZeroScreenBuffer,

    #[error("--order only applies to search locations, not {location:?}")]
    OrderOnProduct { location: String },
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Browse the storefront catalog from the terminal")]
pub struct Config {
    /// Base URL of the storefront backend.
    #[arg(long, env = "STOREFRONT_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,

    /// File the cart and user are kept in between runs.
    #[arg(long, env = "STOREFRONT_SESSION", default_value = ".storefront/session.json")]
    pub session: PathBuf,

    /// Request channel capacity of each screen.
    #[arg(long, env = "STOREFRONT_SCREEN_BUFFER", default_value_t = DEFAULT_SCREEN_BUFFER)]
    pub screen_buffer: usize,

    /// Location to open, e.g. `/search?category=Shirts` or `/product/slim-shirt`.
    #[arg(default_value = "/search")]
    pub location: String,

    /// Change the sort order after opening a search location.
    #[arg(long)]
    pub order: Option<String>,

    /// Add the opened product to the cart.
    #[arg(long)]
    pub add_to_cart: bool,
}

impl Config {
    /// Checks the values clap cannot check by itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api_base()?;
        if self.screen_buffer == 0 {
            return Err(ConfigError::ZeroScreenBuffer);
        }
        if self.order.is_some() && self.opens_product() {
            return Err(ConfigError::OrderOnProduct {
                location: self.location.clone(),
            });
        }
        Ok(())
    }

    /// Whether `location` names a product page. Accepts absolute URLs too.
    pub fn opens_product(&self) -> bool {
        !slug_from_location(&self.location).is_empty()
    }

    pub fn api_base(&self) -> Result<Url, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            reason,
        };
        let url = Url::parse(&self.api_url).map_err(|e| invalid(e.to_string()))?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("expected an http(s) URL".to_string()));
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("storefront").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["--api-url", "http://localhost:5000"]);
        assert_eq!(config.location, "/search");
        assert_eq!(config.screen_buffer, DEFAULT_SCREEN_BUFFER);
        assert_eq!(config.order, None);
        assert!(!config.add_to_cart);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = parse(&[
            "--api-url",
            "https://shop.example.com",
            "--screen-buffer",
            "4",
            "--order",
            "lowest",
            "/search?category=Shirts",
        ]);
        assert_eq!(config.location, "/search?category=Shirts");
        assert_eq!(config.screen_buffer, 4);
        assert_eq!(config.order.as_deref(), Some("lowest"));
        assert_eq!(config.api_base().unwrap().host_str(), Some("shop.example.com"));
    }

    #[test]
    fn test_invalid_values() {
        let config = parse(&["--api-url", "not a url"]);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidApiUrl { .. })));

        let config = parse(&["--api-url", "mailto:shop@example.com"]);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidApiUrl { .. })));

        let config = parse(&["--api-url", "http://localhost:5000", "--screen-buffer", "0"]);
        assert_eq!(config.validate(), Err(ConfigError::ZeroScreenBuffer));
    }

    #[test]
    fn test_product_locations() {
        assert!(parse(&["/product/slim-shirt"]).opens_product());
        assert!(parse(&["http://localhost:3000/product/slim-shirt?x=1"]).opens_product());
        assert!(!parse(&["/search?category=Shirts"]).opens_product());
        assert!(!parse(&["http://localhost:3000/search"]).opens_product());
        assert!(!parse(&["/product/"]).opens_product());
    }

    #[test]
    fn test_order_rejected_for_product() {
        let config = parse(&["--order", "lowest", "http://localhost:3000/product/slim-shirt"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::OrderOnProduct {
                location: "http://localhost:3000/product/slim-shirt".into()
            })
        );

        let config = parse(&["--order", "lowest", "/search"]);
        assert_eq!(config.validate(), Ok(()));
    }
}
