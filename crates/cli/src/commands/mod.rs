//! CLI command implementations.

pub mod cart;
pub mod checkout;

use std::path::PathBuf;

use weekenders_core::{Product, Quantity, SelectedOptions};
use weekenders_storefront::storage::FileStore;
use weekenders_storefront::{CartEngine, StoreConfig};

use crate::ProductArgs;
use crate::product_file;

/// Build the engine from the environment, backed by the file store.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub fn open_engine(
    data_dir: Option<PathBuf>,
) -> Result<CartEngine<FileStore>, Box<dyn std::error::Error>> {
    let mut config = StoreConfig::from_env()?;
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    let store = FileStore::new(config.data_dir.clone());
    tracing::debug!(dir = %config.data_dir.display(), key = %config.cart_key, "Using cart store");
    Ok(CartEngine::new(config, store))
}

/// A product plus the choices made for it on the command line.
#[derive(Debug, Clone)]
pub struct Selection {
    pub product: Product,
    pub options: SelectedOptions,
    pub quantity: Quantity,
}

impl Selection {
    /// Load the product file and resolve options and quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the product file cannot be read or an option
    /// does not fit the product.
    pub fn from_args(args: &ProductArgs) -> Result<Self, Box<dyn std::error::Error>> {
        let product = product_file::load(&args.product)?;
        let pairs = parse_option_pairs(&args.options)?;
        let options = product.select(pairs)?;
        Ok(Self {
            product,
            options,
            quantity: Quantity::parse_lenient(&args.qty),
        })
    }
}

/// Split `NAME=VALUE` arguments.
///
/// # Errors
///
/// Returns an error naming the first argument without an `=`.
pub fn parse_option_pairs(args: &[String]) -> Result<Vec<(String, String)>, String> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| format!("option must look like NAME=VALUE, got {arg:?}"))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_option_pairs() {
        let pairs =
            parse_option_pairs(&["Size=M".to_string(), " Color = Rust ".to_string()]).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("Size".to_string(), "M".to_string()),
                ("Color".to_string(), "Rust".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_option_pairs_rejects_malformed() {
        assert!(parse_option_pairs(&["Size".to_string()]).is_err());
        assert!(parse_option_pairs(&["=M".to_string()]).is_err());
    }
}
