//! Product records supplied by the surrounding page.
//!
//! A product is read-only input: the cart captures what it needs (title,
//! SKU, unit price) at add time and never looks the product up again.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::options::SelectedOptions;
use crate::types::Sku;

/// Errors raised while building an option selection for a product.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    /// The product does not declare an option with this name.
    #[error("product {sku} has no option named {name:?}")]
    UnknownOption {
        /// Product SKU.
        sku: String,
        /// Requested option name.
        name: String,
    },
    /// The value is not one of the option's allowed values.
    #[error("{value:?} is not an allowed value for {name:?}")]
    InvalidValue {
        /// Option name.
        name: String,
        /// Rejected value.
        value: String,
    },
}

/// Error returned for a product priced below zero.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("price must not be negative, got {0}")]
pub struct NegativePrice(pub Decimal);

/// A purchasable product as described by the page.
///
/// Field names follow the page contract: `title`, `sku`, `price`, and the
/// optional `options` / `optionValues`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier of the purchasable item.
    pub sku: Sku,
    /// Display title.
    pub title: String,
    /// Current unit price in the store currency. Never negative.
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "non_negative_price"
    )]
    price: Decimal,
    /// Option names in declaration order (e.g. `["Size", "Color"]`).
    #[serde(default)]
    pub options: Vec<String>,
    /// Allowed values per option name, in display order.
    #[serde(default)]
    pub option_values: BTreeMap<String, Vec<String>>,
}

impl Product {
    /// A product without options.
    ///
    /// # Errors
    ///
    /// Returns [`NegativePrice`] if `price` is below zero.
    pub fn new(sku: Sku, title: impl Into<String>, price: Decimal) -> Result<Self, NegativePrice> {
        check_price(price)?;
        Ok(Self {
            sku,
            title: title.into(),
            price,
            options: Vec::new(),
            option_values: BTreeMap::new(),
        })
    }

    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Declare an option and its allowed values.
    #[must_use]
    pub fn with_option<I, V>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        self.option_values
            .insert(name.clone(), values.into_iter().map(Into::into).collect());
        if !self.options.contains(&name) {
            self.options.push(name);
        }
        self
    }

    /// Allowed values for `name`, empty if none are declared.
    #[must_use]
    pub fn allowed_values(&self, name: &str) -> &[String] {
        self.option_values.get(name).map_or(&[], Vec::as_slice)
    }

    /// The value pre-selected for `name`: its first allowed value.
    #[must_use]
    pub fn default_value(&self, name: &str) -> Option<&str> {
        self.allowed_values(name).first().map(String::as_str)
    }

    /// The selection a page shows before the customer touches anything.
    #[must_use]
    pub fn default_selection(&self) -> SelectedOptions {
        self.options
            .iter()
            .filter_map(|name| {
                self.default_value(name)
                    .map(|value| (name.clone(), value.to_owned()))
            })
            .collect()
    }

    /// Build a selection from explicit choices, filling the rest with defaults.
    ///
    /// The result is in option-declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::UnknownOption`] for names the product does not
    /// declare and [`OptionError::InvalidValue`] for values outside an
    /// option's allowed list (options with no allowed list accept any value).
    pub fn select<I, N, V>(&self, choices: I) -> Result<SelectedOptions, OptionError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let mut chosen = SelectedOptions::new();
        for (name, value) in choices {
            let (name, value) = (name.into(), value.into());
            if !self.options.contains(&name) {
                return Err(OptionError::UnknownOption {
                    sku: self.sku.to_string(),
                    name,
                });
            }
            let allowed = self.allowed_values(&name);
            if !allowed.is_empty() && !allowed.contains(&value) {
                return Err(OptionError::InvalidValue { name, value });
            }
            chosen.insert(name, value);
        }

        for name in &self.options {
            if chosen.get(name).is_none() {
                if let Some(value) = self.default_value(name) {
                    chosen.insert(name.clone(), value);
                }
            }
        }

        Ok(chosen.ordered_by(&self.options))
    }
}

fn check_price(price: Decimal) -> Result<(), NegativePrice> {
    if price < Decimal::ZERO {
        return Err(NegativePrice(price));
    }
    Ok(())
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let price = rust_decimal::serde::float::deserialize(deserializer)?;
    check_price(price).map_err(serde::de::Error::custom)?;
    Ok(price)
}
