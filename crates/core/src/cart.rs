//! Line items, the cart and line-item merging.
//!
//! A cart is an insertion-ordered list of line items in which no two items
//! share an identity (SKU plus selected options). Adding an item whose
//! identity is already present bumps that line's quantity instead of
//! appending a new one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::options::SelectedOptions;
use crate::product::Product;
use crate::types::{Quantity, Sku};

/// What makes two line items the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineIdentity<'a> {
    /// Product SKU.
    pub sku: &'a Sku,
    /// Selected options, compared without regard to order.
    pub options: &'a SelectedOptions,
}

/// One entry in the cart.
///
/// Title and unit price are copies taken when the line was first added;
/// later product changes do not touch existing lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: Sku,
    pub title: String,
    /// Unit price captured at add time.
    #[serde(rename = "price", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(rename = "qty")]
    pub quantity: Quantity,
    /// Older records may omit this field entirely.
    #[serde(rename = "selectedOptions", default)]
    pub selected_options: SelectedOptions,
}

impl LineItem {
    /// Capture a new line from a product.
    #[must_use]
    pub fn from_product(product: &Product, selected: &SelectedOptions, quantity: Quantity) -> Self {
        Self {
            sku: product.sku.clone(),
            title: product.title.clone(),
            unit_price: product.price(),
            quantity,
            selected_options: selected.ordered_by(&product.options),
        }
    }

    #[must_use]
    pub const fn identity(&self) -> LineIdentity<'_> {
        LineIdentity {
            sku: &self.sku,
            options: &self.selected_options,
        }
    }

    /// `unit_price * quantity`.
    ///
    /// Saturates at [`Decimal::MAX`]; lines held by a [`Cart`] never get
    /// that far.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price
            .saturating_mul(Decimal::from(self.quantity.get()))
    }

    /// `unit_price * quantity`, or `None` if it does not fit in a [`Decimal`].
    #[must_use]
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.unit_price
            .checked_mul(Decimal::from(self.quantity.get()))
    }

    /// Title followed by the bracketed option label, if any.
    #[must_use]
    pub fn display_title(&self) -> String {
        match self.selected_options.label() {
            Some(label) => format!("{} {label}", self.title),
            None => self.title.clone(),
        }
    }

    /// `"<title>[ <options>] x <qty>"`, the label of a cart summary row.
    #[must_use]
    pub fn row_label(&self) -> String {
        format!("{} x {}", self.display_title(), self.quantity)
    }
}

/// Ways a set of lines can fail to form a cart.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Two lines share a SKU and option selection.
    #[error("duplicate line item for SKU {sku}")]
    DuplicateLine { sku: String },

    /// A line carries a negative unit price.
    #[error("negative price on line {sku}")]
    NegativePrice { sku: String },

    /// A line total or the grand total does not fit in a `Decimal`.
    #[error("cart total out of range at line {sku}")]
    TotalOverflow { sku: String },
}

/// Grand total, failing at the first line that pushes it out of range.
fn checked_total(lines: &[LineItem]) -> Result<Decimal, CartError> {
    lines.iter().try_fold(Decimal::ZERO, |total, line| {
        line.checked_line_total()
            .and_then(|line_total| total.checked_add(line_total))
            .ok_or_else(|| CartError::TotalOverflow {
                sku: line.sku.to_string(),
            })
    })
}

/// The shopping cart.
///
/// Holds no duplicate identities and no negative prices, and its grand
/// total always fits in a [`Decimal`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// A one-line cart that never touches stored state ("buy now").
    ///
    /// # Errors
    ///
    /// Returns [`CartError::TotalOverflow`] if the line total is out of range.
    pub fn single(
        product: &Product,
        selected: &SelectedOptions,
        quantity: Quantity,
    ) -> Result<Self, CartError> {
        Self::new().add_line_item(product, selected, quantity)
    }

    /// Build a cart from existing lines.
    ///
    /// # Errors
    ///
    /// Returns [`CartError`] if two lines share an identity, a price is
    /// negative or the totals are out of range.
    pub fn from_lines(lines: Vec<LineItem>) -> Result<Self, CartError> {
        for (i, line) in lines.iter().enumerate() {
            if line.unit_price < Decimal::ZERO {
                return Err(CartError::NegativePrice {
                    sku: line.sku.to_string(),
                });
            }
            let repeated = lines
                .iter()
                .skip(i + 1)
                .any(|other| other.identity() == line.identity());
            if repeated {
                return Err(CartError::DuplicateLine {
                    sku: line.sku.to_string(),
                });
            }
        }
        checked_total(&lines)?;
        Ok(Self { lines })
    }

    /// Add `quantity` of `product` with the given options.
    ///
    /// Merges into an existing line with the same SKU and options (only its
    /// quantity changes), otherwise appends a new line at the end.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::TotalOverflow`] if the result could not be
    /// totalled.
    pub fn add_line_item(
        mut self,
        product: &Product,
        selected: &SelectedOptions,
        quantity: Quantity,
    ) -> Result<Self, CartError> {
        let existing = self
            .lines
            .iter_mut()
            .find(|line| line.sku == product.sku && line.selected_options == *selected);

        match existing {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self
                .lines
                .push(LineItem::from_product(product, selected, quantity)),
        }
        checked_total(&self.lines)?;
        Ok(self)
    }

    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Find the line with the given identity.
    #[must_use]
    pub fn find(&self, sku: &Sku, options: &SelectedOptions) -> Option<&LineItem> {
        self.lines
            .iter()
            .find(|line| line.identity() == LineIdentity { sku, options })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity.get())).sum()
    }

    /// Sum of every line's `unit_price * quantity`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .fold(Decimal::ZERO, |total, line| total.saturating_add(line.line_total()))
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = CartError;

    fn try_from(lines: Vec<LineItem>) -> Result<Self, Self::Error> {
        Self::from_lines(lines)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
