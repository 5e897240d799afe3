//! User-facing notices shown by the shell.

/// Shown instead of dispatching when the cart has no items.
pub const EMPTY_CART: &str = "Cart is empty.";

/// Shown after the order text lands on the clipboard.
pub const ORDER_COPIED: &str = "Order copied to clipboard.";

/// Title of the manual-copy prompt used when the clipboard refuses.
pub const COPY_PROMPT_TITLE: &str = "Copy your order";

/// Placeholder line the customer replaces with their details.
pub const CUSTOMER_DETAILS_PLACEHOLDER: &str = "Customer details: (paste name, address, phone here)";
