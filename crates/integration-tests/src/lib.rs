//! Integration tests for the Weekenders cart engine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p weekenders-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - end-to-end cart flows through [`CartEngine`] with
//!   in-memory and file-backed storage, mail and clipboard fakes
//!
//! [`CartEngine`]: weekenders_storefront::CartEngine
