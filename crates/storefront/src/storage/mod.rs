//! Local key-value storage for the cart.
//!
//! The store mirrors a browser's local storage: string keys, string values,
//! synchronous reads and writes, one execution context. Two processes
//! sharing a data directory simply race and the last write wins.

pub mod cart_store;
pub mod file;
pub mod memory;

use thiserror::Error;

pub use cart_store::{CartStore, InvalidCart, decode_cart, encode_cart};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by a [`KeyValueStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The key cannot be used as a slot name.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The cart could not be encoded.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String-to-string slot storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
