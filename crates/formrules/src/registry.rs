//! The shared per-form error registry.
//!
//! A registry maps field names to an error flag; presence means the field
//! currently has an error. One registry is shared by every field of a form,
//! so each update locks, reads the latest map, changes only its own key and
//! writes back before releasing the lock. Concurrent validations of
//! different fields therefore never overwrite each other.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

/// A snapshot of the registry's contents.
pub type ErrorMap = BTreeMap<String, bool>;

/// Shared field-name to error-flag map.
///
/// Cloning is cheap and yields a handle to the same map.
#[derive(Debug, Clone, Default)]
pub struct ErrorRegistry {
    inner: Arc<Mutex<ErrorMap>>,
}

impl ErrorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flags `name` as having an error.
    pub fn insert(&self, name: &str) {
        self.update(|errors| {
            errors.insert(name.to_string(), true);
        });
        debug!(field = name, "error flagged");
    }

    /// Clears the error flag for `name`. Other entries are untouched.
    pub fn remove(&self, name: &str) {
        self.update(|errors| {
            errors.remove(name);
        });
        debug!(field = name, "error cleared");
    }

    /// Runs a read-modify-write against the latest map under one lock.
    pub fn update<R>(&self, f: impl FnOnce(&mut ErrorMap) -> R) -> R {
        let mut errors = self.inner.lock();
        f(&mut errors)
    }

    /// Returns whether `name` is flagged.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.lock().contains_key(name)
    }

    /// Returns a copy of the current map.
    #[must_use]
    pub fn snapshot(&self) -> ErrorMap {
        self.inner.lock().clone()
    }

    /// Returns the flagged field names in order.
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        self.inner.lock().keys().cloned().collect()
    }

    /// Returns the number of flagged fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns whether no field is flagged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Clears every flag.
    pub fn clear(&self) {
        self.inner.lock().clear();
        debug!("error registry cleared");
    }
}
