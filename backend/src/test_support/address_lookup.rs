//! In-process postal directory.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{AddressFragment, AddressLookup, AddressLookupError};

/// Address lookup answering from a fixed table and recording every request.
#[derive(Default)]
pub struct StubAddressLookup {
    entries: HashMap<String, AddressFragment>,
    requests: Mutex<Vec<String>>,
}

impl StubAddressLookup {
    /// Empty directory: every postal code is unregistered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a postal code.
    #[must_use]
    pub fn with_entry(mut self, zip_code: impl Into<String>, fragment: AddressFragment) -> Self {
        self.entries.insert(zip_code.into(), fragment);
        self
    }

    /// Postal codes requested so far, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl AddressLookup for StubAddressLookup {
    async fn lookup(&self, zip_code: &str) -> Result<AddressFragment, AddressLookupError> {
        match self.requests.lock() {
            Ok(mut guard) => guard.push(zip_code.to_owned()),
            Err(poisoned) => poisoned.into_inner().push(zip_code.to_owned()),
        }
        self.entries
            .get(zip_code)
            .cloned()
            .ok_or_else(|| AddressLookupError::not_found(zip_code))
    }
}
