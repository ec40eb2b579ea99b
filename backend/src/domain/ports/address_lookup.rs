//! Driven port for resolving postal codes into street addresses.
//!
//! The domain owns the response contract so address enrichment stays
//! independent of the directory service behind the adapter.

use async_trait::async_trait;

use super::define_port_error;

/// Address parts resolved from a postal code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressFragment {
    /// State abbreviation, e.g. `SP`.
    pub state: String,
    /// City name.
    pub city: String,
    /// Neighbourhood name.
    pub neighborhood: String,
    /// Street name.
    pub street: String,
}

define_port_error! {
    /// Errors surfaced while resolving a postal code.
    pub enum AddressLookupError {
        /// Network transport failed before receiving a response.
        Transport { message: String } =>
            "address lookup transport failed: {message}",
        /// The lookup exceeded its deadline.
        Timeout { message: String } =>
            "address lookup timed out: {message}",
        /// The directory answered with a non-success status.
        Status { message: String } =>
            "address lookup returned {message}",
        /// The directory response could not be decoded.
        Decode { message: String } =>
            "address lookup response decode failed: {message}",
        /// The directory has no entry for the postal code.
        NotFound { zip_code: String } =>
            "postal code {zip_code} is not registered",
    }
}

/// Port for resolving a postal code. One call per invocation, no retries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Resolve `zip_code` into its address parts.
    async fn lookup(&self, zip_code: &str) -> Result<AddressFragment, AddressLookupError>;
}
