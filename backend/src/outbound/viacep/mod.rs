//! ViaCEP outbound adapter.
//!
//! Thin HTTP implementation of the `AddressLookup` port against the public
//! Brazilian postal-code directory.

mod dto;
mod http_lookup;

pub use http_lookup::{DEFAULT_VIACEP_BASE_URL, ViaCepAddressLookup};
