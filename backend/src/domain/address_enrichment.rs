//! Address enrichment: turn client-owned address parts into a full address.
//!
//! State, city, neighbourhood and street always come from the postal
//! directory. Postal code, street number and complement are echoed back and
//! the country is fixed.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{AddressLookup, AddressLookupError};
use super::user::{Address, SUPPORTED_COUNTRY};

/// Resolves full addresses through an [`AddressLookup`] port.
pub struct AddressEnricher<L> {
    lookup: Arc<L>,
}

impl<L> Clone for AddressEnricher<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
        }
    }
}

impl<L> AddressEnricher<L>
where
    L: AddressLookup,
{
    /// Create an enricher backed by `lookup`.
    pub fn new(lookup: Arc<L>) -> Self {
        Self { lookup }
    }

    /// Issue exactly one lookup for `zip_code` and assemble the address.
    pub async fn enrich(
        &self,
        zip_code: &str,
        number: &str,
        complement: &str,
    ) -> Result<Address, AddressLookupError> {
        debug!(zip_code, "resolving postal code");
        let fragment = self.lookup.lookup(zip_code).await.map_err(|error| {
            warn!(zip_code, %error, "address lookup failed");
            error
        })?;

        Ok(Address {
            zip_code: zip_code.to_owned(),
            country: SUPPORTED_COUNTRY.to_owned(),
            state: fragment.state,
            city: fragment.city,
            neighborhood: fragment.neighborhood,
            street: fragment.street,
            number: number.to_owned(),
            complement: complement.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::ports::{AddressFragment, MockAddressLookup};

    fn aquarius() -> AddressFragment {
        AddressFragment {
            state: "SP".to_owned(),
            city: "São José dos Campos".to_owned(),
            neighborhood: "Parque Residencial Aquarius".to_owned(),
            street: "Avenida Salmão".to_owned(),
        }
    }

    #[tokio::test]
    async fn builds_address_from_fragment_and_echoed_parts() {
        let mut lookup = MockAddressLookup::new();
        lookup
            .expect_lookup()
            .with(eq("12246-260"))
            .times(1)
            .return_once(|_| Ok(aquarius()));

        let address = AddressEnricher::new(Arc::new(lookup))
            .enrich("12246-260", "456", "C")
            .await
            .expect("enrichment succeeds");

        assert_eq!(
            address,
            Address {
                zip_code: "12246-260".to_owned(),
                country: "Brasil".to_owned(),
                state: "SP".to_owned(),
                city: "São José dos Campos".to_owned(),
                neighborhood: "Parque Residencial Aquarius".to_owned(),
                street: "Avenida Salmão".to_owned(),
                number: "456".to_owned(),
                complement: "C".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn propagates_lookup_failure() {
        let mut lookup = MockAddressLookup::new();
        lookup
            .expect_lookup()
            .times(1)
            .return_once(|zip| Err(AddressLookupError::not_found(zip)));

        let error = AddressEnricher::new(Arc::new(lookup))
            .enrich("99999-999", "1", "")
            .await
            .expect_err("unknown postal code");

        assert_eq!(error, AddressLookupError::not_found("99999-999"));
    }
}
