//! User data model.
//!
//! Clients submit a [`UserDraft`] whose address only carries the parts they
//! own (postal code, street number, complement). The remaining address parts
//! are always filled in by address enrichment, so the draft types have no
//! field for them.

use serde::{Deserialize, Serialize};

use super::UserId;

/// Country every registered address belongs to.
pub const SUPPORTED_COUNTRY: &str = "Brasil";

/// Address fields supplied by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDraft {
    /// Postal code in `NNNNN-NNN` form.
    pub zip_code: String,
    /// Country name; only [`SUPPORTED_COUNTRY`] is accepted on create.
    pub country: String,
    /// Street number, one to four digits from 1 to 9.
    pub number: String,
    /// Free-form complement such as a flat or block.
    #[serde(default)]
    pub complement: String,
}

/// Candidate user submitted for creation or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// Full name.
    pub name: String,
    /// Age in whole years.
    pub age: i32,
    /// CPF document number in `NNN.NNN.NNN-NN` form.
    pub document_number: String,
    /// Contact email.
    pub email: String,
    /// Mobile phone in `+55 NN 9NNNN NNNN` form.
    pub phone: String,
    /// Client-owned address parts.
    pub address: AddressDraft,
}

/// Fully resolved postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Postal code echoed from the draft.
    pub zip_code: String,
    /// Always [`SUPPORTED_COUNTRY`].
    pub country: String,
    /// State abbreviation from the postal directory.
    pub state: String,
    /// City from the postal directory.
    pub city: String,
    /// Neighbourhood from the postal directory.
    pub neighborhood: String,
    /// Street from the postal directory.
    pub street: String,
    /// Street number echoed from the draft.
    pub number: String,
    /// Complement echoed from the draft.
    pub complement: String,
}

/// User attributes as persisted, without the store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Full name.
    pub name: String,
    /// Age in whole years.
    pub age: i32,
    /// CPF document number.
    pub document_number: String,
    /// Contact email.
    pub email: String,
    /// Mobile phone.
    pub phone: String,
    /// Enriched address.
    pub address: Address,
}

impl UserProfile {
    /// Combine a draft with its enriched address.
    ///
    /// Any address data in the draft is discarded in favour of `address`.
    pub fn from_draft(draft: UserDraft, address: Address) -> Self {
        let UserDraft {
            name,
            age,
            document_number,
            email,
            phone,
            address: _,
        } = draft;
        Self {
            name,
            age,
            document_number,
            email,
            phone,
            address,
        }
    }
}

/// Registered user.
///
/// Serialises as a flat JSON object: `{"id": 1, "name": ..., "address": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Persisted attributes.
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl User {
    /// Attach an identifier to a persisted profile.
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address() -> Address {
        Address {
            zip_code: "12246-260".to_owned(),
            country: SUPPORTED_COUNTRY.to_owned(),
            state: "SP".to_owned(),
            city: "São José dos Campos".to_owned(),
            neighborhood: "Parque Residencial Aquarius".to_owned(),
            street: "Avenida Salmão".to_owned(),
            number: "456".to_owned(),
            complement: "C".to_owned(),
        }
    }

    #[test]
    fn draft_complement_defaults_to_empty() {
        let draft: AddressDraft = serde_json::from_value(json!({
            "zipCode": "12246-260",
            "country": "Brasil",
            "number": "456"
        }))
        .expect("draft decodes");
        assert_eq!(draft.complement, "");
    }

    #[test]
    fn user_serialises_flat_with_camel_case_keys() {
        let user = User::new(
            UserId::new(1),
            UserProfile {
                name: "User First".to_owned(),
                age: 25,
                document_number: "777.666.555-44".to_owned(),
                email: "user.1@gmail.com".to_owned(),
                phone: "+55 12 94321 1257".to_owned(),
                address: address(),
            },
        );

        let value = serde_json::to_value(&user).expect("user serialises");
        assert_eq!(value.get("id"), Some(&json!(1)));
        assert_eq!(value.get("documentNumber"), Some(&json!("777.666.555-44")));
        assert_eq!(
            value.pointer("/address/zipCode"),
            Some(&json!("12246-260"))
        );
        let decoded: User = serde_json::from_value(value).expect("user decodes");
        assert_eq!(decoded, user);
    }
}
