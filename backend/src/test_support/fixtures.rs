//! Canonical fixture values.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::ports::AddressFragment;
use crate::domain::{Address, AddressDraft, UserDraft};

/// Fixed instant used to seed clocks: 2024-03-15T10:30:00Z.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Directory entry for postal code `12246-260`.
pub fn aquarius_fragment() -> AddressFragment {
    AddressFragment {
        state: "SP".to_owned(),
        city: "São José dos Campos".to_owned(),
        neighborhood: "Parque Residencial Aquarius".to_owned(),
        street: "Avenida Salmão".to_owned(),
    }
}

/// Address produced by enriching `12246-260`, number 456, complement C.
pub fn aquarius_address() -> Address {
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
}

/// Valid draft living at postal code `12246-260`.
pub fn user_draft(name: &str, email: &str) -> UserDraft {
    UserDraft {
        name: name.to_owned(),
        age: 30,
        document_number: "123.456.789-00".to_owned(),
        email: email.to_owned(),
        phone: "+55 12 91234 5678".to_owned(),
        address: AddressDraft {
            zip_code: "12246-260".to_owned(),
            country: "Brasil".to_owned(),
            number: "456".to_owned(),
            complement: "C".to_owned(),
        },
    }
}
