//! Field guards applied to candidate users before any side effect.
//!
//! The chain is pure and stateless. Guards run in a fixed order (name, age,
//! document number, email, phone, postal code, country, street number) and
//! the first failure is reported.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::user::{SUPPORTED_COUNTRY, UserDraft};

/// Youngest accepted age.
pub const MIN_AGE: i32 = 18;
/// Oldest accepted age.
pub const MAX_AGE: i32 = 100;

/// Field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Name is not two capitalised words.
    InvalidName,
    /// Age is outside [`MIN_AGE`]..=[`MAX_AGE`].
    InvalidAge {
        /// Rejected value.
        age: i32,
    },
    /// Document number is not `NNN.NNN.NNN-NN`.
    InvalidDocumentNumber,
    /// Email address is malformed.
    InvalidEmail,
    /// Phone is not `+55 NN 9NNNN NNNN`.
    InvalidPhone,
    /// Postal code is not `NNNNN-NNN`.
    InvalidZipCode,
    /// Country is not [`SUPPORTED_COUNTRY`].
    InvalidCountry,
    /// Street number is not one to four digits from 1 to 9.
    InvalidNumber,
}

impl UserValidationError {
    /// JSON path of the offending request field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidName => "name",
            Self::InvalidAge { .. } => "age",
            Self::InvalidDocumentNumber => "documentNumber",
            Self::InvalidEmail => "email",
            Self::InvalidPhone => "phone",
            Self::InvalidZipCode => "address.zipCode",
            Self::InvalidCountry => "address.country",
            Self::InvalidNumber => "address.number",
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName => "invalid_name",
            Self::InvalidAge { .. } => "invalid_age",
            Self::InvalidDocumentNumber => "invalid_document_number",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidPhone => "invalid_phone",
            Self::InvalidZipCode => "invalid_zip_code",
            Self::InvalidCountry => "invalid_country",
            Self::InvalidNumber => "invalid_number",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => write!(
                f,
                "name must be a capitalised first name of at least three letters followed by a capitalised surname",
            ),
            Self::InvalidAge { age } => {
                write!(f, "age must be between {MIN_AGE} and {MAX_AGE}, got {age}")
            }
            Self::InvalidDocumentNumber => {
                write!(f, "document number must match NNN.NNN.NNN-NN")
            }
            Self::InvalidEmail => write!(f, "email address is malformed"),
            Self::InvalidPhone => write!(f, "phone must match +55 NN 9NNNN NNNN"),
            Self::InvalidZipCode => write!(f, "zip code must match NNNNN-NNN"),
            Self::InvalidCountry => write!(f, "country must be {SUPPORTED_COUNTRY}"),
            Self::InvalidNumber => {
                write!(f, "street number must be one to four digits from 1 to 9")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("validation regex {pattern} failed to compile: {error}"))
    })
}

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static DOCUMENT_RE: OnceLock<Regex> = OnceLock::new();
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static ZIP_CODE_RE: OnceLock<Regex> = OnceLock::new();
static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn check(
    cell: &'static OnceLock<Regex>,
    pattern: &str,
    value: &str,
    error: UserValidationError,
) -> Result<(), UserValidationError> {
    if compiled(cell, pattern).is_match(value) {
        Ok(())
    } else {
        Err(error)
    }
}

/// Accept a capitalised word of three or more letters, a space, then a
/// capitalised word sequence.
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    check(
        &NAME_RE,
        r"^[A-Z][a-zA-Z]{2,} [A-Z][a-zA-Z ]+$",
        name,
        UserValidationError::InvalidName,
    )
}

/// Accept ages from [`MIN_AGE`] to [`MAX_AGE`] inclusive.
pub fn validate_age(age: i32) -> Result<(), UserValidationError> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(())
    } else {
        Err(UserValidationError::InvalidAge { age })
    }
}

/// Accept CPF numbers formatted as `NNN.NNN.NNN-NN`.
pub fn validate_document_number(document: &str) -> Result<(), UserValidationError> {
    check(
        &DOCUMENT_RE,
        r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$",
        document,
        UserValidationError::InvalidDocumentNumber,
    )
}

/// Accept ASCII `local@domain.tld` addresses with a two to four character
/// suffix.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    check(
        &EMAIL_RE,
        r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$",
        email,
        UserValidationError::InvalidEmail,
    )
}

/// Accept Brazilian mobile numbers formatted as `+55 NN 9NNNN NNNN`.
pub fn validate_phone(phone: &str) -> Result<(), UserValidationError> {
    check(
        &PHONE_RE,
        r"^\+55 [0-9]{2} 9[0-9]{4} [0-9]{4}$",
        phone,
        UserValidationError::InvalidPhone,
    )
}

/// Accept CEP postal codes formatted as `NNNNN-NNN`.
pub fn validate_zip_code(zip_code: &str) -> Result<(), UserValidationError> {
    check(
        &ZIP_CODE_RE,
        r"^[0-9]{5}-[0-9]{3}$",
        zip_code,
        UserValidationError::InvalidZipCode,
    )
}

/// Accept only [`SUPPORTED_COUNTRY`], matched exactly.
pub fn validate_country(country: &str) -> Result<(), UserValidationError> {
    if country == SUPPORTED_COUNTRY {
        Ok(())
    } else {
        Err(UserValidationError::InvalidCountry)
    }
}

/// Accept one to four digits, none of them zero.
pub fn validate_number(number: &str) -> Result<(), UserValidationError> {
    check(
        &NUMBER_RE,
        r"^[1-9]{1,4}$",
        number,
        UserValidationError::InvalidNumber,
    )
}

/// Run every guard over a candidate user in the fixed order.
///
/// # Examples
/// ```
/// use socialbuddy::domain::{AddressDraft, UserDraft, validate_user_draft};
///
/// let draft = UserDraft {
///     name: "User First".into(),
///     age: 25,
///     document_number: "777.666.555-44".into(),
///     email: "user.1@gmail.com".into(),
///     phone: "+55 12 94321 1257".into(),
///     address: AddressDraft {
///         zip_code: "12246-260".into(),
///         country: "Brasil".into(),
///         number: "456".into(),
///         complement: "C".into(),
///     },
/// };
/// assert!(validate_user_draft(&draft).is_ok());
/// ```
pub fn validate_user_draft(draft: &UserDraft) -> Result<(), UserValidationError> {
    validate_name(&draft.name)?;
    validate_age(draft.age)?;
    validate_document_number(&draft.document_number)?;
    validate_email(&draft.email)?;
    validate_phone(&draft.phone)?;
    validate_zip_code(&draft.address.zip_code)?;
    validate_country(&draft.address.country)?;
    validate_number(&draft.address.number)
}

#[cfg(test)]
#[path = "user_validation_tests.rs"]
mod tests;
