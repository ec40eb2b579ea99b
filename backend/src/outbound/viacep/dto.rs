//! DTOs for decoding ViaCEP JSON responses.
//!
//! Unregistered codes come back as `200 OK` with an `erro` flag, which the
//! service has sent both as a JSON boolean and as the string `"true"`.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ports::AddressFragment;

#[derive(Debug, Deserialize)]
pub(super) struct ViaCepResponseDto {
    #[serde(default)]
    pub(super) uf: String,
    #[serde(default)]
    pub(super) localidade: String,
    #[serde(default)]
    pub(super) bairro: String,
    #[serde(default)]
    pub(super) logradouro: String,
    #[serde(default)]
    pub(super) erro: Option<Value>,
}

impl ViaCepResponseDto {
    pub(super) fn is_unregistered(&self) -> bool {
        match &self.erro {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub(super) fn into_fragment(self) -> AddressFragment {
        AddressFragment {
            state: self.uf,
            city: self.localidade,
            neighborhood: self.bairro,
            street: self.logradouro,
        }
    }
}
