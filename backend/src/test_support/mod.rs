//! Test doubles shared by unit and integration tests.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature so the
//! integration suites under `tests/` can reuse them.

mod address_lookup;
mod clock;
mod fixtures;

pub use address_lookup::StubAddressLookup;
pub use clock::MutableClock;
pub use fixtures::{aquarius_address, aquarius_fragment, fixture_timestamp, user_draft};
