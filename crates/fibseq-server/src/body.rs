//! JSON response bodies.
//!
//! Terms are arbitrary precision, so they are written as raw JSON numbers
//! rather than going through `u64` or a string.

use num_bigint::BigUint;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// `{"current": <int>}`
#[derive(Debug, Serialize)]
pub struct CurrentResponse {
    #[serde(serialize_with = "serialize_term")]
    pub current: BigUint,
}

/// `{"next": <int>}`
#[derive(Debug, Serialize)]
pub struct NextResponse {
    #[serde(serialize_with = "serialize_term")]
    pub next: BigUint,
}

/// `{"previous": <int>}`
#[derive(Debug, Serialize)]
pub struct PreviousResponse {
    #[serde(serialize_with = "serialize_term")]
    pub previous: BigUint,
}

/// `{"status": "healthy"}`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub const HEALTHY: Self = Self { status: "healthy" };
}

/// Body of a 500 produced by the panic guard.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

fn serialize_term<S: Serializer>(term: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    let raw = RawValue::from_string(term.to_string()).map_err(S::Error::custom)?;
    raw.serialize(serializer)
}
