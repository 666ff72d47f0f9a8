//! JSON format handling for requests and responses
//!
//! This module centralizes all wire-format concerns, providing:
//! - `TransactionRequest` for deserializing `POST /transacao` bodies
//! - Validation and conversion from requests to domain transactions
//! - `StatisticsResponse` for serializing `GET /estatistica` bodies
//!
//! All functions are pure (no I/O) for easy testing.

use axum::extract::rejection::JsonRejection;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{ServiceError, Statistics, Transaction};

/// Body of `POST /transacao`
///
/// Both fields are optional at the decoding stage so that a missing or null
/// field becomes a validation error instead of a decoding error.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Transaction amount
    pub valor: Option<f64>,

    /// ISO-8601 timestamp with offset, e.g. `2024-05-01T12:00:00.000-03:00`
    /// or `2024-05-01T12:00-03:00`
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub data_hora: Option<DateTime<FixedOffset>>,
}

/// Parse an ISO-8601 timestamp with an offset
///
/// Accepts RFC 3339 (seconds and optional fraction) as well as the
/// minute-precision form without seconds.
pub fn parse_timestamp(input: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(input).or_else(|rfc3339_err| {
        let normalized = match input.strip_suffix(['Z', 'z']) {
            Some(local) => format!("{}+00:00", local),
            None => input.to_string(),
        };
        DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z").map_err(|_| rfc3339_err)
    })
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid dataHora '{}': {}", raw, e))),
        None => Ok(None),
    }
}

/// Validate a request and convert it into a transaction
///
/// # Arguments
///
/// * `request` - The decoded request body
/// * `now` - Current instant; the timestamp may not be later than this
///
/// # Returns
///
/// * `Ok(Transaction)` - A transaction ready to store
/// * `Err(ServiceError::MissingField)` - `valor` or `dataHora` absent or null
/// * `Err(ServiceError::InvalidAmount)` - `valor <= 0`
/// * `Err(ServiceError::FutureTimestamp)` - `dataHora` later than `now`
pub fn convert_request(
    request: TransactionRequest,
    now: DateTime<Utc>,
) -> Result<Transaction, ServiceError> {
    let amount = request
        .valor
        .ok_or_else(|| ServiceError::missing_field("valor"))?;
    let timestamp = request
        .data_hora
        .ok_or_else(|| ServiceError::missing_field("dataHora"))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(ServiceError::invalid_amount(amount));
    }

    if timestamp.with_timezone(&Utc) > now {
        return Err(ServiceError::future_timestamp(timestamp));
    }

    Ok(Transaction::new(amount, timestamp.with_timezone(&Utc)))
}

/// Map an axum JSON extractor rejection to a service error
///
/// Well-formed JSON whose fields have the wrong type or format is a
/// validation failure (422). Anything that is not JSON at all is a
/// malformed body (400).
pub fn convert_rejection(rejection: JsonRejection) -> ServiceError {
    match rejection {
        JsonRejection::JsonDataError(err) => ServiceError::invalid_payload(err.body_text()),
        other => ServiceError::malformed_body(other.body_text()),
    }
}

/// Body of `GET /estatistica`
///
/// Non-finite values are written as the strings `"Infinity"`, `"-Infinity"`
/// and `"NaN"`, which is how the empty-window sentinels appear on the wire.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct StatisticsResponse {
    pub count: u64,
    #[serde(serialize_with = "serialize_number")]
    pub sum: f64,
    #[serde(serialize_with = "serialize_number")]
    pub avg: f64,
    #[serde(serialize_with = "serialize_number")]
    pub min: f64,
    #[serde(serialize_with = "serialize_number")]
    pub max: f64,
}

impl From<Statistics> for StatisticsResponse {
    fn from(stats: Statistics) -> Self {
        StatisticsResponse {
            count: stats.count,
            sum: stats.sum,
            avg: stats.average,
            min: stats.min,
            max: stats.max,
        }
    }
}

fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_infinite() {
        serializer.serialize_str(if *value > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        serializer.serialize_f64(*value)
    }
}
