//! Response types (Serialize)

use chrono::{DateTime, Utc};
use serde::Serialize;
use stronghold_core::{Card, CardSet};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSetResponse {
    pub message: &'static str,
    pub deleted_set: CardSet,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCardResponse {
    pub message: &'static str,
    pub deleted_card: Card,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl HealthResponse {
    pub fn healthy(timestamp: DateTime<Utc>) -> Self {
        Self { status: "healthy", timestamp: Some(timestamp), database: Some("connected"), error: None }
    }

    pub fn unhealthy() -> Self {
        Self {
            status: "unhealthy",
            timestamp: None,
            database: None,
            error: Some("Database connection failed"),
        }
    }
}
