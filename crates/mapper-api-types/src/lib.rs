//! Shared request and response types for the entity-mapper plugin REST API.
//!
//! The wire format is owned by the host platform, so field names stay
//! camelCase and decoding is deliberately forgiving: absent fields fall back
//! to defaults and event kinds this build has never heard of are carried
//! through as raw strings instead of failing the whole payload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One persisted key→value mapping as returned by `GET /mapping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMappingDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// Body for mapping create and update calls. The id travels in the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingUpsertRequest {
    pub key: String,
    pub value: String,
}

/// One audit journal entry as returned by `GET /audit/records`.
///
/// `additional_information` is a loose string bag whose recognized key set
/// depends on `event`; interpreting it is the client's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEventRecordDto {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub initiator: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub mapping_id: i64,
    #[serde(default)]
    pub additional_information: BTreeMap<String, String>,
}

/// Plugin settings payload for `GET`/`PUT /settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSettingsDto {
    #[serde(default)]
    pub mappings_enabled_in_projects: bool,
}

/// Error body shape shared by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
}

impl ErrorMessage {
    /// Pull the server-provided message out of an error body, if any.
    /// Unparseable or empty bodies yield `None`.
    #[must_use]
    pub fn extract(body: &[u8]) -> Option<String> {
        let parsed: Self = serde_json::from_slice(body).ok()?;
        parsed.error_message.filter(|message| !message.is_empty())
    }
}
