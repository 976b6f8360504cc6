//! Pure display formatting for audit records.
//!
//! Both renditions branch on the event kind only; nothing here touches the
//! network or fails on malformed payloads.

#![deny(clippy::all, clippy::pedantic)]

use crate::audit::record::{AuditDetails, AuditRecord};

pub const NO_UPDATES_FOUND: &str = "no updates found";
pub const UNKNOWN_EVENT: &str = "Unknown update option";

/// One-line journal row: `[<date>] <initiator> <event> #<id>: <description>`.
#[must_use]
pub fn flat_row(record: &AuditRecord) -> String {
    format!(
        "[{}] {} {} #{}: {}",
        record.date,
        record.initiator,
        record.event,
        record.mapping_id,
        short_description(record)
    )
}

/// Event-specific one-line description.
#[must_use]
pub fn short_description(record: &AuditRecord) -> String {
    match &record.details {
        AuditDetails::Created { key, value } | AuditDetails::Removed { key, value } => {
            format!("{}: {}", text(key), text(value))
        }
        AuditDetails::Updated {
            old_key,
            old_value,
            new_key,
            new_value,
        } => {
            let mut fragments = Vec::new();
            if old_key != new_key {
                fragments.push(format!("key: {} => {}", text(old_key), text(new_key)));
            }
            if old_value != new_value {
                fragments.push(format!("value: {} => {}", text(old_value), text(new_value)));
            }
            if fragments.is_empty() {
                NO_UPDATES_FOUND.to_string()
            } else {
                fragments.join("; ")
            }
        }
        AuditDetails::Other { .. } => UNKNOWN_EVENT.to_string(),
    }
}

/// Multi-line description block used by the detailed output. Unknown event
/// kinds fall back to a generic dump of the additional-information payload.
#[must_use]
pub fn detailed_description(record: &AuditRecord) -> String {
    match &record.details {
        AuditDetails::Created { key, value } => {
            format!("Mapping created\n  {} = {}", text(key), text(value))
        }
        AuditDetails::Removed { key, value } => {
            format!("Mapping removed\n  {} = {}", text(key), text(value))
        }
        AuditDetails::Updated {
            old_key,
            old_value,
            new_key,
            new_value,
        } => {
            let mut lines = vec!["Mapping updated".to_string()];
            if old_key != new_key {
                lines.push(format!("  Key: {} => {}", text(old_key), text(new_key)));
            }
            if old_value != new_value {
                lines.push(format!("  Value: {} => {}", text(old_value), text(new_value)));
            }
            lines.join("\n")
        }
        AuditDetails::Other { info } => serde_json::to_string(info).unwrap_or_default(),
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
