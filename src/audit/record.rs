//! Typed audit records decoded from the loose wire payload.

#![deny(clippy::all, clippy::pedantic)]

use std::collections::BTreeMap;
use std::fmt;

use mapper_api_types::AuditEventRecordDto;

/// Event kinds known to this client. Servers may emit kinds this build has
/// never heard of; those are carried through as `Other` instead of being
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    Create,
    Update,
    Delete,
    Other(String),
}

impl AuditEvent {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "CREATE" => Self::Create,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event-specific payload lifted out of the wire `additionalInformation`
/// bag. Absent keys stay `None`; they render as empty segments instead of
/// failing the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditDetails {
    Created {
        key: Option<String>,
        value: Option<String>,
    },
    Updated {
        old_key: Option<String>,
        old_value: Option<String>,
        new_key: Option<String>,
        new_value: Option<String>,
    },
    Removed {
        key: Option<String>,
        value: Option<String>,
    },
    /// Unrecognized event kind; the raw bag is kept for generic rendering.
    Other { info: BTreeMap<String, String> },
}

/// One immutable audit journal entry. Created only from backend responses,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub date: String,
    pub initiator: String,
    pub event: AuditEvent,
    pub mapping_id: i64,
    pub details: AuditDetails,
}

impl AuditRecord {
    #[must_use]
    pub fn from_dto(dto: AuditEventRecordDto) -> Self {
        let event = AuditEvent::parse(&dto.event);
        let info = dto.additional_information;

        let details = match &event {
            AuditEvent::Create => AuditDetails::Created {
                key: info.get("key").cloned(),
                value: info.get("value").cloned(),
            },
            AuditEvent::Delete => AuditDetails::Removed {
                key: info.get("key").cloned(),
                value: info.get("value").cloned(),
            },
            AuditEvent::Update => AuditDetails::Updated {
                old_key: info.get("oldMapping.key").cloned(),
                old_value: info.get("oldMapping.value").cloned(),
                new_key: info.get("newMapping.key").cloned(),
                new_value: info.get("newMapping.value").cloned(),
            },
            AuditEvent::Other(_) => AuditDetails::Other { info },
        };

        Self {
            date: dto.date,
            initiator: dto.initiator,
            event,
            mapping_id: dto.mapping_id,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(event: &str, info: &[(&str, &str)]) -> AuditEventRecordDto {
        AuditEventRecordDto {
            id: 1,
            date: "07.11.2022 10:15:00".into(),
            initiator: "admin".into(),
            event: event.into(),
            mapping_id: 3,
            additional_information: info
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    #[test]
    fn create_decodes_key_and_value() {
        let record = AuditRecord::from_dto(dto("CREATE", &[("key", "duty"), ("value", "alice")]));
        assert_eq!(record.event, AuditEvent::Create);
        assert_eq!(
            record.details,
            AuditDetails::Created {
                key: Some("duty".into()),
                value: Some("alice".into()),
            }
        );
    }

    #[test]
    fn update_decodes_old_and_new_sides() {
        let record = AuditRecord::from_dto(dto(
            "UPDATE",
            &[
                ("oldMapping.key", "duty"),
                ("oldMapping.value", "alice"),
                ("newMapping.key", "duty"),
                ("newMapping.value", "bob"),
            ],
        ));
        assert_eq!(
            record.details,
            AuditDetails::Updated {
                old_key: Some("duty".into()),
                old_value: Some("alice".into()),
                new_key: Some("duty".into()),
                new_value: Some("bob".into()),
            }
        );
    }

    #[test]
    fn missing_bag_keys_become_none() {
        let record = AuditRecord::from_dto(dto("DELETE", &[]));
        assert_eq!(
            record.details,
            AuditDetails::Removed {
                key: None,
                value: None,
            }
        );
    }

    #[test]
    fn unknown_event_keeps_raw_kind_and_bag() {
        let record = AuditRecord::from_dto(dto("RENAME", &[("anything", "goes")]));
        assert_eq!(record.event, AuditEvent::Other("RENAME".into()));
        assert_eq!(record.event.as_str(), "RENAME");
        match record.details {
            AuditDetails::Other { info } => assert_eq!(info.get("anything").map(String::as_str), Some("goes")),
            other => panic!("unexpected details: {other:?}"),
        }
    }
}
