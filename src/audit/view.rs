//! Owned view state for the audit journal.
//!
//! The view owns the currently displayed record set and replaces it
//! wholesale on each successful refresh; there is no partial merge with
//! stale data. Refreshes carry a generation token so a response that was
//! superseded by a newer refresh is discarded instead of clobbering newer
//! data.

#![deny(clippy::all, clippy::pedantic)]

use crate::audit::format;
use crate::audit::record::AuditRecord;

pub const EMPTY_JOURNAL: &str = "No audit records found";

/// Ties an in-flight fetch to the refresh that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

#[derive(Debug, Default)]
pub struct AuditJournalView {
    records: Vec<AuditRecord>,
    generation: u64,
}

impl AuditJournalView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh, superseding any still-pending one.
    pub fn begin_refresh(&mut self) -> RefreshToken {
        self.generation += 1;
        RefreshToken(self.generation)
    }

    /// Install a fetched record set. Returns `false` (changing nothing)
    /// when the token no longer matches the latest refresh.
    pub fn complete_refresh(&mut self, token: RefreshToken, records: Vec<AuditRecord>) -> bool {
        if token.0 != self.generation {
            return false;
        }
        self.records = records;
        true
    }

    #[must_use]
    pub fn records(&self) -> &[AuditRecord] {
        &self.records
    }

    /// Flat log rendition of the current record set.
    #[must_use]
    pub fn render_flat(&self) -> String {
        if self.records.is_empty() {
            return EMPTY_JOURNAL.to_string();
        }
        self.records
            .iter()
            .map(format::flat_row)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Detailed rendition: a header row per record followed by its
    /// description block.
    #[must_use]
    pub fn render_detailed(&self) -> String {
        if self.records.is_empty() {
            return EMPTY_JOURNAL.to_string();
        }
        self.records
            .iter()
            .map(|record| {
                format!(
                    "[{}] {} {} #{}\n{}",
                    record.date,
                    record.initiator,
                    record.event,
                    record.mapping_id,
                    format::detailed_description(record)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
