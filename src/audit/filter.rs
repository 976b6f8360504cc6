//! Builds the normalized query-parameter set for audit journal fetches.

#![deny(clippy::all, clippy::pedantic)]

use time::{Date, Month};

use crate::args::AuditFilterArgs;
use crate::client::CliError;

/// Optional constraints narrowing which audit records the backend returns.
/// A `None` field contributes nothing to the outgoing query; dates are
/// already in the backend query form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditFilter {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub initiator: Option<String>,
    pub event: Option<String>,
    pub mapping_id: Option<String>,
    pub limit: Option<u32>,
}

impl AuditFilter {
    /// Normalize raw control values into a filter. Blank inputs count as
    /// absent; date inputs are converted from display form to query form.
    pub fn from_args(args: &AuditFilterArgs) -> Result<Self, CliError> {
        Ok(Self {
            start_date: non_blank(args.start_date.as_deref())
                .map(query_date)
                .transpose()?,
            end_date: non_blank(args.end_date.as_deref())
                .map(query_date)
                .transpose()?,
            initiator: non_blank(args.initiator.as_deref()).map(str::to_string),
            event: non_blank(args.event.as_deref()).map(str::to_string),
            mapping_id: non_blank(args.mapping_id.as_deref()).map(str::to_string),
            limit: args.limit,
        })
    }

    /// Query pairs in wire naming, with absent constraints omitted entirely.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.start_date {
            pairs.push(("startDate", v.clone()));
        }
        if let Some(v) = &self.end_date {
            pairs.push(("endDate", v.clone()));
        }
        if let Some(v) = &self.initiator {
            pairs.push(("initiator", v.clone()));
        }
        if let Some(v) = &self.event {
            pairs.push(("event", v.clone()));
        }
        if let Some(v) = &self.mapping_id {
            pairs.push(("mappingId", v.clone()));
        }
        if let Some(v) = self.limit {
            pairs.push(("eventsLimit", v.to_string()));
        }
        pairs
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Reorder a display-form date (`dd-mm-yy` or `dd-mm-yyyy`) into the
/// backend query form (`yymmdd` / `yyyymmdd`), validating it against the
/// calendar on the way.
fn query_date(display: &str) -> Result<String, CliError> {
    let invalid =
        || CliError::InvalidInput(format!("invalid filter date `{display}`, expected dd-mm-yy"));

    let mut parts = display.split('-');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid());
    };
    if day.len() != 2 || month.len() != 2 || !(year.len() == 2 || year.len() == 4) {
        return Err(invalid());
    }

    let day_num: u8 = day.parse().map_err(|_| invalid())?;
    let month_num: u8 = month.parse().map_err(|_| invalid())?;
    let year_num: i32 = year.parse().map_err(|_| invalid())?;
    let full_year = if year.len() == 2 {
        2000 + year_num
    } else {
        year_num
    };

    let month_enum = Month::try_from(month_num).map_err(|_| invalid())?;
    Date::from_calendar_date(full_year, month_enum, day_num).map_err(|_| invalid())?;

    Ok(format!("{year}{month}{day}"))
}
