#![deny(clippy::all, clippy::pedantic)]

use std::time::Duration;

use reqwest::Method;

use mapper_api_types::AuditEventRecordDto;

use crate::args::{AuditCmd, AuditFilterArgs, AuditOutput};
use crate::audit::filter::AuditFilter;
use crate::audit::record::AuditRecord;
use crate::audit::view::AuditJournalView;
use crate::client::{CliError, Ctx};
use crate::notify;
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: AuditCmd) -> Result<(), CliError> {
    match cmd {
        AuditCmd::List { filter, output } => list(ctx, &filter, output).await,
        AuditCmd::Watch { filter, interval } => watch(ctx, &filter, interval).await,
    }
}

async fn list(ctx: &Ctx, args: &AuditFilterArgs, output: AuditOutput) -> Result<(), CliError> {
    let filter = AuditFilter::from_args(args)?;
    let dtos = fetch(ctx, &filter).await?;

    match output {
        AuditOutput::Json => print_json(&dtos)?,
        AuditOutput::Flat | AuditOutput::Detailed => {
            let mut view = AuditJournalView::new();
            let token = view.begin_refresh();
            view.complete_refresh(token, decode(dtos));

            let rendered = if output == AuditOutput::Flat {
                view.render_flat()
            } else {
                view.render_detailed()
            };
            println!("{rendered}");
        }
    }
    Ok(())
}

/// Poll loop owning the journal view. A failed poll keeps the previous
/// record set on screen and surfaces a flag; a successful one replaces the
/// displayed set wholesale.
async fn watch(ctx: &Ctx, args: &AuditFilterArgs, interval_secs: u64) -> Result<(), CliError> {
    let filter = AuditFilter::from_args(args)?;
    let mut view = AuditJournalView::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));

    loop {
        ticker.tick().await;
        let token = view.begin_refresh();
        match fetch(ctx, &filter).await {
            Ok(dtos) => {
                if view.complete_refresh(token, decode(dtos)) {
                    println!("{}", view.render_flat());
                }
            }
            Err(err) => notify::error_flag(&err),
        }
    }
}

async fn fetch(ctx: &Ctx, filter: &AuditFilter) -> Result<Vec<AuditEventRecordDto>, CliError> {
    let query = filter.query_pairs();
    let query = if query.is_empty() {
        None
    } else {
        Some(query.as_slice())
    };
    ctx.request(Method::GET, "audit/records", query, None).await
}

fn decode(dtos: Vec<AuditEventRecordDto>) -> Vec<AuditRecord> {
    dtos.into_iter().map(AuditRecord::from_dto).collect()
}
