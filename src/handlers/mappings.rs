#![deny(clippy::all, clippy::pedantic)]

use reqwest::Method;

use mapper_api_types::{EntityMappingDto, MappingUpsertRequest};

use crate::args::MappingsCmd;
use crate::client::{CliError, Ctx};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: MappingsCmd) -> Result<(), CliError> {
    match cmd {
        MappingsCmd::List => list(ctx).await,
        MappingsCmd::Get { id } => get(ctx, id).await,
        MappingsCmd::Create { key, value } => create(ctx, key, value).await,
        MappingsCmd::Update { id, key, value } => update(ctx, id, key, value).await,
        MappingsCmd::Delete { id } => delete(ctx, id).await,
    }
}

async fn list(ctx: &Ctx) -> Result<(), CliError> {
    let res: Vec<EntityMappingDto> = ctx.request(Method::GET, "mapping", None, None).await?;
    print_json(&res)?;
    Ok(())
}

async fn get(ctx: &Ctx, id: i64) -> Result<(), CliError> {
    let res: EntityMappingDto = ctx
        .request(Method::GET, &format!("mapping/{id}"), None, None)
        .await?;
    print_json(&res)?;
    Ok(())
}

async fn create(ctx: &Ctx, key: String, value: String) -> Result<(), CliError> {
    let body = upsert_body(key, value)?;
    let res: EntityMappingDto = ctx.request(Method::POST, "mapping", None, Some(body)).await?;
    print_json(&res)?;
    Ok(())
}

async fn update(ctx: &Ctx, id: i64, key: String, value: String) -> Result<(), CliError> {
    let body = upsert_body(key, value)?;
    let res: EntityMappingDto = ctx
        .request(Method::PUT, &format!("mapping/{id}"), None, Some(body))
        .await?;
    print_json(&res)?;
    Ok(())
}

async fn delete(ctx: &Ctx, id: i64) -> Result<(), CliError> {
    ctx.request_unit(Method::DELETE, &format!("mapping/{id}"), None, None)
        .await
}

/// The server rejects blank pairs with a 400; refusing them here keeps the
/// message local and saves a round trip.
fn upsert_body(key: String, value: String) -> Result<serde_json::Value, CliError> {
    if key.trim().is_empty() || value.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "mapping key and value can not be empty".into(),
        ));
    }
    serde_json::to_value(MappingUpsertRequest { key, value })
        .map_err(|e| CliError::InvalidInput(e.to_string()))
}
