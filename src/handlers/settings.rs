#![deny(clippy::all, clippy::pedantic)]

use reqwest::Method;

use mapper_api_types::MappingSettingsDto;

use crate::args::SettingsCmd;
use crate::client::{CliError, Ctx};
use crate::print::print_json;
use crate::settings::MappingsToggle;

pub async fn handle(ctx: &Ctx, cmd: SettingsCmd) -> Result<(), CliError> {
    match cmd {
        SettingsCmd::Get => get(ctx).await,
        SettingsCmd::SetProjectMappings { enabled } => set_project_mappings(ctx, enabled).await,
    }
}

async fn get(ctx: &Ctx) -> Result<(), CliError> {
    let res: MappingSettingsDto = ctx.request(Method::GET, "settings", None, None).await?;
    print_json(&res)?;
    Ok(())
}

async fn set_project_mappings(ctx: &Ctx, enabled: bool) -> Result<(), CliError> {
    let current: MappingSettingsDto = ctx.request(Method::GET, "settings", None, None).await?;
    let mut toggle = MappingsToggle::new(current.mappings_enabled_in_projects);

    apply_toggle(ctx, &mut toggle, enabled).await?;

    print_json(&MappingSettingsDto {
        mappings_enabled_in_projects: toggle.checked(),
    })?;
    Ok(())
}

/// Optimistically flip the switch, push the change, and roll the switch
/// back when the server rejects it. The error still propagates so the
/// top-level flag fires.
pub async fn apply_toggle(
    ctx: &Ctx,
    toggle: &mut MappingsToggle,
    enabled: bool,
) -> Result<(), CliError> {
    let prior = toggle.set(enabled);
    let body = serde_json::to_value(MappingSettingsDto {
        mappings_enabled_in_projects: enabled,
    })
    .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    match ctx.request_unit(Method::PUT, "settings", None, Some(body)).await {
        Ok(()) => Ok(()),
        Err(err) => {
            toggle.revert(prior);
            Err(err)
        }
    }
}
