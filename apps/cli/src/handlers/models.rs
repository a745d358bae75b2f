use anyhow::{Result, bail};
use tw_kernel::domain::constants::ALL;
use tw_kernel::domain::groups::ModelGroups;

/// Lists the models of `group` (every declared group when `None`).
///
/// # Errors
/// Returns an error for unknown group names or if JSON encoding fails.
pub fn list(group: Option<&str>, json: bool) -> Result<()> {
    let groups = ModelGroups::builtin();
    let name = group.unwrap_or(ALL);

    let Some(models) = groups.group(name) else {
        bail!("Unknown model group '{name}'. Known groups: {}", groups.names().join(", "));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    if models.is_empty() {
        println!("ℹ️ Group '{name}' has no models.");
        return Ok(());
    }

    let width = models.iter().map(|m| m.id.len()).max().unwrap_or(0);
    println!("{:<width$}  {:<20}  {}", "ID", "SOURCE", "NAME");
    for model in &models {
        println!("{:<width$}  {:<20}  {}", model.id, model.source_type.as_str(), model.name);
    }
    println!("\n{} model(s) in '{name}'", models.len());
    Ok(())
}
