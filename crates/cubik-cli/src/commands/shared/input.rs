use std::io::Read;
use std::path::Path;

use anyhow::Context;
use cubik_core::entities::Project;

/// Read a project export from a file, or stdin when `input` is `-`, and
/// validate it.
pub fn load_project(input: &str) -> anyhow::Result<Project> {
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read project JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(Path::new(input))
            .with_context(|| format!("failed to read project file '{input}'"))?
    };
    parse_project(&raw).with_context(|| format!("invalid project export '{input}'"))
}

pub fn parse_project(raw: &str) -> anyhow::Result<Project> {
    let project: Project = serde_json::from_str(raw)?;
    project.validate()?;
    tracing::debug!(
        project_id = %project.id,
        memberships = project.round_memberships.len(),
        "loaded project export"
    );
    Ok(project)
}
