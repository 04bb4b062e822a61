use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde_json::Value;
use spacepal_core::gateway::AdminResource;

use crate::app::App;

fn resource(name: &str) -> Result<AdminResource> {
    AdminResource::from_str(name).map_err(|_| {
        let known = AdminResource::ALL.map(|r| r.path_segment()).join(", ");
        anyhow!("unknown resource {name:?}, expected one of: {known}")
    })
}

pub async fn list(app: &App, name: &str) -> Result<()> {
    let rows = app.admin.list(resource(name)?).await?;
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

pub async fn create(app: &App, name: &str, json: &str) -> Result<()> {
    let record: Value = serde_json::from_str(json)?;
    let created = app.admin.create(resource(name)?, &record).await?;
    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}

pub async fn update(app: &App, name: &str, id: &str, json: &str) -> Result<()> {
    let record: Value = serde_json::from_str(json)?;
    let updated = app.admin.update(resource(name)?, id, &record).await?;
    println!("{}", serde_json::to_string_pretty(&updated)?);
    Ok(())
}

pub async fn delete(app: &App, name: &str, id: &str) -> Result<()> {
    app.admin.delete(resource(name)?, id).await?;
    println!("{id} deleted from {name}");
    Ok(())
}
