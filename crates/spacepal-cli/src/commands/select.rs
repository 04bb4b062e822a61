use anyhow::Result;
use colored::Colorize;
use spacepal_core::gateway::CatalogGateway;
use spacepal_core::session::SelectionStore;

use crate::app::App;

pub async fn spaces(app: &App) -> Result<()> {
    println!("{}", "spaces".bold());
    for space in app.client.spaces().await? {
        println!("  {:<12} {}", space.id, space.name);
    }
    Ok(())
}

pub async fn styles(app: &App) -> Result<()> {
    println!("{}", "styles".bold());
    for style in app.client.styles().await? {
        println!("  {:<12} {}", style.id, style.name);
    }
    Ok(())
}

pub async fn set_space(app: &App, space_id: String) -> Result<()> {
    app.session.set_space(space_id.clone()).await?;
    println!("space set to {space_id}");
    Ok(())
}

pub async fn set_style(app: &App, style_id: String) -> Result<()> {
    app.session.set_style(style_id.clone()).await?;
    println!("style set to {style_id}");
    Ok(())
}

pub async fn show(app: &App) -> Result<()> {
    let selection = app.session.selection().await?;
    let display = |id: &str| {
        if id.is_empty() {
            "(not chosen)".dimmed().to_string()
        } else {
            id.to_string()
        }
    };
    println!("space: {}", display(&selection.space_id));
    println!("style: {}", display(&selection.style_id));
    if !selection.is_complete() {
        println!("choose both before browsing: spacepal select space <id>");
    }
    Ok(())
}
