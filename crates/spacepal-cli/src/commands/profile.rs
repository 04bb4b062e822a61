use anyhow::Result;
use colored::Colorize;

use crate::app::App;

pub async fn show(app: &App) -> Result<()> {
    let user = app.profile.load().await?;
    println!("username: {}", user.username.bold());
    println!("email:    {}", user.email);
    println!("id:       {}", user.id);
    Ok(())
}

pub async fn set_username(app: &App, username: &str) -> Result<()> {
    let user = app.profile.update_username(username).await?;
    println!("username changed to {}", user.username.bold());
    Ok(())
}

pub async fn set_password(app: &App, password: &str) -> Result<()> {
    app.profile.change_password(password).await?;
    println!("password changed");
    Ok(())
}
