use anyhow::Result;
use colored::Colorize;
use spacepal_core::user::NewUser;

use crate::app::App;

pub async fn login(app: &App, username: &str, password: &str) -> Result<()> {
    let user = app.auth.login(username, password).await?;
    println!("logged in as {}", user.username.bold());
    if user.is_admin() {
        println!("{}", "back-office access enabled".yellow());
    }
    Ok(())
}

pub async fn logout(app: &App) -> Result<()> {
    app.auth.logout().await?;
    println!("logged out");
    Ok(())
}

pub async fn register(app: &App, username: String, email: String, password: String) -> Result<()> {
    let user = app
        .auth
        .register(&NewUser {
            username,
            email,
            password,
        })
        .await?;
    println!("registered {} ({})", user.username.bold(), user.email);
    println!("log in with: spacepal login {} <password>", user.username);
    Ok(())
}

pub async fn whoami(app: &App) -> Result<()> {
    match app.auth.restore().await? {
        Some(user) => {
            println!("{} ({})", user.username.bold(), user.email);
            if user.is_admin() {
                println!("{}", "administrator".yellow());
            }
        }
        None => println!("not logged in"),
    }
    Ok(())
}
