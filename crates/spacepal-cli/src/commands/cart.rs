use anyhow::Result;
use colored::Colorize;
use spacepal_application::cart::total_price;
use spacepal_application::AddOutcome;

use crate::app::App;

pub async fn show(app: &App) -> Result<()> {
    let entries = app.cart.detailed_cart().await?;
    if entries.is_empty() {
        println!("the cart is empty");
        return Ok(());
    }

    for entry in &entries {
        match &entry.product {
            Some(product) => println!(
                "  {:<10} {:<40} x{:<3} {:>8.2}",
                entry.product_id,
                product.name,
                entry.quantity,
                entry.line_total(),
            ),
            None => println!(
                "  {:<10} {:<40} x{:<3} {:>8}",
                entry.product_id,
                "(unavailable)".dimmed(),
                entry.quantity,
                "-",
            ),
        }
    }
    println!("total {:.2}", total_price(&entries));
    Ok(())
}

pub async fn add(app: &App, product_id: &str) -> Result<()> {
    match app.cart.add_to_cart(product_id).await {
        AddOutcome::Added => {
            app.history.record_add_to_cart(product_id).await;
            println!("{}", format!("{product_id} added to the cart").green());
            Ok(())
        }
        AddOutcome::NotAuthenticated => anyhow::bail!("log in before adding to the cart"),
        AddOutcome::Failed => anyhow::bail!("could not add {product_id} to the cart"),
    }
}

pub async fn set_quantity(app: &App, product_id: &str, quantity: u32) -> Result<()> {
    app.cart.set_quantity(product_id, quantity).await?;
    if quantity == 0 {
        println!("{product_id} removed");
    } else {
        println!("{product_id} set to x{quantity}");
    }
    Ok(())
}

pub async fn remove(app: &App, product_id: &str) -> Result<()> {
    app.cart.remove(product_id).await?;
    println!("{product_id} removed");
    Ok(())
}

pub async fn clear(app: &App) -> Result<()> {
    app.cart.clear().await?;
    println!("cart cleared");
    Ok(())
}
