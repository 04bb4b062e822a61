use anyhow::Result;
use colored::Colorize;
use spacepal_application::LoadPhase;

use crate::app::App;

pub async fn run(app: &App, categories: &[String], pages: u32, sort: Option<&str>) -> Result<()> {
    let loader = app.catalogue();
    loader.load_filters().await?;
    for label in categories {
        loader.toggle_category(label).await;
    }

    for _ in 0..pages {
        if !loader.load_next_page().await? {
            break;
        }
    }

    match sort {
        None => {}
        Some("asc") => {
            loader.cycle_sort().await;
        }
        Some("desc") => {
            loader.cycle_sort().await;
            loader.cycle_sort().await;
        }
        Some(other) => anyhow::bail!("unknown sort order {other:?}, expected asc or desc"),
    }

    if let Some((space, style)) = loader.filter_names().await {
        let active = loader.categories().await;
        if active.is_empty() {
            println!("{}", format!("{space} / {style}").bold());
        } else {
            println!(
                "{} [{}]",
                format!("{space} / {style}").bold(),
                active.join(", ")
            );
        }
    }

    let products = loader.products().await;
    if products.is_empty() {
        println!("no recommendations for this selection");
        return Ok(());
    }

    for product in &products {
        println!(
            "  {:<10} {:<40} {:>8.2} {:>4.1}  {}",
            product.id,
            truncate(&product.name, 40),
            product.price,
            product.rating,
            product.category.dimmed(),
        );
    }

    println!("{} products", products.len());
    if loader.phase().await == LoadPhase::Exhausted {
        println!("{}", "end of feed".dimmed());
    } else {
        println!("{}", "more available, raise --pages".dimmed());
    }
    Ok(())
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let head: String = name.chars().take(max - 3).collect();
        format!("{head}...")
    }
}
