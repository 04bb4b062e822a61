use anyhow::Result;
use colored::Colorize;
use spacepal_core::review::ReviewDraft;

use crate::app::App;

pub async fn show(app: &App, product_id: &str) -> Result<()> {
    app.history.record_click(product_id).await;
    let detail = app.products.load(product_id).await?;
    let product = &detail.product;

    println!("{}  ({})", product.name.bold(), product.id);
    println!(
        "price {:.2}  rating {:.1}  {}",
        product.price, product.rating, product.category
    );
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }
    if !product.purchase_link.is_empty() {
        println!("buy: {}", product.purchase_link.underline());
    }

    let reviews = product.reviews.as_deref().unwrap_or_default();
    if !reviews.is_empty() {
        println!("\n{}", "reviews".bold());
        for review in reviews {
            match &review.comment {
                Some(comment) => println!(
                    "  [{}] {:.1}/5 {}: {}",
                    review.id, review.rating, review.username, comment
                ),
                None => println!("  [{}] {:.1}/5 {}", review.id, review.rating, review.username),
            }
        }
    }

    if !detail.related.is_empty() {
        println!("\n{}", "related".bold());
        for related in &detail.related {
            println!(
                "  {:<10} {:<40} {:>8.2}",
                related.id, related.name, related.price
            );
        }
    }
    Ok(())
}

pub async fn review(app: &App, product_id: &str, rating: f64, comment: Option<String>) -> Result<()> {
    let mut detail = app.products.load(product_id).await?;
    app.products
        .submit_review(&mut detail, &ReviewDraft::new(rating, comment))
        .await?;
    println!("{}", "review submitted".green());
    Ok(())
}

pub async fn delete_review(app: &App, product_id: &str, review_id: &str) -> Result<()> {
    let mut detail = app.products.load(product_id).await?;
    app.products.delete_review(&mut detail, review_id).await?;
    println!("review {review_id} deleted");
    Ok(())
}
