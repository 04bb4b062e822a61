use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod app;
mod commands;

use app::App;

#[derive(Parser)]
#[command(name = "spacepal")]
#[command(about = "SpacePal - furniture and decor recommendations from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session
    Login { username: String, password: String },
    /// Drop the persisted credentials (the space/style choice stays)
    Logout,
    /// Create an account
    Register {
        username: String,
        email: String,
        password: String,
    },
    /// Show who is currently logged in
    Whoami,
    /// Choose the space and style the feed is built from
    Select {
        #[command(subcommand)]
        action: SelectAction,
    },
    /// Browse the recommended catalogue
    Browse {
        /// Category filter; repeat the flag to combine several
        #[arg(long = "category")]
        categories: Vec<String>,
        /// How many pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Price sort: asc or desc (default keeps arrival order)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Product detail and reviews
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// The logged-in user's cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// View and edit the account profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Back-office CRUD (admin account only)
    Admin {
        /// One of: users, spaces, products, styles, user_history
        resource: String,
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum SelectAction {
    /// List the available spaces
    Spaces,
    /// List the available styles
    Styles,
    /// Set the space by id
    Space { space_id: String },
    /// Set the style by id
    Style { style_id: String },
    /// Show the current selection
    Show,
}

#[derive(Subcommand)]
enum ProductAction {
    /// Show a product with its reviews and related items
    Show { product_id: String },
    /// Submit a review (rating 1.0 to 5.0, half-star steps)
    Review {
        product_id: String,
        rating: f64,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Delete one of your reviews
    DeleteReview { product_id: String, review_id: String },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with resolved product details
    Show,
    /// Add one unit of a product
    Add { product_id: String },
    /// Set the quantity of a line (0 removes it)
    Set { product_id: String, quantity: u32 },
    /// Remove a line
    Remove { product_id: String },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Show the current profile
    Show,
    /// Change the username
    SetUsername { username: String },
    /// Change the password
    SetPassword { password: String },
}

#[derive(Subcommand)]
enum AdminAction {
    /// List every record in the collection
    List,
    /// Create a record from a JSON object
    Create { json: String },
    /// Update a record from a JSON object
    Update { id: String, json: String },
    /// Delete a record
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app = App::init()?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&app, &username, &password).await?
        }
        Commands::Logout => commands::auth::logout(&app).await?,
        Commands::Register {
            username,
            email,
            password,
        } => commands::auth::register(&app, username, email, password).await?,
        Commands::Whoami => commands::auth::whoami(&app).await?,
        Commands::Select { action } => match action {
            SelectAction::Spaces => commands::select::spaces(&app).await?,
            SelectAction::Styles => commands::select::styles(&app).await?,
            SelectAction::Space { space_id } => commands::select::set_space(&app, space_id).await?,
            SelectAction::Style { style_id } => commands::select::set_style(&app, style_id).await?,
            SelectAction::Show => commands::select::show(&app).await?,
        },
        Commands::Browse {
            categories,
            pages,
            sort,
        } => commands::browse::run(&app, &categories, pages, sort.as_deref()).await?,
        Commands::Product { action } => match action {
            ProductAction::Show { product_id } => commands::product::show(&app, &product_id).await?,
            ProductAction::Review {
                product_id,
                rating,
                comment,
            } => commands::product::review(&app, &product_id, rating, comment).await?,
            ProductAction::DeleteReview {
                product_id,
                review_id,
            } => commands::product::delete_review(&app, &product_id, &review_id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&app).await?,
            CartAction::Add { product_id } => commands::cart::add(&app, &product_id).await?,
            CartAction::Set {
                product_id,
                quantity,
            } => commands::cart::set_quantity(&app, &product_id, quantity).await?,
            CartAction::Remove { product_id } => commands::cart::remove(&app, &product_id).await?,
            CartAction::Clear => commands::cart::clear(&app).await?,
        },
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&app).await?,
            ProfileAction::SetUsername { username } => {
                commands::profile::set_username(&app, &username).await?
            }
            ProfileAction::SetPassword { password } => {
                commands::profile::set_password(&app, &password).await?
            }
        },
        Commands::Admin { resource, action } => match action {
            AdminAction::List => commands::admin::list(&app, &resource).await?,
            AdminAction::Create { json } => commands::admin::create(&app, &resource, &json).await?,
            AdminAction::Update { id, json } => {
                commands::admin::update(&app, &resource, &id, &json).await?
            }
            AdminAction::Delete { id } => commands::admin::delete(&app, &resource, &id).await?,
        },
    }

    Ok(())
}
