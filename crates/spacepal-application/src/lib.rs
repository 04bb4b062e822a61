//! Application services for the SpacePal client.
//!
//! Each service orchestrates one screen's worth of behaviour over the
//! gateway traits and the persisted session, holding whatever in-memory
//! state that screen needs.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalogue;
pub mod history;
pub mod product;
pub mod profile;

pub use admin::AdminService;
pub use auth::AuthService;
pub use cart::{AddOutcome, CartService};
pub use catalogue::{CatalogueLoader, LoadPhase, SortOrder};
pub use history::HistoryRecorder;
pub use product::{ProductDetail, ProductService};
pub use profile::ProfileService;
