//! Domain models, gateway traits, and errors for the SpacePal client.
//!
//! This crate holds everything the rest of the workspace agrees on:
//! catalogue and account models, the session/selection stores, the
//! backend gateway traits, and the shared error type. It performs no IO
//! of its own.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod review;
pub mod session;
pub mod user;

pub use error::{Result, SpacePalError};
