//! egui Native Desktop App
//!
//! A desktop front end over the `client` module: post list with search and
//! pagination, post detail with comments, a post form with image upload,
//! and login/registration.
//!
//! Requests run on a private tokio runtime and block the frame that issued
//! them.

pub mod state;
pub mod theme;
pub mod views;

pub use state::{AppState, AppView};
