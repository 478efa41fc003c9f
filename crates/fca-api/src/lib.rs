//! # FCA API
//!
//! Console pages, spreadsheet upload/download handlers, views and routing.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod upload;
pub mod views;

#[cfg(test)]
mod test_support;

pub use router::create_router;
pub use state::AppState;
