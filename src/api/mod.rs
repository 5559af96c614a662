//! HTTP API handlers for journal

pub mod entries;
pub mod health;
pub mod ui;

pub use entries::{create_entry, delete_entry, get_entry, list_entries, update_entry};
pub use health::health_routes;
pub use ui::{serve_app_js, serve_index};
