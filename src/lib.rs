pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod date_info;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod state;
pub mod tabs;
pub mod tasks;
pub mod ui;
pub mod view;

pub use api::ApiClient;
pub use app::router;
pub use config::ClientConfig;
pub use controller::{Controller, Poller, SubmitForm};
pub use state::AppState;
