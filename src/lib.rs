pub mod app;
pub mod cli;
pub mod error;
pub mod github;
pub mod types;
pub mod ui;
