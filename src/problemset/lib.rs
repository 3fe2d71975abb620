pub mod api;
pub mod catalog;
pub mod client;
pub(crate) mod config;
pub mod division;
pub mod error;
pub mod export;
pub mod search;
pub mod settings;
pub mod solved;
pub mod types;
pub mod unsolved;
