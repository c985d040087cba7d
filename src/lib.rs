//! Library Management administration client
//!
//! A Rust front-end for the library management REST JSON API: staff sign
//! in, then manage members, the book catalog and loans from the terminal.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod repository;
pub mod services;
pub mod views;

pub use app::{App, Outcome};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
