//! Integration tests
//!
//! `session` runs offline. `api` needs a running library API, reached at
//! `LIBRARY_API_URL` (default `http://127.0.0.1:5000`).
//! Run with: cargo test --test integration -- --ignored

mod api;
mod session;
