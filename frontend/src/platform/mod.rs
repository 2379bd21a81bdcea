//! Browser access for the page.
//!
//! Everything that touches `window` lives here so the rest of the frontend
//! works with the plain values from `shared::interaction`.

pub mod web;

pub use web::{WindowHost, current_year, now_seconds, query_param};
