//! Input handling for the patio command-line front-end.

pub mod input;

pub use input::{looks_like_email, SearchQuery};
