#![forbid(unsafe_code)]
//! Query engine for the armory catalog.
//!
//! Applies filter predicates and pagination to listed entity slices.
//! Request parameters arrive loosely typed; the coercion policy in
//! [`params`] is deliberately lenient and never produces an error.

mod engine;
mod filter;
pub mod params;

pub use engine::{query_characters, query_weapons, Page};
pub use filter::{CharacterFilter, WeaponFilter};
pub use params::{parse_page_params, parse_page_params_with_defaults, PageParams};

pub const CRATE_NAME: &str = "armory-query";
