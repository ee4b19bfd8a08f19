//! Marine condition simulation and route estimation for small fishing boats
//!
//! The core operations are pure functions over their inputs, a random
//! source supplied by the caller, and fixed reference tables:
//!
//! - [`conditions::compute_conditions`]
//! - [`spots::generate_spots`]
//! - [`boundary::is_international_waters`]
//! - [`route::calculate_route`]
//!
//! [`service::Engine`] wraps them with request validation and JSON
//! handling.

pub mod boundary;
pub mod conditions;
pub mod config;
pub mod errors;
pub mod geo;
pub mod harbors;
pub mod models;
pub mod route;
pub mod service;
pub mod spots;
