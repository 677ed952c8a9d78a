//! Domain model types for tour planning.

mod route;

pub use route::Route;
