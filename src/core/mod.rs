//! Core building blocks: request validation, option assembly and path
//! resolution. These are consumed by the high-level `api` module.
pub mod options;
pub mod params;
pub mod request;
pub mod walker;
