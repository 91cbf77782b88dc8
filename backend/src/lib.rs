//! Board backend library.
//!
//! Users author posts and posts receive comments. This crate holds the
//! domain model, the repository ports it depends on, and one use case per
//! operation. Transport adapters (REST, graph queries) and persistence
//! engines live outside and talk to this crate through the use cases and
//! the repository traits.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod telemetry;

pub use config::BoardSettings;
