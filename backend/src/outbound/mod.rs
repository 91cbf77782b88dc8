//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local repositories backing every repository port,
//!   used by integration tests and as the default persistence collaborator
//!   when no storage engine is wired in.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
