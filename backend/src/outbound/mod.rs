//! Outbound adapters implementing domain ports for infrastructure.
//!
//! This module follows the hexagonal architecture pattern: adapters are thin
//! translators between domain types and whatever actually stores them, and
//! contain no business logic.
//!
//! - **memory**: process-local repositories backed by locked hash maps.
//!   State lives and dies with the server process; a database-backed module
//!   would slot in beside this one behind the same ports.

pub mod memory;
