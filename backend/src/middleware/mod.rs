//! Actix middleware applied in front of the HTTP handlers.

pub mod trace;

pub use trace::Trace;
