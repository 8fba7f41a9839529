//! Message filtering entry points.
//!
//! # Responsibility
//! - Evaluate a [`FilterSpec`] against a message snapshot, producing the
//!   newest-first list the chat screen renders.
//!
//! [`FilterSpec`]: crate::model::filter::FilterSpec

pub mod engine;
