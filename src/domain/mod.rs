//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, state machine, errors)
//! - `survey` - Field schema, validation engine and visibility rules
//! - `form` - Survey form aggregate, lifecycle and submission payload

pub mod form;
pub mod foundation;
pub mod survey;
