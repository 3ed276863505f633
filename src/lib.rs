//! Survey Form - schema-driven survey engine
//!
//! This crate implements a survey form whose fields, validation rules and
//! visible sections depend on the chosen survey topic, with extra questions
//! loaded from a remote service whenever the topic changes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
