//! In-memory payroll registry.
//!
//! This crate models salaried and hourly employees, computes their pay, and
//! keeps them in an insertion-ordered registry that can be listed and pruned
//! by id. An HTTP adapter exposes the registry to clients.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod registry;
