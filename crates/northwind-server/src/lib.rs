//! # Northwind Server Library
//!
//! Application wiring, logging setup and startup utilities for the
//! Northwind API server.

pub mod app;
pub mod startup;
pub mod telemetry;
