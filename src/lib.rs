//! Payroll tool service for Turkish payroll.
//!
//! This crate drives an external payroll calculation engine month by month,
//! carrying cumulative income tax and SSI bases between months, and exposes
//! payroll calculation, budget simulation and scenario comparison as tools
//! for an agent.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod tools;
