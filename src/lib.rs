//! Monthly Employee-of-the-Month Scoring Engine
//!
//! This crate aggregates attendance, overtime and leave records over a
//! calendar month, normalizes them against population maxima, applies
//! configurable weights and persists an idempotent per-month winner record.

#![warn(missing_docs)]

pub mod clocking;
pub mod costs;
pub mod error;
pub mod models;
pub mod scoring;
pub mod store;
