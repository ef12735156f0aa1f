//! # Domain Models
//!
//! This crate contains pure option types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no registry logic, no I/O, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod features;
pub mod options;
pub mod value;
