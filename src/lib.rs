//! Life Decision - Two-option decision support
//!
//! This crate implements a boundary-first decision wizard: the user sets hard
//! limits, describes two options, and each option is filtered against the
//! limits before the survivors are ranked by weighted criteria.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
