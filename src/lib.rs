//! Cascade Engine - Decision Analysis and Consequence Cascade Engine
//!
//! Projects the consequences of each option of a staff decision, scores
//! them across six impact dimensions against readiness baselines, and
//! recommends an option that breaches no critical threshold.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
