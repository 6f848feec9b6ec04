//! Karate Admin - headless core of a karate tournament dashboard
//!
//! Keeps a local cache of tournament events, tracks which round is live for
//! each division, and reconciles category summaries with the tournament API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
