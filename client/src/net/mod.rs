//! Networking modules for the access gate and the statistics backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `config` resolves the backend base URL, `api` performs the HTTP calls and
//! folds every outcome into a `StatsResponse` envelope.

pub mod api;
pub mod config;
