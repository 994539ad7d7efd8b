//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `chat`, `dashboard`) so components can
//! depend on small focused models. Each model is a plain value held in an
//! `RwSignal` provided through context.

pub mod auth;
pub mod chat;
pub mod dashboard;
