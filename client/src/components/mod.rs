//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Input components (chat, quick questions, query builder) collect a request;
//! result components render a `StatsResponse` envelope. Shared state comes
//! from Leptos context providers installed by `App`.

pub mod chat_panel;
pub mod kpi_cards;
pub mod leaderboard;
pub mod query_builder;
pub mod quick_questions;
pub mod result_chart;
pub mod result_table;
pub mod result_view;
pub mod steps;
