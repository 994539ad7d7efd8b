//! Shared statistics domain model for the dashboard, server, and CLI.
//!
//! This crate owns everything that is not transport or markup: the metric
//! metadata table, the query-builder state machine, the normalized response
//! model every backend call is folded into, the backend URL resolver, and the
//! planning/shaping of fixed queries. It performs no I/O, so the browser
//! client (`gloo-net`) and the CLI (`reqwest`) share identical semantics.

pub mod endpoint;
pub mod error;
pub mod format;
pub mod leaderboard;
pub mod metrics;
pub mod plan;
pub mod player;
pub mod query;
pub mod quick;
pub mod response;
pub mod shape;
pub mod table;

pub use error::{CallFailure, QueryError};
pub use plan::{FixedQuery, plan_query};
pub use player::Player;
pub use query::{Category, QueryAction, QueryPatch, QueryState, reduce};
pub use response::StatsResponse;
