//! One component per query-builder decision.
//!
//! Each step reads the shared builder signal and reports selections through
//! `query_builder::dispatch`; none of them hold query state of their own.

mod category;
mod custom_situation;
mod league;
mod metric;
mod player_search;
mod preview;
mod season;
mod split_type;

pub use category::CategoryStep;
pub use custom_situation::CustomSituationStep;
pub use league::LeagueStep;
pub use metric::{MetricStep, SortMetricStep};
pub use player_search::PlayerSearchStep;
pub use preview::PreviewStep;
pub use season::SeasonStep;
pub use split_type::SplitTypeStep;
