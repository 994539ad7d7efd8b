//! Error taxonomy for backend calls and query planning.
//!
//! DESIGN
//! ======
//! Neither error type ever reaches the UI as an `Err`: `CallFailure` is folded
//! into a `StatsResponse` by the call wrappers, and `QueryError` is turned into
//! a category-specific message by the custom-query handler.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend HTTP call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallFailure {
    /// The client-side timeout elapsed before a response arrived.
    #[error("request timed out")]
    Timeout,
    /// Network or fetch-level failure.
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body claimed to be JSON but could not be parsed.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Reasons a builder state cannot be turned into a fixed query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("カテゴリが選択されていません")]
    MissingCategory,
    #[error("選手が選択されていません")]
    MissingPlayer,
    #[error("スプリット種別が選択されていません")]
    MissingSplitType,
    #[error("状況条件が指定されていません")]
    EmptySituation,
    #[error("指標が選択されていません")]
    NoMetrics,
    #[error("未対応の指標です: {metric}（{category}）")]
    UnsupportedMetric { category: &'static str, metric: String },
}
