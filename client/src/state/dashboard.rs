//! Dashboard mode and result slots.
//!
//! DESIGN
//! ======
//! Quick and custom results live in single overwrite slots, separate from
//! the chat history. Clearing a slot or switching modes discards the stored
//! envelope only; the query builder's own state is never touched here, so a
//! cleared custom result can be re-run from the same selections.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use stats::plan::FixedQuery;
use stats::StatsResponse;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardMode {
    #[default]
    Chat,
    Quick,
    Custom,
}

impl DashboardMode {
    pub const ALL: [Self; 3] = [Self::Chat, Self::Quick, Self::Custom];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "チャット",
            Self::Quick => "クイック質問",
            Self::Custom => "カスタムクエリ",
        }
    }
}

/// A rendered result plus the fixed query that produced it, when any.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSlot {
    pub query: Option<FixedQuery>,
    pub response: StatsResponse,
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub mode: DashboardMode,
    pub quick_result: Option<ResultSlot>,
    pub custom_result: Option<ResultSlot>,
    /// A quick or custom request is in flight.
    pub loading: bool,
}

impl DashboardState {
    /// Change mode, discarding both result slots. Re-selecting the current
    /// mode keeps them.
    pub fn switch_mode(&mut self, mode: DashboardMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.quick_result = None;
        self.custom_result = None;
    }

    pub fn set_quick_result(&mut self, query: Option<FixedQuery>, response: StatsResponse) {
        self.quick_result = Some(ResultSlot { query, response });
        self.loading = false;
    }

    pub fn set_custom_result(&mut self, query: Option<FixedQuery>, response: StatsResponse) {
        self.custom_result = Some(ResultSlot { query, response });
        self.loading = false;
    }

    /// Store a finished request's result in `origin`'s slot. Results that
    /// arrive after the user left that mode are dropped.
    pub fn deliver(&mut self, origin: DashboardMode, query: Option<FixedQuery>, response: StatsResponse) {
        self.loading = false;
        if self.mode != origin {
            return;
        }
        match origin {
            DashboardMode::Quick => self.set_quick_result(query, response),
            DashboardMode::Custom => self.set_custom_result(query, response),
            DashboardMode::Chat => {}
        }
    }

    pub fn clear_quick_result(&mut self) {
        self.quick_result = None;
    }

    pub fn clear_custom_result(&mut self) {
        self.custom_result = None;
    }
}
