//! Query-builder state machine.
//!
//! ARCHITECTURE
//! ============
//! `QueryState` is an immutable value advanced by [`reduce`]. The step layout
//! is derived from the category (and split type), and every step has a pure
//! completion predicate. UI components only dispatch `QueryAction`s, which
//! keeps the wizard testable without a browser.
//!
//! Layouts (1-based steps):
//! - plain:       Category, Player, Season, Metrics, Preview
//! - leaderboard: Category, League, Season, SortMetric, Preview
//! - splits:      Category, Player, SplitType, Season, Metrics, Preview
//! - custom:      Category, Player, SplitType, CustomSituation, Season, Metrics, Preview

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::metrics;
use crate::player::Player;

/// Season preselected by the season picker.
pub const DEFAULT_SEASON: u16 = 2025;
/// Earliest season offered by the season picker.
pub const FIRST_SEASON: u16 = 2015;

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// Analysis category chosen on the first step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SeasonBatting,
    SeasonPitching,
    BattingSplits,
    MonthlyTrends,
    CareerStats,
    BattingLeaderboard,
    PitchingLeaderboard,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::SeasonBatting,
        Self::SeasonPitching,
        Self::BattingSplits,
        Self::MonthlyTrends,
        Self::CareerStats,
        Self::BattingLeaderboard,
        Self::PitchingLeaderboard,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::SeasonBatting => "season_batting",
            Self::SeasonPitching => "season_pitching",
            Self::BattingSplits => "batting_splits",
            Self::MonthlyTrends => "monthly_trends",
            Self::CareerStats => "career_stats",
            Self::BattingLeaderboard => "batting_leaderboard",
            Self::PitchingLeaderboard => "pitching_leaderboard",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SeasonBatting => "シーズン打撃成績",
            Self::SeasonPitching => "シーズン投手成績",
            Self::BattingSplits => "打撃スプリット",
            Self::MonthlyTrends => "月別推移",
            Self::CareerStats => "通算成績",
            Self::BattingLeaderboard => "打撃リーダーボード",
            Self::PitchingLeaderboard => "投手リーダーボード",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::SeasonBatting => "選手のシーズン打撃指標をカードで表示",
            Self::SeasonPitching => "投手のシーズン成績をカードで表示",
            Self::BattingSplits => "得点圏・満塁・カスタム状況での打撃成績",
            Self::MonthlyTrends => "指標の月ごとの推移をグラフで表示",
            Self::CareerStats => "シーズンごとの通算打撃成績を表で表示",
            Self::BattingLeaderboard => "リーグ全体の打者ランキング",
            Self::PitchingLeaderboard => "リーグ全体の投手ランキング",
        }
    }

    #[must_use]
    pub fn is_leaderboard(self) -> bool {
        matches!(self, Self::BattingLeaderboard | Self::PitchingLeaderboard)
    }

    /// Categories whose metric picker allows exactly one metric.
    #[must_use]
    pub fn single_metric(self) -> bool {
        matches!(self, Self::MonthlyTrends)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonMode {
    All,
    #[default]
    Specific,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum League {
    #[default]
    #[serde(rename = "MLB")]
    Mlb,
    #[serde(rename = "AL")]
    Al,
    #[serde(rename = "NL")]
    Nl,
}

impl League {
    pub const ALL: [Self; 3] = [Self::Mlb, Self::Al, Self::Nl];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Mlb => "MLB",
            Self::Al => "AL",
            Self::Nl => "NL",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Mlb => "MLB全体",
            Self::Al => "ア・リーグ",
            Self::Nl => "ナ・リーグ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    Risp,
    BasesLoaded,
    Custom,
}

impl SplitType {
    pub const ALL: [Self; 3] = [Self::Risp, Self::BasesLoaded, Self::Custom];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Risp => "risp",
            Self::BasesLoaded => "bases_loaded",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Risp => "得点圏（RISP）",
            Self::BasesLoaded => "満塁",
            Self::Custom => "カスタム状況",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PitcherType {
    #[serde(rename = "RHP")]
    Rhp,
    #[serde(rename = "LHP")]
    Lhp,
}

impl PitcherType {
    pub const ALL: [Self; 2] = [Self::Rhp, Self::Lhp];

    /// Value of the `pitcher_throws` query parameter.
    #[must_use]
    pub fn throws(self) -> &'static str {
        match self {
            Self::Rhp => "R",
            Self::Lhp => "L",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rhp => "右投手",
            Self::Lhp => "左投手",
        }
    }
}

/// Base occupancy before the pitch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RunnerState {
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "1b")]
    First,
    #[serde(rename = "2b")]
    Second,
    #[serde(rename = "3b")]
    Third,
    #[serde(rename = "1b_2b")]
    FirstSecond,
    #[serde(rename = "1b_3b")]
    FirstThird,
    #[serde(rename = "2b_3b")]
    SecondThird,
    #[serde(rename = "loaded")]
    Loaded,
}

impl RunnerState {
    pub const ALL: [Self; 8] = [
        Self::Empty,
        Self::First,
        Self::Second,
        Self::Third,
        Self::FirstSecond,
        Self::FirstThird,
        Self::SecondThird,
        Self::Loaded,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::First => "1b",
            Self::Second => "2b",
            Self::Third => "3b",
            Self::FirstSecond => "1b_2b",
            Self::FirstThird => "1b_3b",
            Self::SecondThird => "2b_3b",
            Self::Loaded => "loaded",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Empty => "走者なし",
            Self::First => "一塁",
            Self::Second => "二塁",
            Self::Third => "三塁",
            Self::FirstSecond => "一・二塁",
            Self::FirstThird => "一・三塁",
            Self::SecondThird => "二・三塁",
            Self::Loaded => "満塁",
        }
    }
}

/// Statcast pitch-type codes offered by the custom-situation picker.
pub const PITCH_TYPES: [(&str, &str); 9] = [
    ("FF", "フォーシーム"),
    ("SI", "シンカー"),
    ("FC", "カッター"),
    ("SL", "スライダー"),
    ("ST", "スイーパー"),
    ("CU", "カーブ"),
    ("KC", "ナックルカーブ"),
    ("CH", "チェンジアップ"),
    ("FS", "スプリット"),
];

// =============================================================================
// CUSTOM SITUATION
// =============================================================================

/// Compound filter for the custom batting split.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSituation {
    pub innings: BTreeSet<u8>,
    pub strikes: Option<u8>,
    pub balls: Option<u8>,
    pub pitcher_type: Option<PitcherType>,
    pub runners_on_base: BTreeSet<RunnerState>,
    pub pitch_types: BTreeSet<String>,
}

impl CustomSituation {
    /// True when no condition is set at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.innings.is_empty()
            && self.strikes.is_none()
            && self.balls.is_none()
            && self.pitcher_type.is_none()
            && self.runners_on_base.is_empty()
            && self.pitch_types.is_empty()
    }

    /// Toggle an inning (1-9); out-of-range values are ignored.
    pub fn toggle_inning(&mut self, inning: u8) {
        if !(1..=9).contains(&inning) {
            return;
        }
        if !self.innings.remove(&inning) {
            self.innings.insert(inning);
        }
    }

    /// Set the strike count (0-2); out-of-range values clear it.
    pub fn set_strikes(&mut self, strikes: Option<u8>) {
        self.strikes = strikes.filter(|s| *s <= 2);
    }

    /// Set the ball count (0-3); out-of-range values clear it.
    pub fn set_balls(&mut self, balls: Option<u8>) {
        self.balls = balls.filter(|b| *b <= 3);
    }

    pub fn toggle_runner(&mut self, runner: RunnerState) {
        if !self.runners_on_base.remove(&runner) {
            self.runners_on_base.insert(runner);
        }
    }

    pub fn toggle_pitch_type(&mut self, code: &str) {
        if !self.pitch_types.remove(code) {
            self.pitch_types.insert(code.to_owned());
        }
    }

    /// Human-readable condition list for the preview step.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if !self.innings.is_empty() {
            let list: Vec<String> = self.innings.iter().map(u8::to_string).collect();
            parts.push(format!("{}回", list.join("・")));
        }
        match (self.balls, self.strikes) {
            (Some(b), Some(s)) => parts.push(format!("カウント {b}-{s}")),
            (Some(b), None) => parts.push(format!("{b}ボール")),
            (None, Some(s)) => parts.push(format!("{s}ストライク")),
            (None, None) => {}
        }
        if let Some(pitcher) = self.pitcher_type {
            parts.push(format!("対{}", pitcher.label()));
        }
        if !self.runners_on_base.is_empty() {
            let list: Vec<&str> = self.runners_on_base.iter().map(|r| r.label()).collect();
            parts.push(list.join("・"));
        }
        if !self.pitch_types.is_empty() {
            let list: Vec<&str> = self.pitch_types.iter().map(String::as_str).collect();
            parts.push(format!("球種 {}", list.join("/")));
        }
        parts
    }
}

// =============================================================================
// STEPS
// =============================================================================

/// Decision presented on one wizard step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Category,
    Player,
    League,
    SplitType,
    CustomSituation,
    Season,
    Metrics,
    SortMetric,
    Preview,
}

impl StepKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Category => "カテゴリを選択",
            Self::Player => "選手を検索",
            Self::League => "リーグを選択",
            Self::SplitType => "スプリットを選択",
            Self::CustomSituation => "状況を指定",
            Self::Season => "シーズンを選択",
            Self::Metrics => "指標を選択",
            Self::SortMetric => "並び順の指標を選択",
            Self::Preview => "確認して実行",
        }
    }
}

const PLAIN_LAYOUT: &[StepKind] =
    &[StepKind::Category, StepKind::Player, StepKind::Season, StepKind::Metrics, StepKind::Preview];
const LEADERBOARD_LAYOUT: &[StepKind] =
    &[StepKind::Category, StepKind::League, StepKind::Season, StepKind::SortMetric, StepKind::Preview];
const SPLITS_LAYOUT: &[StepKind] = &[
    StepKind::Category,
    StepKind::Player,
    StepKind::SplitType,
    StepKind::Season,
    StepKind::Metrics,
    StepKind::Preview,
];
const CUSTOM_SPLITS_LAYOUT: &[StepKind] = &[
    StepKind::Category,
    StepKind::Player,
    StepKind::SplitType,
    StepKind::CustomSituation,
    StepKind::Season,
    StepKind::Metrics,
    StepKind::Preview,
];

// =============================================================================
// STATE
// =============================================================================

/// Cumulative wizard state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    pub category: Option<Category>,
    pub player: Option<Player>,
    pub season_mode: SeasonMode,
    pub specific_year: u16,
    pub metrics: Vec<String>,
    pub league: League,
    pub metric_order: Option<String>,
    pub split_type: Option<SplitType>,
    pub custom_situation: CustomSituation,
    pub step: u8,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            category: None,
            player: None,
            season_mode: SeasonMode::Specific,
            specific_year: DEFAULT_SEASON,
            metrics: Vec::new(),
            league: League::Mlb,
            metric_order: None,
            split_type: None,
            custom_situation: CustomSituation::default(),
            step: 1,
        }
    }
}

impl QueryState {
    /// Ordered steps for the current category and split type.
    ///
    /// A state without a category uses the plain five-step layout.
    #[must_use]
    pub fn layout(&self) -> &'static [StepKind] {
        match self.category {
            Some(c) if c.is_leaderboard() => LEADERBOARD_LAYOUT,
            Some(Category::BattingSplits) if self.split_type == Some(SplitType::Custom) => CUSTOM_SPLITS_LAYOUT,
            Some(Category::BattingSplits) => SPLITS_LAYOUT,
            _ => PLAIN_LAYOUT,
        }
    }

    #[must_use]
    pub fn step_count(&self) -> u8 {
        u8::try_from(self.layout().len()).unwrap_or(u8::MAX)
    }

    /// Kind of step `n` (1-based), or `None` when out of range.
    #[must_use]
    pub fn step_kind(&self, n: u8) -> Option<StepKind> {
        let index = usize::from(n).checked_sub(1)?;
        self.layout().get(index).copied()
    }

    /// Kind of the step under the cursor.
    #[must_use]
    pub fn current_step(&self) -> StepKind {
        self.step_kind(self.step).unwrap_or(StepKind::Category)
    }

    fn is_leaderboard(&self) -> bool {
        self.category.is_some_and(Category::is_leaderboard)
    }

    fn kind_complete(&self, kind: StepKind) -> bool {
        match kind {
            StepKind::Category => self.category.is_some(),
            StepKind::Player => self.is_leaderboard() || self.player.is_some(),
            StepKind::League | StepKind::Season => true,
            StepKind::SplitType => self.split_type.is_some(),
            StepKind::CustomSituation => !self.custom_situation.is_empty(),
            StepKind::Metrics if self.is_leaderboard() => self.metric_order.is_some(),
            StepKind::Metrics => !self.metrics.is_empty(),
            StepKind::SortMetric => self.metric_order.is_some(),
            StepKind::Preview => self
                .layout()
                .iter()
                .filter(|k| **k != StepKind::Preview)
                .all(|k| self.kind_complete(*k)),
        }
    }

    /// Whether step `n` (1-based) is complete. Pure and idempotent.
    ///
    /// For leaderboard categories step 2 is the league picker, which always
    /// holds a default, so it is unconditionally complete.
    #[must_use]
    pub fn is_step_complete(&self, n: u8) -> bool {
        self.step_kind(n).is_some_and(|kind| self.kind_complete(kind))
    }

    /// The cursor may move forward.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.step < self.step_count() && self.is_step_complete(self.step)
    }

    /// Every step before the preview is complete.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.kind_complete(StepKind::Preview)
    }

    /// Season filter: `None` means all seasons.
    #[must_use]
    pub fn season(&self) -> Option<u16> {
        match self.season_mode {
            SeasonMode::All => None,
            SeasonMode::Specific => Some(self.specific_year),
        }
    }

    /// Label/value pairs summarizing the query on the preview step.
    #[must_use]
    pub fn preview_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();
        rows.push(("カテゴリ", self.category.map_or_else(|| "-".to_owned(), |c| c.label().to_owned())));
        if self.is_leaderboard() {
            rows.push(("リーグ", self.league.label().to_owned()));
        } else {
            rows.push(("選手", self.player.as_ref().map_or_else(|| "-".to_owned(), Player::display)));
        }
        if let Some(split) = self.split_type {
            rows.push(("スプリット", split.label().to_owned()));
            if split == SplitType::Custom {
                rows.push(("状況", self.custom_situation.describe().join(" / ")));
            }
        }
        rows.push((
            "シーズン",
            self.season().map_or_else(|| "全シーズン".to_owned(), |y| format!("{y}年")),
        ));
        if self.is_leaderboard() {
            rows.push((
                "並び順",
                self.metric_order
                    .as_deref()
                    .map_or_else(|| "-".to_owned(), |m| metrics::label(m).to_owned()),
            ));
        } else {
            let labels: Vec<&str> = self.metrics.iter().map(|m| metrics::label(m)).collect();
            rows.push(("指標", labels.join("、")));
        }
        rows
    }

    /// Reset dependents when a new category is chosen.
    fn prime_category(&mut self, category: Category) {
        self.category = Some(category);
        self.metrics.clear();
        self.metric_order = None;
        self.split_type = None;
        self.custom_situation = CustomSituation::default();
        self.league = League::Mlb;
        if category.is_leaderboard() {
            self.player = None;
        }
    }

    fn clamp_step(&mut self) {
        self.step = self.step.clamp(1, self.step_count());
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Partial update shallow-merged into the state. `None` leaves a field alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryPatch {
    pub category: Option<Category>,
    pub player: Option<Option<Player>>,
    pub season_mode: Option<SeasonMode>,
    pub specific_year: Option<u16>,
    pub metrics: Option<Vec<String>>,
    pub league: Option<League>,
    pub metric_order: Option<Option<String>>,
    pub split_type: Option<Option<SplitType>>,
    pub custom_situation: Option<CustomSituation>,
}

impl QueryPatch {
    #[must_use]
    pub fn category(category: Category) -> Self {
        Self { category: Some(category), ..Self::default() }
    }

    #[must_use]
    pub fn player(player: Option<Player>) -> Self {
        Self { player: Some(player), ..Self::default() }
    }

    #[must_use]
    pub fn season(mode: SeasonMode, year: u16) -> Self {
        Self { season_mode: Some(mode), specific_year: Some(year), ..Self::default() }
    }

    #[must_use]
    pub fn league(league: League) -> Self {
        Self { league: Some(league), ..Self::default() }
    }

    #[must_use]
    pub fn metric_order(metric: Option<String>) -> Self {
        Self { metric_order: Some(metric), ..Self::default() }
    }

    #[must_use]
    pub fn split_type(split: SplitType) -> Self {
        Self { split_type: Some(Some(split)), ..Self::default() }
    }

    #[must_use]
    pub fn situation(situation: CustomSituation) -> Self {
        Self { custom_situation: Some(situation), ..Self::default() }
    }
}

/// Transition applied by [`reduce`].
#[derive(Clone, Debug, PartialEq)]
pub enum QueryAction {
    /// Shallow-merge a partial update.
    Update(QueryPatch),
    /// Move forward when the current step is complete.
    Advance,
    /// Move back one step (never below 1).
    Back,
    /// Jump to a step: backward always, forward only over completed steps.
    JumpTo(u8),
    /// Add or remove a metric; single-metric categories replace instead.
    ToggleMetric(String),
    /// Return to the initial state.
    Reset,
}

/// Apply one action, returning the next state.
#[must_use]
pub fn reduce(mut state: QueryState, action: QueryAction) -> QueryState {
    match action {
        QueryAction::Update(patch) => apply_patch(&mut state, patch),
        QueryAction::Advance => {
            if state.can_advance() {
                state.step += 1;
            }
        }
        QueryAction::Back => {
            state.step = state.step.saturating_sub(1).max(1);
        }
        QueryAction::JumpTo(target) => {
            let target = target.clamp(1, state.step_count());
            if target <= state.step || (1..target).all(|n| state.is_step_complete(n)) {
                state.step = target;
            }
        }
        QueryAction::ToggleMetric(metric) => toggle_metric(&mut state, metric),
        QueryAction::Reset => state = QueryState::default(),
    }
    state
}

fn apply_patch(state: &mut QueryState, patch: QueryPatch) {
    if let Some(category) = patch.category {
        if state.category != Some(category) {
            state.prime_category(category);
        }
    }
    if let Some(player) = patch.player {
        state.player = player;
    }
    if let Some(mode) = patch.season_mode {
        state.season_mode = mode;
    }
    if let Some(year) = patch.specific_year {
        state.specific_year = year;
    }
    if let Some(metrics) = patch.metrics {
        state.metrics.clear();
        for metric in metrics {
            if !state.metrics.contains(&metric) {
                state.metrics.push(metric);
            }
        }
    }
    if let Some(league) = patch.league {
        state.league = league;
    }
    if let Some(order) = patch.metric_order {
        state.metric_order = order;
    }
    if let Some(split) = patch.split_type {
        if split != Some(SplitType::Custom) {
            state.custom_situation = CustomSituation::default();
        }
        state.split_type = split;
    }
    if let Some(situation) = patch.custom_situation {
        state.custom_situation = situation;
    }
    state.clamp_step();
}

fn toggle_metric(state: &mut QueryState, metric: String) {
    let single = state.category.is_some_and(Category::single_metric);
    if let Some(pos) = state.metrics.iter().position(|m| *m == metric) {
        state.metrics.remove(pos);
    } else if single {
        state.metrics = vec![metric];
    } else {
        state.metrics.push(metric);
    }
}
