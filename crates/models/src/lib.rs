use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keys the host application writes into the shared widget snapshot.
/// Every value is stored as a string regardless of its logical type.
pub mod keys {
    pub const TODAY_SPENT: &str = "todaySpent";
    pub const DAILY_LIMIT: &str = "dailyLimit";

    pub const WEEKLY_TOTAL: &str = "weeklyTotal";
    pub const WEEKLY_AVG: &str = "weeklyAvg";
    /// Per-day amounts for the weekly bar chart, in display order.
    pub const DAYS: [&str; 7] = ["day0", "day1", "day2", "day3", "day4", "day5", "day6"];
    /// Legacy total key written by older host builds instead of `weeklyTotal`.
    pub const WEEK_SPENT: &str = "weekSpent";
    pub const TOP_CATEGORY: &str = "topCategory";
    pub const CATEGORY_AMOUNT: &str = "categoryAmount";

    pub const PROJECTED_TOTAL: &str = "projectedTotal";
    /// Legacy projection key written by older host builds instead of `projectedTotal`.
    pub const PROJECTED_SPEND: &str = "projectedSpend";
    pub const MONTHLY_BUDGET: &str = "monthlyBudget";
    pub const MONTHLY_SPENT: &str = "monthlySpent";
    pub const AVG_DAILY_SPEND: &str = "avgDailySpend";
    pub const SAFE_TO_SPEND_DAILY: &str = "safeToSpendDaily";
    pub const FORECAST_STATUS: &str = "forecastStatus";

    pub const TOP_GOAL_NAME: &str = "topGoalName";
    pub const TOP_GOAL_CURRENT: &str = "topGoalCurrent";
    pub const TOP_GOAL_TARGET: &str = "topGoalTarget";
    pub const SAVINGS_GOAL_COUNT: &str = "savingsGoalCount";

    pub const TODAY_TX_COUNT: &str = "todayTxCount";

    pub const HABIT_NAME: &str = "habitName";
    pub const HABIT_STREAK: &str = "habitStreak";
    pub const HABIT_STATUS: &str = "habitStatus";

    pub const RECURRING_TITLE: &str = "recurringTitle";
    pub const RECURRING_AMOUNT: &str = "recurringAmount";
    pub const RECURRING_DAYS: &str = "recurringDays";
}

/// Opaque tap-action identifiers resolved by the host adapter.
pub mod actions {
    pub const OPEN_ADD_TRANSACTION: &str = "open_add_transaction";
    pub const OPEN_APP: &str = "open_app";
}

/// Flat string-keyed snapshot of precomputed financial facts, written by the
/// host application and read whole at the start of each render call.
/// A missing key is a valid state (first run, no data) and resolves to a
/// documented default downstream, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(HashMap<String, String>);

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Over/under classification kept separate from the clamped progress value so
/// overspend information is never lost to clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    Under,
    Over,
}

/// Day-offset classification for the next recurring bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DueStatus {
    Overdue { days: i64 },
    DueToday,
    Upcoming { days: i64 },
}

/// Warning-vs-normal color pick; the host maps it to its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorClass {
    Normal,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBalanceView {
    pub title: String,
    /// Remaining budget for today, the widget's primary amount.
    pub remaining_text: String,
    pub spent_text: String,
    pub limit_text: String,
    pub progress: u8,
    pub status: BudgetStatus,
    pub status_text: String,
    pub color: ColorClass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklySummaryView {
    pub title: String,
    pub total_text: String,
    pub avg_text: String,
    /// Ordered per-day bar heights; the host binds index to widget slot.
    pub day_progress: [u8; 7],
    pub top_category_text: String,
    pub top_category_amount_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastView {
    pub title: String,
    pub projected_text: String,
    pub budget_text: String,
    pub avg_daily_text: String,
    pub safe_daily_text: String,
    /// Upstream-computed status line, passed through verbatim.
    pub status_note: String,
    pub progress: u8,
    pub status: BudgetStatus,
    pub status_text: String,
    /// Applies to both the status pill and the projected amount.
    pub color: ColorClass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoalView {
    pub goal_name: String,
    pub current_text: String,
    pub target_text: String,
    pub goal_count: i64,
    pub goal_count_text: String,
    pub progress: u8,
    pub percent_text: String,
    /// Amount still missing, or the achieved marker once the goal is reached.
    pub remaining_text: String,
    pub achieved: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAddView {
    pub spent_text: String,
    pub tx_count: i64,
    pub tx_count_text: String,
    pub button_label: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitView {
    pub habit_name: String,
    pub streak: i64,
    pub streak_label: String,
    pub status_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringView {
    pub title: String,
    pub amount_text: String,
    pub days_until_due: i64,
    pub due: DueStatus,
    pub status_text: String,
    pub progress: u8,
    pub color: ColorClass,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleMetadata {
    pub generated_at: String,
}

/// All seven view models derived from one snapshot read, the unit handed to
/// host adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetBundle {
    pub metadata: BundleMetadata,
    pub daily_balance: DailyBalanceView,
    pub weekly_summary: WeeklySummaryView,
    pub forecast: ForecastView,
    pub savings_goal: SavingsGoalView,
    pub quick_add: QuickAddView,
    pub habit: HabitView,
    pub recurring: RecurringView,
}
