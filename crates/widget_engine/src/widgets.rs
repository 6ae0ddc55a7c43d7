use models::{
    actions, keys, BudgetStatus, DailyBalanceView, ForecastView, HabitView, QuickAddView,
    RecurringView, SavingsGoalView, Snapshot, WeeklySummaryView,
};

use crate::coerce::{read_amount, read_amount_either, read_int, read_string};
use crate::format::format_dong;
use crate::policy::{
    budget_status, clamp_percent, color_for_budget, color_for_due, due_status, goal_achieved,
    recurring_urgency_progress, share_of,
};

/// Fallback for name and text reads with no stored value yet.
const PLACEHOLDER: &str = "Chưa có";

/// Today's spend against the daily limit.
pub fn daily_balance(snapshot: &Snapshot) -> DailyBalanceView {
    let spent = read_amount(snapshot, keys::TODAY_SPENT, 0.0);
    let limit = read_amount(snapshot, keys::DAILY_LIMIT, 0.0);
    let remaining = limit - spent;
    let status = budget_status(spent, limit);

    DailyBalanceView {
        title: "Chi tiêu hôm nay".to_string(),
        remaining_text: format_dong(remaining),
        spent_text: format!("Chi: {}", format_dong(spent)),
        limit_text: format!("Hạn mức: {}", format_dong(limit)),
        progress: clamp_percent(share_of(spent, limit)),
        status,
        status_text: match status {
            BudgetStatus::Over => "⚠ Vượt hạn mức",
            BudgetStatus::Under => "Trong hạn mức",
        }
        .to_string(),
        color: color_for_budget(status),
    }
}

/// Week total with a seven-day bar chart scaled to the busiest day.
pub fn weekly_summary(snapshot: &Snapshot) -> WeeklySummaryView {
    let total = read_amount_either(snapshot, keys::WEEKLY_TOTAL, keys::WEEK_SPENT, 0.0);
    let avg = read_amount(snapshot, keys::WEEKLY_AVG, 0.0);

    let mut days = [0.0f64; 7];
    for (slot, key) in days.iter_mut().zip(keys::DAYS) {
        *slot = read_amount(snapshot, key, 0.0);
    }
    let max = days.iter().cloned().fold(0.0f64, f64::max);

    let mut day_progress = [0u8; 7];
    for (bar, value) in day_progress.iter_mut().zip(days) {
        *bar = clamp_percent(share_of(value, max));
    }

    let top_category = read_string(snapshot, keys::TOP_CATEGORY, PLACEHOLDER);
    let category_amount = read_amount(snapshot, keys::CATEGORY_AMOUNT, 0.0);

    WeeklySummaryView {
        title: "Tuần này".to_string(),
        total_text: format_dong(total),
        avg_text: format!("TB/ngày: {}", format_dong(avg)),
        day_progress,
        top_category_text: format!("Nhiều nhất: {}", top_category),
        top_category_amount_text: format_dong(category_amount),
    }
}

/// Month-end projection against the monthly budget. The safe-to-spend amount
/// and the status note arrive precomputed from the main application.
pub fn forecast(snapshot: &Snapshot) -> ForecastView {
    let projected =
        read_amount_either(snapshot, keys::PROJECTED_TOTAL, keys::PROJECTED_SPEND, 0.0);
    let budget = read_amount(snapshot, keys::MONTHLY_BUDGET, 0.0);
    let spent = read_amount(snapshot, keys::MONTHLY_SPENT, 0.0);
    let avg_daily = read_amount(snapshot, keys::AVG_DAILY_SPEND, 0.0);
    let safe_daily = read_amount(snapshot, keys::SAFE_TO_SPEND_DAILY, 0.0);
    let status_note = read_string(snapshot, keys::FORECAST_STATUS, "-");
    let status = budget_status(projected, budget);

    ForecastView {
        title: "Dự báo".to_string(),
        projected_text: format_dong(projected),
        budget_text: format!("Ngân sách: {}", format_dong(budget)),
        avg_daily_text: format!("TB/ngày: {}", format_dong(avg_daily)),
        safe_daily_text: format_dong(safe_daily),
        status_note: format!("Trạng thái: {}", status_note),
        progress: clamp_percent(share_of(spent, budget)),
        status,
        status_text: match status {
            BudgetStatus::Over => "⚠ Vượt chi",
            BudgetStatus::Under => "✓ Ổn định",
        }
        .to_string(),
        color: color_for_budget(status),
    }
}

/// Progress toward the top savings goal.
pub fn savings_goal(snapshot: &Snapshot) -> SavingsGoalView {
    let name = read_string(snapshot, keys::TOP_GOAL_NAME, PLACEHOLDER);
    let current = read_amount(snapshot, keys::TOP_GOAL_CURRENT, 0.0);
    let target = read_amount(snapshot, keys::TOP_GOAL_TARGET, 0.0);
    let goal_count = read_int(snapshot, keys::SAVINGS_GOAL_COUNT, 0);
    let achieved = goal_achieved(current, target);
    let progress = clamp_percent(share_of(current, target));

    SavingsGoalView {
        goal_name: name,
        current_text: format_dong(current),
        target_text: format_dong(target),
        goal_count,
        goal_count_text: format!("{} hũ", goal_count),
        progress,
        percent_text: format!("{}%", progress),
        remaining_text: if achieved {
            "✓ Đã đạt!".to_string()
        } else {
            format!("Còn thiếu: {}", format_dong(target - current))
        },
        achieved,
    }
}

/// Today's totals next to the add-transaction shortcut.
pub fn quick_add(snapshot: &Snapshot) -> QuickAddView {
    let spent = read_amount(snapshot, keys::TODAY_SPENT, 0.0);
    let tx_count = read_int(snapshot, keys::TODAY_TX_COUNT, 0);

    QuickAddView {
        spent_text: format_dong(spent),
        tx_count,
        tx_count_text: format!("{} giao dịch", tx_count),
        button_label: "Thêm giao dịch".to_string(),
        action: actions::OPEN_ADD_TRANSACTION.to_string(),
    }
}

/// Habit-breaking streak, purely textual pass-through.
pub fn habit(snapshot: &Snapshot) -> HabitView {
    HabitView {
        habit_name: read_string(snapshot, keys::HABIT_NAME, PLACEHOLDER),
        streak: read_int(snapshot, keys::HABIT_STREAK, 0),
        streak_label: "Ngày liên tiếp".to_string(),
        status_text: read_string(snapshot, keys::HABIT_STATUS, "Bắt đầu ngay!"),
    }
}

/// The next recurring bill with its urgency ramp.
pub fn recurring(snapshot: &Snapshot) -> RecurringView {
    let title = read_string(snapshot, keys::RECURRING_TITLE, PLACEHOLDER);
    let amount = read_amount(snapshot, keys::RECURRING_AMOUNT, 0.0);
    let days_until_due = read_int(snapshot, keys::RECURRING_DAYS, 0);
    let due = due_status(days_until_due);

    RecurringView {
        title,
        amount_text: format_dong(amount),
        days_until_due,
        due,
        status_text: match due {
            models::DueStatus::Overdue { days } => format!("Đã quá hạn {} ngày", days),
            models::DueStatus::DueToday => "Đến hạn hôm nay!".to_string(),
            models::DueStatus::Upcoming { days } => format!("Còn {} ngày", days),
        },
        progress: recurring_urgency_progress(days_until_due),
        color: color_for_due(due),
        action: actions::OPEN_APP.to_string(),
    }
}
