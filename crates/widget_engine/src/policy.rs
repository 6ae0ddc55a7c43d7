use models::{BudgetStatus, ColorClass, DueStatus};

/// Rounds a ratio to an integer percentage clamped to [0, 100].
/// Non-finite ratios are treated as 0 before clamping.
pub fn clamp_percent(ratio: f64) -> u8 {
    if !ratio.is_finite() {
        return 0;
    }
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// `value / total`, with a zero or negative total yielding 0.0 so the
/// clamping step never sees a division by zero.
pub fn share_of(value: f64, total: f64) -> f64 {
    if total <= 0.0 { 0.0 } else { value / total }
}

/// `Over` only once the limit is actually exceeded; spending exactly the
/// limit still classifies as `Under`.
pub fn budget_status(spent: f64, limit: f64) -> BudgetStatus {
    if limit - spent < 0.0 {
        BudgetStatus::Over
    } else {
        BudgetStatus::Under
    }
}

/// Classifies a precomputed day offset relative to the due date.
pub fn due_status(days_until_due: i64) -> DueStatus {
    match days_until_due {
        d if d < 0 => DueStatus::Overdue { days: d.saturating_neg() },
        0 => DueStatus::DueToday,
        d => DueStatus::Upcoming { days: d },
    }
}

/// Urgency ramp for the recurring-bill progress bar: saturates at 100 once
/// due or past due, loses 3 points per day out, bottoming at 34+ days.
/// The factor-3 ramp is deployed behavior and must not change.
pub fn recurring_urgency_progress(days_until_due: i64) -> u8 {
    if days_until_due <= 0 {
        return 100;
    }
    100i64.saturating_sub(days_until_due.saturating_mul(3)).clamp(0, 100) as u8
}

/// A goal with no target set is never achieved.
pub fn goal_achieved(current: f64, target: f64) -> bool {
    target > 0.0 && current >= target
}

pub fn color_for_budget(status: BudgetStatus) -> ColorClass {
    match status {
        BudgetStatus::Over => ColorClass::Warning,
        BudgetStatus::Under => ColorClass::Normal,
    }
}

/// Overdue and due-today bills both render as warnings; upcoming stays neutral.
pub fn color_for_due(due: DueStatus) -> ColorClass {
    match due {
        DueStatus::Overdue { .. } | DueStatus::DueToday => ColorClass::Warning,
        DueStatus::Upcoming { .. } => ColorClass::Normal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_percent_saturates_outside_unit_interval() {
        assert_eq!(clamp_percent(-5.0), 0);
        assert_eq!(clamp_percent(0.0), 0);
        assert_eq!(clamp_percent(0.5), 50);
        assert_eq!(clamp_percent(1.0), 100);
        assert_eq!(clamp_percent(2.0), 100);
    }

    #[test]
    fn test_clamp_percent_is_monotonic_within_unit_interval() {
        let samples = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
        for window in samples.windows(2) {
            assert!(clamp_percent(window[0]) <= clamp_percent(window[1]));
        }
    }

    #[test]
    fn test_clamp_percent_rounds_to_nearest() {
        assert_eq!(clamp_percent(0.494), 49);
        assert_eq!(clamp_percent(0.125), 13);
    }

    #[test]
    fn test_clamp_percent_treats_non_finite_as_zero() {
        assert_eq!(clamp_percent(f64::NAN), 0);
        assert_eq!(clamp_percent(f64::INFINITY), 0);
        assert_eq!(clamp_percent(f64::NEG_INFINITY), 0);
    }

    #[test]
    fn test_share_of_guards_zero_and_negative_totals() {
        assert_eq!(share_of(150.0, 300.0), 0.5);
        assert_eq!(share_of(150.0, 0.0), 0.0);
        assert_eq!(share_of(150.0, -10.0), 0.0);
    }

    #[test]
    fn test_budget_status_over_only_past_the_limit() {
        assert_eq!(budget_status(350_000.0, 300_000.0), BudgetStatus::Over);
        assert_eq!(budget_status(300_000.0, 300_000.0), BudgetStatus::Under);
        assert_eq!(budget_status(150_000.0, 300_000.0), BudgetStatus::Under);
    }

    #[test]
    fn test_due_status_classification() {
        assert_eq!(due_status(-2), DueStatus::Overdue { days: 2 });
        assert_eq!(due_status(0), DueStatus::DueToday);
        assert_eq!(due_status(5), DueStatus::Upcoming { days: 5 });
    }

    #[test]
    fn test_recurring_urgency_ramp() {
        assert_eq!(recurring_urgency_progress(0), 100);
        assert_eq!(recurring_urgency_progress(-5), 100);
        assert_eq!(recurring_urgency_progress(1), 97);
        assert_eq!(recurring_urgency_progress(10), 70);
        assert_eq!(recurring_urgency_progress(33), 1);
        assert_eq!(recurring_urgency_progress(34), 0);
        assert_eq!(recurring_urgency_progress(365), 0);
    }

    #[test]
    fn test_recurring_urgency_survives_extreme_offsets() {
        assert_eq!(recurring_urgency_progress(i64::MAX), 0);
        assert_eq!(recurring_urgency_progress(i64::MIN), 100);
    }

    #[test]
    fn test_goal_achieved_requires_positive_target() {
        assert!(goal_achieved(20_000_000.0, 20_000_000.0));
        assert!(goal_achieved(25_000_000.0, 20_000_000.0));
        assert!(!goal_achieved(19_999_999.0, 20_000_000.0));
        assert!(!goal_achieved(0.0, 0.0));
        assert!(!goal_achieved(100.0, -1.0));
    }

    #[test]
    fn test_color_classes() {
        assert_eq!(color_for_budget(BudgetStatus::Over), ColorClass::Warning);
        assert_eq!(color_for_budget(BudgetStatus::Under), ColorClass::Normal);
        assert_eq!(color_for_due(DueStatus::Overdue { days: 2 }), ColorClass::Warning);
        assert_eq!(color_for_due(DueStatus::DueToday), ColorClass::Warning);
        assert_eq!(color_for_due(DueStatus::Upcoming { days: 5 }), ColorClass::Normal);
    }
}
