//! Shared derivation core for the home-screen finance widgets.
//!
//! Takes the flat snapshot written by the main application plus a render
//! timestamp and produces one fully-resolved view model per widget kind:
//! display strings, a clamped 0-100 progress value, and a status
//! classification. Every derivation is total: missing or malformed snapshot
//! values degrade to documented defaults, so a render request can never fail.
//! Host adapters on both platforms consume the same view models, which keeps
//! the threshold and formatting rules from drifting apart.

pub mod coerce;
pub mod format;
pub mod policy;
pub mod widgets;

use chrono::{DateTime, Local};
use models::{BundleMetadata, Snapshot, WidgetBundle};

/// Derives all seven view models from one snapshot read.
///
/// The timestamp is injected rather than taken from the clock so the call
/// stays pure: identical snapshot and timestamp always produce an identical
/// bundle, which the host's refresh scheduler relies on.
pub fn render_bundle(snapshot: &Snapshot, now: DateTime<Local>) -> WidgetBundle {
    WidgetBundle {
        metadata: BundleMetadata {
            generated_at: now.to_rfc3339(),
        },
        daily_balance: widgets::daily_balance(snapshot),
        weekly_summary: widgets::weekly_summary(snapshot),
        forecast: widgets::forecast(snapshot),
        savings_goal: widgets::savings_goal(snapshot),
        quick_add: widgets::quick_add(snapshot),
        habit: widgets::habit(snapshot),
        recurring: widgets::recurring(snapshot),
    }
}
