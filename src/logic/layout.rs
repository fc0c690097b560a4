//! Layout calculation logic
//!
//! Pure functions for panel sizing, including the expand animation that
//! runs once after the first submission.

use std::time::Duration;

/// Duration of the input panel shrink after the first submission
pub const EXPAND_ANIMATION: Duration = Duration::from_millis(500);

/// Width of the input panel as a percentage of the top row
///
/// Collapsed dashboards give the input panel the full row. Once expanded it
/// eases from 100% to 50% over `EXPAND_ANIMATION`, leaving room for the
/// result panel on the right.
///
/// # Examples
/// ```
/// use factdash::logic::layout::input_panel_percent;
/// use std::time::Duration;
///
/// assert_eq!(input_panel_percent(None), 100);
/// assert_eq!(input_panel_percent(Some(Duration::from_secs(5))), 50);
/// ```
pub fn input_panel_percent(since_expanded: Option<Duration>) -> u16 {
    let Some(elapsed) = since_expanded else {
        return 100;
    };

    if elapsed >= EXPAND_ANIMATION {
        return 50;
    }

    let progress = elapsed.as_secs_f64() / EXPAND_ANIMATION.as_secs_f64();
    // Ease-out: fast start, settle at 50%
    let eased = 1.0 - (1.0 - progress).powi(2);
    (100.0 - 50.0 * eased).round() as u16
}

/// Whether the animation still needs frames
pub fn is_animating(since_expanded: Option<Duration>) -> bool {
    matches!(since_expanded, Some(elapsed) if elapsed < EXPAND_ANIMATION)
}

/// Bar width for the tag chart so all bars fit the given inner width
pub fn bar_width(inner_width: u16, bar_count: usize) -> u16 {
    const MIN_BAR: u16 = 3;
    const MAX_BAR: u16 = 12;
    const GAP: u16 = 1;

    if bar_count == 0 {
        return MIN_BAR;
    }

    let per_bar = inner_width / u16::try_from(bar_count).unwrap_or(u16::MAX);
    per_bar.saturating_sub(GAP).clamp(MIN_BAR, MAX_BAR)
}
