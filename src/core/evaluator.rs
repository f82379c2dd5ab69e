//! Opening-hours evaluation: pure comparison arithmetic over a weekly
//! schedule and a decomposed instant. The caller owns the clock and the
//! polling timer; this module never reads ambient state and never fails.

use crate::models::evaluation::Evaluation;
use crate::models::schedule::WeekSchedule;
use crate::models::weekday::Weekday;

pub const LABEL_CLOSED_TODAY: &str = "closed today";
pub const LABEL_CLOSED_FOR_TODAY: &str = "closed for today";

/// Decide whether the restaurant is open at `minutes` (since midnight) on
/// `weekday`, and if not, what hint to show.
///
/// Lunch is checked before dinner and each window sets `is_open` on its
/// own, so with overlapping data a dinner match can re-open after lunch
/// already declined. The "opens at" candidate, once recorded, is kept even
/// if a later window matches; it is only consulted when the final verdict
/// is closed. Both quirks are part of the observable contract.
pub fn evaluate(schedule: &WeekSchedule, weekday: Weekday, minutes: i64) -> Evaluation {
    let today = schedule.day(weekday);

    // Day-level switch dominates: windows are not even consulted.
    if !today.enabled {
        return Evaluation::closed(LABEL_CLOSED_TODAY);
    }

    let mut is_open = false;
    let mut next_open: Option<String> = None;

    let lunch = today.lunch.span();
    if let Some((start, end)) = lunch {
        if minutes >= start && minutes < end {
            is_open = true;
        } else if minutes < start && next_open.is_none() {
            next_open = Some(opens_at(&today.lunch.start));
        }
    }

    if let Some((start, end)) = today.dinner.span() {
        if minutes >= start && minutes < end {
            is_open = true;
        } else if !is_open && next_open.is_none() {
            if minutes < start {
                next_open = Some(opens_at(&today.dinner.start));
            } else if let Some((_, lunch_end)) = lunch
                && minutes >= lunch_end
                && minutes < start
            {
                // Gap between lunch and dinner service.
                next_open = Some(opens_at(&today.dinner.start));
            }
        }
    }

    let status_label = if is_open {
        String::new()
    } else {
        next_open.unwrap_or_else(|| LABEL_CLOSED_FOR_TODAY.to_string())
    };

    Evaluation {
        is_open,
        status_label,
    }
}

fn opens_at(start: &str) -> String {
    format!("opens at {}", start)
}
