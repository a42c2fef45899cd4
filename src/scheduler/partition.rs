use super::SchedError;
use crate::model::Shift;
use crate::time::{parse_time, OperatingWindow, TimeOfDay};

/// Découpe `[start, end]` (chaînes `HH:mm` ou `H:MM AM/PM`) en `num_shifts` créneaux.
pub fn compute_shifts(start: &str, end: &str, num_shifts: u32) -> Result<Vec<Shift>, SchedError> {
    let (Some(open), Some(close)) = (parse_time(start), parse_time(end)) else {
        return Err(SchedError::InvalidTimeFormat {
            start: start.to_string(),
            end: end.to_string(),
        });
    };
    partition(open, close, num_shifts)
}

pub(super) fn partition_window(
    window: &OperatingWindow,
    num_shifts: u32,
) -> Result<Vec<Shift>, SchedError> {
    partition(window.start, window.end, num_shifts)
}

fn partition(open: TimeOfDay, close: TimeOfDay, num_shifts: u32) -> Result<Vec<Shift>, SchedError> {
    if close <= open {
        return Err(SchedError::InvalidWindow(format!(
            "end {close} must be after start {open}"
        )));
    }
    if num_shifts < 1 {
        return Err(SchedError::InvalidWindow(
            "number of shifts must be at least 1".to_string(),
        ));
    }

    let total = (close.to_naive_time() - open.to_naive_time()).num_minutes();
    if i64::from(num_shifts) > total {
        return Err(SchedError::InvalidWindow(format!(
            "{num_shifts} shifts do not fit in {total} minutes"
        )));
    }

    // bornes calculées depuis l'ouverture : floor(k * total / n), la dernière vaut `total`
    let boundary = |k: u32| -> Result<TimeOfDay, SchedError> {
        let offset = i64::from(k) * total / i64::from(num_shifts);
        open.checked_add_minutes(offset).ok_or_else(|| {
            SchedError::InvalidWindow(format!("shift boundary {k} out of the day"))
        })
    };

    let mut shifts = Vec::with_capacity(num_shifts as usize);
    let mut current = open;
    for k in 1..=num_shifts {
        let next = boundary(k)?;
        shifts.push(Shift {
            start: current,
            end: next,
        });
        current = next;
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        start = %open,
        end = %close,
        num_shifts,
        shift_minutes = total as f64 / f64::from(num_shifts),
        "operating window partitioned"
    );

    Ok(shifts)
}
