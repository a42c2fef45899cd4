use super::{ProposedEntry, SchedError};
use crate::model::{DayCode, EmployeeId, Facility, ScheduleEntry};
use crate::time::{parse_time_strict, OperatingWindow};

/// Valide un lot d'édition rattaché à un établissement (appartenance incluse).
///
/// Le lot est rejeté dès la première ligne fautive ; en cas de succès, les
/// lignes validées remplacent le planning existant.
pub fn validate_shift_edits(
    proposed: &[ProposedEntry],
    facility: &Facility,
) -> Result<Vec<ScheduleEntry>, SchedError> {
    validate(proposed, &facility.operating_hours, Some(facility.employees.as_slice()))
}

/// Même validation, sans contrôle d'appartenance au roster.
pub fn validate_shift_times(
    proposed: &[ProposedEntry],
    hours: &OperatingWindow,
) -> Result<Vec<ScheduleEntry>, SchedError> {
    validate(proposed, hours, None)
}

fn validate(
    proposed: &[ProposedEntry],
    hours: &OperatingWindow,
    roster: Option<&[EmployeeId]>,
) -> Result<Vec<ScheduleEntry>, SchedError> {
    proposed
        .iter()
        .enumerate()
        .map(|(index, entry)| validate_entry(index, entry, hours, roster))
        .collect()
}

fn validate_entry(
    index: usize,
    entry: &ProposedEntry,
    hours: &OperatingWindow,
    roster: Option<&[EmployeeId]>,
) -> Result<ScheduleEntry, SchedError> {
    let invalid = |message: &str| SchedError::InvalidEntry {
        index,
        message: message.to_string(),
    };

    let employee_id = entry
        .employee_id
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| invalid("employee id is required"))?;
    let start = entry
        .start
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| invalid("start is required"))?;
    let end = entry
        .end
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| invalid("end is required"))?;
    let days = match &entry.days {
        Some(raw) => raw
            .iter()
            .map(|d| d.parse::<DayCode>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|msg| invalid(&msg))?,
        None => DayCode::workweek(),
    };

    let employee_id = EmployeeId::new(employee_id);
    if let Some(roster) = roster {
        if !roster.contains(&employee_id) {
            return Err(SchedError::EmployeeNotAtFacility {
                employee_id: employee_id.as_str().to_string(),
            });
        }
    }

    let echo = || (start.to_string(), end.to_string());

    let (Some(start_t), Some(end_t)) = (parse_time_strict(start), parse_time_strict(end)) else {
        let (start, end) = echo();
        return Err(SchedError::InvalidTimeFormat { start, end });
    };

    if start_t >= end_t {
        let (start, end) = echo();
        return Err(SchedError::StartAfterEnd { start, end });
    }

    if !hours.contains(start_t) || !hours.contains(end_t) {
        let (start, end) = echo();
        return Err(SchedError::OutOfOperatingHours { start, end });
    }

    Ok(ScheduleEntry {
        employee_id,
        start: start_t,
        end: end_t,
        days,
    })
}
