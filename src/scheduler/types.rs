use crate::model::DayCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options d'affectation
#[derive(Debug, Clone)]
pub struct AssignOptions {
    pub default_days: Vec<DayCode>,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            default_days: DayCode::workweek(),
        }
    }
}

/// Ligne de planning soumise à la main, non encore validée.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedEntry {
    #[serde(default, alias = "employeeId")]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub days: Option<Vec<String>>,
}

impl ProposedEntry {
    pub fn new<E, S, T>(employee_id: E, start: S, end: T) -> Self
    where
        E: Into<String>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            employee_id: Some(employee_id.into()),
            start: Some(start.into()),
            end: Some(end.into()),
            days: None,
        }
    }

    pub fn with_days<I, D>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        self.days = Some(days.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid operating window: {0}")]
    InvalidWindow(String),
    #[error("no employees available for assignment")]
    NoEmployeesAvailable,
    #[error("invalid shift entry #{index}: {message}")]
    InvalidEntry { index: usize, message: String },
    #[error("employee {employee_id} does not work at this facility")]
    EmployeeNotAtFacility { employee_id: String },
    #[error("invalid start/end time format ({start} / {end}): strict parsing with format HH:mm")]
    InvalidTimeFormat { start: String, end: String },
    #[error("start time must be before end time ({start} / {end})")]
    StartAfterEnd { start: String, end: String },
    #[error("start/end time is out of the operating hours ({start} / {end})")]
    OutOfOperatingHours { start: String, end: String },
    #[error("invalid skill level for employee {employee_id}: {skill_level}")]
    InvalidSkillLevel { employee_id: String, skill_level: u8 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SchedError {
    /// Code stable, pour la couche de transport.
    pub fn code(&self) -> &'static str {
        match self {
            SchedError::InvalidWindow(_) => "invalid_window",
            SchedError::NoEmployeesAvailable => "no_employees_available",
            SchedError::InvalidEntry { .. } => "invalid_entry",
            SchedError::EmployeeNotAtFacility { .. } => "employee_not_at_facility",
            SchedError::InvalidTimeFormat { .. } => "invalid_time_format",
            SchedError::StartAfterEnd { .. } => "start_after_end",
            SchedError::OutOfOperatingHours { .. } => "out_of_operating_hours",
            SchedError::InvalidSkillLevel { .. } => "invalid_skill_level",
            SchedError::Other(_) => "other",
        }
    }
}
