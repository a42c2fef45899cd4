use crate::time::{OperatingWindow, TimeOfDay};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_SKILL_LEVEL: u8 = 1;
pub const MAX_SKILL_LEVEL: u8 = 10;
pub const DEFAULT_SKILL_LEVEL: u8 = 5;

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Employé d'un établissement. Seul `skill_level` compte pour l'affectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default = "default_skill_level")]
    pub skill_level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

fn default_skill_level() -> u8 {
    DEFAULT_SKILL_LEVEL
}

impl Employee {
    /// Crée un employé en validant `1 <= skill_level <= 10`.
    pub fn new<N: Into<String>>(name: N, skill_level: u8) -> Result<Self, String> {
        if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&skill_level) {
            return Err(format!(
                "skill level must be between {MIN_SKILL_LEVEL} and {MAX_SKILL_LEVEL}, got {skill_level}"
            ));
        }
        Ok(Self {
            id: EmployeeId::random(),
            name: name.into(),
            skill_level,
            phone_number: None,
        })
    }

    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_phone<P: Into<String>>(mut self, phone: P) -> Self {
        self.phone_number = Some(phone.into());
        self
    }
}

/// Code de jour de la semaine (`Mo` … `Su`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayCode {
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
    Su,
}

impl DayCode {
    pub const ALL: [DayCode; 7] = [
        DayCode::Mo,
        DayCode::Tu,
        DayCode::We,
        DayCode::Th,
        DayCode::Fr,
        DayCode::Sa,
        DayCode::Su,
    ];

    /// Lundi → vendredi.
    pub fn workweek() -> Vec<DayCode> {
        DayCode::ALL[..5].to_vec()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayCode::Mo => "Mo",
            DayCode::Tu => "Tu",
            DayCode::We => "We",
            DayCode::Th => "Th",
            DayCode::Fr => "Fr",
            DayCode::Sa => "Sa",
            DayCode::Su => "Su",
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayCode::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("`{s}` is not a valid day code"))
    }
}

/// Créneau issu du découpage d'une plage d'ouverture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Shift {
    /// Durée en minutes.
    pub fn duration_minutes(&self) -> u32 {
        let minutes = (self.end.to_naive_time() - self.start.to_naive_time()).num_minutes();
        u32::try_from(minutes).unwrap_or(0)
    }
}

/// Ligne de planning persistée : un employé, un créneau, des jours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub employee_id: EmployeeId,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    #[serde(default = "DayCode::workweek")]
    pub days: Vec<DayCode>,
}

impl ScheduleEntry {
    pub fn new(employee_id: EmployeeId, shift: Shift, days: Vec<DayCode>) -> Self {
        Self {
            employee_id,
            start: shift.start,
            end: shift.end,
            days,
        }
    }

    pub fn shift(&self) -> Shift {
        Shift {
            start: self.start,
            end: self.end,
        }
    }
}

/// Identifiant fort pour Facility
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacilityId(String);

impl FacilityId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Établissement : horaires, nombre de créneaux, effectif rattaché.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    #[serde(alias = "facilityName")]
    pub name: String,
    #[serde(alias = "operatingHours")]
    pub operating_hours: OperatingWindow,
    #[serde(default = "default_number_shifts", alias = "numberShifts")]
    pub number_shifts: u32,
    #[serde(default)]
    pub employees: Vec<EmployeeId>,
}

fn default_number_shifts() -> u32 {
    1
}

impl Facility {
    pub fn new<N: Into<String>>(
        name: N,
        operating_hours: OperatingWindow,
        number_shifts: u32,
    ) -> Self {
        Self {
            id: FacilityId::random(),
            name: name.into(),
            operating_hours,
            number_shifts,
            employees: Vec::new(),
        }
    }

    pub fn employs(&self, id: &EmployeeId) -> bool {
        self.employees.contains(id)
    }

    /// Employés rattachés, dans l'ordre de `all`.
    pub fn roster(&self, all: &[Employee]) -> Vec<Employee> {
        all.iter().filter(|e| self.employs(&e.id)).cloned().collect()
    }
}

/// Identifiant fort pour Schedule
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleId(String);

impl ScheduleId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Planning complet d'un établissement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub facility_id: FacilityId,
    pub date_generated: DateTime<Utc>,
    #[serde(default)]
    pub shifts: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn new(facility_id: FacilityId, generated_at: DateTime<Utc>) -> Self {
        Self {
            id: ScheduleId::random(),
            facility_id,
            date_generated: generated_at,
            shifts: Vec::new(),
        }
    }

    /// Remplace intégralement la liste (pas de fusion).
    pub fn replace_shifts(&mut self, entries: Vec<ScheduleEntry>) {
        self.shifts = entries;
    }

    pub fn entries_for<'a>(
        &'a self,
        id: &'a EmployeeId,
    ) -> impl Iterator<Item = &'a ScheduleEntry> + 'a {
        self.shifts.iter().filter(move |e| &e.employee_id == id)
    }
}
