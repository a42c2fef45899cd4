use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const CLOCK_FORMAT: &str = "%H:%M";

/// Heure murale à la minute près, sans date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Construit une heure ; `None` si hors plage (jamais de valeur bornée).
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes écoulées depuis minuit.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight() / 60
    }

    /// Décale de `minutes` ; `None` si le résultat sort de la journée.
    pub fn checked_add_minutes(&self, minutes: i64) -> Option<Self> {
        let (shifted, wrapped) = self.0.overflowing_add_signed(Duration::minutes(minutes));
        (wrapped == 0).then_some(Self(shifted))
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CLOCK_FORMAT))
    }
}

/// Parsing souple : `H:MM`, `HH:MM`, éventuellement suivi de `AM`/`PM`.
///
/// Le suffixe est lu sur le jeton des minutes (`8:12 PM` → 20:12). `PM`
/// ajoute toujours 12 heures, donc `12:00 PM` et `13:12 PM` sont rejetés.
pub fn parse_time(text: &str) -> Option<TimeOfDay> {
    let mut parts = text.split(':');
    let hours_raw = parts.next()?;
    let minutes_raw = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let mut hours: u32 = hours_raw.trim().parse().ok()?;
    let mut minutes_raw = minutes_raw;

    if let Some(stripped) = minutes_raw.strip_suffix("AM") {
        minutes_raw = stripped;
    }
    if let Some(stripped) = minutes_raw.strip_suffix("PM") {
        minutes_raw = stripped;
        hours = hours.saturating_add(12);
    }

    let minutes: u32 = minutes_raw.trim().parse().ok()?;
    TimeOfDay::new(hours, minutes)
}

/// Parsing strict `HH:mm` : deux chiffres, deux-points, deux chiffres.
pub fn parse_time_strict(text: &str) -> Option<TimeOfDay> {
    let bytes = text.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    // chrono accepte `%H` sur un seul chiffre
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || b.is_ascii_digit())
    {
        return None;
    }
    NaiveTime::parse_from_str(text, CLOCK_FORMAT)
        .ok()
        .map(TimeOfDay)
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time of day: {raw}")))
    }
}

/// Plage d'ouverture d'un établissement, dans une seule journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct OperatingWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

#[derive(Deserialize)]
struct RawWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TryFrom<RawWindow> for OperatingWindow {
    type Error = String;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        OperatingWindow::new(raw.start, raw.end)
    }
}

impl OperatingWindow {
    /// Crée une plage en validant que `end > start`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, String> {
        if end <= start {
            return Err(format!("operating end {end} must be after start {start}"));
        }
        Ok(Self { start, end })
    }

    /// Durée en minutes (0 si la plage est inversée).
    pub fn duration_minutes(&self) -> u32 {
        let minutes = (self.end.to_naive_time() - self.start.to_naive_time()).num_minutes();
        u32::try_from(minutes).unwrap_or(0)
    }

    /// Bornes incluses des deux côtés.
    pub fn contains(&self, t: TimeOfDay) -> bool {
        self.start <= t && t <= self.end
    }
}

/// Vrai si `time` (format strict) tombe dans `[start, end]`.
pub fn is_operating_time(time: &str, start: &str, end: &str) -> bool {
    match (parse_time_strict(time), parse_time(start), parse_time(end)) {
        (Some(t), Some(s), Some(e)) => s <= t && t <= e,
        _ => false,
    }
}
