#![forbid(unsafe_code)]
//! Roulement — moteur d'affectation de créneaux pour établissements.
//!
//! - Découpage d'une plage d'ouverture en N créneaux contigus.
//! - Affectation un-pour-un, puis tirage uniforme ou pondéré par compétence.
//! - Validation stricte (`HH:mm`) des plannings modifiés à la main.
//! - Aléa injecté ; aucune E/S dans le cœur (`scheduler`, `time`).

pub mod io;
pub mod model;
pub mod notification;
pub mod random;
pub mod scheduler;
pub mod storage;
pub mod time;

pub use model::{
    DayCode, Employee, EmployeeId, Facility, FacilityId, Schedule, ScheduleEntry, ScheduleId,
    Shift,
};
pub use notification::{prepare_notice, Notice, NoticeRenderer, TextNotice};
pub use random::{RandomSource, RngSource, SequenceSource};
pub use scheduler::{
    apply_edits, assign_shifts, compute_shifts, validate_shift_edits, validate_shift_times,
    AssignOptions, ProposedEntry, SchedError, Scheduler,
};
pub use storage::{JsonStorage, Storage};
pub use time::{is_operating_time, parse_time, parse_time_strict, OperatingWindow, TimeOfDay};
