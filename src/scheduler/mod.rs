mod assignment;
mod partition;
mod types;
mod validation;

pub use assignment::assign_shifts;
pub use partition::compute_shifts;
pub use types::{AssignOptions, ProposedEntry, SchedError};
pub use validation::{validate_shift_edits, validate_shift_times};

use crate::model::{Employee, Facility, Schedule, ScheduleEntry, Shift};
use crate::random::RandomSource;
use chrono::{DateTime, Utc};

/// Scheduler : porte la source d'aléa et les options d'une génération
#[derive(Debug)]
pub struct Scheduler<R> {
    rng: R,
    opts: AssignOptions,
}

impl<R: RandomSource> Scheduler<R> {
    pub fn new(rng: R) -> Self {
        Self::with_options(rng, AssignOptions::default())
    }

    pub fn with_options(rng: R, opts: AssignOptions) -> Self {
        Self { rng, opts }
    }

    pub fn options(&self) -> &AssignOptions {
        &self.opts
    }

    /// Découpe la plage d'ouverture de l'établissement.
    pub fn shifts_for(&self, facility: &Facility) -> Result<Vec<Shift>, SchedError> {
        partition::partition_window(&facility.operating_hours, facility.number_shifts)
    }

    pub fn assign(
        &mut self,
        shifts: &[Shift],
        employees: &[Employee],
    ) -> Result<Vec<ScheduleEntry>, SchedError> {
        assignment::assign_shifts(shifts, employees, &mut self.rng, &self.opts)
    }

    /// Découpe puis affecte l'effectif rattaché (pris dans `employees`, dans
    /// cet ordre) et emballe le résultat dans un nouveau planning.
    pub fn generate_schedule(
        &mut self,
        facility: &Facility,
        employees: &[Employee],
        generated_at: DateTime<Utc>,
    ) -> Result<Schedule, SchedError> {
        let shifts = self.shifts_for(facility)?;
        let roster = facility.roster(employees);
        let entries = self.assign(&shifts, &roster)?;

        let mut schedule = Schedule::new(facility.id.clone(), generated_at);
        schedule.replace_shifts(entries);
        Ok(schedule)
    }
}

/// Valide le lot puis remplace les créneaux du planning ; rien n'est modifié
/// en cas d'erreur.
pub fn apply_edits(
    schedule: &mut Schedule,
    proposed: &[ProposedEntry],
    facility: &Facility,
) -> Result<(), SchedError> {
    if schedule.facility_id != facility.id {
        return Err(SchedError::Other(anyhow::anyhow!(
            "schedule {} belongs to facility {}, not {}",
            schedule.id.as_str(),
            schedule.facility_id.as_str(),
            facility.id.as_str()
        )));
    }
    let entries = validate_shift_edits(proposed, facility)?;

    #[cfg(feature = "logging")]
    tracing::debug!(
        schedule = schedule.id.as_str(),
        previous = schedule.shifts.len(),
        replacement = entries.len(),
        "schedule shifts replaced"
    );

    schedule.replace_shifts(entries);
    Ok(())
}
