use super::{AssignOptions, SchedError};
use crate::model::{Employee, ScheduleEntry, Shift, MAX_SKILL_LEVEL, MIN_SKILL_LEVEL};
use crate::random::RandomSource;

/// Affecte le roster aux créneaux.
///
/// - moins de créneaux que d'employés : un-pour-un, puis chaque employé restant
///   reçoit un créneau tiré uniformément ;
/// - sinon : un-pour-un, puis chaque créneau restant reçoit un employé tiré au
///   prorata de `skill_level` (avec remise).
///
/// La sortie suit l'ordre des créneaux.
pub fn assign_shifts<R: RandomSource + ?Sized>(
    shifts: &[Shift],
    employees: &[Employee],
    rng: &mut R,
    opts: &AssignOptions,
) -> Result<Vec<ScheduleEntry>, SchedError> {
    if employees.is_empty() {
        return Err(SchedError::NoEmployeesAvailable);
    }
    if shifts.is_empty() {
        return Err(SchedError::InvalidWindow("no shift to assign".to_string()));
    }
    if let Some(bad) = employees
        .iter()
        .find(|e| !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&e.skill_level))
    {
        return Err(SchedError::InvalidSkillLevel {
            employee_id: bad.id.as_str().to_string(),
            skill_level: bad.skill_level,
        });
    }

    #[cfg(feature = "logging")]
    {
        let overflow = if shifts.len() < employees.len() {
            "uniform"
        } else {
            "skill_weighted"
        };
        tracing::debug!(
            shifts = shifts.len(),
            employees = employees.len(),
            overflow,
            "assigning shifts"
        );
    }

    let entry = |employee: &Employee, shift: &Shift| {
        ScheduleEntry::new(employee.id.clone(), *shift, opts.default_days.clone())
    };

    if shifts.len() < employees.len() {
        let (paired, unassigned) = employees.split_at(shifts.len());

        let mut slotted: Vec<(usize, ScheduleEntry)> = paired
            .iter()
            .zip(shifts)
            .enumerate()
            .map(|(idx, (employee, shift))| (idx, entry(employee, shift)))
            .collect();

        for employee in unassigned {
            let idx = uniform_index(rng, shifts.len());
            slotted.push((idx, entry(employee, &shifts[idx])));
        }

        // tri stable : à créneau égal, l'ordre du roster est conservé
        slotted.sort_by_key(|(idx, _)| *idx);
        return Ok(slotted.into_iter().map(|(_, e)| e).collect());
    }

    let out = shifts
        .iter()
        .enumerate()
        .map(|(idx, shift)| {
            let employee = match employees.get(idx) {
                Some(e) => e,
                None => weighted_pick(rng, employees),
            };
            entry(employee, shift)
        })
        .collect();
    Ok(out)
}

fn uniform_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    let idx = (rng.next_uniform() * len as f64).floor() as usize;
    idx.min(len - 1)
}

/// Tirage cumulatif pondéré par `skill_level`, sans retrait du pool.
///
/// Si l'arrondi flottant laisse le parcours sans résultat, on retombe sur le
/// dernier employé du roster.
pub(super) fn weighted_pick<'a, R: RandomSource + ?Sized>(
    rng: &mut R,
    employees: &'a [Employee],
) -> &'a Employee {
    let total: f64 = employees.iter().map(|e| f64::from(e.skill_level)).sum();
    let mut remaining = rng.next_uniform() * total;

    for employee in employees {
        remaining -= f64::from(employee.skill_level);
        if remaining <= 0.0 {
            return employee;
        }
    }

    #[cfg(feature = "logging")]
    tracing::warn!(remaining, "weighted scan fell through, using last employee");

    // `employees` est non vide (vérifié par l'appelant)
    &employees[employees.len() - 1]
}
