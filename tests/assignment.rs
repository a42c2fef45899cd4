#![forbid(unsafe_code)]
use roulement::{
    assign_shifts, compute_shifts, AssignOptions, DayCode, Employee, EmployeeId, RngSource,
    SchedError, SequenceSource,
};
use std::collections::HashMap;

fn staff(skills: &[u8]) -> Vec<Employee> {
    skills
        .iter()
        .enumerate()
        .map(|(i, s)| {
            Employee::new(format!("E{i}"), *s)
                .unwrap()
                .with_id(EmployeeId::new(format!("e{i}")))
        })
        .collect()
}

#[test]
fn fewer_shifts_than_employees_covers_everyone_once() {
    let shifts = compute_shifts("08:00", "17:00", 3).unwrap();
    let people = staff(&[5, 5, 5, 5, 5, 5, 5]);
    let mut rng = RngSource::seeded(2024);

    let entries = assign_shifts(&shifts, &people, &mut rng, &AssignOptions::default()).unwrap();
    assert_eq!(entries.len(), people.len());

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for e in &entries {
        *seen.entry(e.employee_id.as_str()).or_default() += 1;
    }
    assert!(people.iter().all(|p| seen.get(p.id.as_str()) == Some(&1)));

    for shift in &shifts {
        assert!(entries.iter().any(|e| e.shift() == *shift));
    }

    // ordre des créneaux
    let order: Vec<_> = entries
        .iter()
        .map(|e| shifts.iter().position(|s| *s == e.shift()).unwrap())
        .collect();
    assert!(order.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn fewer_shifts_pairs_head_of_roster_in_order() {
    let shifts = compute_shifts("08:00", "16:00", 2).unwrap();
    let people = staff(&[5, 5, 5]);
    // e2 tombe sur le second créneau
    let mut rng = SequenceSource::new(vec![0.9]);

    let entries = assign_shifts(&shifts, &people, &mut rng, &AssignOptions::default()).unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["e0", "e1", "e2"]);
    assert_eq!(entries[0].shift(), shifts[0]);
    assert_eq!(entries[1].shift(), shifts[1]);
    assert_eq!(entries[2].shift(), shifts[1]);
}

#[test]
fn more_shifts_than_employees_fills_every_shift() {
    let shifts = compute_shifts("06:00", "22:00", 8).unwrap();
    let people = staff(&[3, 8, 1]);
    let mut rng = RngSource::seeded(9);

    let entries = assign_shifts(&shifts, &people, &mut rng, &AssignOptions::default()).unwrap();
    assert_eq!(entries.len(), shifts.len());
    for (entry, shift) in entries.iter().zip(&shifts) {
        assert_eq!(entry.shift(), *shift);
    }
    for (entry, person) in entries.iter().zip(&people) {
        assert_eq!(entry.employee_id, person.id);
    }
}

#[test]
fn equal_counts_is_one_to_one() {
    let shifts = compute_shifts("08:00", "17:00", 3).unwrap();
    let people = staff(&[1, 2, 3]);
    // aucun tirage attendu
    let mut rng = SequenceSource::new(vec![]);

    let entries = assign_shifts(&shifts, &people, &mut rng, &AssignOptions::default()).unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["e0", "e1", "e2"]);
}

#[test]
fn weighted_scan_follows_cumulative_skill() {
    let shifts = compute_shifts("08:00", "18:00", 5).unwrap();
    // total = 10 : e0 couvre [0,2], e1 ]2,10[
    let people = staff(&[2, 8]);
    let mut rng = SequenceSource::new(vec![0.0, 0.2, 0.21]);

    let entries = assign_shifts(&shifts, &people, &mut rng, &AssignOptions::default()).unwrap();
    let ids: Vec<_> = entries.iter().map(|e| e.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["e0", "e1", "e0", "e0", "e1"]);
}

#[test]
fn higher_skill_wins_more_overflow_shifts() {
    let shifts = compute_shifts("00:00", "23:00", 102).unwrap();
    let people = staff(&[1, 9]);
    let draws: Vec<f64> = (0..100).map(|i| f64::from(i) / 100.0).collect();
    let mut rng = SequenceSource::new(draws);

    let entries = assign_shifts(&shifts, &people, &mut rng, &AssignOptions::default()).unwrap();
    let overflow = &entries[people.len()..];
    let low = overflow.iter().filter(|e| e.employee_id.as_str() == "e0").count();
    let high = overflow.iter().filter(|e| e.employee_id.as_str() == "e1").count();
    assert_eq!(low + high, 100);
    assert_eq!(low, 11);
    assert!(high > low);
}

#[test]
fn days_default_to_workweek_and_can_be_overridden() {
    let shifts = compute_shifts("08:00", "17:00", 1).unwrap();
    let people = staff(&[5]);
    let mut rng = RngSource::seeded(0);

    let entries = assign_shifts(&shifts, &people, &mut rng, &AssignOptions::default()).unwrap();
    assert_eq!(entries[0].days, DayCode::workweek());

    let opts = AssignOptions {
        default_days: vec![DayCode::Sa, DayCode::Su],
    };
    let entries = assign_shifts(&shifts, &people, &mut rng, &opts).unwrap();
    assert_eq!(entries[0].days, vec![DayCode::Sa, DayCode::Su]);
}

#[test]
fn empty_roster_is_an_error() {
    let shifts = compute_shifts("08:00", "17:00", 3).unwrap();
    let mut rng = RngSource::seeded(0);
    let err = assign_shifts(&shifts, &[], &mut rng, &AssignOptions::default()).unwrap_err();
    assert!(matches!(err, SchedError::NoEmployeesAvailable));
    assert_eq!(err.code(), "no_employees_available");
}

#[test]
fn out_of_range_skill_is_rejected() {
    let shifts = compute_shifts("08:00", "17:00", 3).unwrap();
    let mut people = staff(&[5]);
    people[0].skill_level = 0;
    let mut rng = RngSource::seeded(0);
    let err = assign_shifts(&shifts, &people, &mut rng, &AssignOptions::default()).unwrap_err();
    assert!(matches!(err, SchedError::InvalidSkillLevel { skill_level: 0, .. }));
    assert!(Employee::new("X", 11).is_err());
}

#[test]
fn seeded_sources_are_reproducible() {
    let shifts = compute_shifts("08:00", "20:00", 6).unwrap();
    let people = staff(&[2, 4, 6]);
    let run = |seed| {
        let mut rng = RngSource::seeded(seed);
        assign_shifts(&shifts, &people, &mut rng, &AssignOptions::default()).unwrap()
    };
    assert_eq!(run(77), run(77));
}
