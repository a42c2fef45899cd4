#![forbid(unsafe_code)]
use roulement::{
    apply_edits, model::Facility, time::parse_time, Employee, EmployeeId, OperatingWindow,
    ProposedEntry, RngSource, SchedError, Scheduler,
};
use chrono::{TimeZone, Utc};

fn facility(people: &[Employee], number_shifts: u32) -> Facility {
    let hours = OperatingWindow::new(parse_time("08:00").unwrap(), parse_time("17:00").unwrap())
        .unwrap();
    let mut f = Facility::new("Clinique du Parc", hours, number_shifts);
    f.employees = people.iter().map(|e| e.id.clone()).collect();
    f
}

fn people() -> Vec<Employee> {
    vec![
        Employee::new("Alice", 7).unwrap().with_id(EmployeeId::new("alice")),
        Employee::new("Bob", 3).unwrap().with_id(EmployeeId::new("bob")),
    ]
}

#[test]
fn generate_schedule_for_facility() {
    let staff = people();
    let f = facility(&staff, 3);
    let mut s = Scheduler::new(RngSource::seeded(42));
    let at = Utc.with_ymd_and_hms(2025, 10, 1, 8, 0, 0).unwrap();

    let schedule = s.generate_schedule(&f, &staff, at).unwrap();
    assert_eq!(schedule.facility_id, f.id);
    assert_eq!(schedule.date_generated, at);
    assert_eq!(schedule.shifts.len(), 3);
    assert_eq!(schedule.shifts[0].employee_id.as_str(), "alice");
    assert_eq!(schedule.shifts[1].employee_id.as_str(), "bob");
    assert_eq!(schedule.shifts[2].start.to_string(), "14:00");
    assert_eq!(schedule.shifts[2].end.to_string(), "17:00");
}

#[test]
fn generate_only_uses_facility_roster() {
    let staff = people();
    let f = facility(&staff[..1], 1);
    let mut s = Scheduler::new(RngSource::seeded(1));

    let schedule = s.generate_schedule(&f, &staff, Utc::now()).unwrap();
    assert_eq!(schedule.shifts.len(), 1);
    assert_eq!(schedule.shifts[0].employee_id.as_str(), "alice");
}

#[test]
fn generate_without_roster_is_rejected() {
    let f = facility(&[], 2);
    let mut s = Scheduler::new(RngSource::seeded(1));
    let err = s.generate_schedule(&f, &people(), Utc::now()).unwrap_err();
    assert!(matches!(err, SchedError::NoEmployeesAvailable));
}

#[test]
fn edits_replace_whole_shift_list() {
    let staff = people();
    let f = facility(&staff, 3);
    let mut s = Scheduler::new(RngSource::seeded(7));
    let mut schedule = s.generate_schedule(&f, &staff, Utc::now()).unwrap();

    let edits = vec![ProposedEntry::new("bob", "09:00", "12:30").with_days(["Sa", "Su"])];
    apply_edits(&mut schedule, &edits, &f).unwrap();

    assert_eq!(schedule.shifts.len(), 1);
    let entry = &schedule.shifts[0];
    assert_eq!(entry.employee_id.as_str(), "bob");
    assert_eq!(entry.start.to_string(), "09:00");
    assert_eq!(entry.end.to_string(), "12:30");
    assert_eq!(entry.days.len(), 2);
}

#[test]
fn rejected_edits_leave_schedule_untouched() {
    let staff = people();
    let f = facility(&staff, 3);
    let mut s = Scheduler::new(RngSource::seeded(7));
    let mut schedule = s.generate_schedule(&f, &staff, Utc::now()).unwrap();
    let before = schedule.shifts.clone();

    let edits = vec![
        ProposedEntry::new("alice", "08:00", "10:00"),
        ProposedEntry::new("bob", "19:00", "18:00"),
    ];
    let err = apply_edits(&mut schedule, &edits, &f).unwrap_err();
    assert_eq!(err.code(), "start_after_end");
    assert_eq!(schedule.shifts, before);
}
