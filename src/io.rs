use crate::model::{Employee, EmployeeId, Facility, Schedule, DEFAULT_SKILL_LEVEL};
use crate::scheduler::ProposedEntry;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV: header `id,name[,skill_level][,phone_number]`
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        if id.is_empty() || name.is_empty() {
            bail!("invalid employee row (empty)");
        }
        let skill_level = match rec.get(2).map(str::trim) {
            Some(raw) if !raw.is_empty() => raw
                .parse::<u8>()
                .with_context(|| format!("invalid skill_level for employee {id}"))?,
            _ => DEFAULT_SKILL_LEVEL,
        };
        let mut employee = Employee::new(name, skill_level)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("employee {id}"))?
            .with_id(EmployeeId::new(id));
        if let Some(phone) = rec.get(3).map(str::trim) {
            if !phone.is_empty() {
                employee = employee.with_phone(phone);
            }
        }
        out.push(employee);
    }
    Ok(out)
}

/// Chargement d'un établissement (JSON)
pub fn load_facility_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Facility> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let facility: Facility = serde_json::from_slice(&data)
        .with_context(|| format!("parsing facility {}", path.display()))?;
    Ok(facility)
}

/// Chargement d'un lot d'édition : tableau JSON, ou objet `{ "shifts": [...] }`
pub fn load_edits_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ProposedEntry>> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Batch {
        Bare(Vec<ProposedEntry>),
        Wrapped { shifts: Vec<ProposedEntry> },
    }

    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let batch: Batch = serde_json::from_slice(&data)
        .with_context(|| format!("parsing shift edits {}", path.display()))?;
    Ok(match batch {
        Batch::Bare(entries) | Batch::Wrapped { shifts: entries } => entries,
    })
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des créneaux: header `employee_id,employee_name,start,end,days`
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    schedule: &Schedule,
    employees: &[Employee],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["employee_id", "employee_name", "start", "end", "days"])?;
    for entry in &schedule.shifts {
        let name = employees
            .iter()
            .find(|e| e.id == entry.employee_id)
            .map(|e| e.name.as_str())
            .unwrap_or("");
        let start = entry.start.to_string();
        let end = entry.end.to_string();
        let days = entry
            .days
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(",");
        w.write_record([
            entry.employee_id.as_str(),
            name,
            start.as_str(),
            end.as_str(),
            days.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
