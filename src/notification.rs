use crate::model::{Employee, EmployeeId, Schedule, ScheduleEntry};
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};

/// Avis de planning prêt à être expédié (SMS, mail…) par l'appelant.
#[derive(Debug, Clone)]
pub struct Notice {
    pub employee_id: EmployeeId,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub content: String,
}

/// Permet de customiser le rendu du message (texte, SMS, etc.).
pub trait NoticeRenderer {
    fn render(
        &self,
        employee: &Employee,
        entries: &[&ScheduleEntry],
        created_at: DateTime<Utc>,
    ) -> String;
}

/// Gabarit texte simple destiné à un SMS.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNotice;

impl NoticeRenderer for TextNotice {
    fn render(
        &self,
        employee: &Employee,
        entries: &[&ScheduleEntry],
        created_at: DateTime<Utc>,
    ) -> String {
        let lines: String = entries
            .iter()
            .map(|e| {
                let days = e.days.iter().map(|d| d.as_str()).collect::<Vec<_>>().join(",");
                format!("- {} → {} ({days})\n", e.start, e.end)
            })
            .collect();
        format!(
            "Bonjour {name},\n\nTon planning a été mis à jour :\n{lines}\nMessage généré le {at}.\n",
            name = employee.name,
            at = created_at.format("%Y-%m-%d %H:%M UTC")
        )
    }
}

/// Prépare l'avis listant les créneaux d'un employé dans un planning.
pub fn prepare_notice(
    schedule: &Schedule,
    employees: &[Employee],
    employee_id: &EmployeeId,
    now: DateTime<Utc>,
    renderer: &dyn NoticeRenderer,
) -> Result<Notice> {
    let employee = employees
        .iter()
        .find(|e| &e.id == employee_id)
        .with_context(|| format!("unknown employee: {}", employee_id.as_str()))?;

    let entries: Vec<&ScheduleEntry> = schedule.entries_for(employee_id).collect();
    if entries.is_empty() {
        bail!("no shift found for employee {}", employee_id.as_str());
    }

    let content = renderer.render(employee, &entries, now);
    Ok(Notice {
        employee_id: employee.id.clone(),
        phone_number: employee.phone_number.clone(),
        created_at: now,
        content,
    })
}
