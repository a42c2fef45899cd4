#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use roulement::{
    io,
    model::{DayCode, EmployeeId},
    notification::{prepare_notice, TextNotice},
    random::RngSource,
    scheduler::{apply_edits, compute_shifts, AssignOptions, Scheduler},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI d'affectation de créneaux (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du planning
    #[arg(long, global = true, default_value = "schedule.json")]
    schedule: String,

    /// Graine du tirage aléatoire (planning reproductible)
    #[arg(long, global = true, env = "ROULEMENT_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher le découpage d'une plage d'ouverture
    Shifts {
        /// HH:mm ou H:MM AM/PM
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long, default_value_t = 1)]
        count: u32,
    },

    /// Générer le planning d'un établissement
    Generate {
        /// Établissement (JSON)
        #[arg(long)]
        facility: String,
        /// Employés (CSV `id,name,skill_level,phone_number`)
        #[arg(long)]
        employees: String,
        /// liste "Mo,Tu,..." (défaut : lundi → vendredi)
        #[arg(long)]
        days: Option<String>,
    },

    /// Remplacer les créneaux du planning par un lot validé
    Edit {
        #[arg(long)]
        facility: String,
        /// Lot d'édition (JSON)
        #[arg(long)]
        edits: String,
    },

    /// Lister et optionnellement exporter
    List {
        #[arg(long)]
        employees: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Générer l'avis texte d'un employé
    Notify {
        #[arg(long)]
        employees: String,
        #[arg(long)]
        employee_id: String,
        /// Fichier de sortie (texte brut)
        #[arg(long)]
        out: String,
    },
}

fn parse_days(raw: &str) -> Result<Vec<DayCode>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<DayCode>().map_err(anyhow::Error::msg))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.schedule);

    let code = match cli.cmd {
        Commands::Shifts { start, end, count } => {
            for shift in compute_shifts(&start, &end, count)? {
                println!("{} → {}", shift.start, shift.end);
            }
            0
        }
        Commands::Generate {
            facility,
            employees,
            days,
        } => {
            let facility = io::load_facility_json(facility)?;
            let employees = io::import_employees_csv(employees)?;
            let mut opts = AssignOptions::default();
            if let Some(raw) = days {
                opts.default_days = parse_days(&raw).context("invalid --days")?;
            }
            let rng = match cli.seed {
                Some(seed) => RngSource::seeded(seed),
                None => RngSource::from_os_rng(),
            };
            let mut scheduler = Scheduler::with_options(rng, opts);
            let schedule = scheduler.generate_schedule(&facility, &employees, Utc::now())?;
            storage.save(&schedule)?;
            println!(
                "Schedule {} generated for {} ({} entries)",
                schedule.id.as_str(),
                facility.name,
                schedule.shifts.len()
            );
            0
        }
        Commands::Edit { facility, edits } => {
            let facility = io::load_facility_json(facility)?;
            let proposed = io::load_edits_json(edits)?;
            let mut schedule = storage.load()?;
            match apply_edits(&mut schedule, &proposed, &facility) {
                Ok(()) => {
                    storage.save(&schedule)?;
                    println!("Success: shifts schedule updated");
                    0
                }
                Err(err) => {
                    eprintln!("Error [{}]: {err}", err.code());
                    // Code 2 = lot rejeté, planning inchangé
                    2
                }
            }
        }
        Commands::List {
            employees,
            out_json,
            out_csv,
        } => {
            let schedule = storage.load()?;
            let employees = match employees {
                Some(path) => io::import_employees_csv(path)?,
                None => Vec::new(),
            };
            if let Some(path) = out_json {
                io::export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &schedule, &employees)?;
            }
            // impression compacte
            for entry in &schedule.shifts {
                let who = employees
                    .iter()
                    .find(|e| e.id == entry.employee_id)
                    .map(|e| e.name.as_str())
                    .unwrap_or(entry.employee_id.as_str());
                let days = entry
                    .days
                    .iter()
                    .map(|d| d.as_str())
                    .collect::<Vec<_>>()
                    .join(",");
                println!("{} → {} | {} | {}", entry.start, entry.end, who, days);
            }
            0
        }
        Commands::Notify {
            employees,
            employee_id,
            out,
        } => {
            let schedule = storage.load()?;
            let employees = io::import_employees_csv(employees)?;
            let notice = prepare_notice(
                &schedule,
                &employees,
                &EmployeeId::new(&employee_id),
                Utc::now(),
                &TextNotice,
            )?;
            std::fs::write(&out, &notice.content)?;
            println!(
                "Notice generated for {} ({})",
                notice.employee_id.as_str(),
                notice.phone_number.as_deref().unwrap_or("no phone number")
            );
            0
        }
    };

    std::process::exit(code);
}
