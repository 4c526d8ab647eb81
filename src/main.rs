use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use sigma::commands;
use sigma::models::{Notice, NoticeVariant, PatientForm};
use sigma::utils::{config, format_date};
use sigma::AppState;

#[derive(Parser)]
#[command(name = "sigma")]
#[command(about = "SIGMA - Sistema Integrado de Gerenciamento e Monitoramento Assistencial", long_about = None)]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the patient's action history for a time window
    History {
        /// hour, 12hours, day, week or month
        #[arg(long)]
        window: Option<String>,

        /// Reference time (YYYY-MM-DDTHH:MM), defaults to now
        #[arg(long)]
        now: Option<String>,
    },

    /// Ask a question about the patient's actions
    Ask {
        query: Vec<String>,
    },

    /// Show or add routine events
    Routine {
        /// Day to show (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[command(subcommand)]
        action: Option<RoutineAction>,
    },

    /// Validate and save the patient's information
    Patient {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        age: String,
        /// male, female or other
        #[arg(long, default_value = "")]
        gender: String,
        /// mild, moderate or advanced
        #[arg(long, default_value = "")]
        condition: String,
    },

    /// Show the camera view, optionally reconfiguring it or taking a capture
    Monitor {
        #[arg(long)]
        ip: Option<String>,
        #[arg(long)]
        name: Option<String>,
        /// low, medium or high
        #[arg(long)]
        quality: Option<String>,
        #[arg(long)]
        capture: bool,
    },
}

#[derive(Subcommand)]
enum RoutineAction {
    /// Add an event to the calendar
    Add {
        #[arg(long)]
        date: Option<String>,
        /// medico, dieta or exercicio
        #[arg(long, default_value = "medico")]
        kind: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}

fn main() -> Result<()> {
    config::load_dotenv();
    env_logger::init();

    let cli = Cli::parse();
    let settings = config::load_settings(&config::config_path()).context("failed to load settings")?;
    let mut state = AppState::new(settings);

    match cli.command {
        None => {
            let cards = commands::navigation::get_navigation_cards();
            if cli.json {
                return print_json(&cards);
            }
            println!("SIGMA");
            println!("Sistema Integrado de Gerenciamento e Monitoramento Assistencial\n");
            for card in cards {
                println!("  {:<26} {:<14} {}", card.title, card.path, card.description);
            }
        }
        Some(Commands::History { window, now }) => {
            let history = commands::history::get_action_history(&state, window.as_deref(), now.as_deref())
                .map_err(|e| anyhow!(e))?;
            if cli.json {
                return print_json(&history);
            }
            println!("Histórico de Ações ({})", history.window_label);
            if history.actions.is_empty() {
                println!("Nenhuma ação encontrada para este período");
            }
            for action in &history.actions {
                println!(
                    "{} - {}  {}",
                    action.time.format("%H:%M"),
                    format_date(action.date),
                    action.action
                );
            }
        }
        Some(Commands::Ask { query }) => {
            let result = commands::query::execute_query(&state, &query.join(" ")).map_err(|e| anyhow!(e))?;
            if cli.json {
                return print_json(&result);
            }
            println!("Resultado:\n{}", result.answer);
        }
        Some(Commands::Routine { date, action }) => {
            let shown = match action {
                Some(RoutineAction::Add { date: event_date, kind, title, description }) => {
                    let notice = commands::routine::add_routine_event(
                        &mut state,
                        event_date.as_deref(),
                        &kind,
                        &title,
                        &description,
                    )
                    .map_err(|e| anyhow!(e))?;
                    print_notice(&notice, cli.json)?;
                    date.or(event_date)
                }
                None => date,
            };

            let day = commands::routine::get_routine_day(&state, shown.as_deref()).map_err(|e| anyhow!(e))?;
            if cli.json {
                return print_json(&day);
            }
            println!("{}", day.heading);
            if day.date.is_some() && day.events.is_empty() {
                println!("Nenhum evento para esta data");
            }
            for event in &day.events {
                println!("{} {} [{}]", event.kind.icon(), event.title, event.kind.label());
                if !event.description.is_empty() {
                    println!("   {}", event.description);
                }
            }
        }
        Some(Commands::Patient { name, age, gender, condition }) => {
            let form = PatientForm {
                name,
                age,
                gender,
                clinical_condition: condition,
            };
            let notice = commands::patient::save_patient_info(&mut state, form).map_err(|e| anyhow!(e))?;
            print_notice(&notice, cli.json)?;
            if let Some(patient) = state.patient.as_ref().filter(|_| !cli.json) {
                println!(
                    "{}, {} anos, {}, situação clínica {}",
                    patient.name,
                    patient.age,
                    patient.gender.label(),
                    patient.clinical_condition.label()
                );
            }
        }
        Some(Commands::Monitor { ip, name, quality, capture }) => {
            if ip.is_some() || name.is_some() || quality.is_some() {
                let notice = commands::monitoring::configure_camera(&mut state, ip, name, quality.as_deref())
                    .map_err(|e| anyhow!(e))?;
                print_notice(&notice, cli.json)?;
            }
            if capture {
                print_notice(&commands::monitoring::capture_snapshot(&state), cli.json)?;
            }
            let view = commands::monitoring::get_monitoring_view(&state);
            if cli.json {
                return print_json(&view);
            }
            println!("{}\n{}\n{}", view.heading, view.caption, view.details);
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_notice(notice: &Notice, json: bool) -> Result<()> {
    if json {
        return print_json(notice);
    }
    match notice.variant {
        NoticeVariant::Default => println!("{}: {}", notice.title, notice.description),
        NoticeVariant::Destructive => eprintln!("{}: {}", notice.title, notice.description),
    }
    Ok(())
}
