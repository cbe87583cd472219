//! Command handlers

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Local;
use tracing::{info, warn};
use yuno_app::booking::BookingForm;
use yuno_app::config::Config;
use yuno_app::render::render_session;
use yuno_app::repository::load_catalog;
use yuno_app::session::FleetSession;
use yuno_domain::model::Quote;
use yuno_domain::service::{auto_return, compute_auto_quote, compute_quote};
use yuno_types::{FleetError, FleetFilter, OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_booking, output_fleet, output_quote, output_vehicles};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Fleet {
            filter,
            select,
            jump,
            keys,
        } => cmd_fleet(
            &config,
            cli.catalog.clone(),
            output_format,
            filter.clone(),
            select.as_deref(),
            *jump,
            keys,
        ),

        Commands::Vehicles => cmd_vehicles(&config, cli.catalog.clone(), output_format),

        Commands::Quote {
            vehicle,
            pickup_date,
            pickup_time,
            return_date,
            return_time,
        } => cmd_quote(
            &config,
            cli.catalog.clone(),
            output_format,
            vehicle,
            pickup_date,
            pickup_time,
            return_date.as_deref(),
            return_time,
        ),

        Commands::Book {
            name,
            phone,
            vehicle,
            pickup_date,
            pickup_time,
            return_date,
            return_time,
            notes,
        } => {
            let form = BookingForm {
                full_name: name.clone(),
                phone: phone.clone(),
                pickup_date: pickup_date.clone(),
                pickup_time: pickup_time.clone(),
                return_date: return_date.clone().unwrap_or_default(),
                return_time: return_time.clone(),
                vehicle_id: vehicle.clone(),
                notes: notes.clone(),
            };
            cmd_book(&config, cli.catalog.clone(), output_format, form)
        }

        Commands::Browse => cmd_browse(&config, cli.catalog.clone()),

        Commands::Config {
            show,
            set_number,
            set_catalog,
            set_pickup_time,
            set_output,
            reset,
        } => cmd_config(
            config,
            *show,
            set_number.clone(),
            set_catalog.clone(),
            set_pickup_time.clone(),
            *set_output,
            *reset,
        ),
    }
}

fn open_session(config: &Config, catalog: Option<PathBuf>) -> Result<FleetSession> {
    let catalog = load_catalog(config, catalog)?;
    info!(vehicles = catalog.len(), "fleet loaded");
    Ok(FleetSession::new(catalog))
}

fn cmd_fleet(
    config: &Config,
    catalog: Option<PathBuf>,
    output_format: OutputFormat,
    filter: FleetFilter,
    select: Option<&str>,
    jump: Option<usize>,
    keys: &[String],
) -> Result<()> {
    let mut session = open_session(config, catalog)?;
    session.set_filter(filter);

    if let Some(id) = select {
        session.book_from_card(id)?;
    }
    if let Some(index) = jump {
        session.click_dot(index)?;
    }
    if !keys.is_empty() {
        session.attach_keyboard();
        for key in keys {
            if session.press_key(key.trim()).is_empty() {
                warn!(key = key.as_str(), "key ignored");
            }
        }
    }

    output_fleet(output_format, &session)
}

fn cmd_vehicles(
    config: &Config,
    catalog: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<()> {
    let session = open_session(config, catalog)?;
    output_vehicles(output_format, session.catalog(), &session.vehicle_options())
}

#[allow(clippy::too_many_arguments)]
fn cmd_quote(
    config: &Config,
    catalog: Option<PathBuf>,
    output_format: OutputFormat,
    vehicle_id: &str,
    pickup_date: &str,
    pickup_time: &str,
    return_date: Option<&str>,
    return_time: &str,
) -> Result<()> {
    let session = open_session(config, catalog)?;
    let (_, vehicle) = session
        .catalog()
        .find(vehicle_id)
        .ok_or_else(|| FleetError::NotFound(vehicle_id.to_string()))?;

    let quote: Quote = match return_date {
        Some(return_date) => compute_quote(
            pickup_date,
            pickup_time,
            return_date,
            return_time,
            vehicle.daily_rate,
            vehicle.weekly_rate,
        )?,
        None => compute_auto_quote(
            &Local,
            &config.quote_config()?,
            pickup_date,
            pickup_time,
            vehicle.daily_rate,
            vehicle.weekly_rate,
        )?,
    };

    output_quote(output_format, vehicle_id, &quote)
}

fn cmd_book(
    config: &Config,
    catalog: Option<PathBuf>,
    output_format: OutputFormat,
    mut form: BookingForm,
) -> Result<()> {
    let session = open_session(config, catalog)?;

    // No return chosen: derive it the way the date picker does
    if form.return_date.trim().is_empty() && !form.pickup_date.trim().is_empty() {
        let quote_config = config.quote_config()?;
        match auto_return(&quote_config, &form.pickup_date, &form.pickup_time) {
            Ok(point) => {
                form.return_date = point.date_string();
                form.return_time = point.time_string();
            }
            Err(e) => warn!(error = %e, "could not derive a return date"),
        }
    }

    let today = Local::now().date_naive();
    let request = form.validate(session.catalog(), today)?;
    output_booking(
        output_format,
        &request,
        &config.whatsapp_number,
        &config.brand_name,
    )
}

/// Line-driven carousel for terminals
fn cmd_browse(config: &Config, catalog: Option<PathBuf>) -> Result<()> {
    let mut session = open_session(config, catalog)?;
    session.attach_keyboard();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("{}", render_session(&session));
    println!("Commands: next | prev | filter <all|bike|scooty> | select <id> | jump <n> | quit");

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next().unwrap_or("");

        let outcome: std::result::Result<(), FleetError> = match command {
            "n" | "next" => {
                session.press_key("ArrowRight");
                Ok(())
            }
            "p" | "prev" => {
                session.press_key("ArrowLeft");
                Ok(())
            }
            "f" | "filter" => {
                session.set_filter(FleetFilter::from(arg.to_string()));
                Ok(())
            }
            "s" | "select" => session.book_from_card(arg).map(|_| ()),
            "j" | "jump" => match arg.parse::<usize>() {
                Ok(index) => session.click_dot(index).map(|_| ()),
                Err(_) => {
                    println!("jump needs a number");
                    continue;
                }
            },
            "q" | "quit" | "exit" => break,
            other => {
                println!("Unknown command: {}", other);
                continue;
            }
        };

        if let Err(e) = outcome {
            println!("{}", e);
            continue;
        }
        print!("{}", render_session(&session));
        if let Some(id) = session.booking_vehicle() {
            println!("Booking vehicle: {}", id);
        }
    }

    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_number: Option<String>,
    set_catalog: Option<PathBuf>,
    set_pickup_time: Option<String>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut changed = false;
    if let Some(number) = set_number {
        config.whatsapp_number = number.chars().filter(char::is_ascii_digit).collect();
        changed = true;
    }
    if let Some(path) = set_catalog {
        config.catalog_path = Some(path);
        changed = true;
    }
    if let Some(time) = set_pickup_time {
        config.default_pickup_time = time;
        config.quote_config()?;
        changed = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved.");
    }
    if show || !changed {
        print!("{}", config);
    }
    Ok(())
}
