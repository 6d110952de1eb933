//! Freight Calculator - Main entry point
//!
//! Command-line front-end over the pricing engine and the calculation
//! history. Each subcommand runs one synchronous handler to completion:
//! user input becomes calls into the engine and the ledger, and their
//! results become printed display-state.

use clap::Parser;
use freightcalc_lib::cli::{Cli, Commands};
use freightcalc_lib::core::{AxleCount, Config, Error, Result, TripType};
use freightcalc_lib::export::{export_csv, open_file};
use freightcalc_lib::geocode::{haversine_km, Geocoder, NominatimClient};
use freightcalc_lib::i18n::I18n;
use freightcalc_lib::ledger::{HistoryLedger, Window};
use freightcalc_lib::pricing::PricingEngine;
use freightcalc_lib::trip::TripDraft;
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("falling back to default config: {}", e);
            Config::default()
        }
    };

    let lang = cli.lang.clone().unwrap_or_else(|| config.general.language.clone());
    let i18n = I18n::new(&lang);

    if let Err(e) = run(cli, &config, &i18n) {
        eprintln!("{}: {}", describe_error(&i18n, &e), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &Config, i18n: &I18n) -> Result<()> {
    let history_path = match cli.history_file {
        Some(path) => path,
        None => HistoryLedger::default_path()?,
    };
    let mut ledger = HistoryLedger::open(history_path)?;
    let engine = PricingEngine::new(&config.pricing);

    match cli.command {
        Commands::Estimate {
            origin,
            dest,
            via,
            axles,
            round_trip,
            distance_km,
            no_save,
        } => {
            let axles = AxleCount::from_u8(axles)?;
            let trip_type = if round_trip {
                TripType::RoundTrip
            } else {
                TripType::OneWay
            };

            let draft = build_draft(config, &origin, &dest, &via, trip_type, distance_km)?;
            let record = draft.into_record(&engine, axles)?;

            let symbol = engine.currency_symbol();
            println!("{}: {} -> {}", i18n.get("estimate.route"), record.origin, record.destination);
            println!("{}: {:.1} km", i18n.get("estimate.distance"), record.distance_km);
            println!("{}: {}", i18n.get("estimate.axles"), record.axle_count);
            let trip_key = if round_trip { "estimate.round_trip" } else { "estimate.one_way" };
            println!("{}: {}", i18n.get("estimate.trip_type"), i18n.get(trip_key));
            println!("{}: {} {:.2}", i18n.get("estimate.amount"), symbol, record.amount);

            if no_save {
                println!("{}", i18n.get("estimate.not_saved"));
            } else {
                ledger.append(record)?;
                println!("{}", i18n.get("estimate.saved"));
            }
        }

        Commands::History { limit, all } => {
            let records = if all {
                ledger.records().to_vec()
            } else {
                ledger.recent(limit.unwrap_or(config.history.recent_window))
            };

            if records.is_empty() {
                println!("{}", i18n.get("history.empty"));
                return Ok(());
            }

            println!("{}:", i18n.get("history.title"));
            println!(
                "{:<17} {:<20} {:<28} {:>10} {:>6} {:>12}  {}",
                i18n.get("history.date"),
                i18n.get("history.origin"),
                i18n.get("history.destination"),
                "km",
                i18n.get("estimate.axles"),
                i18n.get("estimate.amount"),
                i18n.get("estimate.trip_type"),
            );
            for r in &records {
                println!(
                    "{:<17} {:<20} {:<28} {:>10.1} {:>6} {:>12.2}  {}",
                    r.timestamp, r.origin, r.destination, r.distance_km, r.axle_count, r.amount, r.trip_type,
                );
            }
        }

        Commands::Stats { all } => {
            let window = if all {
                Window::All
            } else {
                Window::Recent(config.history.recent_window)
            };

            match ledger.statistics(window) {
                None => println!("{}", i18n.get("stats.no_data")),
                Some(stats) => {
                    let symbol = engine.currency_symbol();
                    println!("{}:", i18n.get("stats.title"));
                    println!("{}: {}", i18n.get("stats.window"), stats.count);
                    println!("{}: {} {:.2}", i18n.get("stats.mean"), symbol, stats.mean);
                    println!("{}: {} {:.2}", i18n.get("stats.min"), symbol, stats.min);
                    println!("{}: {} {:.2}", i18n.get("stats.max"), symbol, stats.max);
                }
            }
        }

        Commands::Clear { yes } => {
            if !yes {
                println!("{}", i18n.get("history.clear_confirm"));
                return Ok(());
            }
            ledger.clear()?;
            println!("{}", i18n.get("history.cleared"));
        }

        Commands::Export { output, open } => {
            let path = output.unwrap_or_else(|| PathBuf::from("freight-history.csv"));
            export_csv(ledger.records(), &path)?;
            println!("{} {}", i18n.get("export.done"), path.display());
            if open {
                open_file(&path)?;
            }
        }
    }

    Ok(())
}

/// Build the trip legs, geocoding each stop unless an explicit one-way
/// distance was given
fn build_draft(
    config: &Config,
    origin: &str,
    dest: &str,
    via: &[String],
    trip_type: TripType,
    distance_km: Option<f64>,
) -> Result<TripDraft> {
    let mut draft = TripDraft::new(trip_type);

    if let Some(km) = distance_km {
        if !via.is_empty() {
            return Err(Error::Validation(
                "--distance-km cannot be combined with --via".into(),
            ));
        }
        draft.add_leg(origin, dest, km)?;
        return Ok(draft);
    }

    let geocoder = NominatimClient::from_config(&config.geocoding)?;

    let mut stops: Vec<&str> = Vec::with_capacity(via.len() + 2);
    stops.push(origin);
    stops.extend(via.iter().map(String::as_str));
    stops.push(dest);

    // One lookup per stop, reusing the previous endpoint for the next leg
    let mut previous_name = stops[0];
    let mut previous_point = geocoder.lookup(previous_name)?;
    for &stop in &stops[1..] {
        let point = geocoder.lookup(stop)?;
        draft.add_leg(previous_name, stop, haversine_km(previous_point, point))?;
        previous_name = stop;
        previous_point = point;
    }

    Ok(draft)
}

/// Map an error to the localized message class of the user-facing taxonomy
fn describe_error(i18n: &I18n, err: &Error) -> String {
    let key = match err {
        Error::Validation(_) => "error.validation",
        Error::PlaceNotFound(_) => "error.place_not_found",
        Error::Geocoding(_) | Error::Http(_) => "error.geocoding",
        Error::Io(_) | Error::Serialization(_) | Error::Config(_) => "error.storage",
        Error::Export(_) => "error.export",
    };
    i18n.get(key)
}
