//! Freight Calculator - Demo CLI
//!
//! Scripted demonstration of the core engine: prices a handful of fixed
//! trips, records them in a throwaway history file, and prints the
//! resulting statistics. No network access involved.

use anyhow::Result;
use freightcalc_lib::core::{AxleCount, PricingConfig, TripType};
use freightcalc_lib::ledger::{HistoryLedger, Window};
use freightcalc_lib::pricing::PricingEngine;
use freightcalc_lib::trip::TripDraft;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Freight Calculator - Demo CLI");
    println!("==============================================\n");

    // 1. Pricing engine with the default rate table
    println!("[1/3] Initializing Pricing Engine...");
    let pricing_config = PricingConfig::default();
    let engine = PricingEngine::new(&pricing_config);
    println!("      Surcharge: {} {:.2}", pricing_config.currency_symbol, pricing_config.surcharge);
    println!(
        "      Rate (4 axles): {:.4} {}/km\n",
        engine.rate_for(AxleCount::Four),
        pricing_config.currency_symbol
    );

    // 2. Throwaway history file
    println!("[2/3] Opening throwaway history...");
    let dir = tempfile::tempdir()?;
    let mut ledger = HistoryLedger::open(dir.path().join("history.json"))?;
    println!("      File: {}\n", ledger.path().display());

    // 3. Price and record a few trips
    println!("[3/3] Pricing demo trips...\n");
    println!("----------------------------------------------");
    println!("  Route                    |   km    | Amount");
    println!("----------------------------------------------");

    let trips: [(&str, &str, f64, AxleCount, TripType); 3] = [
        ("Campinas", "Santos", 160.0, AxleCount::Four, TripType::OneWay),
        ("Curitiba", "Joinville", 130.0, AxleCount::Two, TripType::RoundTrip),
        ("Belo Horizonte", "Vitoria", 520.0, AxleCount::Six, TripType::OneWay),
    ];

    for (origin, dest, km, axles, trip_type) in trips {
        let mut draft = TripDraft::new(trip_type);
        draft.add_leg(origin, dest, km)?;
        let record = draft.into_record(&engine, axles)?;

        println!(
            "  {:<24} | {:>7.1} | {:>8.2}",
            format!("{} -> {}", origin, dest),
            record.distance_km,
            record.amount
        );
        ledger.append(record)?;
    }

    println!("----------------------------------------------\n");

    // Summary
    println!("=== History Summary ===\n");
    println!("  Records: {}", ledger.len());

    if let Some(stats) = ledger.statistics(Window::All) {
        let symbol = &pricing_config.currency_symbol;
        println!("  Average: {} {:.2}", symbol, stats.mean);
        println!("  Minimum: {} {:.2}", symbol, stats.min);
        println!("  Maximum: {} {:.2}", symbol, stats.max);
    }

    // Reload to show the file round-trips
    let reloaded = HistoryLedger::open(ledger.path())?;
    println!("\n  Reloaded from disk: {} record(s)", reloaded.len());

    println!("\n==============================================\n");
    Ok(())
}
