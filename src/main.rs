mod cli;
mod config;
mod error;
mod fmt;
mod holidays;
mod ledger;
mod models;
mod store;
mod transfer;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Work {
            date,
            trips,
            memo,
            substitute,
        } => cli::record::work(&date, trips, memo, substitute),
        Commands::Off { date, memo } => cli::record::off(&date, memo),
        Commands::Delete { date } => cli::record::delete(&date),
        Commands::Show { date } => cli::record::show(&date),
        Commands::Calendar { month } => cli::calendar::run(month),
        Commands::Summary { month } => cli::summary::run(month),
        Commands::Rates {
            trip_rate,
            lunch,
            holiday_pay,
            base_salary,
            full_days,
        } => cli::rates::run(cli::rates::RateUpdate {
            trip_rate,
            lunch,
            holiday_pay,
            base_salary,
            full_days,
        }),
        Commands::Export { output } => cli::export::run(output),
        Commands::Import { file, yes } => cli::import::run(&file, yes),
        Commands::Status => cli::status::run(),
        Commands::Load { path } => cli::load::run(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
