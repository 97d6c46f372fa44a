use crate::cli::Cli;
use crate::errors::AppResult;
use crate::models::fee_rates::FeeRates;
use crate::services::accrual_service::{compound_fees, describe_period};
use crate::services::output_service::{emit_csv, emit_text};
use clap::Parser;
use log::{error, info};
use std::io;

mod cli;
mod consts;
mod errors;
mod models;
mod services;

fn main() -> AppResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    let args = Cli::parse();

    let defaults = FeeRates::default();
    let rates = FeeRates {
        stability_fee: args.stability_fee.unwrap_or(defaults.stability_fee),
        governance_fee: args.governance_fee.unwrap_or(defaults.governance_fee),
    };

    info!("compounding fees over {}", describe_period(args.seconds));
    let multipliers = compound_fees(&rates, args.seconds);

    let out = io::stdout();
    let handle = out.lock();
    let res = if args.csv {
        emit_csv(&multipliers, handle)
    } else {
        emit_text(&multipliers, handle)
    };
    if let Err(e) = &res {
        error!("failed to emit results: {e}");
    }
    res
}
