use crate::consts::SECONDS_IN_DAY;
use crate::models::ray::Ray;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Per-second stability fee as a raw ray integer (10^27 = 1.0)
    #[arg(long)]
    pub stability_fee: Option<Ray>,

    /// Per-second governance fee as a raw ray integer (10^27 = 1.0)
    #[arg(long)]
    pub governance_fee: Option<Ray>,

    /// Elapsed seconds to compound over
    #[arg(long, default_value_t = SECONDS_IN_DAY)]
    pub seconds: u64,

    /// Emit CSV rows instead of labelled lines
    #[arg(long)]
    pub csv: bool,
}
