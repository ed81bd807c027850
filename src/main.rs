use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use phenostats::run::{run, RunConfig};

/// Summary statistics and a LaTeX case table for a directory of Phenopackets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Disease annotations with modes of inheritance (`phenotype.hpoa`)
    #[arg(long)]
    hpoa: PathBuf,

    /// Directory with Phenopacket JSON files
    #[arg(short, long)]
    cases: PathBuf,

    /// HPO ontology (`hp.obo`) to map outdated term IDs to their primary ID
    #[arg(long)]
    obo: Option<PathBuf>,

    /// Path of the LaTeX report
    #[arg(short, long, default_value = "phenopacketstats.tex")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phenostats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = RunConfig {
        hpoa: args.hpoa,
        cases: args.cases,
        obo: args.obo,
        output: args.output,
    };

    match run(&config) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
