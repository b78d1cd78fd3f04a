// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toposcope_cli::commands::{betti, observe, verify_report};
use toposcope_cli::telemetry;

#[derive(Parser)]
#[command(name = "toposcope")]
#[command(
    about = "Toposcope - topological flight recorder for numeric snapshots",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Observe one or more point-cloud files in a single audit session and
    /// emit the comprehensive audit report.
    Observe {
        /// JSON point-cloud files (array of rows, or a flat numeric series).
        files: Vec<PathBuf>,

        /// Highest homology dimension to report (0..=2).
        #[arg(long, default_value_t = 2)]
        max_dimension: usize,

        /// Seed for the session's Merkle chain.
        #[arg(long, default_value = "genesis")]
        merkle_seed: String,

        /// Prefix for generated source identifiers.
        #[arg(long, default_value = "snapshot")]
        source_prefix: String,

        /// Write the report here instead of stdout.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Compute Betti numbers for a single point-cloud file.
    Betti {
        file: PathBuf,

        /// Filtration threshold.
        #[arg(long, short, default_value_t = 0.0)]
        threshold: f64,
    },
    /// Verify the structural consistency of an emitted audit report.
    VerifyReport {
        report: PathBuf,

        /// Fail unless the report's Merkle root equals this value.
        #[arg(long)]
        expected_root: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let cli = Cli::parse();
    match cli.command {
        Commands::Observe {
            files,
            max_dimension,
            merkle_seed,
            source_prefix,
            out,
        } => observe::run(
            &files,
            max_dimension,
            &merkle_seed,
            &source_prefix,
            out.as_deref(),
        ),
        Commands::Betti { file, threshold } => betti::run(&file, threshold),
        Commands::VerifyReport {
            report,
            expected_root,
        } => verify_report::run(&report, expected_root.as_deref()),
    }
}
