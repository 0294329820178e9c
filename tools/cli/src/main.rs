use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use tw_id::{validate, Gender, Generator, RegionTable};

/// Generate and validate Taiwan national identification numbers
#[derive(Parser, Debug)]
#[command(name = "tw-id", version, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a random valid identification number
    Generate {
        /// Region letter, see `tw-id regions`
        #[arg(short, long, default_value_t = 'A')]
        region: char,

        /// male, female, 1 or 2
        #[arg(short, long, default_value = "male")]
        gender: Gender,

        /// Seed the random digits for a reproducible result
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check an identification number and print the result of every check
    Validate {
        id: String,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List the region letters and their names
    Regions,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let regions = RegionTable::standard();

    match args.command {
        Command::Generate {
            region,
            gender,
            seed,
        } => {
            let id = match seed {
                Some(seed) => {
                    info!("Generating with seed {}", seed);
                    Generator::new(regions, StdRng::seed_from_u64(seed)).generate(region, gender)
                }
                None => Generator::standard().generate(region, gender),
            }
            .with_context(|| format!("Cannot generate an identification number for {region:?}"))?;
            println!("{id}");
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { id, json } => {
            let report = validate(&id);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
            Ok(if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Regions => {
            for entry in regions.entries() {
                println!("{entry}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
