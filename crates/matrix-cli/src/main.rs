use anyhow::Result;
use clap::{Arg, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use matrix_cli::job::{load_job_config, run_job, JobConfig, Operation};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATRIX_LOG", "error,matrix=info"))
        .init();

    let operations: Vec<&'static str> = Operation::ALL.iter().map(|op| op.name()).collect();

    let matches = Command::new("matrix")
        .version(clap::crate_version!())
        .about("Dense matrix arithmetic: products, determinants, cofactors and inverses")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Run the operation described by a JSON job file")
                .arg(
                    Arg::new("job")
                        .help("Path to the job file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("op")
                        .short('o')
                        .long("op")
                        .help("Operation to run. Overrides the operation in the job file.")
                        .value_parser(clap::builder::PossibleValuesParser::new(operations)),
                )
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .help("Digits after the decimal point. Overrides the job file.")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(Command::new("template").about("Print a default job file as JSON"))
        .get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => handle_run(run_matches),
        Some(("template", _)) => {
            let template = serde_json::to_string_pretty(&JobConfig::default())?;
            println!("{}", template);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_run(matches: &ArgMatches) -> Result<()> {
    let job_path: &PathBuf = matches
        .get_one("job")
        .expect("job is a required argument");
    log::info!("[matrix] Running job: {:?}", job_path);

    let mut config = load_job_config(job_path)?;
    if let Some(op) = matches.get_one::<String>("op") {
        config.operation = Operation::from_str(op).map_err(anyhow::Error::msg)?;
    }
    if let Some(precision) = matches.get_one::<usize>("precision") {
        config.precision = *precision;
    }

    match run_job(&config) {
        Ok(output) => {
            println!("{}", output.render(config.precision));
            Ok(())
        }
        Err(e) => {
            log::error!("`{}` failed: {:#}", config.operation, e);
            std::process::exit(1)
        }
    }
}
