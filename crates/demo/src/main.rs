use std::{error::Error as _, path::PathBuf, process::ExitCode};

use tangent_demo::{Error, Selection, report, settings};
use tangent_solvers::equation::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let mut args = std::env::args().skip(1);

    let selection = args
        .next()
        .as_deref()
        .map(str::parse::<Selection>)
        .transpose()?
        .unwrap_or_default();

    let config = args
        .next()
        .map(PathBuf::from)
        .map(|path| settings::load(&path))
        .transpose()?
        .unwrap_or_else(Config::default);

    if args.next().is_some() {
        return Err(Error::Usage);
    }

    info!(
        ?selection,
        epsilon = config.epsilon(),
        max_iters = config.max_iters(),
        "starting"
    );

    println!("SOLVING EQUATIONS BY APPROXIMATE METHODS");
    println!("{}", "=".repeat(50));

    for task in selection.tasks() {
        let report = report::run(&task, &config)?;
        println!();
        print!("{report}");
    }
    Ok(())
}
