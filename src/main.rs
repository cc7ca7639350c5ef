use centroid_report::cli::{parse_args, run, summary_lines, Invocation, USAGE};
use centroid_report::error::ReportError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!("CLI application startup: tracing initialised");

    let result = match parse_args(std::env::args_os()) {
        Ok(Invocation::Run(cli)) => run(cli),
        Ok(Invocation::Exit(help_or_version)) => help_or_version.exit(),
        Err(usage) => Err(usage),
    };

    match result {
        Ok(report) => {
            for line in summary_lines(&report) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn report_failure(e: &ReportError) {
    match e {
        ReportError::Usage(_) | ReportError::NotFound { .. } => {
            println!("Error: {e}");
            println!("{USAGE}");
        }
        _ => eprintln!("[ERROR] {e}"),
    }
}
