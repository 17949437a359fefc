//! reqcheck binary: runs the users listing checks and exits non-zero when
//! any of them does not pass.

use std::process::ExitCode;

use reqcheck::{HarnessReport, HarnessSettings, ReportFormat, logging, run_suite};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("failed to initialize logging: {e}");
    }

    tracing::info!("Starting reqcheck v{}", env!("CARGO_PKG_VERSION"));

    let settings = match HarnessSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "invalid settings");
            return ExitCode::from(2);
        }
    };

    let report = match run_suite(&settings).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!(error = %e, "suite aborted");
            return ExitCode::from(2);
        }
    };

    if let Err(e) = print_report(&report, settings.report_format) {
        tracing::error!(error = %e, "failed to render report");
        return ExitCode::from(2);
    }

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_report(report: &HarnessReport, format: ReportFormat) -> Result<(), reqcheck::HarnessError> {
    match format {
        ReportFormat::Json => print!("{}", report.to_json()?),
        ReportFormat::Text => {
            println!("environment {} ({})", report.environment, report.base_uri);
            for outcome in &report.outcomes {
                println!("{outcome}");
            }
            println!("{}", report.summary());
        }
    }
    Ok(())
}
