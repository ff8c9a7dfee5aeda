use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::report::RunReport;

pub fn render(report: &RunReport, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(report),
    }

    Ok(())
}

fn render_table(report: &RunReport) {
    println!("run_id      : {}", report.run_id);
    println!("generated_at: {}", report.generated_at);
    println!("data_check  : {}", report.data_check);
    println!("files/exch  : {}", report.files_per_exchange);
    println!("emitted     : {}", report.emitted);
    println!("skipped     : {}", report.skipped);

    if !report.warnings.is_empty() {
        println!("warnings:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }

    if !report.outcomes.is_empty() {
        println!("files:");
        for outcome in &report.outcomes {
            match (&outcome.output, &outcome.reason) {
                (Some(output), _) => {
                    let rows = outcome.rows_written.unwrap_or_default();
                    println!("  - {} -> {} ({} rows)", outcome.file, output, rows);
                }
                (None, Some(reason)) => {
                    println!("  - {} skipped: {}", outcome.file, reason);
                }
                (None, None) => {
                    println!("  - {} {}", outcome.file, outcome.status);
                }
            }
        }
    }
}
