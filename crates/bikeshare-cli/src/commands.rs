use std::path::Path;

use anyhow::{Context as _, Result};
use comfy_table::Table;

use bikeshare_model::City;

use crate::cli::AnalyzeArgs;
use crate::pipeline::run_session;
use crate::prompt::{prompt_restart, prompt_session_config};
use crate::summary::{apply_table_style, print_report, report_json};
use crate::types::SessionConfig;

/// One non-interactive analysis run.
pub fn run_analyze(data_dir: &Path, args: &AnalyzeArgs) -> Result<()> {
    let config = SessionConfig {
        data_dir: data_dir.to_path_buf(),
        city: args.city,
        filter: bikeshare_model::FilterSpec {
            month: args.month,
            day: args.day,
        },
        timings: args.timings,
    };
    let report = run_session(&config).context("run analysis session")?;
    if args.json {
        let rendered = serde_json::to_string_pretty(&report_json(&report))
            .context("serialize report")?;
        println!("{rendered}");
    } else {
        print_report(&report);
    }
    Ok(())
}

/// The interactive loop: prompt, analyze, offer a fresh session.
///
/// A failed session is reported and does not end the loop; the user decides
/// whether to try again.
pub fn run_interactive(data_dir: &Path) -> Result<()> {
    loop {
        let config = prompt_session_config(data_dir)?;
        match run_session(&config) {
            Ok(report) => print_report(&report),
            Err(error) => eprintln!("error: {error}"),
        }
        if !prompt_restart()? {
            break;
        }
    }
    Ok(())
}

/// Lists the supported cities and their dataset files.
pub fn run_cities() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["City", "Data file"]);
    apply_table_style(&mut table);
    for city in City::ALL {
        table.add_row(vec![city.label(), city.data_file()]);
    }
    println!("{table}");
    Ok(())
}
