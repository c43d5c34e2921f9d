use anyhow::{Context, anyhow};
use bergbest::cli::Cli;
use bergbest::config::{ConfigError, RunConfig};
use bergbest::corpus::discover_years;
use bergbest::models::{
    BERGBEST_OUTPUT_FORMAT_VERSION, ExtraData, Header, Output, SystemEnvironment,
};
use bergbest::scanner::{ProcessResult, process};
use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde_json::to_string_pretty;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        let status = if err.downcast_ref::<ConfigError>().is_some() {
            2
        } else {
            1
        };
        std::process::exit(status);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = RunConfig::from_cli(cli)?;
    let start_time = Utc::now();

    let years = match config.years {
        Some(range) => range.years(),
        None => {
            let years = discover_years(&config.xml_dir, config.languages.source);
            if years.is_empty() {
                return Err(anyhow!(
                    "No {} yearbook found in {:?}",
                    config.languages.source.english_name(),
                    config.xml_dir
                ));
            }
            years
        }
    };
    info!("Processing {} yearbook(s): {:?}", years.len(), years);

    let progress_bar = create_progress_bar(years.len(), cli.quiet)?;
    let result = process(
        &config.xml_dir,
        &years,
        config.languages,
        &config.vocabulary,
        Arc::clone(&progress_bar),
    )?;
    progress_bar.finish_and_clear();

    if !cli.quiet {
        print_report(&result);
    }

    let end_time = Utc::now();
    let output = create_output(start_time, end_time, &years, &config, result);
    write_output(&config.output_file, &output)?;

    if !cli.quiet {
        println!("JSON output written to {:?}", config.output_file);
    }
    Ok(())
}

fn create_progress_bar(total_years: usize, quiet: bool) -> anyhow::Result<Arc<ProgressBar>> {
    if quiet {
        return Ok(Arc::new(ProgressBar::hidden()));
    }
    let progress_bar = ProgressBar::new(total_years as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} yearbooks processed ({eta})")
            .context("Failed to create progress bar style")?
            .progress_chars("#>-"),
    );
    Ok(Arc::new(progress_bar))
}

fn print_report(result: &ProcessResult) {
    for yearbook in &result.yearbooks {
        for pair in &yearbook.article_pairs {
            println!("{}", pair);
        }
    }

    let pairs: usize = result.yearbooks.iter().map(|y| y.article_pairs.len()).sum();
    let candidates: usize = result.yearbooks.iter().map(|y| y.candidate_count()).sum();
    println!(
        "\n{} candidate sentence(s) in {} article pair(s) from {} yearbook(s)",
        candidates,
        pairs,
        result.yearbooks.len()
    );
}

fn create_output(
    start_time: chrono::DateTime<Utc>,
    end_time: chrono::DateTime<Utc>,
    years: &[u16],
    config: &RunConfig,
    result: ProcessResult,
) -> Output {
    let duration = (end_time - start_time).num_nanoseconds().unwrap_or(0) as f64 / 1_000_000_000.0;

    let extra_data = ExtraData {
        years_requested: years.to_vec(),
        yearbooks_processed: result.yearbooks.len(),
        article_pairs_count: result.yearbooks.iter().map(|y| y.article_pairs.len()).sum(),
        candidate_sentences_count: result.yearbooks.iter().map(|y| y.candidate_count()).sum(),
        source_language: config.languages.source,
        target_language: config.languages.target,
        system_environment: SystemEnvironment {
            operating_system: sys_info::os_type().ok(),
            cpu_architecture: env::consts::ARCH.to_string(),
            platform: format!(
                "{}-{}-{}",
                sys_info::os_type().unwrap_or_else(|_| "unknown".to_string()),
                sys_info::os_release().unwrap_or_else(|_| "unknown".to_string()),
                env::consts::ARCH
            ),
            rust_version: rustc_version_runtime::version().to_string(),
        },
    };

    let errors = result.error_messages();

    Output {
        headers: vec![Header {
            start_timestamp: start_time.to_rfc3339(),
            end_timestamp: end_time.to_rfc3339(),
            duration,
            extra_data,
            errors,
            output_format_version: BERGBEST_OUTPUT_FORMAT_VERSION.to_string(),
        }],
        yearbooks: result.yearbooks,
    }
}

fn write_output(output_file: &Path, output: &Output) -> anyhow::Result<()> {
    let json_output = to_string_pretty(output).context("Failed to serialize output")?;
    let mut file = File::create(output_file)
        .with_context(|| format!("Failed to create output file {:?}", output_file))?;
    file.write_all(json_output.as_bytes())?;
    Ok(())
}
