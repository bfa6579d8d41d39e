//! bogsweep - categorized domain blocklist aggregator.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use bogsweep::cli::Cli;
use bogsweep::config::Config;
use bogsweep::fetcher::HttpFetcher;
use bogsweep::pipeline;
use bogsweep::utils::format_count;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.apply(Config::load_or_default(&cli.config)?);

    let fetcher = HttpFetcher::new(config.timeout())?;
    let summary = pipeline::run(&config, &fetcher).await?;

    println!();
    for report in &summary.reports {
        println!(
            "{}: {} new entries ({} sources ok, {} failed, {} excluded)",
            report.result.category.name,
            format_count(report.result.novel.len()),
            report.result.succeeded(),
            report.result.failed(),
            report.result.category.excluded.len()
        );
    }
    for name in &summary.missing {
        println!("{name}: not found on index page");
    }
    println!(
        "Total unique domains across all lists: {}",
        format_count(summary.total_unique)
    );

    Ok(())
}
