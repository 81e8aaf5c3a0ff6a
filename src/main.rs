use anyhow::Context;
use clap::Parser;
use opds_feed::core::ConfigProvider;
use opds_feed::domain::ports::Storage;
use opds_feed::utils::error::ErrorSeverity;
use opds_feed::utils::{logger, validation::Validate};
use opds_feed::{
    adapters, encode, encode_pretty, CliConfig, DecodeOptions, DisplayList, Feed, FeedReader,
    LocalStorage, TomlConfig,
};
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    let mut headers = HashMap::new();
    if let Some(path) = config.config.clone() {
        tracing::info!("Loading configuration from: {}", path);
        let file = TomlConfig::from_file(&path)
            .with_context(|| format!("Failed to load config file '{}'", path))?;
        headers = file.headers();
        config.merge(&file);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let source = adapters::source_for(
        config.source(),
        Duration::from_secs(config.timeout_seconds()),
        headers,
    )?;
    let options = DecodeOptions {
        max_depth: config.max_depth(),
    };
    let reader = FeedReader::with_options(source, options);

    let feed = match reader.read().await {
        Ok(feed) => feed,
        Err(e) => {
            tracing::error!(
                "Reading feed failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    if config.summary {
        print_summary(&feed);
        return Ok(());
    }

    let bytes = if config.pretty() {
        encode_pretty(&feed)?
    } else {
        encode(&feed)?
    };

    match config.output_path() {
        Some(path) => {
            LocalStorage::new(".")
                .write_file(path, &bytes)
                .await
                .with_context(|| format!("Failed to write '{}'", path))?;
            tracing::info!("Canonical feed written to: {}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn print_summary(feed: &Feed) {
    println!("Title: {}", feed.metadata.title);
    if feed.metadata.number_of_items > 0 {
        println!(
            "Items: {} (page {}, {} per page)",
            feed.metadata.number_of_items, feed.metadata.current_page, feed.metadata.items_per_page
        );
    }
    if !feed.navigation.is_empty() {
        println!("Navigation: {}", feed.navigation.joined());
    }
    for facet in &feed.facets {
        println!("Facet '{}': {}", facet.metadata.title, facet.links.joined());
    }

    let grouped = feed
        .groups
        .iter()
        .flat_map(|group| group.publications.iter().map(move |p| (Some(group), p)));
    let loose = feed.publications.iter().map(|p| (None, p));

    for (group, publication) in loose.chain(grouped) {
        let metadata = &publication.metadata;
        let mut line = format!("- {}", metadata.title);
        if !metadata.author.is_empty() {
            line.push_str(&format!(" by {}", metadata.author.joined()));
        }
        if let Some(belongs_to) = &metadata.belongs_to {
            if !belongs_to.series.is_empty() {
                line.push_str(&format!(" [{}]", belongs_to.series.joined()));
            }
        }
        if let Some(group) = group {
            line.push_str(&format!(" ({})", group.metadata.title));
        }
        println!("{}", line);
    }
}
