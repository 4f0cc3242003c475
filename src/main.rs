use clap::Parser;
use conference_pages::utils::{logger, validation::Validate};
use conference_pages::{CliConfig, ConferencePipeline, GenerationEngine, LocalStorage};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI flags: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("Error: {}", e);
            eprintln!("Hint: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!(
        "Generating pages from {} into {}",
        config.feed_url,
        config.output_dir
    );

    let storage = LocalStorage::new(config.output_dir.clone());
    let pipeline = ConferencePipeline::new(storage, config);
    let engine = GenerationEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "All HTML files generated successfully! ({} pages and {} in {})",
                report.page_paths.len(),
                report.stylesheet_path,
                report.output_dir
            );
        }
        Err(e) => {
            tracing::error!("Generation failed: {}", e);
            eprintln!("Error: {}", e);
            eprintln!("Hint: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
