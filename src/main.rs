use clap::Parser;
use movie_booking::utils::{logger, validation::Validate};
use movie_booking::{AppState, BookingError, BookingServer, CliConfig};

fn report_startup_failure(stage: &str, e: &BookingError) -> ! {
    tracing::error!("❌ {} failed: {}", stage, e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            let source = cli.config.as_deref().unwrap_or("<defaults>");
            eprintln!("❌ Failed to load config '{}': {}", source, e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let level = config.logging.level.as_deref();
    if config.json_logs() {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting movie-booking service");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        report_startup_failure("Configuration validation", &e);
    }

    let registry = match config.build_registry() {
        Ok(registry) => registry,
        Err(e) => report_startup_failure("Catalog setup", &e),
    };
    tracing::info!(
        "Catalog ready: {} movies, {} showings",
        registry.list_movies().len(),
        registry.list_showings().len()
    );

    let listener = match BookingServer::bind(&config.bind_address()).await {
        Ok(listener) => listener,
        Err(e) => report_startup_failure("Binding", &e),
    };

    BookingServer::new(AppState::new(registry))
        .run(listener)
        .await?;

    Ok(())
}
