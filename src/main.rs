use tokio::io::BufReader;
use tracing::{error, info};

use msgcat::{Application, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load configuration
    let mut config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("{e}");
        eprintln!("Using default configuration.");
        config = Config::default();
    }

    // Initialize logging
    if let Err(e) = msgcat::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        msgcat::logging::init_console_only(&config.logging.level);
    }

    info!("msgcat - message catalog");

    let app = Application::new(config);
    let catalog = match app.build_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to build catalog: {e}");
            eprintln!("Failed to build catalog: {e}");
            std::process::exit(1);
        }
    };

    let reader = BufReader::new(tokio::io::stdin());
    match app.run(catalog, reader, tokio::io::stdout()).await {
        Ok(catalog) => info!(messages = catalog.len(), "session ended"),
        Err(e) => {
            error!("Session failed: {e}");
            eprintln!("Session failed: {e}");
            std::process::exit(1);
        }
    }
}
