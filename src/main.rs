use clap::Parser;
use pwa_embed::utils::{logger, validation::Validate};
use pwa_embed::{AssetDir, CliConfig, EmbedEngine, InlineAssembler, PageFile, TomlConfig};

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pwa-embed CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        match TomlConfig::from_file(&path) {
            Ok(file) => {
                if let Err(e) = file.validate() {
                    tracing::error!("❌ Page config validation failed: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
                config.apply_toml(&file);
            }
            Err(e) => {
                tracing::error!("❌ Failed to load page config {}: {}", path, e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let store = AssetDir::new(config.assets_dir().to_string());
    let surface = PageFile::new(
        config.output_path().to_string(),
        config.page_title().to_string(),
        config.page_description().to_string(),
    );
    let assembler = InlineAssembler::new(store, config);
    let engine = EmbedEngine::new(assembler, surface);

    match engine.run() {
        Ok(location) => {
            tracing::info!("✅ Demo page assembled successfully!");
            println!("✅ Demo page assembled successfully!");
            println!("📁 Output saved to: {}", location);
        }
        Err(e) => {
            tracing::error!("❌ Assembly failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
