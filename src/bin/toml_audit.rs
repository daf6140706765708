use clap::Parser;
use small_audit::config::toml_config::{LogFormat, TomlConfig};
use small_audit::core::ConfigProvider;
use small_audit::utils::{logger, validation::Validate};
use small_audit::{AuditEngine, AuditPipeline, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-audit")]
#[command(about = "Run an audit job described by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "audit-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let level = if args.verbose { "debug" } else { config.log_level() };
    match config.log_format() {
        LogFormat::Json => logger::init_json_logger(level),
        LogFormat::Compact => logger::init_compact_logger(level),
    }

    tracing::info!("🚀 Starting TOML-based audit job '{}'", config.job.name);
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code().max(1));
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        return Ok(());
    }

    let pipeline = AuditPipeline::new(LocalStorage::default(), config);
    let engine = AuditEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Audit job completed successfully!");
            println!("✅ Audit job completed successfully!");
            println!("📁 Report saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Audit job failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Job: {}", config.job.name);
    if let Some(description) = &config.job.description {
        println!("  Description: {}", description);
    }

    for (kind, path) in config.configured_inputs() {
        println!("  Input ({}): {}", kind, path);
    }

    println!("  Output: {}", config.output_path());
    let formats: Vec<&str> = config
        .output_formats()
        .iter()
        .map(|format| format.file_name())
        .collect();
    println!("  Files: {}", formats.join(", "));

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
