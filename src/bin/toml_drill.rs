use clap::Parser;
use numdrill::adapters::input::ConsoleSource;
use numdrill::config::toml_config::TomlConfig;
use numdrill::core::{ConfigProvider, Exercise};
use numdrill::utils::{logger, validation::Validate};
use numdrill::{ClassifierExercise, DrillEngine, LocalReportSink, PerfectExercise};

#[derive(Parser)]
#[command(name = "toml-drill")]
#[command(about = "Number drills driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "drill-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override execution order from config (comma separated)
    #[arg(long, value_delimiter = ',')]
    exercises: Vec<String>,

    /// Dry run - validate and summarize without running anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based drill runner");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if !args.exercises.is_empty() {
        config.drill.execution_order = args.exercises.clone();
        tracing::info!(
            "🔧 Execution order overridden to: {:?}",
            config.drill.execution_order
        );
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No drill will be executed");
        return Ok(());
    }

    for name in config.execution_order().to_vec() {
        match name.as_str() {
            "classify" => {
                let source = ConsoleSource::stdin(config.max_input_retries());
                let engine = DrillEngine::new(ClassifierExercise::new(source));
                run_one(engine, &config).await?;
            }
            "perfect" => {
                let engine = DrillEngine::new(PerfectExercise::new(config.clone()));
                run_one(engine, &config).await?;
            }
            other => {
                tracing::warn!("Unknown exercise '{}' in execution order, skipping", other);
            }
        }
    }

    tracing::info!("✅ All drills completed successfully!");
    Ok(())
}

async fn run_one<E: Exercise>(
    mut engine: DrillEngine<E>,
    config: &TomlConfig,
) -> numdrill::Result<()> {
    if let Some(path) = config.output_path() {
        let sink = LocalReportSink::new(path.to_string());
        engine.run_and_store(&sink).await?;
    } else {
        engine.run().await?;
    }
    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("=== Drill Configuration ===");
    println!("Name:        {}", config.drill.name);
    println!("Description: {}", config.drill.description);
    println!("Version:     {}", config.drill.version);
    println!("Order:       {}", config.execution_order().join(" -> "));
    println!("Range:       [{}, {}]", config.lower(), config.upper());
    match config.output_path() {
        Some(path) => println!("Reports:     {}", path),
        None => println!("Reports:     (console only)"),
    }
    println!("===========================");
}
