use clap::Parser;
use numdrill::adapters::input::ConsoleSource;
use numdrill::core::{ConfigProvider, Exercise};
use numdrill::utils::error::ErrorSeverity;
use numdrill::utils::{logger, validation::Validate};
use numdrill::{ClassifierExercise, CliConfig, DrillEngine, LocalReportSink, PerfectExercise};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting numdrill CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run_exercises(&config).await {
        Ok(()) => {
            tracing::info!("✅ All drills completed successfully!");
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Drill failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

async fn run_exercises(config: &CliConfig) -> numdrill::Result<()> {
    for name in config.execution_order() {
        match name {
            "classify" => {
                let source = ConsoleSource::stdin(config.max_input_retries());
                let engine = DrillEngine::new(ClassifierExercise::new(source));
                run_one(engine, config).await?;
            }
            "perfect" => {
                let engine = DrillEngine::new(PerfectExercise::new(config.clone()));
                run_one(engine, config).await?;
            }
            other => {
                tracing::warn!("Unknown exercise '{}', skipping", other);
            }
        }
    }
    Ok(())
}

async fn run_one<E: Exercise>(
    mut engine: DrillEngine<E>,
    config: &CliConfig,
) -> numdrill::Result<()> {
    if let Some(path) = config.output_path() {
        let sink = LocalReportSink::new(path.to_string());
        engine.run_and_store(&sink).await?;
    } else {
        engine.run().await?;
    }
    Ok(())
}
