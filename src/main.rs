use anyhow::Context;
use clap::Parser;
use step_summary::domain::model::RawUpload;
use step_summary::domain::ports::ConfigProvider;
use step_summary::utils::{logger, validation::Validate};
use step_summary::{CliConfig, Envelope, LocalSpool, SummaryEngine, TomlConfig, UploadPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting step-summary CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let bytes = tokio::fs::read(&config.input)
        .await
        .with_context(|| format!("cannot read {}", config.input.display()))?;
    let upload = RawUpload {
        media_type: config.media_type.clone(),
        bytes,
    };

    let envelope = if let Some(path) = config.config.clone() {
        let file_config = TomlConfig::from_file(&path)
            .with_context(|| format!("cannot load {}", path.display()))?;
        if let Err(e) = file_config.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        run_pipeline(file_config, upload).await
    } else {
        run_pipeline(config, upload).await
    };

    match envelope {
        Envelope::Report(report) => {
            println!("✅ {} {}", report.month_name, report.year);
            println!("Total steps:   {}", report.total_steps);
            println!("Average steps: {}", report.average_steps);
        }
        Envelope::Failure { message } => {
            eprintln!("❌ {}", message);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run_pipeline<C: ConfigProvider>(config: C, upload: RawUpload) -> Envelope {
    let storage = LocalSpool::new(config.spool_dir().to_string());
    let pipeline = UploadPipeline::new(storage, config);
    let engine = SummaryEngine::new(pipeline);
    engine.run(Some(upload)).await
}
