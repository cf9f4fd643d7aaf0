use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "assessor", about = "Scores recorded interview answers")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Recordings to assess, appended to `[batch].inputs`
    inputs: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = assessor_core::AppConfig::load_from_file(&cli.config)
        .with_context(|| format!("failed to load config from {:?}", cli.config))?;

    let env_filter = EnvFilter::try_new(&config.general.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        );

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    tracing::info!("assessor starting");

    let references = assessor_core::ReferenceSet::load_from_file(&config.batch.references)
        .with_context(|| {
            format!(
                "failed to load reference answers from {:?}",
                config.batch.references
            )
        })?;
    tracing::info!(
        "loaded {} reference answer(s) from {:?}",
        references.len(),
        config.batch.references
    );

    let registry = assessor_engine::ProviderRegistry::new();
    let transcriber = registry
        .init_transcriber(
            &config.transcription.provider,
            config.transcription.options.clone(),
        )
        .await
        .with_context(|| {
            format!(
                "failed to initialize transcription provider '{}'",
                config.transcription.provider
            )
        })?;
    let scorer = registry
        .init_scorer(&config.similarity.provider, config.similarity.options.clone())
        .await
        .with_context(|| {
            format!(
                "failed to initialize similarity provider '{}'",
                config.similarity.provider
            )
        })?;

    let mut assessment_host = assessor_engine::AssessmentHost::new(references, transcriber, scorer);
    let result_rx = assessment_host
        .take_result_receiver()
        .context("assessment result receiver already taken")?;

    let mut report_host = assessor_report::ReportHost::new(result_rx);
    if config.report.is_empty() {
        // Fallback: log results when no report sinks are configured
        report_host
            .add_sink("log", toml::Value::Table(Default::default()))
            .await
            .context("failed to add fallback log sink")?;
    }
    for sink_cfg in &config.report {
        report_host
            .add_sink(&sink_cfg.plugin, sink_cfg.extra.clone())
            .await
            .with_context(|| format!("failed to add report sink '{}'", sink_cfg.plugin))?;
        tracing::info!("reporting to sink '{}'", sink_cfg.plugin);
    }
    report_host.start();

    let mut inputs = config.batch.inputs.clone();
    inputs.extend(cli.inputs);
    if inputs.is_empty() {
        tracing::warn!("no inputs configured");
    }

    tracing::info!(
        "assessing {} recording(s) with '{}' / '{}', concurrency {}",
        inputs.len(),
        config.transcription.provider,
        config.similarity.provider,
        config.batch.concurrency,
    );

    let summary = assessment_host
        .run(inputs, config.batch.concurrency)
        .await;

    tracing::info!("shutting down");
    assessment_host.shutdown().await;
    let reported = report_host.shutdown().await;

    println!(
        "assessed {}, skipped {}, failed {} ({} reported)",
        summary.assessed, summary.skipped, summary.failed, reported
    );

    Ok(())
}
