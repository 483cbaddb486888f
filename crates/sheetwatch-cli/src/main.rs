mod run;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sheetwatch")]
#[command(about = "Audits a daily-entry sheet and pushes missing/duplicate notices")]
struct Cli {
    /// Path to the audit profile; overrides SHEETWATCH_PROFILE_PATH.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Compute and log the dispatch plan without sending anything.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Nothing can be pushed without credentials, so a config failure has no
    // last-resort path; it just terminates the run.
    let config = sheetwatch_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run::run(&config, cli.profile.as_deref(), cli.dry_run).await {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            run::report_run_failure(&config, &err).await;
            Err(err)
        }
    }
}
