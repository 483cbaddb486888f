//! One-shot run wiring: fetch, detect, plan, deliver.

use std::path::Path;

use anyhow::Context;
use chrono::Local;
use sheetwatch_core::{plan_sends, run_audit, AppConfig, PlannedSend, Recipient};
use sheetwatch_push::PushClient;
use sheetwatch_sheets::SheetsClient;

/// Executes one audit run end to end.
///
/// The sheet fetch runs outside the core (the core is pure); its result,
/// cells or failure description, is handed to the pipeline, which treats a
/// failure as a recorded stage error rather than an abort. Delivery failures,
/// by contrast, propagate out of here untouched.
pub async fn run(
    config: &AppConfig,
    profile_override: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let profile_path = profile_override.unwrap_or(&config.profile_path);
    let profile = sheetwatch_core::load_profile(profile_path)
        .with_context(|| format!("loading audit profile from {}", profile_path.display()))?;

    tracing::info!(project = %profile.project_name, "starting audit run");

    let sheets = SheetsClient::new(
        &config.sheets_token,
        config.request_timeout_secs,
        config.fetch_max_retries,
        config.fetch_backoff_base_ms,
    )?;

    let fetched = sheets
        .fetch_column(&profile.spreadsheet_id, &profile.column_range)
        .await
        .map_err(|e| e.to_string());

    let today = Local::now().date_naive();
    let outcome = run_audit(&profile, today, fetched);

    tracing::info!(
        missing = outcome.missing.len(),
        duplicates = outcome.duplicates.len(),
        stage_errors = outcome.errors.len(),
        "detection complete"
    );

    let sends = plan_sends(&outcome, profile.admin_copy_msg, profile.admin_all_copy_mode);

    if sends.is_empty() {
        tracing::info!("nothing to send");
        return Ok(());
    }

    if dry_run {
        for send in &sends {
            tracing::info!(recipient = ?send.recipient, title = %send.title, "dry run: would send");
        }
        return Ok(());
    }

    let push = PushClient::new(config.request_timeout_secs)?;
    deliver(&push, config, &sends).await
}

/// Executes the dispatch plan, one send at a time. A transport failure
/// propagates immediately; remaining sends are abandoned.
async fn deliver(
    push: &PushClient,
    config: &AppConfig,
    sends: &[PlannedSend],
) -> anyhow::Result<()> {
    for send in sends {
        push.send_note(recipient_token(config, send.recipient), &send.title, &send.body)
            .await
            .with_context(|| format!("delivering notification \"{}\"", send.title))?;
        tracing::info!(recipient = ?send.recipient, title = %send.title, "notification sent");
    }
    Ok(())
}

fn recipient_token(config: &AppConfig, recipient: Recipient) -> &str {
    match recipient {
        Recipient::Primary => &config.notice_token,
        Recipient::Admin => &config.admin_token,
    }
}

/// Last-resort boundary: report an aborted run to the administrator.
///
/// Failure here is logged and swallowed; the run error that triggered this
/// notice is already propagating out of `main`.
pub async fn report_run_failure(config: &AppConfig, err: &anyhow::Error) {
    let push = match PushClient::new(config.request_timeout_secs) {
        Ok(push) => push,
        Err(e) => {
            tracing::error!(error = %e, "could not build push client for failure notice");
            return;
        }
    };

    let body = format!("{err:#}");
    if let Err(e) = push
        .send_note(&config.admin_token, "Sheet audit | RUN FAILURE", &body)
        .await
    {
        tracing::error!(error = %e, "failed to deliver run-failure notice");
    }
}
