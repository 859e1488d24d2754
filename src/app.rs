use anyhow::Result;

use crate::{
    cli::{normalize_usernames, Cli, Command},
    domain::report::BatchReport,
    infra::{contracts::ThreadSleeper, work_list::JsonWorkListStore},
    usecases::{
        bootstrap,
        compose::compose_request,
        contracts::StdConfirm,
        messenger::Messenger,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;
    let request = compose_request(&cli.title, cli.message_source())?;
    let client = bootstrap::compose_client(&context)?;
    let sleeper = ThreadSleeper;
    let messenger = Messenger::new(&client, &sleeper, context.pacing());

    let report = match &cli.command {
        Command::PmSingle { username } => messenger.pm_single(username, &request),
        Command::PmMulti { usernames } => {
            messenger.pm_users(&normalize_usernames(usernames), &request)
        }
        Command::PmAll => {
            let path = cli
                .work_list
                .clone()
                .unwrap_or_else(|| context.config.work_list_path.clone());
            let mut store = JsonWorkListStore::load(path)?;
            tracing::debug!(path = %store.path().display(), "work list opened");
            messenger.pm_all(&mut store, &mut StdConfirm, &request)?
        }
        Command::PmModerators => messenger.pm_moderators(&request),
    };

    log_summary(&report);
    Ok(())
}

fn log_summary(report: &BatchReport) {
    tracing::info!(
        attempted = report.attempted(),
        delivered = report.delivered.len(),
        failed = report.failed.len(),
        missing = report.missing.len(),
        "messaging finished"
    );

    if !report.failed.is_empty() {
        tracing::warn!(users = ?report.failed, "PM delivery failed for some users");
    }
}
