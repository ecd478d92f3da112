use std::path::Path;

use anyhow::Context;
use commsbom_core::{AggregationCache, AppConfig};
use commsbom_notify::{build_form_fields, NotifyClient, Submission};
use commsbom_store::SavedConfiguration;

use crate::context::{load_catalog, open_store, print_pricing_outcome};
use crate::session_file::SessionFile;

/// Saves a session file's design and optionally emails it.
///
/// # Errors
///
/// Returns an error if the project name or designer is blank, the store
/// cannot be written, or the notification fails. A failed notification
/// does not undo the save.
pub(crate) async fn run_save(
    config: &AppConfig,
    session_path: &Path,
    notify: bool,
    offline: bool,
) -> anyhow::Result<()> {
    let pricing = load_catalog(config, offline).await?;
    let mut cache = AggregationCache::new();
    let session =
        SessionFile::load(session_path)?.into_session(&pricing.catalog, &mut cache)?;
    session
        .project
        .require_complete()
        .context("a configuration name and designer are required before saving")?;

    let quote = session.quote(&pricing.catalog, &pricing.rates, &mut cache);
    let saved = SavedConfiguration::from_session(&session, &quote);
    let name = saved.name.clone();

    let mut store = open_store(config);
    let report = store.save(saved)?;
    print_pricing_outcome(&pricing.outcome);
    println!("saved \"{name}\" as {}", report.id);
    if report.evicted > 0 {
        println!("dropped {} older saved configuration(s)", report.evicted);
    }

    if notify {
        let client = NotifyClient::from_config(config)?;
        let fields = build_form_fields(&Submission {
            project: &session.project,
            locations: session.locations(),
            quote: &quote,
        });
        client
            .submit(&fields)
            .await
            .with_context(|| format!("saved as {}, but the notification was not sent", report.id))?;
        println!("notification sent");
    }
    Ok(())
}
