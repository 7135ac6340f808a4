//! Billbook session runner
//!
//! Opens the data directory, bills due recurring schedules once and
//! reports the resulting position.

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billbook_shared::types::{Clock, Money, SystemClock};
use billbook_shared::{AppConfig, AppResult};
use billbook_store::{JsonStore, StateSnapshot};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize tracing
    let json = config.logging.json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "billbook=info".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    if let Err(err) = run(&config, &SystemClock) {
        error!(
            code = err.error_code(),
            user_error = err.is_user_error(),
            %err,
            "Session failed"
        );
        return Err(err.into());
    }
    Ok(())
}

/// Runs one session and returns how many recurring invoices were created.
fn run(config: &AppConfig, clock: &impl Clock) -> AppResult<usize> {
    let store = JsonStore::open(&config.storage.data_dir)?;
    info!(data_dir = %store.root().display(), "Opened data directory");

    let mut state = StateSnapshot::load(&store, config.numbering.prefix_match)?;

    let today = clock.today();
    let created = state.run_recurring_billing(today);
    if created.is_empty() {
        info!(%today, "No recurring invoices due");
    } else {
        StateSnapshot::save_billing(&store, &state)?;
        for invoice in &created {
            info!(invoice_number = %invoice.invoice_number, "Created recurring invoice");
        }
    }

    let summary = state.dashboard(today);
    info!(
        created = created.len(),
        next_invoice = %state.next_invoice_number(),
        next_offer = %state.next_offer_number(),
        outstanding = %Money::new(summary.outstanding_total, state.company.currency),
        open_offers = summary.open_offers,
        "Session ready"
    );

    Ok(created.len())
}
