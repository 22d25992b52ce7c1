use std::io::Write;

use storefront_core::{Catalog, Liveness, LoadOutcome, SharedListing, load_listing_after};
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::render::render_listing;

/// Exit status reported once the listing run ends: 0 loaded, 1 failed,
/// 130 torn down by the user.
pub fn exit_status(outcome: LoadOutcome) -> u8 {
    match outcome {
        LoadOutcome::Loaded(_) => 0,
        LoadOutcome::Failed => 1,
        LoadOutcome::Discarded | LoadOutcome::NotIssued => 130,
    }
}

fn draw<W: Write>(out: &mut W, listing: &SharedListing, config: &Config) -> Result<(), CliError> {
    let state = listing.snapshot();
    let rendered = render_listing(&state.view(), config.output)?;
    if !rendered.is_empty() {
        writeln!(out, "{}", rendered)?;
    }
    out.flush()?;
    Ok(())
}

/// Mounts the product list view in the terminal and runs it to completion.
///
/// Skeletons are drawn on mount. Once the fetch resolves, the resulting view
/// is drawn. If `liveness` is torn down first, nothing further is drawn: a
/// pending delay ends early and the request is never issued, while a request
/// already in flight still runs to completion with its result discarded.
pub async fn run_listing<C, W>(
    config: &Config,
    catalog: &C,
    liveness: &Liveness,
    out: &mut W,
) -> Result<LoadOutcome, CliError>
where
    C: Catalog,
    W: Write,
{
    let listing = SharedListing::new();
    draw(out, &listing, config)?;

    let delay = async {
        if let Some(delay) = config.delay {
            debug!(?delay, "waiting before requesting the catalog");
            tokio::select! {
                () = tokio::time::sleep(delay) => {}
                () = liveness.unmounted() => {}
            }
        }
    };

    let outcome = load_listing_after(delay, catalog, liveness, &listing).await;

    match outcome {
        LoadOutcome::Loaded(_) | LoadOutcome::Failed => draw(out, &listing, config)?,
        LoadOutcome::Discarded | LoadOutcome::NotIssued => {}
    }

    Ok(outcome)
}
