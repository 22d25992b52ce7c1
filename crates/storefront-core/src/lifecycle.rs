//! Fetch-on-mount lifecycle of the product list view.
//!
//! The driver runs once per mount. Every state mutation it performs inside the
//! asynchronous continuation is preceded by a liveness check, so a view that
//! was torn down while the request was in flight never observes the result.

use std::future::Future;

use tracing::{debug, error, info, warn};

use crate::catalog::Catalog;
use crate::error::FetchFailure;
use crate::listing::ListingSink;
use crate::liveness::Liveness;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The listing was applied with this many products.
    Loaded(usize),
    /// The fetch failed and the fixed error message was applied.
    Failed,
    /// The view unmounted before the result could be applied.
    Discarded,
    /// The view unmounted during the initial delay; no request was issued.
    NotIssued,
}

/// Applies `update` only while the view is still mounted.
fn guarded(liveness: &Liveness, update: impl FnOnce()) -> bool {
    if liveness.is_alive() {
        update();
        true
    } else {
        false
    }
}

/// Requests the listing and applies the result to `sink`.
pub async fn load_listing<C, S>(catalog: &C, liveness: &Liveness, sink: &S) -> LoadOutcome
where
    C: Catalog,
    S: ListingSink + ?Sized,
{
    let result = catalog.fetch_products().await;

    let outcome = match result {
        Ok(items) => {
            let count = items.len();
            if guarded(liveness, || sink.set_items(items))
                && guarded(liveness, || sink.set_loading(false))
            {
                info!(count, "product listing loaded");
                LoadOutcome::Loaded(count)
            } else {
                LoadOutcome::Discarded
            }
        }
        Err(err) => {
            report(&err);
            if guarded(liveness, || sink.set_error(err.user_message().to_string()))
                && guarded(liveness, || sink.set_loading(false))
            {
                LoadOutcome::Failed
            } else {
                LoadOutcome::Discarded
            }
        }
    };

    if outcome == LoadOutcome::Discarded {
        warn!("product list view unmounted before the catalog responded, discarding result");
    }
    outcome
}

/// Waits for `delay` to elapse, then runs [`load_listing`].
///
/// Unmounting during the delay cancels the request before it is issued.
pub async fn load_listing_after<D, C, S>(
    delay: D,
    catalog: &C,
    liveness: &Liveness,
    sink: &S,
) -> LoadOutcome
where
    D: Future<Output = ()>,
    C: Catalog,
    S: ListingSink + ?Sized,
{
    delay.await;

    if !liveness.is_alive() {
        debug!("product list view unmounted during delay, catalog not requested");
        return LoadOutcome::NotIssued;
    }

    load_listing(catalog, liveness, sink).await
}

fn report(err: &FetchFailure) {
    error!(error = %err, "error fetching products");
}
