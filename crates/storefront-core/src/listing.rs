use std::sync::{Arc, PoisonError, RwLock};

use crate::models::Product;

/// Number of skeleton cards shown while the listing loads.
pub const SKELETON_COUNT: usize = 8;

pub const LISTING_HEADING: &str = "محصولات فروشگاه";

/// Label of the (non-functional) add-to-cart action.
pub const ADD_LABEL: &str = "افزودن";

/// Local state of the product list view.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    pub loading: bool,
    pub error: Option<String>,
    pub items: Vec<Product>,
}

impl ListingState {
    /// State of a freshly mounted view, before the fetch resolves.
    pub fn mounted() -> Self {
        Self {
            loading: true,
            error: None,
            items: Vec::new(),
        }
    }

    /// Picks the one output the view renders for this state.
    pub fn view(&self) -> ListingView<'_> {
        if let Some(message) = &self.error {
            ListingView::ErrorBanner(message)
        } else if self.loading {
            ListingView::Skeletons(SKELETON_COUNT)
        } else {
            ListingView::Grid(&self.items)
        }
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::mounted()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingView<'a> {
    Skeletons(usize),
    ErrorBanner(&'a str),
    Grid(&'a [Product]),
}

/// Receiver of listing state updates.
///
/// Implemented by whatever owns the view state: reactive signals in the web
/// UI, [`SharedListing`] in the terminal.
pub trait ListingSink {
    fn set_items(&self, items: Vec<Product>);
    fn set_error(&self, message: String);
    fn set_loading(&self, loading: bool);
}

/// Listing state behind a shared lock.
#[derive(Debug, Clone, Default)]
pub struct SharedListing {
    state: Arc<RwLock<ListingState>>,
}

impl SharedListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ListingState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update(&self, f: impl FnOnce(&mut ListingState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state);
    }
}

impl ListingSink for SharedListing {
    fn set_items(&self, items: Vec<Product>) {
        self.update(|state| state.items = items);
    }

    fn set_error(&self, message: String) {
        self.update(|state| state.error = Some(message));
    }

    fn set_loading(&self, loading: bool) {
        self.update(|state| state.loading = loading);
    }
}
