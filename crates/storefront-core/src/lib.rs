//! Product listing core: the catalog model, the fetch-on-mount lifecycle and
//! the state it drives. Shared by the terminal and web front ends.

pub mod catalog;
pub mod error;
pub mod lifecycle;
pub mod listing;
pub mod liveness;
pub mod models;
pub mod rating;

pub use catalog::{Catalog, CatalogConfig, DEFAULT_CATALOG_URL, DEMO_DELAY, HttpCatalog};
pub use error::{FETCH_ERROR_MESSAGE, FetchFailure};
pub use lifecycle::{LoadOutcome, load_listing, load_listing_after};
pub use listing::{
    ADD_LABEL, LISTING_HEADING, ListingSink, ListingState, ListingView, SKELETON_COUNT,
    SharedListing,
};
pub use liveness::{Liveness, Unmounted};
pub use models::{PLACEHOLDER_IMAGE, Product, Rating};
pub use rating::{STAR_UNITS, Star, StarRating};
