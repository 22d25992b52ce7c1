use serde::{Deserialize, Serialize};

use crate::rating::StarRating;

/// Static image shown when a product has no image or its image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-product.jpg";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub count: u64,
}

/// A product record as returned by the Catalog Service.
///
/// Fields the listing does not display (description, category, ...) are
/// ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Image URL to display; empty or missing images resolve to the placeholder.
    pub fn image_src(&self) -> &str {
        match self.image.as_deref() {
            Some(src) if !src.trim().is_empty() => src,
            _ => PLACEHOLDER_IMAGE,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rating.as_ref().map(|r| r.rate).unwrap_or(0.0)
    }

    pub fn review_count(&self) -> u64 {
        self.rating.as_ref().map(|r| r.count).unwrap_or(0)
    }

    pub fn stars(&self) -> StarRating {
        StarRating::from_rate(self.rate())
    }

    /// Price as shown on the card, e.g. `$19.99` or `$20`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    pub fn review_label(&self) -> String {
        format!("({} نظر)", self.review_count())
    }
}
