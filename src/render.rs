use colored::Colorize;
use serde::Serialize;
use storefront_core::{ADD_LABEL, LISTING_HEADING, ListingView, Product};
use tabled::{Table, Tabled};

use crate::config::OutputMode;
use crate::error::CliError;

const SKELETON_WIDTH: usize = 32;

#[derive(Debug, Tabled)]
struct ProductRow {
    id: u64,
    title: String,
    price: String,
    rating: String,
    reviews: u64,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        ProductRow {
            id: product.id,
            title: product.title.clone(),
            price: product.price_label(),
            rating: product.stars().glyphs(),
            reviews: product.review_count(),
        }
    }
}

/// Product with every optional field resolved, as printed in JSON mode.
#[derive(Debug, Serialize)]
struct ProductSummary<'a> {
    id: u64,
    title: &'a str,
    price: f64,
    image: &'a str,
    stars: u8,
    reviews: u64,
}

impl<'a> From<&'a Product> for ProductSummary<'a> {
    fn from(product: &'a Product) -> Self {
        ProductSummary {
            id: product.id,
            title: &product.title,
            price: product.price,
            image: product.image_src(),
            stars: product.stars().filled(),
            reviews: product.review_count(),
        }
    }
}

/// Renders the output for the current listing view.
///
/// JSON mode prints nothing while loading so stdout stays machine-readable.
pub fn render_listing(view: &ListingView<'_>, mode: OutputMode) -> Result<String, CliError> {
    let out = match (view, mode) {
        (ListingView::Skeletons(_), OutputMode::Json) => String::new(),
        (ListingView::Skeletons(count), _) => skeletons(*count),
        (ListingView::ErrorBanner(message), OutputMode::Json) => {
            serde_json::to_string_pretty(&serde_json::json!({ "error": message }))?
        }
        (ListingView::ErrorBanner(message), _) => error_banner(message),
        (ListingView::Grid(products), OutputMode::Cards) => cards(products),
        (ListingView::Grid(products), OutputMode::Table) => table(products),
        (ListingView::Grid(products), OutputMode::Json) => {
            let summaries: Vec<ProductSummary> = products.iter().map(ProductSummary::from).collect();
            serde_json::to_string_pretty(&summaries)?
        }
    };
    Ok(out)
}

fn skeletons(count: usize) -> String {
    let mut out = String::new();
    for _ in 0..count {
        out.push_str(&format!("  {}\n", "░".repeat(SKELETON_WIDTH).dimmed()));
        out.push_str(&format!("  {}\n", "░".repeat(SKELETON_WIDTH * 2 / 3).dimmed()));
        out.push_str(&format!("  {}\n\n", "░".repeat(SKELETON_WIDTH / 4).dimmed()));
    }
    out
}

fn error_banner(message: &str) -> String {
    format!("{} {}", "✖".red(), message.red().bold())
}

fn heading() -> String {
    format!("{}\n{}\n", LISTING_HEADING.bold(), "-".repeat(40))
}

fn card(product: &Product) -> String {
    format!(
        "{} {}\n    {} {}\n    {}  [{}]\n    {}\n",
        format!("#{}", product.id).dimmed(),
        product.title.bold(),
        product.stars().glyphs().yellow(),
        product.review_label().dimmed(),
        product.price_label().green(),
        ADD_LABEL.cyan(),
        product.image_src().dimmed(),
    )
}

fn cards(products: &[Product]) -> String {
    let mut out = heading();
    for product in products {
        out.push('\n');
        out.push_str(&card(product));
    }
    out
}

fn table(products: &[Product]) -> String {
    let rows: Vec<ProductRow> = products.iter().map(ProductRow::from).collect();
    format!("{}\n{}", heading(), Table::new(&rows))
}
