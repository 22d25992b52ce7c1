mod error_banner;
mod product_card;
mod rating_stars;
mod skeleton;

pub use error_banner::*;
pub use product_card::*;
pub use rating_stars::*;
pub use skeleton::*;
