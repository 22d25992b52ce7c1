mod not_found;
mod product_list;

pub use not_found::*;
pub use product_list::*;
