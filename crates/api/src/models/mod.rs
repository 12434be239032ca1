//! Domain row types returned to API clients.
//!
//! Field names mirror the database column names so that serialized rows keep
//! the exact JSON shape clients already consume (`product_id`, not
//! `productId`).

pub mod cart;
pub mod detail;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartItem, NewCartItem};
pub use detail::{CustomerDetail, NewCustomerDetail};
pub use order::{NewOrder, Order};
pub use product::{NewProduct, Product};
pub use user::{CustomerSummary, User};
