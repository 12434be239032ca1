//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! # Identity
//! POST /register           - Create a user account (409 on duplicate name)
//! POST /login              - User login
//! POST /admin/login        - Admin login (separate credential table)
//! GET  /customers          - Names of all registered users
//!
//! # Catalog
//! POST /product            - Create a product (no field validation)
//! GET  /products           - Product listing
//! GET  /products/{id}      - Single product (404 when absent)
//!
//! # Orders
//! POST /orders             - Place an order (all fields mandatory)
//! GET  /orders             - All orders, most recent first
//! GET  /orders/{username}  - Orders for one user (404 when none)
//!
//! # Cart
//! POST /add-to-cart        - Add a cart line (only username validated)
//! GET  /cart/{username}    - Cart lines for one user (empty list is OK)
//!
//! # Details
//! POST /details            - Store a validated contact/shipping record
//! ```

pub mod auth;
pub mod cart;
pub mod customers;
pub mod details;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/admin/login", post(auth::admin_login))
        .route("/customers", get(customers::list_customers))
        .route("/product", post(products::create_product))
        .route("/products", get(products::list_products))
        .route("/products/{id}", get(products::get_product))
        .route(
            "/orders",
            post(orders::place_order).get(orders::list_all_orders),
        )
        .route("/orders/{username}", get(orders::list_orders_for_user))
        .route("/add-to-cart", post(cart::add_to_cart))
        .route("/cart/{username}", get(cart::get_cart))
        .route("/details", post(details::submit_details))
}

/// Returns the field value when it is present and non-empty.
///
/// Absent and empty-string fields are equivalent at this API's edge; both
/// count as missing.
fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|v| !v.is_empty())
}
