//! HTTP request handlers for API endpoints.

pub mod ping;
pub mod products;

pub use ping::ping_handler;
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, product_list_handler,
    update_product_handler,
};
