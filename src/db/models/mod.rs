//! Database Models

pub mod dining_table;
pub mod order;
pub mod product;
pub mod serde_helpers;

pub use dining_table::{DiningTable, DiningTableCreate, SessionTicket};
pub use order::{NewOrder, Order, OrderItem};
pub use product::Product;
