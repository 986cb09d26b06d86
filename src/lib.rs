//! Kedai Server - QR table-ordering backend
//!
//! Issues a single-use, time-limited ordering ticket to a physical table
//! when its QR code is scanned, and enforces that exactly one order can be
//! placed against that ticket before it is invalidated.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, ServerState, HTTP server
//! ├── session/       # Session Ticket Manager (issue / validate / consume)
//! ├── db/            # Store traits, SurrealDB repositories, memory store
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Errors, responses, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod session;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState, StoreBackend};
pub use crate::session::{IssuedTicket, PlaceOrderRequest, SessionTicketManager, TicketError};
pub use crate::utils::logger::{init_logger, init_logger_with_file};
pub use crate::utils::{AppError, AppResult};
