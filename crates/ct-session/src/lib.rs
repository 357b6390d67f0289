//! Game-master session for Clock Tan-Tan.
//!
//! Holds the per-attribute decks, drawn results and reveal flags together
//! with character level and unspent progression points, and exposes the
//! commands a table front end issues against them: draw, hide, reveal,
//! reshuffle, allocate a point, and level up.

pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod table;

pub use command::{Command, ReshuffleTarget};
pub use config::TableConfig;
pub use error::{TableError, TableResult};
pub use session::Session;
pub use table::GameTable;
