//! Board topology: square count, connections, grid layout.
//!
//! The turn engine only sees a linear track `1..=total`. The grid layout
//! exists for presentation layers that need to place squares and draw
//! connection lines.

pub mod connection;
pub mod layout;
pub mod topology;

pub use connection::{Connection, ConnectionKind};
pub use layout::{GridCoord, GridLayout};
pub use topology::Board;

/// A position on the linear track, 1-based.
pub type Square = u8;
