//! Last-write-wins commentary cell.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Serialize, Serializer};

/// Shared text cell for one game's commentary.
///
/// Clones share the same cell. Background tasks write into it without
/// touching the rest of the game state; the last write wins.
#[derive(Clone, Debug, Default)]
pub struct CommentarySlot {
    inner: Arc<RwLock<String>>,
}

impl CommentarySlot {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial.into())),
        }
    }

    /// Current text.
    #[must_use]
    pub fn get(&self) -> String {
        self.inner.read().clone()
    }

    /// Replace the text.
    pub fn set(&self, text: impl Into<String>) {
        *self.inner.write() = text.into();
    }

    /// Whether two handles point at the same cell.
    #[must_use]
    pub fn same_slot(&self, other: &CommentarySlot) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Serialize for CommentarySlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner.read())
    }
}
