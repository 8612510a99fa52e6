//! Fire-and-forget commentary tasks.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use super::generator::{CommentaryGenerator, CommentaryRequest};
use super::slot::CommentarySlot;
use super::commentary_or_fallback;
use crate::error::CommentaryError;

/// Spawns one commentary task per move onto a tokio runtime.
///
/// Each task writes its text into the slot it was given. Tasks are not
/// ordered relative to each other: if two are in flight, whichever finishes
/// last wins.
#[derive(Clone)]
pub struct CommentaryDispatcher {
    generator: Arc<dyn CommentaryGenerator>,
    handle: Handle,
}

impl std::fmt::Debug for CommentaryDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentaryDispatcher")
            .field("generator", &self.generator.name())
            .finish()
    }
}

impl CommentaryDispatcher {
    pub fn new(generator: Arc<dyn CommentaryGenerator>, handle: Handle) -> Self {
        Self { generator, handle }
    }

    /// Dispatcher on the runtime of the calling context.
    pub fn current(generator: Arc<dyn CommentaryGenerator>) -> Result<Self, CommentaryError> {
        let handle = Handle::try_current().map_err(|_| CommentaryError::NoRuntime)?;
        Ok(Self::new(generator, handle))
    }

    #[must_use]
    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Generate commentary for `request` in the background and store it in
    /// `slot`.
    pub fn dispatch(&self, request: CommentaryRequest, slot: CommentarySlot) -> JoinHandle<()> {
        let generator = Arc::clone(&self.generator);
        self.handle.spawn(async move {
            let text = commentary_or_fallback(generator.as_ref(), &request).await;
            slot.set(text);
        })
    }
}
