//! Chunked markup iteration.

use estampe_matrice::Node;
use estampe_tirage::{MarkupOptions, MarkupRenderer, MarkupWarning, RenderError};

/// Iterator pulling markup in chunks of roughly the requested size.
///
/// Chunks split only on frame boundaries, so each one may run a little
/// long. An `Err` item is final: the walk is abandoned, open provider
/// scopes are unwound, and the iterator ends.
pub struct MarkupChunks {
    renderer: MarkupRenderer,
    chunk_size: usize,
    failed: bool,
}

impl MarkupChunks {
    pub(crate) fn new(root: &Node, options: MarkupOptions, chunk_size: usize) -> MarkupChunks {
        MarkupChunks {
            renderer: MarkupRenderer::new(root, options),
            // A zero chunk size would never make progress.
            chunk_size: chunk_size.max(1),
            failed: false,
        }
    }

    /// Warnings collected so far, in emission order.
    pub fn warnings(&self) -> &[MarkupWarning] {
        self.renderer.warnings()
    }

    /// Takes the collected warnings, leaving the list empty.
    pub fn take_warnings(&mut self) -> Vec<MarkupWarning> {
        self.renderer.take_warnings()
    }
}

impl Iterator for MarkupChunks {
    type Item = Result<String, RenderError>;

    fn next(&mut self) -> Option<Result<String, RenderError>> {
        if self.failed {
            return None;
        }
        match self.renderer.pull(self.chunk_size) {
            Ok(Some(chunk)) => {
                // The walk can end on a frame pop with nothing left over.
                if chunk.is_empty() && self.renderer.is_exhausted() {
                    return None;
                }
                Some(Ok(chunk))
            }
            Ok(None) => None,
            Err(error) => {
                self.failed = true;
                self.renderer.destroy();
                Some(Err(error))
            }
        }
    }
}
