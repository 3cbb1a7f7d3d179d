//! Display surfaces
//!
//! A surface receives a complete frame after every state change. How it
//! updates the actual display (full redraw, diffing) is its own concern.

use crate::view::PageView;
use anyhow::Result;
use tracing::trace;

/// Destination for rendered frames
pub trait Surface {
    /// Show `frame`, replacing whatever was shown before
    fn present(&mut self, frame: &PageView) -> Result<()>;
}

/// Surface that keeps every presented frame in memory
#[derive(Debug, Default)]
pub struct RecordingSurface {
    frames: Vec<PageView>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame
    pub fn last(&self) -> Option<&PageView> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, frame: &PageView) -> Result<()> {
        trace!("Recording frame {}", self.frames.len());
        self.frames.push(frame.clone());
        Ok(())
    }
}
