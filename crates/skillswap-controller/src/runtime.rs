//! Single-threaded event loop glue
//!
//! Binds a [`Controller`], a [`Scheduler`] and a [`Surface`]. Every input
//! and every fired timer is applied on the caller's task, then a full frame
//! is presented.

use crate::controller::Controller;
use crate::scheduler::{FiredTimer, Scheduler};
use anyhow::Result;
use skillswap_types::UiEvent;
use skillswap_view::Surface;
use tokio::sync::mpsc;
use tracing::debug;

/// Controller plus the machinery that runs its effects
pub struct Runtime<S: Surface> {
    controller: Controller,
    scheduler: Scheduler,
    timers: mpsc::UnboundedReceiver<FiredTimer>,
    surface: S,
}

impl<S: Surface> Runtime<S> {
    /// Create the runtime and present the initial frame
    pub fn start(controller: Controller, mut surface: S) -> Result<Self> {
        let (scheduler, timers) = Scheduler::new();
        surface.present(&controller.render())?;
        Ok(Self {
            controller,
            scheduler,
            timers,
            surface,
        })
    }

    /// Apply one UI event and present the result
    pub fn dispatch(&mut self, event: UiEvent) -> Result<()> {
        debug!("Dispatching {:?}", event);
        let effects = self.controller.handle(event);
        self.scheduler.apply(effects);
        self.surface.present(&self.controller.render())
    }

    /// Wait for the next timer report
    pub async fn next_timer(&mut self) -> Option<FiredTimer> {
        self.timers.recv().await
    }

    /// Apply a fired timer and present the result. Stale reports are dropped.
    pub fn fire(&mut self, fired: FiredTimer) -> Result<()> {
        let Some(timer) = self.scheduler.complete(fired) else {
            return Ok(());
        };
        debug!("Timer {:?}", timer);
        let effects = self.controller.handle_timer(timer);
        self.scheduler.apply(effects);
        self.surface.present(&self.controller.render())
    }

    /// Present the current state again
    pub fn refresh(&mut self) -> Result<()> {
        self.surface.present(&self.controller.render())
    }

    /// Whether any timer is still scheduled
    pub fn has_pending_timers(&self) -> bool {
        self.scheduler.pending() > 0
    }

    /// Process timers until none are pending
    pub async fn settle(&mut self) -> Result<()> {
        while self.has_pending_timers() {
            match self.next_timer().await {
                Some(fired) => self.fire(fired)?,
                None => break,
            }
        }
        Ok(())
    }

    /// Cancel all pending timers
    pub fn shutdown(&mut self) {
        self.scheduler.shutdown();
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
