//! SkillSwap interaction controller
//!
//! Owns all page state and turns UI events and timer callbacks into state
//! changes plus [`Effect`]s. Effects are executed by the [`Scheduler`], which
//! feeds fired timers back through the same single event loop.
//!
//! ## Flow
//!
//! input → [`Controller::handle`] → state change → [`Controller::render`] → surface
//!
//! timer → [`Controller::handle_timer`] → state change → render

pub mod controller;
pub mod newsletter;
pub mod notifications;
pub mod overlay;
pub mod runtime;
pub mod scheduler;

pub use controller::{Controller, Effect, Timings};
pub use notifications::NotificationCenter;
pub use overlay::OverlayState;
pub use runtime::Runtime;
pub use scheduler::{FiredTimer, Scheduler};
