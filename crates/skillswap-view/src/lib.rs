//! SkillSwap view layer
//!
//! State is projected into a [`PageView`], a plain description of what the
//! page shows. Projections turn that description into HTML, a terminal frame
//! or JSON, and a [`Surface`] receives every new frame.
//!
//! Controls carry the id of the listing they act on, so a rebuilt frame
//! never holds stale handlers: the controller resolves every click against
//! the store at the time it arrives.

pub mod html;
pub mod overlay;
pub mod surface;
pub mod text;
pub mod view;

pub use overlay::{FormField, InputType, OverlayView};
pub use surface::{RecordingSurface, Surface};
pub use view::{
    CardView, ListingRegion, PageView, SaveControl, SwapControl, Tone, NO_RESULTS_MESSAGE,
};

/// Serialize a frame as pretty JSON
pub fn render_json(frame: &PageView) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(frame)?)
}
