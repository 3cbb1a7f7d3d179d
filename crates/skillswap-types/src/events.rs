use crate::{ListingId, NotificationId};
use serde::{Deserialize, Serialize};

/// User input delivered to the controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiEvent {
    /// Search box text changed
    SearchChanged(String),

    /// Category dropdown changed
    CategoryChanged(String),

    /// Save control of a card clicked
    SaveClicked(ListingId),

    /// Swap control of a card clicked
    SwapClicked(ListingId),

    /// "Get started" button
    GetStarted,

    /// "Join now" button
    JoinNow,

    /// Overlay close control
    OverlayClose,

    /// Click outside the overlay content
    OverlayBackdrop,

    /// Auth form submitted
    AuthSubmit,

    /// Login/registration toggle link inside the overlay
    AuthToggle,

    /// Newsletter input text changed
    NewsletterInput(String),

    /// Newsletter submit button
    NewsletterSubmit,
}

/// Scheduled callbacks fired back into the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Notification visible duration elapsed; begin fading
    FadeNotification(NotificationId),

    /// Fade transition finished; remove the notification
    RemoveNotification(NotificationId),

    /// Delayed overlay hide after an auth submit
    HideOverlay,
}
