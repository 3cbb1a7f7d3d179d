//! Event handling for the marketplace page

use crate::newsletter::validate_email;
use crate::notifications::NotificationCenter;
use crate::overlay::OverlayState;
use skillswap_store::ListingStore;
use skillswap_types::{
    AuthMode, CategoryFilter, ListingId, Severity, SkillListing, SkillswapError, TimerEvent,
    UiEvent,
};
use skillswap_view::{ListingRegion, PageView};
use std::time::Duration;
use tracing::{debug, info};

const SAVED_MESSAGE: &str = "Skill saved to your favorites!";
const REMOVED_MESSAGE: &str = "Skill removed from favorites.";
const LOGIN_MESSAGE: &str = "Login successful! Redirecting...";
const REGISTER_MESSAGE: &str = "Registration successful! Welcome to SkillSwap.";
const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing to our newsletter!";

/// Delays used for scheduled callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long a notification stays fully visible
    pub notification_visible: Duration,
    /// Fade transition before removal
    pub notification_fade: Duration,
    /// Delay between an auth submit and hiding the overlay
    pub overlay_hide_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notification_visible: Duration::from_millis(3000),
            notification_fade: Duration::from_millis(300),
            overlay_hide_delay: Duration::from_millis(1500),
        }
    }
}

/// Side effect requested by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fire `timer` after `after`, replacing any pending timer with the same key
    Schedule { timer: TimerEvent, after: Duration },
    /// Drop a pending timer
    Cancel(TimerEvent),
}

/// Page state plus the event → action mapping
pub struct Controller {
    store: ListingStore,
    query: String,
    category: CategoryFilter,
    overlay: OverlayState,
    notifications: NotificationCenter,
    newsletter_email: String,
    timings: Timings,
}

impl Controller {
    /// Create a controller over a seeded store
    pub fn new(store: ListingStore, timings: Timings) -> Self {
        Self {
            store,
            query: String::new(),
            category: CategoryFilter::All,
            overlay: OverlayState::default(),
            notifications: NotificationCenter::new(),
            newsletter_email: String::new(),
            timings,
        }
    }

    /// Handle one UI event
    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match event {
            UiEvent::SearchChanged(query) => {
                self.query = query;
                debug!("Search query: {:?}", self.query);
            }
            UiEvent::CategoryChanged(selector) => {
                self.category = CategoryFilter::from_selector(&selector);
                debug!("Category: {}", self.category.as_selector());
            }
            UiEvent::SaveClicked(id) => self.toggle_saved(id, &mut effects),
            UiEvent::SwapClicked(id) => self.request_swap(id, &mut effects),
            UiEvent::GetStarted | UiEvent::JoinNow => {
                self.overlay.show(AuthMode::Register);
                effects.push(Effect::Cancel(TimerEvent::HideOverlay));
            }
            UiEvent::OverlayClose | UiEvent::OverlayBackdrop => {
                self.overlay.hide();
                effects.push(Effect::Cancel(TimerEvent::HideOverlay));
            }
            UiEvent::AuthSubmit => self.submit_auth(&mut effects),
            UiEvent::AuthToggle => {
                if let Some(mode) = self.overlay.toggle() {
                    debug!("Overlay switched to {:?}", mode);
                }
            }
            UiEvent::NewsletterInput(text) => {
                self.newsletter_email = text;
            }
            UiEvent::NewsletterSubmit => self.subscribe(&mut effects),
        }

        effects
    }

    /// Handle a fired timer
    pub fn handle_timer(&mut self, timer: TimerEvent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match timer {
            TimerEvent::FadeNotification(id) => {
                if self.notifications.begin_fade(id) {
                    effects.push(Effect::Schedule {
                        timer: TimerEvent::RemoveNotification(id),
                        after: self.timings.notification_fade,
                    });
                }
            }
            TimerEvent::RemoveNotification(id) => {
                if !self.notifications.remove(id) {
                    debug!("Notification {} already removed", id);
                }
            }
            TimerEvent::HideOverlay => self.overlay.hide(),
        }

        effects
    }

    /// Project current state into a frame
    pub fn render(&self) -> PageView {
        PageView {
            search_query: self.query.clone(),
            category: self.category.as_selector().to_string(),
            listings: ListingRegion::from_listings(&self.visible_listings()),
            overlay: self.overlay.view(),
            notifications: self.notifications.active().to_vec(),
            newsletter_email: self.newsletter_email.clone(),
        }
    }

    /// Listings passing the current query and category
    pub fn visible_listings(&self) -> Vec<&SkillListing> {
        self.store.filter(&self.query, &self.category)
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn newsletter_email(&self) -> &str {
        &self.newsletter_email
    }

    fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        effects: &mut Vec<Effect>,
    ) {
        let id = self.notifications.push(message, severity);
        effects.push(Effect::Schedule {
            timer: TimerEvent::FadeNotification(id),
            after: self.timings.notification_visible,
        });
    }

    fn toggle_saved(&mut self, id: ListingId, effects: &mut Vec<Effect>) {
        match self.store.toggle_saved(id) {
            Some(true) => self.notify(SAVED_MESSAGE, Severity::Success, effects),
            Some(false) => self.notify(REMOVED_MESSAGE, Severity::Success, effects),
            None => debug!("Ignoring save: {}", SkillswapError::ListingNotFound(id)),
        }
    }

    fn request_swap(&mut self, id: ListingId, effects: &mut Vec<Effect>) {
        let Some(provider) = self.store.get(id).map(|l| l.provider.clone()) else {
            debug!("Ignoring swap: {}", SkillswapError::ListingNotFound(id));
            return;
        };
        info!("Swap requested for listing {} ({})", id, provider);
        self.notify(
            format!(
                "Swap request sent to {}! They will be notified of your interest.",
                provider
            ),
            Severity::Success,
            effects,
        );
    }

    fn submit_auth(&mut self, effects: &mut Vec<Effect>) {
        if !self.overlay.is_visible() {
            debug!("Ignoring auth submit while overlay is hidden");
            return;
        }
        let message = match self.overlay.mode() {
            AuthMode::Login => LOGIN_MESSAGE,
            AuthMode::Register => REGISTER_MESSAGE,
        };
        self.notify(message, Severity::Success, effects);
        effects.push(Effect::Schedule {
            timer: TimerEvent::HideOverlay,
            after: self.timings.overlay_hide_delay,
        });
    }

    fn subscribe(&mut self, effects: &mut Vec<Effect>) {
        if let Err(e) = validate_email(&self.newsletter_email) {
            debug!("Newsletter rejected: {}", e);
            self.notify(INVALID_EMAIL_MESSAGE, Severity::Error, effects);
            return;
        }
        info!("Newsletter subscription accepted");
        self.notify(SUBSCRIBED_MESSAGE, Severity::Success, effects);
        self.newsletter_email.clear();
    }
}
