use skillswap_types::AuthMode;
use skillswap_view::OverlayView;

/// Visibility and mode of the shared auth overlay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    visible: bool,
    mode: AuthMode,
}

impl OverlayState {
    pub fn show(&mut self, mode: AuthMode) {
        self.visible = true;
        self.mode = mode;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Switch to the other form while shown. Returns the new mode.
    pub fn toggle(&mut self) -> Option<AuthMode> {
        if !self.visible {
            return None;
        }
        self.mode = self.mode.toggled();
        Some(self.mode)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Template for the current mode, or `None` when hidden
    pub fn view(&self) -> Option<OverlayView> {
        self.visible.then(|| OverlayView::for_mode(self.mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_by_default() {
        let overlay = OverlayState::default();
        assert!(!overlay.is_visible());
        assert!(overlay.view().is_none());
    }

    #[test]
    fn test_toggle_only_while_visible() {
        let mut overlay = OverlayState::default();
        assert_eq!(overlay.toggle(), None);

        overlay.show(AuthMode::Login);
        assert_eq!(overlay.toggle(), Some(AuthMode::Register));
        assert_eq!(overlay.view().map(|v| v.form_id), Some("registerForm"));

        overlay.hide();
        assert!(overlay.view().is_none());
    }
}
