//! Plain-text projection for terminal display

use crate::overlay::OverlayView;
use crate::view::{ListingRegion, PageView};
use skillswap_types::{NotificationPhase, Severity};

/// Maximum description width before truncation
const MAX_DESCRIPTION_LENGTH: usize = 72;

/// Truncate at a word boundary, appending an ellipsis
fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
    match cut.rfind(' ') {
        Some(last_space) => format!("{}...", &cut[..last_space]),
        None => format!("{}...", cut),
    }
}

fn render_listings(region: &ListingRegion, out: &mut String) {
    match region {
        ListingRegion::NoResults { message } => {
            out.push_str(&format!("  {}\n", message));
        }
        ListingRegion::Cards { cards } => {
            for card in cards {
                out.push_str(&format!(
                    "  [{}] {} ({})\n      {} · {}\n      {}\n      [{}] [{}]\n",
                    card.id,
                    card.title,
                    card.icon,
                    card.provider,
                    card.location,
                    truncate(&card.description, MAX_DESCRIPTION_LENGTH),
                    card.save.label,
                    card.swap.label
                ));
            }
        }
    }
}

fn render_overlay(overlay: &OverlayView, out: &mut String) {
    out.push_str(&format!("  ┌ {}\n", overlay.heading));
    for field in &overlay.fields {
        let marker = if field.required { "*" } else { " " };
        match field.placeholder {
            Some(placeholder) => out.push_str(&format!(
                "  │ {}{} ({})\n",
                field.label, marker, placeholder
            )),
            None => out.push_str(&format!("  │ {}{}\n", field.label, marker)),
        }
    }
    out.push_str(&format!("  │ <{}>\n", overlay.submit_label));
    out.push_str(&format!(
        "  └ {} <{}>\n",
        overlay.toggle_prompt, overlay.toggle_label
    ));
}

/// Render a whole frame
pub fn render(frame: &PageView) -> String {
    let mut out = format!(
        "== SkillSwap  search: {:?}  category: {}\n",
        frame.search_query, frame.category
    );
    render_listings(&frame.listings, &mut out);

    if let Some(overlay) = &frame.overlay {
        render_overlay(overlay, &mut out);
    }

    out.push_str(&format!("  newsletter: {:?}\n", frame.newsletter_email));

    for notification in &frame.notifications {
        let tag = match notification.severity {
            Severity::Success => "ok",
            Severity::Error => "error",
        };
        let fading = match notification.phase {
            NotificationPhase::Visible => "",
            NotificationPhase::Fading => " (fading)",
        };
        out.push_str(&format!("  ({}) {}{}\n", tag, notification.message, fading));
    }

    out
}
