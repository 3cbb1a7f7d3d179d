//! HTML projection of a [`PageView`]
//!
//! Markup uses the class names the stylesheet expects (`skill-card`,
//! `save-btn`, `notification`, ...). Controls expose their listing through
//! `data-id`.

use crate::overlay::OverlayView;
use crate::view::{CardView, ListingRegion, PageView, Tone};
use skillswap_types::{Notification, NotificationPhase, Severity};

/// Escape text for use in element content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Inner markup of the listing region
pub fn render_listings(region: &ListingRegion) -> String {
    match region {
        ListingRegion::NoResults { message } => {
            format!("<p class=\"no-results\">{}</p>", escape(message))
        }
        ListingRegion::Cards { cards } => cards.iter().map(render_card).collect(),
    }
}

fn render_card(card: &CardView) -> String {
    let heart = if card.save.saved {
        "fas fa-heart saved"
    } else {
        "fas fa-heart"
    };
    let color = match card.save.tone {
        Tone::Accent => "var(--accent)",
        Tone::Dark => "var(--dark)",
    };

    let mut html = String::from("<div class=\"skill-card\">");
    html.push_str(&format!(
        "<div class=\"skill-image\"><i class=\"{}\"></i></div>",
        escape(&card.icon)
    ));
    html.push_str("<div class=\"skill-content\">");
    html.push_str(&format!(
        "<h3 class=\"skill-title\">{}</h3>",
        escape(&card.title)
    ));
    html.push_str(&format!(
        "<div class=\"skill-meta\"><span><i class=\"fas fa-user\"></i> {}</span>\
         <span><i class=\"fas fa-map-marker-alt\"></i> {}</span></div>",
        escape(&card.provider),
        escape(&card.location)
    ));
    html.push_str(&format!(
        "<p class=\"skill-description\">{}</p>",
        escape(&card.description)
    ));
    html.push_str("<div class=\"skill-actions\">");
    html.push_str(&format!(
        "<button class=\"btn btn-outline save-btn\" data-id=\"{}\" \
         style=\"color: {}; border-color: var(--light-gray);\"><i class=\"{}\"></i> {}</button>",
        card.save.listing, color, heart, card.save.label
    ));
    html.push_str(&format!(
        "<button class=\"btn btn-primary swap-btn\" data-id=\"{}\">\
         <i class=\"fas fa-exchange-alt\"></i> {}</button>",
        card.swap.listing, card.swap.label
    ));
    html.push_str("</div></div></div>");
    html
}

/// Markup of the overlay body
pub fn render_overlay(overlay: &OverlayView) -> String {
    let mut html = format!(
        "<h2>{}</h2><form class=\"auth-form\" id=\"{}\">",
        overlay.heading, overlay.form_id
    );
    for field in &overlay.fields {
        html.push_str(&format!(
            "<div class=\"form-group\"><label for=\"{id}\">{label}</label>\
             <input type=\"{ty}\" id=\"{id}\"",
            id = field.id,
            label = field.label,
            ty = field.input_type.as_str()
        ));
        if let Some(placeholder) = field.placeholder {
            html.push_str(&format!(" placeholder=\"{}\"", escape(placeholder)));
        }
        if field.required {
            html.push_str(" required");
        }
        html.push_str("></div>");
    }
    html.push_str(&format!(
        "<button type=\"submit\" class=\"form-submit\">{}</button>\
         <div class=\"form-toggle\">{} <a id=\"{}\">{}</a></div></form>",
        overlay.submit_label,
        escape(overlay.toggle_prompt),
        overlay.toggle_id,
        overlay.toggle_label
    ));
    html
}

/// Markup of one notification
pub fn render_notification(notification: &Notification) -> String {
    let class = match notification.severity {
        Severity::Success => "notification",
        Severity::Error => "notification error",
    };
    let style = match notification.phase {
        NotificationPhase::Visible => "",
        NotificationPhase::Fading => " style=\"opacity: 0\"",
    };
    format!(
        "<div class=\"{}\" data-id=\"{}\"{}>{}</div>",
        class,
        notification.id,
        style,
        escape(&notification.message)
    )
}

/// Markup of the dynamic page regions
pub fn render_page(frame: &PageView) -> String {
    let mut html = format!(
        "<div id=\"skillListings\">{}</div>",
        render_listings(&frame.listings)
    );
    match &frame.overlay {
        Some(overlay) => html.push_str(&format!(
            "<div id=\"authModal\" style=\"display: block\"><div id=\"modal-body\">{}</div></div>",
            render_overlay(overlay)
        )),
        None => html.push_str("<div id=\"authModal\" style=\"display: none\"></div>"),
    }
    html.push_str(&format!(
        "<input type=\"email\" id=\"newsletterEmail\" value=\"{}\">",
        escape(&frame.newsletter_email)
    ));
    for notification in &frame.notifications {
        html.push_str(&render_notification(notification));
    }
    html
}
