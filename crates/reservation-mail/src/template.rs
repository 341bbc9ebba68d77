//! Staff email composition

use reservation_common::Messages;
use reservation_core::{EventDetails, Reservation};

/// Rendered email, ready to hand to a delivery client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// Collapse control characters so user input cannot break header lines
fn single_line(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

fn push_row(html: &mut String, label: &str, value: &str) {
    html.push_str("<p><strong>");
    html.push_str(&escape_html(label));
    html.push_str(":</strong> ");
    html.push_str(&escape_html(value));
    html.push_str("</p>\n");
}

/// Localized event kind, with the customer's own wording when it was not a listed kind
fn event_kind(event: &EventDetails, messages: &Messages) -> String {
    match (event.event_type, event.custom_event_type.as_deref()) {
        (Some(kind), Some(custom)) => format!("{} ({custom})", messages.event_type(kind)),
        (Some(kind), None) => messages.event_type(kind).to_string(),
        (None, _) => messages.not_provided.to_string(),
    }
}

/// Subject line: the kind of booking plus the customer's name
pub fn subject(reservation: &Reservation, messages: &Messages) -> String {
    let name = single_line(&reservation.name);

    match &reservation.event {
        Some(event) if reservation.is_event() => {
            let kind = single_line(&event_kind(event, messages));
            format!("{}: {kind} - {name}", messages.email_subject_event)
        }
        _ => format!("{} - {name}", messages.email_subject_table),
    }
}

/// Render the staff notification for a stored reservation.
///
/// The event section appears only for event bookings. Every user-supplied
/// value is HTML-escaped.
pub fn compose(reservation: &Reservation, messages: &Messages, restaurant_name: &str) -> EmailContent {
    let not_provided = messages.not_provided;
    let mut html = String::with_capacity(1024);

    html.push_str("<div style=\"font-family: Arial, sans-serif; max-width: 600px;\">\n");
    html.push_str("<h2>");
    html.push_str(&escape_html(messages.email_heading));
    html.push_str("</h2>\n");

    push_row(
        &mut html,
        messages.reservation_type_label,
        messages.reservation_type(reservation.reservation_type),
    );
    push_row(&mut html, messages.name_label, &reservation.name);
    push_row(&mut html, messages.email_label, reservation.email.as_str());
    push_row(
        &mut html,
        messages.phone_label,
        reservation.phone.as_deref().unwrap_or(not_provided),
    );
    push_row(&mut html, messages.date_label, &reservation.date.format("%Y-%m-%d").to_string());
    push_row(&mut html, messages.time_label, &reservation.time_label());
    push_row(&mut html, messages.guests_label, &reservation.guests.to_string());

    if let (true, Some(event)) = (reservation.is_event(), reservation.event.as_ref()) {
        html.push_str("<h3>");
        html.push_str(&escape_html(messages.email_event_heading));
        html.push_str("</h3>\n");

        push_row(
            &mut html,
            messages.event_type_label,
            &event_kind(event, messages),
        );
        push_row(
            &mut html,
            messages.attendees_label,
            &event
                .attendees
                .map_or_else(|| not_provided.to_string(), |a| a.to_string()),
        );
        push_row(
            &mut html,
            messages.event_description_label,
            event.description.as_deref().unwrap_or(not_provided),
        );
    }

    push_row(
        &mut html,
        messages.message_label,
        reservation.message.as_deref().unwrap_or(not_provided),
    );

    html.push_str("<hr>\n<p style=\"color: #888; font-size: 12px;\">");
    html.push_str(&escape_html(messages.email_footer));
    html.push(' ');
    html.push_str(&escape_html(restaurant_name));
    html.push_str("</p>\n</div>\n");

    EmailContent {
        subject: subject(reservation, messages),
        html,
    }
}
