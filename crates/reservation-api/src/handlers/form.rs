//! Reservation form page
//!
//! A self-contained HTML page, rendered per request in the caller's
//! language. The browser checks mirror the server rules; the server
//! still validates everything.

use axum::{extract::State, response::Html};
use chrono::NaiveDate;
use reservation_common::{Locale, Messages};
use reservation_core::EventType;
use reservation_mail::escape_html;
use serde_json::json;

use crate::extractors::RequestLocale;
use crate::state::AppState;

/// Path the page posts to
pub const SUBMIT_PATH: &str = "/api/v1/reservations";

/// Reservation form
///
/// GET /
/// GET /reservations/new
pub async fn reservation_form(
    State(state): State<AppState>,
    RequestLocale(locale): RequestLocale,
) -> Html<String> {
    let today = state.service_context().today();
    Html(render_form(locale, state.restaurant_name(), today))
}

/// Render the form page
pub fn render_form(locale: Locale, restaurant_name: &str, today: NaiveDate) -> String {
    let m = locale.messages();
    let restaurant = escape_html(restaurant_name);
    let title = escape_html(m.form_title);

    let client_strings = json!({
        "locale": locale.code(),
        "endpoint": SUBMIT_PATH,
        "submit": m.submit_button,
        "submitting": m.submitting_button,
        "success": m.reservation_submitted,
        "error": m.error_notice,
        "connection": m.connection_error,
    })
    .to_string()
    .replace("</", "<\\/");

    let mut html = String::with_capacity(8 * 1024);
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | {restaurant}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <main>\n<h1>{title}</h1>\n<p class=\"subtitle\">{subtitle}</p>\n\
         <form id=\"reservation-form\" novalidate>\n",
        lang = locale.code(),
        subtitle = escape_html(m.form_subtitle),
    ));

    html.push_str(&input(m.name_label, "name", "text", "required maxlength=\"100\" autocomplete=\"name\"", m));
    html.push_str(&input(m.email_label, "email", "email", "required maxlength=\"254\" autocomplete=\"email\"", m));
    html.push_str(&input(m.phone_label, "phone", "tel", "maxlength=\"30\" autocomplete=\"tel\"", m));
    html.push_str(&input(
        m.date_label,
        "date",
        "date",
        &format!("required min=\"{}\"", today.format("%Y-%m-%d")),
        m,
    ));
    html.push_str(&input(m.time_label, "time", "time", "required", m));
    html.push_str(&input(m.guests_label, "guests", "number", "required min=\"1\" max=\"500\" step=\"1\"", m));

    html.push_str(&select(
        m.reservation_type_label,
        "reservationType",
        &[("table", m.table), ("event", m.event)],
        true,
        m,
    ));

    let event_options: Vec<(&str, &str)> = EventType::ALL
        .iter()
        .map(|kind| (kind.as_str(), m.event_type(*kind)))
        .collect();
    html.push_str("<fieldset id=\"event-fields\" hidden>\n");
    html.push_str(&select(m.event_type_label, "eventType", &event_options, false, m));
    html.push_str(&input(m.attendees_label, "attendees", "number", "min=\"1\" max=\"500\" step=\"1\"", m));
    html.push_str(&textarea(m.event_description_label, "eventDescription", m));
    html.push_str("</fieldset>\n");

    html.push_str(&textarea(m.message_label, "message", m));

    html.push_str(&format!(
        "<button type=\"submit\">{submit}</button>\n\
         <p id=\"form-notice\" class=\"notice\" role=\"status\" hidden></p>\n\
         </form>\n</main>\n<footer>{restaurant}</footer>\n\
         <script id=\"form-i18n\" type=\"application/json\">{client_strings}</script>\n\
         <script>{SCRIPT}</script>\n</body>\n</html>\n",
        submit = escape_html(m.submit_button),
    ));

    html
}

fn label(text: &str, name: &str, required: bool, m: &Messages) -> String {
    let hint = if required {
        String::new()
    } else {
        format!(" <span class=\"hint\">{}</span>", escape_html(m.optional_hint))
    };
    format!("<label for=\"{name}\">{}{hint}</label>\n", escape_html(text))
}

fn input(text: &str, name: &str, kind: &str, attrs: &str, m: &Messages) -> String {
    format!(
        "<div class=\"field\">\n{}<input id=\"{name}\" name=\"{name}\" type=\"{kind}\" {attrs}>\n</div>\n",
        label(text, name, attrs.contains("required"), m)
    )
}

fn select(text: &str, name: &str, options: &[(&str, &str)], required: bool, m: &Messages) -> String {
    let mut out = format!(
        "<div class=\"field\">\n{}<select id=\"{name}\" name=\"{name}\"{}>\n\
         <option value=\"\">{}</option>\n",
        label(text, name, required, m),
        if required { " required" } else { "" },
        escape_html(m.select_placeholder),
    );
    for (value, caption) in options {
        out.push_str(&format!("<option value=\"{value}\">{}</option>\n", escape_html(caption)));
    }
    out.push_str("</select>\n</div>\n");
    out
}

fn textarea(text: &str, name: &str, m: &Messages) -> String {
    format!(
        "<div class=\"field\">\n{}<textarea id=\"{name}\" name=\"{name}\" rows=\"3\" maxlength=\"2000\"></textarea>\n</div>\n",
        label(text, name, false, m)
    )
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#faf7f2;color:#2b2b2b}\
main{max-width:34rem;margin:2rem auto;padding:1.5rem;background:#fff;border-radius:.5rem}\
h1{margin-top:0}.subtitle{color:#666}\
.field{display:flex;flex-direction:column;margin-bottom:1rem}\
label{font-weight:600;margin-bottom:.25rem}.hint{font-weight:400;color:#888}\
input,select,textarea{font:inherit;padding:.5rem;border:1px solid #ccc;border-radius:.25rem}\
fieldset{border:1px dashed #ccc;border-radius:.25rem;margin:0 0 1rem;padding:1rem 1rem 0}\
button{font:inherit;padding:.75rem 1.5rem;border:0;border-radius:.25rem;background:#8a1c1c;color:#fff;cursor:pointer}\
button:disabled{opacity:.6;cursor:wait}\
.notice{margin-top:1rem;padding:.75rem;border-radius:.25rem}\
.notice.success{background:#e6f4ea;color:#1e5631}.notice.error{background:#fdecea;color:#8a1c1c}\
footer{text-align:center;color:#888;margin-bottom:2rem}";

const SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('reservation-form');
  var i18n = JSON.parse(document.getElementById('form-i18n').textContent);
  var typeSelect = form.elements.reservationType;
  var eventGroup = document.getElementById('event-fields');
  var notice = document.getElementById('form-notice');
  var button = form.querySelector('button[type=submit]');
  var eventFields = ['eventType', 'attendees', 'eventDescription'];

  function toggleEventFields() {
    var isEvent = typeSelect.value === 'event';
    eventGroup.hidden = !isEvent;
    form.elements.eventType.required = isEvent;
    form.elements.attendees.required = isEvent;
  }

  function showNotice(kind, text) {
    notice.className = 'notice ' + kind;
    notice.textContent = text;
    notice.hidden = false;
  }

  typeSelect.addEventListener('change', toggleEventFields);
  toggleEventFields();

  form.addEventListener('submit', function (event) {
    event.preventDefault();
    notice.hidden = true;
    if (!form.checkValidity()) {
      form.reportValidity();
      return;
    }

    var payload = {};
    new FormData(form).forEach(function (value, key) {
      if (value !== '') payload[key] = value;
    });
    if (payload.reservationType !== 'event') {
      eventFields.forEach(function (key) { delete payload[key]; });
    }

    button.disabled = true;
    button.textContent = i18n.submitting;

    fetch(i18n.endpoint, {
      method: 'POST',
      headers: { 'Content-Type': 'application/json', 'Accept-Language': i18n.locale },
      body: JSON.stringify(payload)
    })
      .then(function (response) {
        return response.json()
          .catch(function () { return {}; })
          .then(function (body) {
            if (!response.ok) {
              showNotice('error', body.message || i18n.error);
              return;
            }
            form.reset();
            toggleEventFields();
            showNotice('success', body.message || i18n.success);
          });
      })
      .catch(function () {
        showNotice('error', i18n.connection);
      })
      .finally(function () {
        button.disabled = false;
        button.textContent = i18n.submit;
      });
  });
})();
"#;
