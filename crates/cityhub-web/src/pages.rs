//! Server-side HTML rendering.
//!
//! Every page is wrapped in [`layout`]. Strings coming from the datasets or
//! the request are passed through [`escape`] before being written out. The
//! informational pages that carry no data are embedded from `content/` via
//! [`include_str!`] so the binary works without any template files on disk.
//! City names that end up inside an `href` are percent-encoded first.

use cityhub_core::Record;
use url::form_urlencoded;

const ASSISTIVE_PRODUCTS_SRC: &str = include_str!("content/assistive_products.html");
const RESERVATIONS_SRC: &str = include_str!("content/reservations.html");
const LEGAL_RIGHTS_SRC: &str = include_str!("content/legal_rights.html");
const EMERGENCY_HELP_SRC: &str = include_str!("content/emergency_help.html");
const CONTACT_SRC: &str = include_str!("content/contact.html");

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

/// Informational pages with fixed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticPage {
    AssistiveProducts,
    Reservations,
    LegalRights,
    EmergencyHelp,
    Contact,
}

impl StaticPage {
    pub const ALL: [StaticPage; 5] = [
        StaticPage::AssistiveProducts,
        StaticPage::Reservations,
        StaticPage::LegalRights,
        StaticPage::EmergencyHelp,
        StaticPage::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            StaticPage::AssistiveProducts => "/assistive-products",
            StaticPage::Reservations => "/reservations",
            StaticPage::LegalRights => "/legal-rights",
            StaticPage::EmergencyHelp => "/emergency-help",
            StaticPage::Contact => "/contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StaticPage::AssistiveProducts => "Assistive Products",
            StaticPage::Reservations => "Reservations",
            StaticPage::LegalRights => "Legal Rights",
            StaticPage::EmergencyHelp => "Emergency Help",
            StaticPage::Contact => "Contact",
        }
    }

    fn body(self) -> &'static str {
        match self {
            StaticPage::AssistiveProducts => ASSISTIVE_PRODUCTS_SRC,
            StaticPage::Reservations => RESERVATIONS_SRC,
            StaticPage::LegalRights => LEGAL_RIGHTS_SRC,
            StaticPage::EmergencyHelp => EMERGENCY_HELP_SRC,
            StaticPage::Contact => CONTACT_SRC,
        }
    }

    pub fn render(self) -> String {
        layout(self.title(), self.body())
    }
}

// ---------------------------------------------------------------------------
// Data pages
// ---------------------------------------------------------------------------

/// Landing page: every city, linked to its dashboard.
pub fn index(cities: &[Record<'_>]) -> String {
    let items: String = cities
        .iter()
        .map(|city| {
            format!(
                "<li><a href=\"{}\">{}</a> <small>{}</small></li>\n",
                escape(&city_href(city.name())),
                escape(city.name()),
                escape(city.state()),
            )
        })
        .collect();

    let body = format!(
        "<h1>Find support in your city</h1>\n{}",
        list_or_empty(&items, "No cities are available right now.")
    );
    layout("CityHub", &body)
}

/// City dashboard: the city, its help centers and its featured schemes.
pub fn city_dashboard(
    city: &Record<'_>,
    help_centers: &[Record<'_>],
    schemes: &[Record<'_>],
) -> String {
    let centers: String = help_centers.iter().map(help_center_item).collect();
    let featured: String = schemes.iter().map(scheme_item).collect();

    let body = format!(
        "<h1>{name}</h1>\n<p class=\"state\">{state}</p>\n\
         <section id=\"help-centers\">\n<h2>Help centers</h2>\n{centers}</section>\n\
         <section id=\"schemes\">\n<h2>Featured schemes</h2>\n{featured}\
         <p><a href=\"/schemes?city={query}\">All schemes</a> · \
         <a href=\"/events?city={query}\">Events</a></p>\n</section>\n",
        name = escape(city.name()),
        query = escape(&encode_query(city.name())),
        state = escape(city.state()),
        centers = list_or_empty(&centers, "No help centers listed for this city."),
        featured = list_or_empty(&featured, "No schemes listed for this state."),
    );
    layout(city.name(), &body)
}

/// The 404 page for an unknown city. Renders nothing but the error.
pub fn city_not_found(city_name: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p class=\"error\">City not found</p>\n<p><a href=\"/\">Back to all cities</a></p>\n",
        escape(city_name)
    );
    layout("City not found", &body)
}

pub fn schemes(schemes: &[Record<'_>], current_city: &str) -> String {
    let items: String = schemes.iter().map(scheme_item).collect();
    let body = format!(
        "<h1>Government schemes</h1>\n{}{}",
        city_filter_form("/schemes", current_city),
        list_or_empty(&items, "No schemes match.")
    );
    layout("Schemes", &body)
}

pub fn events(events: &[Record<'_>], current_city: &str) -> String {
    let items: String = events.iter().map(event_item).collect();
    let body = format!(
        "<h1>Events</h1>\n{}{}",
        city_filter_form("/events", current_city),
        list_or_empty(&items, "No events match.")
    );
    layout("Events", &body)
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} · CityHub</title>\n</head>\n<body>\n<nav>\n\
         <a href=\"/\">Home</a> <a href=\"/schemes\">Schemes</a> <a href=\"/events\">Events</a> \
         <a href=\"/assistive-products\">Assistive products</a> <a href=\"/reservations\">Reservations</a> \
         <a href=\"/legal-rights\">Legal rights</a> <a href=\"/emergency-help\">Emergency help</a> \
         <a href=\"/contact\">Contact</a>\n</nav>\n<main>\n{body}</main>\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn list_or_empty(items: &str, empty: &str) -> String {
    if items.is_empty() {
        format!("<p class=\"empty\">{empty}</p>\n")
    } else {
        format!("<ul>\n{items}</ul>\n")
    }
}

fn city_filter_form(action: &str, current_city: &str) -> String {
    format!(
        "<form method=\"get\" action=\"{action}\">\n\
         <input type=\"text\" name=\"city\" value=\"{}\" placeholder=\"City\">\n\
         <button type=\"submit\">Filter</button>\n</form>\n",
        escape(current_city)
    )
}

fn scheme_item(scheme: &Record<'_>) -> String {
    let scope = if scheme.is_national() {
        "National".to_string()
    } else {
        escape(scheme.state())
    };
    format!(
        "<li class=\"scheme\"><strong>{}</strong> <small>{}</small><p>{}</p></li>\n",
        escape(scheme.name()),
        scope,
        escape(scheme.description()),
    )
}

fn help_center_item(center: &Record<'_>) -> String {
    let mut item = format!(
        "<li class=\"help-center\"><strong>{}</strong> <small>{}</small>",
        escape(center.name()),
        escape(center.kind()),
    );
    for field in ["address", "phone"] {
        if let Some(value) = center.text(field) {
            item.push_str(&format!("<br>{}", escape(value)));
        }
    }
    item.push_str("</li>\n");
    item
}

fn event_item(event: &Record<'_>) -> String {
    let place = if event.is_national() {
        "Nationwide".to_string()
    } else {
        escape(event.city())
    };
    let mut item = format!(
        "<li class=\"event\"><strong>{}</strong> <small>{}</small>",
        escape(event.name()),
        place,
    );
    if let Some(date) = event.text("date") {
        item.push_str(&format!(" <time>{}</time>", escape(date)));
    }
    if let Some(description) = event.text("description") {
        item.push_str(&format!("<p>{}</p>", escape(description)));
    }
    item.push_str("</li>\n");
    item
}

/// `form_urlencoded` output, usable as a query value.
fn encode_query(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Dashboard path for `name`. A literal `+` is already `%2B` after
/// serialization, so every remaining `+` stands for a space.
fn city_href(name: &str) -> String {
    format!("/city/{}", encode_query(name).replace('+', "%20"))
}

/// Escape the five HTML-significant characters.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn not_found_page_escapes_requested_name() {
        let html = city_not_found("<script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("City not found"));
    }

    #[test]
    fn static_pages_render_their_title() {
        for page in StaticPage::ALL {
            let html = page.render();
            assert!(html.contains(page.title()), "{page:?}");
            assert!(html.starts_with("<!DOCTYPE html>"));
        }
    }

    #[test]
    fn city_links_are_percent_encoded() {
        assert_eq!(city_href("Daman & Diu"), "/city/Daman%20%26%20Diu");
        assert_eq!(city_href("A+B/C?#"), "/city/A%2BB%2FC%3F%23");
        assert_eq!(encode_query("Daman & Diu"), "Daman+%26+Diu");
    }

    #[test]
    fn empty_lists_render_placeholder() {
        assert!(events(&[], "").contains("No events match."));
    }
}
