//! HTML rendering for the planner page
//!
//! One template serves both views: the bare form on first load and the form
//! followed by the itinerary after a submission. Fallback and live flights
//! render identically.

use std::fmt::{self, Write};

use crate::models::{Itinerary, SkillLevel, TripRequest};
use crate::planner::PageView;

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css";

/// Values prefilled into the search form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub origin: String,
    pub destination: String,
    pub date: String,
    pub skill: String,
    pub budget: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            origin: "LHR".to_string(),
            destination: "GVA".to_string(),
            date: String::new(),
            skill: SkillLevel::Beginner.label().to_string(),
            budget: "1000".to_string(),
        }
    }
}

impl From<&TripRequest> for FormValues {
    fn from(request: &TripRequest) -> Self {
        Self {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            date: request.date.clone(),
            skill: request.skill.clone(),
            budget: request.budget.to_string(),
        }
    }
}

/// Escape text for use in HTML content and quoted attributes
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full page for `view`
#[must_use]
pub fn render_page(view: &PageView) -> String {
    let mut html = String::with_capacity(4096);
    // Writing into a String cannot fail
    let _ = write_page(&mut html, view);
    html
}

fn write_page(out: &mut String, view: &PageView) -> fmt::Result {
    let values = match view {
        PageView::Form => FormValues::default(),
        PageView::Results(itinerary) => FormValues::from(&itinerary.request),
    };

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "  <meta charset=\"UTF-8\" />")?;
    writeln!(out, "  <title>Ski Trip Planner</title>")?;
    writeln!(out, "  <link href=\"{BOOTSTRAP_CSS}\" rel=\"stylesheet\">")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body class=\"container mt-5\">")?;
    writeln!(out, "  <h1>Plan Your Ski Holiday</h1>")?;
    write_form(out, &values)?;
    if let PageView::Results(itinerary) = view {
        write_itinerary(out, itinerary)?;
    }
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_form(out: &mut String, values: &FormValues) -> fmt::Result {
    writeln!(out, "  <form method=\"post\">")?;
    write_input(out, "From UK Airport:", "text", "origin", &values.origin)?;
    write_input(out, "Dest Airport:", "text", "dest", &values.destination)?;
    write_input(out, "Date:", "date", "date", &values.date)?;

    write!(
        out,
        "    <div class=\"mb-3\"><label>Skill Level:</label><select name=\"skill\" class=\"form-select\">"
    )?;
    for level in SkillLevel::ALL {
        let selected = if level.label() == values.skill { " selected" } else { "" };
        write!(out, "<option{selected}>{}</option>", level.label())?;
    }
    writeln!(out, "</select></div>")?;

    write_input(out, "Budget (£):", "number", "budget", &values.budget)?;
    writeln!(
        out,
        "    <button type=\"submit\" class=\"btn btn-primary\">Search!</button>"
    )?;
    writeln!(out, "  </form>")
}

fn write_input(out: &mut String, label: &str, kind: &str, name: &str, value: &str) -> fmt::Result {
    writeln!(
        out,
        "    <div class=\"mb-3\"><label>{}</label><input type=\"{kind}\" name=\"{name}\" class=\"form-control\" value=\"{}\"></div>",
        escape(label),
        escape(value)
    )
}

fn write_itinerary(out: &mut String, itinerary: &Itinerary) -> fmt::Result {
    writeln!(out, "  <h2>Your Itinerary</h2>")?;

    write!(out, "  <h3>Flights:</h3><ul>")?;
    for flight in itinerary.flight_offers() {
        write!(out, "<li>{}</li>", escape(&flight.to_string()))?;
    }
    writeln!(out, "</ul>")?;

    write!(out, "  <h3>Trains:</h3><ul>")?;
    if let Some(train) = itinerary.train {
        write!(
            out,
            "<li>{} - {} ({})</li>",
            escape(train.route),
            escape(train.price),
            escape(train.duration)
        )?;
    }
    writeln!(out, "</ul>")?;

    write!(out, "  <h3>Best Spot:</h3><ul>")?;
    if let Some(resort) = itinerary.resort {
        write!(
            out,
            "<li>{} - {} (Under budget!)</li>",
            escape(resort.name),
            escape(resort.vibe)
        )?;
    }
    writeln!(out, "</ul>")?;

    write!(out, "  <h3>Accom:</h3><ul>")?;
    for hotel in &itinerary.hotels {
        write!(
            out,
            "<li>{} - {}/night ({:.1} stars) - Total {}</li>",
            escape(hotel.name),
            hotel.display_per_night(),
            hotel.rating,
            hotel.display_total()
        )?;
    }
    writeln!(out, "</ul>")?;

    writeln!(out, "  <h3>AI Tip:</h3><p>{}</p>", escape(&itinerary.tip))
}
