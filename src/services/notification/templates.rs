use crate::models::notification::{ApplicationRequest, TourRequest};

use super::interface::OutgoingEmail;

const ACCENT: &str = "#5B6BF0";
const NOT_SPECIFIED: &str = "Not specified";

/// Escapes text for interpolation into HTML element content and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(escape_html)
}

fn row(label: &str, value: &str) -> String {
    format!(
        r#"<tr><td style="padding: 8px 0; color: #666; width: 35%;"><strong>{}:</strong></td><td style="padding: 8px 0;">{}</td></tr>"#,
        label, value
    )
}

fn section(background: &str, title: &str, body: &str) -> String {
    format!(
        r#"<div style="background-color: {}; padding: 20px; border-radius: 8px; margin: 20px 0;"><h3 style="margin-top: 0; color: #1A1A2E; border-bottom: 1px solid #ddd; padding-bottom: 8px;">{}</h3>{}</div>"#,
        background, title, body
    )
}

fn table(rows: &[String]) -> String {
    format!(
        r#"<table style="width: 100%; border-collapse: collapse;">{}</table>"#,
        rows.concat()
    )
}

fn document(max_width: u32, heading: &str, sections: &[String], footer: &str) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: {}px; margin: 0 auto;"><h2 style="color: {}; border-bottom: 3px solid {}; padding-bottom: 10px;">{}</h2>{}<div style="margin-top: 30px; padding-top: 20px; border-top: 2px solid #ddd; color: #999; font-size: 12px;">{}</div></div>"#,
        max_width,
        ACCENT,
        ACCENT,
        heading,
        sections.concat(),
        footer
    )
}

/// Application notification. Required fields are assumed present; optional rows are
/// left out entirely when empty.
pub fn application_email(request: &ApplicationRequest) -> OutgoingEmail {
    let full_name = text(&request.full_name).unwrap_or_default();
    let email = text(&request.email).unwrap_or_default();
    let phone = text(&request.phone).unwrap_or_default();
    let property = text(&request.property);

    let personal = table(&[
        row("Full Name", &full_name),
        row(
            "Email",
            &format!(r#"<a href="mailto:{}" style="color: {};">{}</a>"#, email, ACCENT, email),
        ),
        row("Phone", &phone),
        row("Date of Birth", &text(&request.date_of_birth).unwrap_or_default()),
    ]);

    let stay = table(&[
        row("Property", property.as_deref().unwrap_or(NOT_SPECIFIED)),
        row(
            "Room Type",
            text(&request.room_type).as_deref().unwrap_or(NOT_SPECIFIED),
        ),
        row("Move-in Date", &text(&request.move_in_date).unwrap_or_default()),
        row("Lease Duration", &text(&request.lease_duration).unwrap_or_default()),
    ]);

    let mut about_rows = vec![row("Occupation", &text(&request.occupation).unwrap_or_default())];
    if let Some(detail) = text(&request.occupation_detail) {
        about_rows.push(row("School/Company", &detail));
    }
    let about = format!(
        r#"{}<div style="margin-top: 15px;"><strong style="color: #666;">Why Coliving / About:</strong><p style="margin: 8px 0 0 0; line-height: 1.6; background-color: white; padding: 12px; border-radius: 6px; border-left: 3px solid {};">{}</p></div>"#,
        table(&about_rows),
        ACCENT,
        text(&request.about_you).unwrap_or_default()
    );

    let additional: Vec<String> = [
        ("Emergency Contact", &request.emergency_name),
        ("Emergency Phone", &request.emergency_phone),
        ("How They Heard", &request.how_heard),
    ]
    .into_iter()
    .filter_map(|(label, value)| text(value).map(|v| row(label, &v)))
    .collect();

    let footer = format!(
        r#"<p>This application was submitted through the Coliville website application form.</p><p style="margin-top: 8px;"><strong>Quick Actions:</strong> <a href="mailto:{}" style="color: {}; text-decoration: none; margin-right: 15px;">Reply to Applicant</a><span style="color: #666;">Call: {}</span></p>"#,
        email, ACCENT, phone
    );

    let html = document(
        700,
        "New Coliving Application",
        &[
            section("#f9f9f9", "Personal Information", &personal),
            section("#f0f4ff", "Stay Details", &stay),
            section("#f9f9f9", "About the Applicant", &about),
            section("#f9f9f9", "Additional Information", &table(&additional)),
        ],
        &footer,
    );

    OutgoingEmail {
        subject: format!(
            "New Application - {} - {}",
            raw(&request.property).unwrap_or("General"),
            raw(&request.full_name).unwrap_or_default()
        ),
        reply_to: raw(&request.email).map(str::to_string),
        html,
    }
}

pub fn tour_request_email(request: &TourRequest) -> OutgoingEmail {
    let name = format!(
        "{} {}",
        text(&request.first_name).unwrap_or_default(),
        text(&request.last_name).unwrap_or_default()
    );

    let contact = table(&[
        row("Name", &name),
        row("Email", &text(&request.email).unwrap_or_default()),
        row(
            "Phone",
            text(&request.phone).as_deref().unwrap_or("Not provided"),
        ),
    ]);
    let details = table(&[
        row("Property", &text(&request.property).unwrap_or_default()),
        row("Preferred Date", &text(&request.date).unwrap_or_default()),
        row("Preferred Time", &text(&request.time).unwrap_or_default()),
    ]);

    let mut sections = vec![
        section("#f5f5f5", "Contact Information", &contact),
        section("#f5f5f5", "Tour Details", &details),
    ];
    if let Some(notes) = text(&request.notes) {
        sections.push(section(
            "#f5f5f5",
            "Additional Notes",
            &format!(r#"<p style="margin: 0; line-height: 1.6;">{}</p>"#, notes),
        ));
    }

    let html = document(
        600,
        "New Tour Request",
        &sections,
        "<p>This email was sent from the Coliville tour request form.</p>",
    );

    OutgoingEmail {
        subject: format!(
            "Tour Request - {} - {} {}",
            raw(&request.property).unwrap_or_default(),
            raw(&request.first_name).unwrap_or_default(),
            raw(&request.last_name).unwrap_or_default()
        ),
        reply_to: raw(&request.email).map(str::to_string),
        html,
    }
}

/// Trimmed, unescaped value for headers.
fn raw(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
