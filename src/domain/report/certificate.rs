//! Certificate rendering as a standalone SVG document.
//!
//! Layout is a fixed 1200x800 canvas. Text is centered on x=600; callers
//! needing a raster image convert the SVG themselves.

use serde::Serialize;

use super::pledge::Pledge;
use crate::domain::foundation::{Percentage, Timestamp};

pub const CERTIFICATE_WIDTH: u32 = 1200;
pub const CERTIFICATE_HEIGHT: u32 = 800;

const GREEN_PRIMARY: &str = "#2E8B57";
const GREEN_LIGHT: &str = "#90EE90";
const GOLD: &str = "#FFD700";

/// A rendered certificate ready for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub file_name: String,
    pub content_type: &'static str,
    pub svg: String,
    pub issued_on: String,
}

/// Renders pledge certificates.
pub struct CertificateRenderer;

impl CertificateRenderer {
    pub fn render(pledge: &Pledge, score: Percentage, issued: Timestamp) -> Certificate {
        let date = issued.long_date();
        let mut svg = Self::document_lines(pledge, score, &date).join("\n");
        svg.push('\n');

        Certificate {
            file_name: pledge.file_name("svg"),
            content_type: "image/svg+xml",
            svg,
            issued_on: date,
        }
    }

    fn document_lines(pledge: &Pledge, score: Percentage, date: &str) -> Vec<String> {
        let mut lines = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="DejaVu Sans, Arial, sans-serif">"#,
                w = CERTIFICATE_WIDTH,
                h = CERTIFICATE_HEIGHT
            ),
            r#"  <rect width="100%" height="100%" fill="white"/>"#.to_string(),
            format!(
                r#"  <rect x="10" y="10" width="1180" height="780" fill="none" stroke="{GREEN_PRIMARY}" stroke-width="10"/>"#
            ),
            format!(
                r#"  <rect x="30" y="30" width="1140" height="740" fill="none" stroke="{GREEN_LIGHT}" stroke-width="3"/>"#
            ),
            Self::centered(160, 60, GREEN_PRIMARY, true, "GREEN GUARDIAN CERTIFICATE"),
            Self::centered(240, 40, "black", false, "This certifies that"),
            Self::centered(330, 50, GREEN_PRIMARY, true, pledge.name()),
            format!(
                r#"  <line x1="200" y1="350" x2="1000" y2="350" stroke="{GREEN_PRIMARY}" stroke-width="3"/>"#
            ),
            Self::centered(410, 30, "black", false, "has committed to sustainable building practices"),
            Self::centered(450, 30, "black", false, "and environmental stewardship"),
        ];

        if let Some(custom) = pledge.custom_pledge() {
            lines.push(Self::centered(
                490,
                22,
                "#1E4D3D",
                false,
                &format!("\u{201C}{}\u{201D}", custom),
            ));
        }
        lines.push(Self::centered(
            540,
            30,
            GREEN_PRIMARY,
            false,
            &format!("Green Building Score: {}", score),
        ));

        for (cx, glyph, color) in [(150, "🌱", GREEN_PRIMARY), (1050, "🏆", GOLD)] {
            lines.push(format!(
                r#"  <circle cx="{cx}" cy="250" r="50" fill="{GREEN_LIGHT}" stroke="{GREEN_PRIMARY}" stroke-width="3"/>"#
            ));
            lines.push(format!(
                r#"  <text x="{cx}" y="268" font-size="48" text-anchor="middle" fill="{color}">{glyph}</text>"#
            ));
        }

        lines.push(Self::centered(680, 30, "black", false, &format!("Date: {}", date)));
        lines.push(format!(
            r#"  <line x1="400" y1="715" x2="800" y2="715" stroke="{GREEN_PRIMARY}" stroke-width="2"/>"#
        ));
        lines.push(Self::centered(750, 30, GREEN_PRIMARY, false, "Green Guardian Team"));
        lines.push("</svg>".to_string());
        lines
    }

    fn centered(y: u32, size: u32, fill: &str, bold: bool, text: &str) -> String {
        let weight = if bold { "bold" } else { "normal" };
        format!(
            r#"  <text x="600" y="{y}" font-size="{size}" font-weight="{weight}" text-anchor="middle" fill="{fill}">{}</text>"#,
            escape_xml(text)
        )
    }
}

/// Escapes the five XML special characters.
pub fn escape_xml(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::pledge::Commitment;
    use chrono::{TimeZone, Utc};

    fn issued() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 6, 5, 9, 30, 0).unwrap())
    }

    #[test]
    fn certificate_contains_name_score_and_date() {
        let pledge = Pledge::new("Ada Lovelace", [Commitment::Energy], None).unwrap();
        let cert = CertificateRenderer::render(&pledge, Percentage::new(82), issued());

        assert!(cert.svg.starts_with("<svg"));
        assert!(cert.svg.trim_end().ends_with("</svg>"));
        assert!(cert.svg.contains(r#"width="1200" height="800""#));
        assert!(cert.svg.contains("GREEN GUARDIAN CERTIFICATE"));
        assert!(cert.svg.contains("This certifies that"));
        assert!(cert.svg.contains(">Ada Lovelace<"));
        assert!(cert.svg.contains("Green Building Score: 82%"));
        assert!(cert.svg.contains("Date: June 05, 2025"));
        assert!(cert.svg.contains("Green Guardian Team"));
        assert_eq!(cert.issued_on, "June 05, 2025");
        assert_eq!(cert.content_type, "image/svg+xml");
        assert_eq!(cert.file_name, "green_guardian_certificate_ada_lovelace.svg");
    }

    #[test]
    fn markup_in_name_is_escaped() {
        let pledge = Pledge::new("<script>&", [Commitment::Water], None).unwrap();
        let cert = CertificateRenderer::render(&pledge, Percentage::ZERO, issued());
        assert!(cert.svg.contains("&lt;script&gt;&amp;"));
        assert!(!cert.svg.contains("<script>"));
    }

    #[test]
    fn custom_pledge_is_quoted_when_present() {
        let pledge = Pledge::new(
            "Ada",
            [Commitment::Waste],
            Some("Bike to work".to_string()),
        )
        .unwrap();
        let cert = CertificateRenderer::render(&pledge, Percentage::new(50), issued());
        assert!(cert.svg.contains("\u{201C}Bike to work\u{201D}"));
    }

    #[test]
    fn document_is_one_element_per_line() {
        let pledge = Pledge::new("Ada", [Commitment::Energy], None).unwrap();
        let cert = CertificateRenderer::render(&pledge, Percentage::new(70), issued());

        assert!(cert.svg.ends_with("</svg>\n"));
        let lines: Vec<&str> = cert.svg.lines().collect();
        assert_eq!(lines.first().map(|l| l.starts_with("<svg ")), Some(true));
        assert!(lines[1..lines.len() - 1].iter().all(|l| l.starts_with("  <")));
        assert_eq!(cert.svg.matches("<text ").count(), 10);
    }

    #[test]
    fn escape_xml_handles_quotes() {
        assert_eq!(escape_xml(r#"a"b'c"#), "a&quot;b&apos;c");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
