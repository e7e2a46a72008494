//! Text formatting shared by all template variants.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Separator between the start and end of a date range.
pub const RANGE_SEPARATOR: &str = " – ";

/// Formats an ISO date (`YYYY-MM-DD` or `YYYY-MM`) as `Mon YYYY`.
///
/// Empty or unparsable input yields an empty string, never a placeholder.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"));
    match parsed {
        Ok(date) => format!("{} {:04}", MONTHS[date.month0() as usize], date.year()),
        Err(_) => String::new(),
    }
}

/// Formats a start/end pair. `current` replaces the end with "Present" regardless
/// of the stored end date. Empty sides are dropped; both empty yields "".
pub fn format_date_range(start: &str, end: &str, current: bool) -> String {
    let start = format_date(start);
    let end = if current {
        "Present".to_string()
    } else {
        format_date(end)
    };
    [start, end]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(RANGE_SEPARATOR)
}

/// Splits a description into one bullet per non-blank line.
pub fn description_bullets(description: &str) -> Vec<String> {
    description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Joins non-empty parts with `separator`.
pub fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Link target for a user-entered URL. Bare hosts get `https://`; an explicit
/// scheme other than http(s) yields `None` and the link is shown as plain text.
pub fn link_href(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.split_once(':') {
        Some((scheme, _)) if is_scheme(scheme) => {
            let scheme = scheme.to_ascii_lowercase();
            (scheme == "http" || scheme == "https").then(|| raw.to_string())
        }
        _ => Some(format!("https://{raw}")),
    }
}

// `host:port` is not a scheme: hosts carry a dot.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_full_iso() {
        assert_eq!(format_date("2021-03-01"), "Mar 2021");
        assert_eq!(format_date("2018-12-31"), "Dec 2018");
    }

    #[test]
    fn test_format_date_month_only() {
        assert_eq!(format_date("2019-07"), "Jul 2019");
    }

    #[test]
    fn test_format_date_empty_and_invalid() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
        assert_eq!(format_date("not a date"), "");
        assert_eq!(format_date("2021-13-01"), "");
    }

    #[test]
    fn test_range_current_ignores_end_date() {
        assert_eq!(
            format_date_range("2021-03-01", "2023-01-01", true),
            "Mar 2021 – Present"
        );
        assert!(format_date_range("2021-03-01", "2023-01-01", true).ends_with("Present"));
    }

    #[test]
    fn test_range_both_dates() {
        assert_eq!(
            format_date_range("2018-06-01", "2021-02-01", false),
            "Jun 2018 – Feb 2021"
        );
    }

    #[test]
    fn test_range_empty_sides_dropped() {
        assert_eq!(format_date_range("", "", false), "");
        assert_eq!(format_date_range("2018-06-01", "", false), "Jun 2018");
        assert_eq!(format_date_range("", "", true), "Present");
    }

    #[test]
    fn test_bullets_drop_blank_lines() {
        let bullets = description_bullets("Led design\n\n  \nMentored juniors\r\nShipped v2\n");
        assert_eq!(bullets, vec!["Led design", "Mentored juniors", "Shipped v2"]);
    }

    #[test]
    fn test_bullets_empty_description() {
        assert!(description_bullets("").is_empty());
        assert!(description_bullets("\n\n").is_empty());
    }

    #[test]
    fn test_join_present_skips_blanks() {
        assert_eq!(join_present(&["Acme", "", " Austin "], " • "), "Acme • Austin");
    }

    #[test]
    fn test_link_href_adds_https_to_bare_hosts() {
        assert_eq!(link_href("github.com/alex").as_deref(), Some("https://github.com/alex"));
        assert_eq!(link_href("alex.dev:8080/cv").as_deref(), Some("https://alex.dev:8080/cv"));
        assert_eq!(link_href("http://alex.dev").as_deref(), Some("http://alex.dev"));
        assert_eq!(link_href(" HTTPS://alex.dev ").as_deref(), Some("HTTPS://alex.dev"));
        assert_eq!(link_href("  "), None);
    }

    #[test]
    fn test_link_href_rejects_other_schemes() {
        assert_eq!(link_href("javascript:alert(1)"), None);
        assert_eq!(link_href("JavaScript:alert(1)"), None);
        assert_eq!(link_href("data:text/html;base64,PHNjcmlwdD4="), None);
        assert_eq!(link_href("vbscript:msgbox"), None);
    }
}
