//! Core data types: [`StaffRecord`], [`Document`], [`Category`] and the store [`Meta`],
//! plus the small text helpers every mutation path runs field input through.

use chrono::{Local, NaiveDateTime, SubsecRound};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fallback id for names that slug down to nothing.
pub const DEFAULT_SLUG: &str = "staff-member";

static SLUG_STRIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("slug strip pattern"));
static SLUG_COLLAPSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("slug collapse pattern"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern"));

/// One of the two staff groupings shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Medical,
    Support,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Medical, Category::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Medical => "medical",
            Category::Support => "support",
        }
    }

    /// Human label used by the editors.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Medical => "Medical",
            Category::Support => "Support",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the menu shorthands as well as the full names: `1`, `m`, `medical`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "m" | "medical" => Ok(Category::Medical),
            "2" | "s" | "support" => Ok(Category::Support),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// A downloadable file attached to a record. `path` is relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub path: String,
}

impl Document {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// One staff member's profile.
///
/// Records are only built through [`StaffRecord::from_form`](crate::form), so a record
/// held by the store has always been validated and normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRecord {
    /// Slug of the name at creation time; never changes afterwards.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub credentials: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub education: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "now")]
    pub last_modified: NaiveDateTime,
}

/// Store-level metadata. Empty strings are back-filled from the config on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default = "now")]
    pub last_updated: NaiveDateTime,
    #[serde(default)]
    pub image_dir: String,
    #[serde(default)]
    pub document_dir: String,
}

impl Default for Meta {
    fn default() -> Self {
        Self {
            last_updated: now(),
            image_dir: String::new(),
            document_dir: String::new(),
        }
    }
}

/// Local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// URL and filename safe identifier for a display name.
///
/// Lowercases, drops everything but ASCII letters, digits, whitespace and hyphens,
/// then collapses whitespace/underscore/hyphen runs into a single hyphen.
pub fn slug(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let stripped = SLUG_STRIP.replace_all(&lowered, "");
    let collapsed = SLUG_COLLAPSE.replace_all(&stripped, "-");
    let trimmed = collapsed.trim_matches('-');
    if trimmed.is_empty() {
        DEFAULT_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Splits comma separated input, keeping order and dropping empty entries.
pub fn clean_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn format_list(values: &[String]) -> String {
    values.join(", ")
}

/// Ten-digit numbers become `(XXX) XXX-XXXX`; anything else is kept as typed.
pub fn normalize_phone(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        value.trim().to_string()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

pub fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Target for a `tel:` link: digits plus a leading `+` if one was typed.
pub fn tel_target(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_examples() {
        assert_eq!(slug("Dr. Jane O'Brien"), "dr-jane-obrien");
        assert_eq!(slug("  Maria   Lopez, NP  "), "maria-lopez-np");
        assert_eq!(slug("front_desk -- lead"), "frontdesk-lead");
        assert_eq!(slug("---"), DEFAULT_SLUG);
        assert_eq!(slug(""), DEFAULT_SLUG);
    }

    #[test]
    fn test_slug_is_idempotent_and_clean() {
        let names = [
            "Dr. Jane O'Brien",
            "ÉMILE  Zola-Smith",
            "a__b  c--d",
            "  -Leading and trailing- ",
            "123 Main",
            "!!!",
        ];
        for name in names {
            let once = slug(name);
            assert_eq!(slug(&once), once, "slug not idempotent for {name:?}");
            assert!(once
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!once.starts_with('-') && !once.ends_with('-'));
            assert!(!once.contains("--"));
        }
    }

    #[test]
    fn test_clean_list_keeps_order_and_drops_empties() {
        assert_eq!(
            clean_list(" Spanish, ,English ,, French"),
            vec!["Spanish", "English", "French"]
        );
        assert!(clean_list(" , ").is_empty());
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("9015551234"), "(901) 555-1234");
        assert_eq!(normalize_phone("901.555.1234"), "(901) 555-1234");
        assert_eq!(normalize_phone("555-1234"), "555-1234");
        assert_eq!(normalize_phone(" +1 901 555 1234 "), "+1 901 555 1234");
    }

    #[test]
    fn test_email_and_url_shapes() {
        assert!(is_valid_email("jane@clinic.com"));
        assert!(!is_valid_email("jane@clinic"));
        assert!(!is_valid_email("jane doe@clinic.com"));
        assert!(is_valid_url("https://linkedin.com/in/jane"));
        assert!(is_valid_url("http://example.org"));
        assert!(!is_valid_url("linkedin.com/in/jane"));
    }

    #[test]
    fn test_tel_target() {
        assert_eq!(tel_target("(901) 555-1234"), "9015551234");
        assert_eq!(tel_target("+1 901 555 1234"), "+19015551234");
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("1".parse::<Category>().unwrap(), Category::Medical);
        assert_eq!("S".parse::<Category>().unwrap(), Category::Support);
        assert_eq!("medical".parse::<Category>().unwrap(), Category::Medical);
        assert!("3".parse::<Category>().is_err());
    }

    #[test]
    fn test_record_deserializes_legacy_empty_strings_as_absent() {
        let json = r#"{
            "id": "jane-doe",
            "name": "Jane Doe",
            "email": "",
            "phone": "(901) 555-1234",
            "linkedin": "",
            "image": "",
            "last_modified": "2024-05-01T09:30:00"
        }"#;
        let record: StaffRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.email, None);
        assert_eq!(record.phone.as_deref(), Some("(901) 555-1234"));
        assert_eq!(record.image, None);
        assert!(record.documents.is_empty());
        assert_eq!(record.last_modified.to_string(), "2024-05-01 09:30:00");
    }
}
