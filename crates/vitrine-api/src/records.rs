//! Wire types — the JSON shapes the events backend actually sends.
//!
//! Field names are camelCase on the wire. Dates stay as raw strings here:
//! the backend promises ISO 8601 but old rows have been seen with free-form
//! text, and the display layer wants the original string when parsing fails.

use serde::{Deserialize, Serialize};

/// One event row as returned by `GET /api/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,

    /// ISO 8601 timestamp, unparsed.
    pub start_date: String,
    /// Optional ISO 8601 timestamp, unparsed. When present the backend
    /// guarantees `end_date >= start_date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(default)]
    pub featured: bool,
    /// Author-set status hint: `UPCOMING`, `ONGOING`, `COMPLETED`,
    /// `CANCELLED`. Kept as a string; unknown values are tolerated
    /// downstream rather than failing the whole list.
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub published: bool,

    /// Tailwind gradient class string chosen in the admin UI
    /// (e.g. `"from-blue-600 via-indigo-600 to-purple-600"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_status() -> String {
    "UPCOMING".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record_with_defaults() {
        let json = r#"{
            "id": "evt_1",
            "title": "General Assembly",
            "description": "Annual members meeting",
            "startDate": "2026-03-01T18:00:00.000Z",
            "location": "Tunis"
        }"#;
        let rec: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.status, "UPCOMING");
        assert!(!rec.featured);
        assert!(!rec.published);
        assert!(rec.end_date.is_none());
    }

    #[test]
    fn camel_case_fields_round_trip() {
        let json = r#"{
            "id": "evt_2",
            "title": "AI Conference",
            "subtitle": "2nd edition",
            "description": "Three days of talks",
            "startDate": "2026-10-14T09:00:00.000Z",
            "endDate": "2026-10-16T18:00:00.000Z",
            "location": "Carthage",
            "attendees": "200+ participants",
            "imageUrl": "https://img.example/conf.jpg",
            "featured": true,
            "status": "UPCOMING",
            "published": true,
            "gradient": "from-blue-600 via-indigo-600 to-purple-600"
        }"#;
        let rec: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.end_date.as_deref(), Some("2026-10-16T18:00:00.000Z"));
        assert!(rec.featured);

        let back = serde_json::to_value(&rec).unwrap();
        assert_eq!(back["startDate"], "2026-10-14T09:00:00.000Z");
        assert_eq!(back["imageUrl"], "https://img.example/conf.jpg");
    }
}
