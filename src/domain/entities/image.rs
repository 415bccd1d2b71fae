//! Image record entity returned by the image search API.

use serde::{Deserialize, Serialize};

/// An image hit from the image search API.
///
/// The search API returns many more fields per hit; only the ones shown to
/// the user are kept. The wire names match the upstream payload so the same
/// struct serves both decoding and the `/api/tarot` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: u64,

    #[serde(rename = "webformatURL")]
    pub webformat_url: String,

    /// Comma-joined free-text tags, e.g. `"moon, night, sky"`.
    pub tags: String,
}

impl ImageRecord {
    pub fn new(id: u64, webformat_url: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            id,
            webformat_url: webformat_url.into(),
            tags: tags.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_pixabay_hit_ignoring_extra_fields() {
        let hit = json!({
            "id": 195893,
            "pageURL": "https://pixabay.com/en/blossom-bloom-flower-195893/",
            "type": "photo",
            "tags": "blossom, bloom, flower",
            "webformatURL": "https://pixabay.com/get/35bbf209e13e39d2_640.jpg",
            "likes": 44
        });

        let record: ImageRecord = serde_json::from_value(hit).unwrap();

        assert_eq!(record.id, 195893);
        assert_eq!(record.tags, "blossom, bloom, flower");
        assert_eq!(
            record.webformat_url,
            "https://pixabay.com/get/35bbf209e13e39d2_640.jpg"
        );
    }

    #[test]
    fn test_serializes_with_upstream_field_names() {
        let record = ImageRecord::new(7, "https://img/7.jpg", "moon");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({ "id": 7, "webformatURL": "https://img/7.jpg", "tags": "moon" })
        );
    }
}
