//! Tarot page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::domain::entities::CardPosition;

/// A card slot on the page, filled in by `static/tarot.js`.
pub struct CardSlot {
    pub index: usize,
    pub label: String,
}

/// Template for the tarot page.
///
/// Renders `templates/tarot.html` with:
/// - Draw button
/// - One slot per card position
/// - Summary and error areas
#[derive(Template, WebTemplate)]
#[template(path = "tarot.html")]
struct TarotTemplate {
    slots: Vec<CardSlot>,
}

/// Renders the tarot page.
///
/// # Endpoint
///
/// `GET /`
pub async fn tarot_page_handler() -> impl IntoResponse {
    let slots = CardPosition::ALL
        .iter()
        .enumerate()
        .map(|(index, position)| CardSlot {
            index,
            label: capitalize(&position.to_string()),
        })
        .collect();

    TarotTemplate { slots }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("past"), "Past");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_template_renders_every_slot() {
        let template = TarotTemplate {
            slots: vec![
                CardSlot {
                    index: 0,
                    label: "Past".to_string(),
                },
                CardSlot {
                    index: 1,
                    label: "Present".to_string(),
                },
            ],
        };

        let html = template.render().unwrap();

        assert!(html.contains(r#"id="card-0""#));
        assert!(html.contains(r#"id="card-1""#));
        assert!(html.contains("Present"));
    }
}
