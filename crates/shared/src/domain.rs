use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtworkId(pub i64);

// Rendered in place of a field the remote source did not populate.
pub const MISSING_FIELD_PLACEHOLDER: &str = "null";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_of_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inscriptions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<i64>,
}

impl Artwork {
    pub fn title_text(&self) -> &str {
        text_or_placeholder(&self.title)
    }

    pub fn origin_text(&self) -> &str {
        text_or_placeholder(&self.place_of_origin)
    }

    pub fn artist_text(&self) -> &str {
        text_or_placeholder(&self.artist_display)
    }

    pub fn inscriptions_text(&self) -> &str {
        text_or_placeholder(&self.inscriptions)
    }

    pub fn date_start_text(&self) -> String {
        year_or_placeholder(self.date_start)
    }

    pub fn date_end_text(&self) -> String {
        year_or_placeholder(self.date_end)
    }
}

// Empty strings from the source render the same as absent fields.
fn text_or_placeholder(field: &Option<String>) -> &str {
    match field.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => MISSING_FIELD_PLACEHOLDER,
    }
}

fn year_or_placeholder(field: Option<i64>) -> String {
    match field {
        Some(year) => year.to_string(),
        None => MISSING_FIELD_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(id: i64) -> Artwork {
        Artwork {
            id: ArtworkId(id),
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    #[test]
    fn absent_fields_render_placeholder() {
        let art = artwork(1);
        assert_eq!(art.title_text(), "null");
        assert_eq!(art.inscriptions_text(), "null");
        assert_eq!(art.date_start_text(), "null");
        assert_eq!(art.date_end_text(), "null");
    }

    #[test]
    fn empty_strings_render_placeholder() {
        let mut art = artwork(2);
        art.artist_display = Some(String::new());
        assert_eq!(art.artist_text(), "null");
    }

    #[test]
    fn populated_fields_render_verbatim() {
        let mut art = artwork(3);
        art.title = Some("A Sunday on La Grande Jatte".to_string());
        art.date_start = Some(1884);
        art.date_end = Some(1886);
        assert_eq!(art.title_text(), "A Sunday on La Grande Jatte");
        assert_eq!(art.date_start_text(), "1884");
        assert_eq!(art.date_end_text(), "1886");
    }

    #[test]
    fn zero_year_is_not_a_placeholder() {
        let mut art = artwork(4);
        art.date_start = Some(0);
        assert_eq!(art.date_start_text(), "0");
    }
}
