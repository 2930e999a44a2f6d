use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// A single joke as served by the provider.
///
/// Records are only ever built by decoding a response, and are read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    /// Numeric ID of the joke.
    id: u32,

    /// Free-text category label, e.g. `general` or `knock-knock`.
    #[serde(rename = "type")]
    category: String,

    /// The question or lead-in.
    setup: String,

    /// The answer.
    punchline: String,
}

impl Joke {
    /// Returns the numeric ID of the joke.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the category label exactly as the provider sent it.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the category as a [`Category`] if it is one of the known labels.
    pub fn known_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    /// Returns the setup text.
    pub fn setup(&self) -> &str {
        &self.setup
    }

    /// Returns the punchline text.
    pub fn punchline(&self) -> &str {
        &self.punchline
    }

    /// Renders the joke as a short card with its ID and category.
    ///
    /// ```text
    /// 😄 Joke #1 (general)
    /// What did the fish say when it hit the wall?
    /// Dam.
    /// ```
    pub fn format(&self) -> String {
        format!(
            "😄 Joke #{} ({})\n{}\n{}\n",
            self.id, self.category, self.setup, self.punchline
        )
    }
}

impl Display for Joke {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Setup: {}", self.setup)?;
        writeln!(f, "Punchline: {}", self.punchline)
    }
}

/// Category labels the provider is known to serve.
///
/// Can be passed directly to [`Client::fetch_by_type`].
///
/// [`Client::fetch_by_type`]: crate::Client::fetch_by_type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `general`
    General,
    /// `knock-knock`
    KnockKnock,
    /// `programming`
    Programming,
}

impl Category {
    /// Returns the label used in URLs and in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::KnockKnock => "knock-knock",
            Category::Programming => "programming",
        }
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Category::General),
            "knock-knock" => Ok(Category::KnockKnock),
            "programming" => Ok(Category::Programming),
            other => Err(format!("unknown joke category: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms() -> Joke {
        serde_json::from_str(
            r#"{
                "type": "general",
                "setup": "Why don't scientists trust atoms?",
                "punchline": "Because they make up everything!",
                "id": 1
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn decodes_type_field_into_category() {
        let joke = atoms();
        assert_eq!(joke.id(), 1);
        assert_eq!(joke.category(), "general");
        assert_eq!(joke.known_category(), Some(Category::General));
        assert_eq!(joke.setup(), "Why don't scientists trust atoms?");
        assert_eq!(joke.punchline(), "Because they make up everything!");
    }

    #[test]
    fn serializes_back_with_provider_field_names() {
        let value = serde_json::to_value(atoms()).unwrap();
        assert_eq!(value["type"], "general");
        assert!(value.get("category").is_none());
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let res = serde_json::from_str::<Joke>(r#"{"id": 4, "type": "general"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn display_contains_setup_and_punchline() {
        let joke = atoms();
        let text = joke.to_string();
        assert_eq!(
            text,
            "Setup: Why don't scientists trust atoms?\nPunchline: Because they make up everything!\n"
        );
    }

    #[test]
    fn format_includes_id_and_category() {
        let card = atoms().format();
        assert!(card.starts_with("😄 Joke #1 (general)\n"));
        assert!(card.contains("Why don't scientists trust atoms?"));
        assert!(card.contains("Because they make up everything!"));
    }

    #[test]
    fn unknown_category_stays_free_text() {
        let joke: Joke = serde_json::from_str(
            r#"{"id": 7, "type": "dad", "setup": "a", "punchline": "b"}"#,
        )
        .unwrap();
        assert_eq!(joke.category(), "dad");
        assert_eq!(joke.known_category(), None);
    }

    #[test]
    fn category_labels_round_trip() {
        for category in [Category::General, Category::KnockKnock, Category::Programming] {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(Category::KnockKnock.to_string(), "knock-knock");
    }
}
