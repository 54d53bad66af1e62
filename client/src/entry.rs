use serde::{Deserialize, Serialize};

/// A single entry in the remote user dictionary.
///
/// Serialized with the camelCase field names the service expects.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    /// Language to be translated.
    pub from_lang: String,
    /// Text to be translated.
    pub from_text: String,
    /// Language to translate to.
    pub to_lang: String,
    /// Translated text.
    pub to_text: String,
}

impl DictionaryEntry {
    /// Create a new entry.
    pub fn new(
        from_lang: impl Into<String>,
        from_text: impl Into<String>,
        to_lang: impl Into<String>,
        to_text: impl Into<String>,
    ) -> Self {
        Self {
            from_lang: from_lang.into(),
            from_text: from_text.into(),
            to_lang: to_lang.into(),
            to_text: to_text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wire_field_names() {
        let entry = DictionaryEntry::new("ja", "金曜日", "en", "FRIDAY");

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "fromLang": "ja",
                "fromText": "金曜日",
                "toLang": "en",
                "toText": "FRIDAY",
            })
        );
    }
}
