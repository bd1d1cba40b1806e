//! @ai:module:intent Tweet payloads returned by the search API and text extraction
//! @ai:module:layer domain
//! @ai:module:public_api Status, SearchResponse, PostLike, extract_text
//! @ai:module:stateless true

use serde::Deserialize;

/// @ai:intent Read access to the text fields of a tweet-like object
pub trait PostLike {
    /// Short text; always present, possibly truncated.
    fn short_text(&self) -> &str;

    /// Untruncated text when the service supplied it.
    fn extended_text(&self) -> Option<&str>;

    /// The original post when this one is a repost.
    fn original(&self) -> Option<&Self>;
}

/// @ai:intent Pick the text to analyze from a post
/// @ai:effects pure
///
/// A repost yields the original's text, otherwise the post's own. In both
/// cases extended text wins over short text.
pub fn extract_text<P: PostLike>(post: &P) -> String {
    let source = post.original().unwrap_or(post);

    source
        .extended_text()
        .unwrap_or_else(|| source.short_text())
        .to_string()
}

/// @ai:intent Search API response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub statuses: Vec<Status>,
}

/// @ai:intent A single tweet as returned in extended mode
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    /// Absent in extended mode, where `full_text` carries the content.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub retweeted_status: Option<Box<Status>>,
}

impl PostLike for Status {
    fn short_text(&self) -> &str {
        &self.text
    }

    fn extended_text(&self) -> Option<&str> {
        self.full_text.as_deref()
    }

    fn original(&self) -> Option<&Self> {
        self.retweeted_status.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(text: &str, full_text: Option<&str>) -> Status {
        Status {
            text: text.to_string(),
            full_text: full_text.map(str::to_string),
            retweeted_status: None,
        }
    }

    #[test]
    fn test_own_extended_text_preferred() {
        assert_eq!(extract_text(&status("short…", Some("the whole thing"))), "the whole thing");
    }

    #[test]
    fn test_own_short_text_fallback() {
        assert_eq!(extract_text(&status("just short", None)), "just short");
    }

    #[test]
    fn test_repost_uses_original_extended_text() {
        let mut repost = status("RT @a: short…", Some("RT @a: own full"));
        repost.retweeted_status = Some(Box::new(status("short…", Some("original full"))));

        assert_eq!(extract_text(&repost), "original full");
    }

    #[test]
    fn test_repost_falls_back_to_original_short_text() {
        let mut repost = status("RT @a: hi", Some("RT @a: hi there"));
        repost.retweeted_status = Some(Box::new(status("hi there", None)));

        assert_eq!(extract_text(&repost), "hi there");
    }

    #[test]
    fn test_deserialize_extended_mode_payload() {
        let body = r#"{
            "statuses": [
                {"full_text": "plain tweet", "id": 1},
                {"full_text": "RT @b: trunc", "retweeted_status": {"full_text": "long original"}}
            ],
            "search_metadata": {"count": 2}
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let texts: Vec<String> = response.statuses.iter().map(extract_text).collect();

        assert_eq!(texts, vec!["plain tweet", "long original"]);
    }

    #[test]
    fn test_deserialize_missing_statuses_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.statuses.is_empty());
    }
}
