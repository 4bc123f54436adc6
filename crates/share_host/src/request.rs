//! Payload handed to the host's native share capability.

use serde::{Deserialize, Serialize};

use crate::metadata::{DocumentMetadataSource, PageMetadata};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// `{title, text, url}` request accepted by the native share capability.
///
/// `text` is omitted from the serialized form when absent.
pub struct ShareRequest {
    /// Title shown by the host share UI.
    pub title: String,
    /// Body text, taken only from the description meta tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Address being shared.
    pub url: String,
}

impl ShareRequest {
    /// Resolves a request from a metadata snapshot, falling back to the document's own title and
    /// address. The description has no fallback.
    pub fn resolve<D: DocumentMetadataSource + ?Sized>(
        metadata: PageMetadata,
        document: &D,
    ) -> Self {
        let PageMetadata {
            canonical_url,
            title,
            description,
        } = metadata;

        Self {
            title: title.unwrap_or_else(|| document.document_title()),
            text: description,
            url: canonical_url.unwrap_or_else(|| document.location_href()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::metadata::MemoryDocument;

    #[test]
    fn empty_meta_title_still_wins_over_document_title() {
        let doc = MemoryDocument::new("Doc", "https://ex.com/here");
        let request = ShareRequest::resolve(
            PageMetadata {
                title: Some(String::new()),
                ..PageMetadata::default()
            },
            &doc,
        );
        assert_eq!(request.title, "");
        assert_eq!(request.url, "https://ex.com/here");
    }

    #[test]
    fn absent_text_is_omitted_from_json() {
        let request = ShareRequest {
            title: "T".to_string(),
            text: None,
            url: "https://ex.com/p".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).expect("serialize"),
            json!({"title": "T", "url": "https://ex.com/p"})
        );
    }
}
