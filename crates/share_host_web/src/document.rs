//! `document`-backed metadata and body class-list adapters.

use share_host::{BodyClassList, DocumentMetadataSource};

#[derive(Debug, Clone, Copy, Default)]
/// Metadata source reading the live `window.document` on every call.
pub struct WebDocumentMetadata;

impl DocumentMetadataSource for WebDocumentMetadata {
    fn canonical_url(&self, selector: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            let element = document()?.query_selector(selector).ok().flatten()?;
            // `href` resolves relative canonical links against the document base.
            let link = element.dyn_into::<web_sys::HtmlLinkElement>().ok()?;
            Some(link.href())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = selector;
            None
        }
    }

    fn meta_content(&self, name: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            let element = document()?
                .query_selector(&meta_selector(name))
                .ok()
                .flatten()?;
            let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
            Some(meta.content())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = name;
            None
        }
    }

    fn document_title(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            document().map(|doc| doc.title()).unwrap_or_default()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            String::new()
        }
    }

    fn location_href(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            document()
                .and_then(|doc| doc.location())
                .and_then(|location| location.href().ok())
                .unwrap_or_default()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            String::new()
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Class-list adapter for `document.body`.
pub struct WebBodyClassList;

impl BodyClassList for WebBodyClassList {
    fn add_class(&self, class: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let body = document()
                .and_then(|doc| doc.body())
                .ok_or_else(|| "document.body unavailable".to_string())?;
            body.class_list()
                .add_1(class)
                .map_err(|e| format!("classList.add failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = class;
            Ok(())
        }
    }
}

/// Builds `meta[name="..."]` with `name` as a quoted CSS string, escaping backslashes and quotes.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn meta_selector(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    for ch in name.chars() {
        if matches!(ch, '\\' | '"') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    format!("meta[name=\"{quoted}\"]")
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use share_host::{read_page_metadata, PageMetadata, ShareConfig};

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_document_reads_nothing() {
        assert_eq!(
            read_page_metadata(&WebDocumentMetadata, &ShareConfig::default()),
            PageMetadata::default()
        );
        assert_eq!(WebDocumentMetadata.document_title(), "");
        assert_eq!(WebDocumentMetadata.location_href(), "");
        WebBodyClassList
            .add_class("feature-native-share")
            .expect("add class");
    }

    #[test]
    fn meta_selector_quotes_backslashes_and_quotes() {
        assert_eq!(meta_selector("description"), r#"meta[name="description"]"#);
        assert_eq!(meta_selector(r#"a\b"c"#), r#"meta[name="a\\b\"c"]"#);
    }
}
