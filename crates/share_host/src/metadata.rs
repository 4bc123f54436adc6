//! Page metadata contracts and in-memory document adapters.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::config::ShareConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Snapshot of the share-relevant metadata declared by the current document.
///
/// Each field is `None` when the corresponding element is absent. A present element with empty
/// content yields `Some(String::new())`, which still takes precedence over document fallbacks.
pub struct PageMetadata {
    /// Address of the canonical-link element.
    pub canonical_url: Option<String>,
    /// Content of the title meta tag.
    pub title: Option<String>,
    /// Content of the description meta tag.
    pub description: Option<String>,
}

/// Host service for reading document metadata at call time.
pub trait DocumentMetadataSource {
    /// Resolved address of the first element matching `selector`, if one exists.
    fn canonical_url(&self, selector: &str) -> Option<String>;

    /// `content` of the first `<meta name="{name}">` element, if one exists.
    fn meta_content(&self, name: &str) -> Option<String>;

    /// The document's own title.
    fn document_title(&self) -> String;

    /// The document's current address.
    fn location_href(&self) -> String;
}

/// Reads a fresh [`PageMetadata`] snapshot using the element names in `config`.
pub fn read_page_metadata<D: DocumentMetadataSource + ?Sized>(
    document: &D,
    config: &ShareConfig,
) -> PageMetadata {
    PageMetadata {
        canonical_url: document.canonical_url(&config.canonical_selector),
        title: document.meta_content(&config.title_meta),
        description: document.meta_content(&config.description_meta),
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Document adapter for targets without a DOM: no metadata, empty title and address.
pub struct NoopDocument;

impl DocumentMetadataSource for NoopDocument {
    fn canonical_url(&self, _selector: &str) -> Option<String> {
        None
    }

    fn meta_content(&self, _name: &str) -> Option<String> {
        None
    }

    fn document_title(&self) -> String {
        String::new()
    }

    fn location_href(&self) -> String {
        String::new()
    }
}

#[derive(Debug, Default)]
struct MemoryDocumentState {
    canonical: HashMap<String, String>,
    meta: HashMap<String, String>,
    title: String,
    href: String,
}

#[derive(Debug, Clone, Default)]
/// In-memory document whose metadata can be edited between reads.
///
/// Clones share state, so a test can keep one handle while the adapter owns another.
pub struct MemoryDocument {
    inner: Rc<RefCell<MemoryDocumentState>>,
}

impl MemoryDocument {
    /// Creates a document with the given title and address and no metadata elements.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        let doc = Self::default();
        {
            let mut state = doc.inner.borrow_mut();
            state.title = title.into();
            state.href = href.into();
        }
        doc
    }

    /// Declares (or replaces) the element matched by a canonical-link selector.
    pub fn set_canonical(&self, selector: impl Into<String>, href: impl Into<String>) {
        self.inner
            .borrow_mut()
            .canonical
            .insert(selector.into(), href.into());
    }

    /// Declares (or replaces) a named meta tag.
    pub fn set_meta(&self, name: impl Into<String>, content: impl Into<String>) {
        self.inner
            .borrow_mut()
            .meta
            .insert(name.into(), content.into());
    }

    /// Removes a named meta tag.
    pub fn remove_meta(&self, name: &str) {
        self.inner.borrow_mut().meta.remove(name);
    }

    /// Replaces the document title.
    pub fn set_title(&self, title: impl Into<String>) {
        self.inner.borrow_mut().title = title.into();
    }
}

impl DocumentMetadataSource for MemoryDocument {
    fn canonical_url(&self, selector: &str) -> Option<String> {
        self.inner.borrow().canonical.get(selector).cloned()
    }

    fn meta_content(&self, name: &str) -> Option<String> {
        self.inner.borrow().meta.get(name).cloned()
    }

    fn document_title(&self) -> String {
        self.inner.borrow().title.clone()
    }

    fn location_href(&self) -> String {
        self.inner.borrow().href.clone()
    }
}
