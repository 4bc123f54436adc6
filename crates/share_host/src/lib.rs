//! Typed host contracts and the host-agnostic native-share adapter.
//!
//! This crate is the API-first boundary for the page share feature. It exposes the page metadata
//! and share request models, the host service traits the adapter depends on (capability probe,
//! document metadata, body class list, global namespace), in-memory and no-op adapters for tests
//! and unsupported targets, and [`ShareAdapter`] itself. Concrete browser adapters live in
//! `share_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapter;
pub mod capability;
pub mod config;
pub mod error;
pub mod marker;
pub mod metadata;
pub mod namespace;
pub mod request;

pub use adapter::{ShareAdapter, ShareOutcome};
pub use capability::{NativeShare, NoopNativeShare, RecordingNativeShare};
pub use config::{
    ShareConfig, DEFAULT_CANONICAL_SELECTOR, DEFAULT_DESCRIPTION_META, DEFAULT_MARKER_CLASS,
    DEFAULT_NAMESPACE, DEFAULT_NAMESPACE_MEMBER, DEFAULT_TITLE_META,
};
pub use error::ShareError;
pub use marker::{BodyClassList, MemoryBodyClassList, NoopBodyClassList};
pub use metadata::{
    read_page_metadata, DocumentMetadataSource, MemoryDocument, NoopDocument, PageMetadata,
};
pub use namespace::{
    MemoryShareNamespace, NamespaceMember, NoopShareNamespace, ShareHandle, ShareNamespace,
};
pub use request::ShareRequest;
