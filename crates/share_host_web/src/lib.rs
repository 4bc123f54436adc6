//! Browser (`wasm32`) implementations of [`share_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring for the page share feature: `navigator.share`
//! detection and dispatch, document metadata reads, the body marker class, and publication of the
//! share handle on `window`. Non-`wasm32` builds compile to inert fallbacks so the workspace
//! builds and tests natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod bootstrap;
pub mod document;
pub mod namespace;
pub mod native_share;

pub use adapters::{
    body_class_list, document_metadata, host_strategy_name, native_share, selected_host_strategy,
    share_adapter, share_namespace, BodyClassListAdapter, DocumentMetadataAdapter, HostStrategy,
    NativeShareAdapter, ShareNamespaceAdapter,
};
pub use bootstrap::{init_diagnostics, install, install_on_load, share_installed};
pub use document::{WebBodyClassList, WebDocumentMetadata};
pub use namespace::WebShareNamespace;
pub use native_share::WebNativeShare;
