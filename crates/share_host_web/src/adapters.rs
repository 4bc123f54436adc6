use share_host::{
    BodyClassList, DocumentMetadataSource, NativeShare, NoopBodyClassList, NoopDocument,
    NoopNativeShare, NoopShareNamespace, ShareAdapter, ShareConfig, ShareHandle, ShareNamespace,
    ShareRequest,
};

use crate::{WebBodyClassList, WebDocumentMetadata, WebNativeShare, WebShareNamespace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `share_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters reading the live DOM.
    Browser,
    /// Inert adapters for desktop shells that provide their own share surface.
    DesktopStub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::DesktopStub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::DesktopStub => "desktop-stub",
    }
}

/// Adapter enum that erases the concrete share backend behind [`NativeShare`].
#[derive(Debug, Clone, Copy)]
pub enum NativeShareAdapter {
    /// `navigator.share`.
    Browser(WebNativeShare),
    /// Always unavailable.
    DesktopStub(NoopNativeShare),
}

impl NativeShare for NativeShareAdapter {
    fn is_available(&self) -> bool {
        match self {
            Self::Browser(host) => host.is_available(),
            Self::DesktopStub(host) => host.is_available(),
        }
    }

    fn dispatch(&self, request: &ShareRequest) {
        match self {
            Self::Browser(host) => host.dispatch(request),
            Self::DesktopStub(host) => host.dispatch(request),
        }
    }
}

/// Adapter enum that erases the concrete metadata backend behind [`DocumentMetadataSource`].
#[derive(Debug, Clone, Copy)]
pub enum DocumentMetadataAdapter {
    /// Live `window.document`.
    Browser(WebDocumentMetadata),
    /// Empty document.
    DesktopStub(NoopDocument),
}

impl DocumentMetadataSource for DocumentMetadataAdapter {
    fn canonical_url(&self, selector: &str) -> Option<String> {
        match self {
            Self::Browser(doc) => doc.canonical_url(selector),
            Self::DesktopStub(doc) => doc.canonical_url(selector),
        }
    }

    fn meta_content(&self, name: &str) -> Option<String> {
        match self {
            Self::Browser(doc) => doc.meta_content(name),
            Self::DesktopStub(doc) => doc.meta_content(name),
        }
    }

    fn document_title(&self) -> String {
        match self {
            Self::Browser(doc) => doc.document_title(),
            Self::DesktopStub(doc) => doc.document_title(),
        }
    }

    fn location_href(&self) -> String {
        match self {
            Self::Browser(doc) => doc.location_href(),
            Self::DesktopStub(doc) => doc.location_href(),
        }
    }
}

/// Adapter enum that erases the concrete class-list backend behind [`BodyClassList`].
#[derive(Debug, Clone, Copy)]
pub enum BodyClassListAdapter {
    /// `document.body.classList`.
    Browser(WebBodyClassList),
    /// Accepts and discards classes.
    DesktopStub(NoopBodyClassList),
}

impl BodyClassList for BodyClassListAdapter {
    fn add_class(&self, class: &str) -> Result<(), String> {
        match self {
            Self::Browser(body) => body.add_class(class),
            Self::DesktopStub(body) => body.add_class(class),
        }
    }
}

/// Adapter enum that erases the concrete global-object backend behind [`ShareNamespace`].
#[derive(Debug, Clone, Copy)]
pub enum ShareNamespaceAdapter {
    /// `window[namespace]`.
    Browser(WebShareNamespace),
    /// Accepts and discards registrations.
    DesktopStub(NoopShareNamespace),
}

impl ShareNamespace for ShareNamespaceAdapter {
    fn register(&self, namespace: &str, member: &str, handle: ShareHandle) -> Result<(), String> {
        match self {
            Self::Browser(globals) => globals.register(namespace, member, handle),
            Self::DesktopStub(globals) => globals.register(namespace, member, handle),
        }
    }
}

/// Builds the native-share adapter for the compile-time selected host strategy.
pub fn native_share() -> NativeShareAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => NativeShareAdapter::Browser(WebNativeShare),
        HostStrategy::DesktopStub => NativeShareAdapter::DesktopStub(NoopNativeShare),
    }
}

/// Builds the document-metadata adapter for the compile-time selected host strategy.
pub fn document_metadata() -> DocumentMetadataAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => DocumentMetadataAdapter::Browser(WebDocumentMetadata),
        HostStrategy::DesktopStub => DocumentMetadataAdapter::DesktopStub(NoopDocument),
    }
}

/// Builds the body class-list adapter for the compile-time selected host strategy.
pub fn body_class_list() -> BodyClassListAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => BodyClassListAdapter::Browser(WebBodyClassList),
        HostStrategy::DesktopStub => BodyClassListAdapter::DesktopStub(NoopBodyClassList),
    }
}

/// Builds the global-namespace adapter for the compile-time selected host strategy.
pub fn share_namespace() -> ShareNamespaceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ShareNamespaceAdapter::Browser(WebShareNamespace),
        HostStrategy::DesktopStub => ShareNamespaceAdapter::DesktopStub(NoopShareNamespace),
    }
}

/// Builds a [`ShareAdapter`] wired to the selected host strategy.
pub fn share_adapter(config: ShareConfig) -> ShareAdapter {
    ShareAdapter::new(config, native_share(), document_metadata(), body_class_list())
}
