//! Bridges document metadata to the host's native share capability.

use std::rc::Rc;

use crate::{
    capability::NativeShare,
    config::ShareConfig,
    error::ShareError,
    marker::BodyClassList,
    metadata::{read_page_metadata, DocumentMetadataSource, PageMetadata},
    namespace::{ShareHandle, ShareNamespace},
    request::ShareRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a single share invocation did on this side of the host boundary.
pub enum ShareOutcome {
    /// A request was handed to the host share UI. Says nothing about what the user did there.
    Dispatched,
    /// The host exposes no native share capability; nothing happened.
    Unavailable,
}

#[derive(Clone)]
/// Share adapter wired to its host collaborators.
///
/// Clones share the same collaborators, which is what lets [`ShareAdapter::handle`] hand out
/// `'static` callables.
pub struct ShareAdapter {
    config: Rc<ShareConfig>,
    host: Rc<dyn NativeShare>,
    document: Rc<dyn DocumentMetadataSource>,
    body: Rc<dyn BodyClassList>,
}

impl std::fmt::Debug for ShareAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareAdapter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ShareAdapter {
    /// Builds an adapter from a capability probe, a metadata source, and a body class list.
    pub fn new(
        config: ShareConfig,
        host: impl NativeShare + 'static,
        document: impl DocumentMetadataSource + 'static,
        body: impl BodyClassList + 'static,
    ) -> Self {
        Self {
            config: Rc::new(config),
            host: Rc::new(host),
            document: Rc::new(document),
            body: Rc::new(body),
        }
    }

    /// Names this adapter reads from and publishes to.
    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Queries the host capability probe.
    pub fn is_available(&self) -> bool {
        self.host.is_available()
    }

    /// Reads the current document metadata.
    pub fn metadata(&self) -> PageMetadata {
        read_page_metadata(self.document.as_ref(), &self.config)
    }

    /// Builds the request [`ShareAdapter::share`] would dispatch right now.
    pub fn resolve_request(&self) -> ShareRequest {
        ShareRequest::resolve(self.metadata(), self.document.as_ref())
    }

    /// Shares the current page through the host, or does nothing when sharing is unavailable.
    pub fn share(&self) -> ShareOutcome {
        if !self.host.is_available() {
            tracing::debug!("native share unavailable; skipping");
            return ShareOutcome::Unavailable;
        }

        let request = self.resolve_request();
        tracing::debug!(
            title = %request.title,
            url = %request.url,
            has_text = request.text.is_some(),
            "dispatching native share"
        );
        self.host.dispatch(&request);
        ShareOutcome::Dispatched
    }

    /// Returns a callable that runs [`ShareAdapter::share`] on this adapter.
    pub fn handle(&self) -> ShareHandle {
        let adapter = self.clone();
        ShareHandle::new(move || adapter.share())
    }

    /// Flags share availability on the body and publishes the share handle.
    ///
    /// Adds the configured marker class only when the capability is present, then registers the
    /// handle under `namespace.member` regardless so callers can invoke it unconditionally.
    ///
    /// # Errors
    ///
    /// Returns an error when the host rejects the class-list update or the namespace
    /// registration.
    pub fn initialize<N: ShareNamespace + ?Sized>(
        &self,
        namespace: &N,
    ) -> Result<ShareHandle, ShareError> {
        let available = self.host.is_available();
        tracing::debug!(available, "probed native share capability");

        if available {
            self.body
                .add_class(&self.config.marker_class)
                .map_err(|reason| ShareError::Marker {
                    class: self.config.marker_class.clone(),
                    reason,
                })?;
        }

        let handle = self.handle();
        namespace
            .register(&self.config.namespace, &self.config.member, handle.clone())
            .map_err(|reason| ShareError::Namespace {
                namespace: self.config.namespace.clone(),
                member: self.config.member.clone(),
                reason,
            })?;

        tracing::info!(
            available,
            namespace = %self.config.namespace,
            member = %self.config.member,
            "share adapter initialized"
        );
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::{
        capability::RecordingNativeShare,
        config::DEFAULT_MARKER_CLASS,
        marker::MemoryBodyClassList,
        metadata::MemoryDocument,
        namespace::{MemoryShareNamespace, NamespaceMember},
    };

    struct Fixture {
        host: RecordingNativeShare,
        document: MemoryDocument,
        body: MemoryBodyClassList,
        adapter: ShareAdapter,
    }

    fn fixture(available: bool) -> Fixture {
        let host = RecordingNativeShare::new(available);
        let document = MemoryDocument::new("Document Title", "https://ex.com/current?x=1");
        let body = MemoryBodyClassList::default();
        let adapter = ShareAdapter::new(
            ShareConfig::default(),
            host.clone(),
            document.clone(),
            body.clone(),
        );
        Fixture {
            host,
            document,
            body,
            adapter,
        }
    }

    #[test]
    fn marker_class_added_only_when_capability_present() {
        let present = fixture(true);
        present
            .adapter
            .initialize(&MemoryShareNamespace::default())
            .expect("initialize");
        assert!(present.body.contains(DEFAULT_MARKER_CLASS));

        let absent = fixture(false);
        absent
            .adapter
            .initialize(&MemoryShareNamespace::default())
            .expect("initialize");
        assert!(absent.body.classes().is_empty());
    }

    #[test]
    fn declared_metadata_takes_precedence() {
        let fx = fixture(true);
        fx.document
            .set_canonical("link[rel=canonical]", "https://ex.com/p");
        fx.document.set_meta("title", "T");
        fx.document.set_meta("description", "D");

        assert_eq!(fx.adapter.share(), ShareOutcome::Dispatched);
        assert_eq!(
            fx.host.dispatched(),
            vec![ShareRequest {
                title: "T".to_string(),
                text: Some("D".to_string()),
                url: "https://ex.com/p".to_string(),
            }]
        );
    }

    #[test]
    fn falls_back_to_document_title_and_address() {
        let fx = fixture(true);
        fx.document.set_meta("description", "D");

        fx.adapter.share();

        let sent = fx.host.dispatched();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Document Title");
        assert_eq!(sent[0].url, "https://ex.com/current?x=1");
    }

    #[test]
    fn missing_description_leaves_text_absent() {
        let fx = fixture(true);
        fx.document.set_meta("title", "T");

        fx.adapter.share();

        let sent = fx.host.dispatched();
        assert_eq!(sent[0].text, None);
        assert!(serde_json::to_value(&sent[0])
            .expect("serialize")
            .get("text")
            .is_none());
    }

    #[test]
    fn absent_capability_makes_share_a_silent_no_op() {
        let fx = fixture(false);
        fx.document.set_meta("title", "T");

        let handle = fx
            .adapter
            .initialize(&MemoryShareNamespace::default())
            .expect("initialize");

        assert_eq!(handle.invoke(), ShareOutcome::Unavailable);
        assert_eq!(fx.adapter.share(), ShareOutcome::Unavailable);
        assert!(fx.host.dispatched().is_empty());
    }

    #[test]
    fn initialize_merges_into_existing_namespace() {
        let fx = fixture(true);
        let globals = MemoryShareNamespace::default();
        globals.insert_value("mvp", "search", json!({"enabled": true}));

        fx.adapter.initialize(&globals).expect("first initialize");
        fx.adapter.initialize(&globals).expect("second initialize");

        assert_eq!(globals.member_names("mvp"), vec!["search", "share"]);
        assert!(matches!(
            globals.member("mvp", "search"),
            Some(NamespaceMember::Value(value)) if value == json!({"enabled": true})
        ));

        let registered = globals.handle("mvp", "share").expect("registered handle");
        assert_eq!(registered.invoke(), ShareOutcome::Dispatched);
        assert_eq!(fx.host.dispatched().len(), 1);
    }

    #[test]
    fn metadata_is_read_at_call_time() {
        let fx = fixture(true);
        let handle = fx
            .adapter
            .initialize(&MemoryShareNamespace::default())
            .expect("initialize");

        fx.document.set_meta("title", "Before");
        handle.invoke();
        fx.document.set_meta("title", "After");
        fx.document.remove_meta("description");
        handle.invoke();

        let titles: Vec<String> = fx
            .host
            .dispatched()
            .into_iter()
            .map(|request| request.title)
            .collect();
        assert_eq!(titles, vec!["Before", "After"]);
    }

    #[test]
    fn document_title_fallback_is_read_at_call_time() {
        let fx = fixture(true);
        let handle = fx
            .adapter
            .initialize(&MemoryShareNamespace::default())
            .expect("initialize");

        fx.document.set_title("Renamed Title");
        handle.invoke();

        let sent = fx.host.dispatched();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].title, "Renamed Title");
    }

    #[test]
    fn capability_is_probed_on_every_call() {
        let fx = fixture(false);
        let handle = fx
            .adapter
            .initialize(&MemoryShareNamespace::default())
            .expect("initialize");
        assert_eq!(handle.invoke(), ShareOutcome::Unavailable);

        fx.host.set_available(true);
        assert_eq!(handle.invoke(), ShareOutcome::Dispatched);
        assert_eq!(fx.host.dispatched().len(), 1);
    }

    struct RejectingBody;

    impl BodyClassList for RejectingBody {
        fn add_class(&self, _class: &str) -> Result<(), String> {
            Err("no body".to_string())
        }
    }

    #[test]
    fn class_list_failure_surfaces_as_marker_error() {
        let adapter = ShareAdapter::new(
            ShareConfig::default(),
            RecordingNativeShare::new(true),
            MemoryDocument::default(),
            RejectingBody,
        );

        let err = adapter
            .initialize(&MemoryShareNamespace::default())
            .expect_err("marker failure");
        assert_eq!(
            err,
            ShareError::Marker {
                class: DEFAULT_MARKER_CLASS.to_string(),
                reason: "no body".to_string(),
            }
        );
    }

    struct RejectingNamespace;

    impl ShareNamespace for RejectingNamespace {
        fn register(
            &self,
            _namespace: &str,
            _member: &str,
            _handle: ShareHandle,
        ) -> Result<(), String> {
            Err("window.mvp is frozen".to_string())
        }
    }

    #[test]
    fn namespace_failure_surfaces_as_namespace_error() {
        let fx = fixture(true);

        let err = fx
            .adapter
            .initialize(&RejectingNamespace)
            .expect_err("namespace failure");

        assert_eq!(
            err,
            ShareError::Namespace {
                namespace: "mvp".to_string(),
                member: "share".to_string(),
                reason: "window.mvp is frozen".to_string(),
            }
        );
        assert!(fx.body.contains(DEFAULT_MARKER_CLASS));
        assert!(fx.host.dispatched().is_empty());
    }
}
