//! Share handle and the shared global namespace it can be published under.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    fmt,
    rc::Rc,
};

use serde_json::Value;

use crate::adapter::ShareOutcome;

#[derive(Clone)]
/// Clonable callable performing the share operation.
///
/// UI components receive this explicitly instead of looking the operation up in a global.
pub struct ShareHandle {
    inner: Rc<dyn Fn() -> ShareOutcome>,
}

impl ShareHandle {
    /// Wraps a share callback.
    pub fn new(f: impl Fn() -> ShareOutcome + 'static) -> Self {
        Self { inner: Rc::new(f) }
    }

    /// Runs the share operation.
    pub fn invoke(&self) -> ShareOutcome {
        (self.inner)()
    }

    /// Whether two handles wrap the same callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ShareHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShareHandle").finish_non_exhaustive()
    }
}

/// Host service publishing a share handle as `namespace.member`.
///
/// Implementations reuse an existing namespace object rather than replacing it, and leave its
/// other members untouched.
pub trait ShareNamespace {
    /// Publishes `handle` under `namespace.member`, creating the namespace if missing.
    fn register(&self, namespace: &str, member: &str, handle: ShareHandle) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Namespace adapter for hosts without a global object.
pub struct NoopShareNamespace;

impl ShareNamespace for NoopShareNamespace {
    fn register(
        &self,
        _namespace: &str,
        _member: &str,
        _handle: ShareHandle,
    ) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Value stored in a [`MemoryShareNamespace`] member slot.
pub enum NamespaceMember {
    /// A registered share handle.
    Handle(ShareHandle),
    /// Any other value placed there by unrelated code.
    Value(Value),
}

#[derive(Debug, Clone, Default)]
/// In-memory stand-in for a global object holding namespace objects.
pub struct MemoryShareNamespace {
    inner: Rc<RefCell<HashMap<String, BTreeMap<String, NamespaceMember>>>>,
}

impl MemoryShareNamespace {
    /// Places an arbitrary value at `namespace.member`, as other page scripts would.
    pub fn insert_value(&self, namespace: &str, member: &str, value: Value) {
        self.inner
            .borrow_mut()
            .entry(namespace.to_string())
            .or_default()
            .insert(member.to_string(), NamespaceMember::Value(value));
    }

    /// Whether a namespace object exists.
    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.inner.borrow().contains_key(namespace)
    }

    /// Member names of `namespace` in sorted order.
    pub fn member_names(&self, namespace: &str) -> Vec<String> {
        self.inner
            .borrow()
            .get(namespace)
            .map(|members| members.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Reads a member slot.
    pub fn member(&self, namespace: &str, member: &str) -> Option<NamespaceMember> {
        self.inner
            .borrow()
            .get(namespace)
            .and_then(|members| members.get(member))
            .cloned()
    }

    /// Reads a member slot as a share handle.
    pub fn handle(&self, namespace: &str, member: &str) -> Option<ShareHandle> {
        match self.member(namespace, member)? {
            NamespaceMember::Handle(handle) => Some(handle),
            NamespaceMember::Value(_) => None,
        }
    }
}

impl ShareNamespace for MemoryShareNamespace {
    fn register(&self, namespace: &str, member: &str, handle: ShareHandle) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .entry(namespace.to_string())
            .or_default()
            .insert(member.to_string(), NamespaceMember::Handle(handle));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn register_creates_missing_namespace() {
        let globals = MemoryShareNamespace::default();
        let handle = ShareHandle::new(|| ShareOutcome::Unavailable);

        globals.register("mvp", "share", handle.clone()).expect("register");

        assert!(globals.has_namespace("mvp"));
        let stored = globals.handle("mvp", "share").expect("stored handle");
        assert!(stored.ptr_eq(&handle));
    }

    #[test]
    fn register_keeps_unrelated_members() {
        let globals = MemoryShareNamespace::default();
        globals.insert_value("mvp", "theme", json!("dark"));

        globals
            .register("mvp", "share", ShareHandle::new(|| ShareOutcome::Unavailable))
            .expect("register");

        assert_eq!(globals.member_names("mvp"), vec!["share", "theme"]);
        assert!(matches!(
            globals.member("mvp", "theme"),
            Some(NamespaceMember::Value(value)) if value == json!("dark")
        ));
    }
}
