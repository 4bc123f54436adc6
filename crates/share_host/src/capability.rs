//! Native share capability contracts and test adapters.

use std::{cell::RefCell, rc::Rc};

use crate::request::ShareRequest;

/// Host-provided native share facility.
///
/// The adapter queries [`NativeShare::is_available`] fresh at initialization and again before
/// every dispatch; implementations must not cache the answer on its behalf.
pub trait NativeShare {
    /// Whether the host currently exposes a native share capability.
    fn is_available(&self) -> bool;

    /// Hands `request` to the host share UI.
    ///
    /// The outcome (completion, user cancellation, rejection) belongs to the host and is not
    /// reported back.
    fn dispatch(&self, request: &ShareRequest);
}

#[derive(Debug, Clone, Copy, Default)]
/// Share capability for hosts without a native share facility.
pub struct NoopNativeShare;

impl NativeShare for NoopNativeShare {
    fn is_available(&self) -> bool {
        false
    }

    fn dispatch(&self, _request: &ShareRequest) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory share capability that records every dispatched request.
///
/// Availability can be toggled at runtime; clones share state.
pub struct RecordingNativeShare {
    available: Rc<RefCell<bool>>,
    dispatched: Rc<RefCell<Vec<ShareRequest>>>,
}

impl RecordingNativeShare {
    /// Creates a recorder reporting the given availability.
    pub fn new(available: bool) -> Self {
        Self {
            available: Rc::new(RefCell::new(available)),
            dispatched: Rc::default(),
        }
    }

    /// Changes the reported availability.
    pub fn set_available(&self, available: bool) {
        *self.available.borrow_mut() = available;
    }

    /// Requests dispatched so far, oldest first.
    pub fn dispatched(&self) -> Vec<ShareRequest> {
        self.dispatched.borrow().clone()
    }
}

impl NativeShare for RecordingNativeShare {
    fn is_available(&self) -> bool {
        *self.available.borrow()
    }

    fn dispatch(&self, request: &ShareRequest) {
        self.dispatched.borrow_mut().push(request.clone());
    }
}
