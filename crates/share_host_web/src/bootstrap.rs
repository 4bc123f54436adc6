//! Page startup glue: installs the share adapter once the document has loaded.
//!
//! With the default `auto-start` feature the module start hook installs on `load`, so a page
//! loading this crate as a plain script gets the marker class plus `window.mvp.share`.
//! Applications with their own startup sequence disable default features and call [`install`],
//! [`install_on_load`], or [`crate::share_adapter`] directly.

use std::cell::RefCell;

use share_host::{ShareConfig, ShareError, ShareHandle, ShareOutcome};
use wasm_bindgen::prelude::*;

use crate::adapters::{share_adapter, share_namespace};

thread_local! {
    static INSTALLED: RefCell<Option<ShareHandle>> = const { RefCell::new(None) };
}

/// Initializes a browser share adapter for `config` and remembers its handle.
///
/// # Errors
///
/// Returns an error when the marker class or the namespace registration is rejected.
pub fn install(config: ShareConfig) -> Result<ShareHandle, ShareError> {
    let handle = share_adapter(config).initialize(&share_namespace())?;
    INSTALLED.with(|slot| *slot.borrow_mut() = Some(handle.clone()));
    Ok(handle)
}

/// Runs [`install`] once the page has finished loading.
///
/// When the `load` event has already fired (module scripts often arrive late) installation runs
/// immediately.
pub fn install_on_load(config: ShareConfig) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            tracing::warn!("window unavailable; share adapter not installed");
            return;
        };
        let loaded = window
            .document()
            .map(|doc| doc.ready_state() == "complete")
            .unwrap_or(false);
        if loaded {
            install_logged(config);
            return;
        }

        let on_load = Closure::once(move |_event: web_sys::Event| install_logged(config));
        if let Err(err) =
            window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        {
            tracing::warn!("registering load listener failed: {err:?}");
            return;
        }
        on_load.forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        install_logged(config);
    }
}

fn install_logged(config: ShareConfig) {
    if let Err(err) = install(config) {
        tracing::warn!("share adapter install failed: {err}");
    }
}

/// Shares the current page with the installed adapter.
///
/// Returns [`ShareOutcome::Unavailable`] before installation.
pub fn share_installed() -> ShareOutcome {
    let handle = INSTALLED.with(|slot| slot.borrow().clone());
    match handle {
        Some(handle) => handle.invoke(),
        None => ShareOutcome::Unavailable,
    }
}

/// Installs the panic hook and routes `tracing` events to the browser console.
pub fn init_diagnostics() {
    #[cfg(target_arch = "wasm32")]
    {
        static ONCE: std::sync::Once = std::sync::Once::new();
        ONCE.call_once(|| {
            console_error_panic_hook::set_once();
            tracing_wasm::set_as_global_default();
        });
    }
}

/// Module start hook for pages loading this crate as a standalone script.
#[cfg(feature = "auto-start")]
#[wasm_bindgen(start)]
pub fn start() {
    init_diagnostics();
    install_on_load(ShareConfig::default());
}

/// Installs the share adapter on load using a JSON config; omitted fields keep their defaults.
#[wasm_bindgen(js_name = initializeShare)]
pub fn initialize_share(config_json: Option<String>) -> Result<(), JsValue> {
    init_diagnostics();
    let config = match config_json {
        Some(raw) => ShareConfig::from_json(&raw).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => ShareConfig::default(),
    };
    install_on_load(config);
    Ok(())
}

/// Shares the current page; returns whether a request reached the host share UI.
#[wasm_bindgen(js_name = sharePage)]
pub fn share_page() -> bool {
    share_installed() == ShareOutcome::Dispatched
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_install_records_inert_handle() {
        assert!(INSTALLED.with(|slot| slot.borrow().is_none()));
        install_on_load(ShareConfig::default());
        assert!(INSTALLED.with(|slot| slot.borrow().is_some()));
        assert_eq!(share_installed(), ShareOutcome::Unavailable);
        assert!(!share_page());
    }

    #[test]
    fn share_before_install_is_unavailable() {
        assert_eq!(share_installed(), ShareOutcome::Unavailable);
    }

    #[cfg(all(feature = "auto-start", not(target_arch = "wasm32")))]
    #[test]
    fn start_hook_installs_default_adapter() {
        start();
        assert!(INSTALLED.with(|slot| slot.borrow().is_some()));
    }
}
