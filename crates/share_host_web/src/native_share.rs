//! Native share adapters for browser and desktop-webview contexts.

use share_host::{NativeShare, ShareRequest};

#[derive(Debug, Clone, Copy, Default)]
/// Browser share adapter backed by `navigator.share`.
///
/// The property is looked up through `Reflect` on every call so hosts that add or remove it at
/// runtime are observed, and so builds do not depend on unstable `web-sys` share bindings.
pub struct WebNativeShare;

impl NativeShare for WebNativeShare {
    fn is_available(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            share_function().is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn dispatch(&self, request: &ShareRequest) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some((navigator, share)) = share_function() else {
                return;
            };
            let data = match serde_wasm_bindgen::to_value(request) {
                Ok(data) => data,
                Err(err) => {
                    tracing::warn!("share request serialization failed: {err}");
                    return;
                }
            };
            // The returned promise settles inside the host's share UI and is not observed.
            if let Err(err) = share.call1(&navigator, &data) {
                tracing::warn!("navigator.share threw synchronously: {err:?}");
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = request;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn share_function() -> Option<(wasm_bindgen::JsValue, js_sys::Function)> {
    use wasm_bindgen::{JsCast, JsValue};

    let navigator: JsValue = web_sys::window()?.navigator().into();
    let share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share")).ok()?;
    let share = share.dyn_into::<js_sys::Function>().ok()?;
    Some((navigator, share))
}
