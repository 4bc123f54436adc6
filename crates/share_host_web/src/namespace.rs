//! Publishes share handles on the browser `window` object.

use share_host::{ShareHandle, ShareNamespace};

#[derive(Debug, Clone, Copy, Default)]
/// Namespace adapter writing `window[namespace][member]`.
///
/// An existing truthy `window[namespace]` is reused as-is; otherwise a fresh object is created.
pub struct WebShareNamespace;

impl ShareNamespace for WebShareNamespace {
    fn register(&self, namespace: &str, member: &str, handle: ShareHandle) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{closure::Closure, JsValue};

            let window: JsValue = web_sys::window()
                .ok_or_else(|| "window unavailable".to_string())?
                .into();
            let key = JsValue::from_str(namespace);
            let existing = js_sys::Reflect::get(&window, &key)
                .map_err(|e| format!("reading window.{namespace} failed: {e:?}"))?;
            let target = if existing.is_truthy() {
                existing
            } else {
                js_sys::Object::new().into()
            };

            // Lives for the rest of the page, like any other global function.
            let callback = Closure::<dyn Fn()>::new(move || {
                handle.invoke();
            })
            .into_js_value();

            let assigned = js_sys::Reflect::set(&target, &JsValue::from_str(member), &callback)
                .map_err(|e| format!("assigning {namespace}.{member} failed: {e:?}"))?;
            if !assigned {
                return Err(format!("window.{namespace} does not accept new members"));
            }
            js_sys::Reflect::set(&window, &key, &target)
                .map_err(|e| format!("assigning window.{namespace} failed: {e:?}"))?;
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (namespace, member, handle);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use share_host::ShareOutcome;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_registration_is_accepted() {
        WebShareNamespace
            .register("mvp", "share", ShareHandle::new(|| ShareOutcome::Unavailable))
            .expect("register");
    }
}
