mod share_button;
mod web_app;

pub use share_button::{ShareButton, SharePreview};
pub use web_app::{ShareEntry, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    share_host_web::init_diagnostics();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
