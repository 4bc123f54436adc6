use leptos::*;
use leptos_meta::*;
use share_host::{ShareAdapter, ShareConfig, ShareHandle};
use share_host_web::{share_adapter, share_namespace};

use crate::share_button::{ShareButton, SharePreview};

const SHARE_STYLES: &str = "
.share-button { display: none; }
.feature-native-share .share-button { display: inline-block; }
";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Native Share" />
        <Meta name="title" content="Share this page" />
        <Meta name="description" content="Hands the page title, summary, and canonical address to the system share sheet." />
        <Link rel="canonical" href="https://example.com/share" />
        <Style>{SHARE_STYLES}</Style>

        <main class="site-root">
            <ShareEntry />
        </main>
    }
}

#[component]
pub fn ShareEntry() -> impl IntoView {
    let adapter = share_adapter(ShareConfig::default());
    let handle = initialize_or_detached(&adapter);

    view! {
        <section class="share-entry">
            <h1>"Native Share"</h1>
            <SharePreview adapter=adapter />
            <ShareButton handle=handle />
        </section>
    }
}

// Namespace publication is optional for in-app callers; they still get a working handle.
fn initialize_or_detached(adapter: &ShareAdapter) -> ShareHandle {
    match adapter.initialize(&share_namespace()) {
        Ok(handle) => handle,
        Err(err) => {
            tracing::warn!("share adapter initialization failed: {err}");
            adapter.handle()
        }
    }
}
