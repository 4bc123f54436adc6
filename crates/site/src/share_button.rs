use leptos::*;
use share_host::{ShareAdapter, ShareHandle, ShareOutcome};

/// Button invoking an explicitly supplied share handle.
///
/// Hidden by the page stylesheet unless `body` carries the share marker class.
#[component]
pub fn ShareButton(
    handle: ShareHandle,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Share".to_string());
    let (last_outcome, set_last_outcome) = create_signal(None::<ShareOutcome>);

    view! {
        <button
            type="button"
            class="share-button"
            data-share-outcome=move || match last_outcome.get() {
                Some(ShareOutcome::Dispatched) => "dispatched",
                Some(ShareOutcome::Unavailable) => "unavailable",
                None => "",
            }
            on:click=move |_| set_last_outcome.set(Some(handle.invoke()))
        >
            {label}
        </button>
    }
}

/// Shows the request a share would send, re-read on demand.
#[component]
pub fn SharePreview(adapter: ShareAdapter) -> impl IntoView {
    let (request, set_request) = create_signal(adapter.resolve_request());
    let refresh = move |_| set_request.set(adapter.resolve_request());

    view! {
        <dl class="share-preview">
            <dt>"Title"</dt>
            <dd>{move || request.with(|r| r.title.clone())}</dd>
            <dt>"Text"</dt>
            <dd>{move || request.with(|r| r.text.clone().unwrap_or_default())}</dd>
            <dt>"URL"</dt>
            <dd>{move || request.with(|r| r.url.clone())}</dd>
        </dl>
        <button type="button" class="share-preview-refresh" on:click=refresh>
            "Refresh"
        </button>
    }
}
