use shared::GuideStatus;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::store::{GuidesAction, GuidesState, GuidesStore};

/// Result of [`use_guides`]: the store handle, the row-action error, and
/// the actions components dispatch through.
pub struct UseGuidesResult {
    pub store: GuidesStore,
    /// Error from the last status-advance action. Kept out of the store's
    /// `error`, which belongs to the fetch cycle.
    pub list_error: Option<String>,
    pub actions: UseGuidesActions,
}

#[derive(Clone)]
pub struct UseGuidesActions {
    pub refresh_guides: Callback<()>,
    /// Takes the guide id and its current status; the next status is
    /// computed here, not by the caller.
    pub advance_status: Callback<(String, GuideStatus)>,
    pub on_query_change: Callback<Event>,
    pub open_history: Callback<String>,
    pub close_history: Callback<()>,
}

#[hook]
pub fn use_guides(api_client: &ApiClient) -> UseGuidesResult {
    let store = use_reducer(GuidesState::default);
    let list_error = use_state(|| None::<String>);

    // Refresh guides callback
    let refresh_guides = {
        let api_client = api_client.clone();
        let store = store.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let store = store.clone();

            spawn_local(async move {
                store.dispatch(GuidesAction::FetchStarted);

                match api_client.get_guides().await {
                    Ok(guides) => {
                        Logger::debug("use_guides", &format!("loaded {} guides", guides.len()));
                        store.dispatch(GuidesAction::FetchSucceeded(guides));
                    }
                    Err(e) => {
                        Logger::error("use_guides", &format!("failed to fetch guides: {:?}", e));
                        store.dispatch(GuidesAction::FetchFailed(e.to_string()));
                    }
                }
            });
        })
    };

    // Advance a guide one lifecycle step and patch the server record back
    // into the cache. A delivered guide maps to itself, so the request is
    // an idempotent no-op on the server side.
    let advance_status = {
        let api_client = api_client.clone();
        let store = store.clone();
        let list_error = list_error.clone();

        use_callback((), move |(id, current): (String, GuideStatus), _| {
            let api_client = api_client.clone();
            let store = store.clone();
            let list_error = list_error.clone();
            let next = current.next();

            spawn_local(async move {
                match api_client.update_guide_status(&id, next).await {
                    Ok(updated) => {
                        store.dispatch(GuidesAction::GuideUpdated(updated));
                        list_error.set(None);
                    }
                    Err(e) => {
                        Logger::error(
                            "use_guides",
                            &format!("failed to update guide {}: {:?}", id, e),
                        );
                        list_error.set(Some(e.to_string()));
                    }
                }
            });
        })
    };

    let on_query_change = {
        let store = store.clone();
        use_callback((), move |e: Event, _| {
            let input: HtmlInputElement = e.target_unchecked_into();
            store.dispatch(GuidesAction::QueryChanged(input.value()));
        })
    };

    let open_history = {
        let store = store.clone();
        use_callback((), move |id: String, _| {
            store.dispatch(GuidesAction::GuideSelected(Some(id)));
            store.dispatch(GuidesAction::HistoryModalToggled(true));
        })
    };

    let close_history = {
        let store = store.clone();
        use_callback((), move |_, _| {
            store.dispatch(GuidesAction::HistoryModalToggled(false));
            store.dispatch(GuidesAction::GuideSelected(None));
        })
    };

    UseGuidesResult {
        store,
        list_error: (*list_error).clone(),
        actions: UseGuidesActions {
            refresh_guides,
            advance_status,
            on_query_change,
            open_history,
            close_history,
        },
    }
}
