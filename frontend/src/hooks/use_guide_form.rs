use gloo::timers::future::TimeoutFuture;
use shared::NewGuideInput;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::store::GuidesStore;

#[derive(Clone, PartialEq)]
pub struct GuideFormState {
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    pub recipient: String,
    /// Calendar date as typed, `YYYY-MM-DD`.
    pub creation_date: String,
    pub submitting: bool,
    pub form_error: Option<String>,
    pub form_success: bool,
}

pub struct UseGuideFormResult {
    pub state: GuideFormState,
    pub actions: UseGuideFormActions,
}

#[derive(Clone)]
pub struct UseGuideFormActions {
    pub on_tracking_number_change: Callback<Event>,
    pub on_origin_change: Callback<Event>,
    pub on_destination_change: Callback<Event>,
    pub on_recipient_change: Callback<Event>,
    pub on_creation_date_change: Callback<Event>,
    pub submit: Callback<()>,
}

/// Field handler: store the raw value and clear any stale outcome flags.
fn field_callback(
    field: &UseStateHandle<String>,
    form_error: &UseStateHandle<Option<String>>,
    form_success: &UseStateHandle<bool>,
) -> Callback<Event> {
    let field = field.clone();
    let form_error = form_error.clone();
    let form_success = form_success.clone();

    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        field.set(input.value());
        form_error.set(None);
        form_success.set(false);
    })
}

#[hook]
pub fn use_guide_form(
    api_client: &ApiClient,
    store: &GuidesStore,
    on_created: Callback<()>,
) -> UseGuideFormResult {
    let tracking_number = use_state(String::new);
    let origin = use_state(String::new);
    let destination = use_state(String::new);
    let recipient = use_state(String::new);
    let creation_date = use_state(String::new);
    let submitting = use_state(|| false);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| false);

    let submit = {
        let api_client = api_client.clone();
        let store = store.clone();
        let on_created = on_created.clone();
        let tracking_number = tracking_number.clone();
        let origin = origin.clone();
        let destination = destination.clone();
        let recipient = recipient.clone();
        let creation_date = creation_date.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let store = store.clone();
            let on_created = on_created.clone();
            let tracking_number = tracking_number.clone();
            let origin = origin.clone();
            let destination = destination.clone();
            let recipient = recipient.clone();
            let creation_date = creation_date.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();

            spawn_local(async move {
                form_success.set(false);

                let input = NewGuideInput {
                    tracking_number: (*tracking_number).clone(),
                    origin: (*origin).clone(),
                    destination: (*destination).clone(),
                    recipient: (*recipient).clone(),
                    creation_date: (*creation_date).clone(),
                };

                // Validation never reaches the network; the duplicate check
                // runs against the guides currently in the cache.
                let request = match input.validate(&store.guides) {
                    Ok(request) => request,
                    Err(e) => {
                        form_error.set(Some(e.to_string()));
                        return;
                    }
                };

                submitting.set(true);

                match api_client.create_guide(&request).await {
                    Ok(created) => {
                        Logger::info(
                            "use_guide_form",
                            &format!("registered guide {}", created.tracking_number),
                        );
                        tracking_number.set(String::new());
                        origin.set(String::new());
                        destination.set(String::new());
                        recipient.set(String::new());
                        creation_date.set(String::new());
                        form_error.set(None);
                        form_success.set(true);

                        // One full refresh instead of a local insert; the
                        // list reflects the new record after the round-trip.
                        on_created.emit(());

                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            TimeoutFuture::new(3000).await;
                            form_success_clear.set(false);
                        });
                    }
                    Err(e) => {
                        Logger::error(
                            "use_guide_form",
                            &format!("failed to register guide: {:?}", e),
                        );
                        form_error.set(Some(e.to_string()));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let on_tracking_number_change = field_callback(&tracking_number, &form_error, &form_success);
    let on_origin_change = field_callback(&origin, &form_error, &form_success);
    let on_destination_change = field_callback(&destination, &form_error, &form_success);
    let on_recipient_change = field_callback(&recipient, &form_error, &form_success);
    let on_creation_date_change = field_callback(&creation_date, &form_error, &form_success);

    let state = GuideFormState {
        tracking_number: (*tracking_number).clone(),
        origin: (*origin).clone(),
        destination: (*destination).clone(),
        recipient: (*recipient).clone(),
        creation_date: (*creation_date).clone(),
        submitting: *submitting,
        form_error: (*form_error).clone(),
        form_success: *form_success,
    };

    let actions = UseGuideFormActions {
        on_tracking_number_change,
        on_origin_change,
        on_destination_change,
        on_recipient_change,
        on_creation_date_change,
        submit,
    };

    UseGuideFormResult { state, actions }
}
