use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuideFormProps {
    // Form state
    pub tracking_number: String,
    pub origin: String,
    pub destination: String,
    pub recipient: String,
    pub creation_date: String,
    pub submitting: bool,
    pub form_error: Option<String>,
    pub form_success: bool,

    // Event handlers
    pub on_tracking_number_change: Callback<Event>,
    pub on_origin_change: Callback<Event>,
    pub on_destination_change: Callback<Event>,
    pub on_recipient_change: Callback<Event>,
    pub on_creation_date_change: Callback<Event>,
    pub on_submit: Callback<()>,
}

#[function_component(GuideForm)]
pub fn guide_form(props: &GuideFormProps) -> Html {
    html! {
        <section class="guide-form-section">
            <h2>{"Register New Guide"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! { <p class="form-message error" role="alert">{error}</p> }
            } else { html! {} }}

            {if props.form_success {
                html! { <p class="form-message success">{"Guide registered successfully."}</p> }
            } else { html! {} }}

            <form class="guide-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="tracking-number">{"Tracking number"}</label>
                    <input
                        type="text"
                        id="tracking-number"
                        placeholder="Tracking number"
                        value={props.tracking_number.clone()}
                        onchange={props.on_tracking_number_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="origin">{"Origin"}</label>
                    <input
                        type="text"
                        id="origin"
                        placeholder="Origin"
                        value={props.origin.clone()}
                        onchange={props.on_origin_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="destination">{"Destination"}</label>
                    <input
                        type="text"
                        id="destination"
                        placeholder="Destination"
                        value={props.destination.clone()}
                        onchange={props.on_destination_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="recipient">{"Recipient"}</label>
                    <input
                        type="text"
                        id="recipient"
                        placeholder="Recipient"
                        value={props.recipient.clone()}
                        onchange={props.on_recipient_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <div class="form-group">
                    <label for="creation-date">{"Registration date"}</label>
                    <input
                        type="date"
                        id="creation-date"
                        value={props.creation_date.clone()}
                        onchange={props.on_creation_date_change.clone()}
                        disabled={props.submitting}
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary guide-form-btn"
                    disabled={props.submitting}
                >
                    {if props.submitting {
                        "Registering..."
                    } else {
                        "Register"
                    }}
                </button>
            </form>
        </section>
    }
}
