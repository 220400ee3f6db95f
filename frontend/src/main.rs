use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod store;

use components::{GuideForm, GuideList, HistoryModal};
use hooks::{use_guide_form, use_guides};
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();

    let guides = use_guides(&api_client);
    let form = use_guide_form(
        &api_client,
        &guides.store,
        guides.actions.refresh_guides.clone(),
    );

    // Load the guide list once on mount.
    {
        let refresh_guides = guides.actions.refresh_guides.clone();
        use_effect_with((), move |_| {
            refresh_guides.emit(());
            || ()
        });
    }

    let filtered_guides = guides.store.filtered_guides();
    let selected_guide = guides.store.selected_guide();

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Guide Tracker"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <GuideForm
                        tracking_number={form.state.tracking_number.clone()}
                        origin={form.state.origin.clone()}
                        destination={form.state.destination.clone()}
                        recipient={form.state.recipient.clone()}
                        creation_date={form.state.creation_date.clone()}
                        submitting={form.state.submitting}
                        form_error={form.state.form_error.clone()}
                        form_success={form.state.form_success}
                        on_tracking_number_change={form.actions.on_tracking_number_change.clone()}
                        on_origin_change={form.actions.on_origin_change.clone()}
                        on_destination_change={form.actions.on_destination_change.clone()}
                        on_recipient_change={form.actions.on_recipient_change.clone()}
                        on_creation_date_change={form.actions.on_creation_date_change.clone()}
                        on_submit={form.actions.submit.clone()}
                    />

                    <GuideList
                        guides={filtered_guides}
                        query={guides.store.query.clone()}
                        loading={guides.store.loading}
                        error={guides.store.error.clone()}
                        list_error={guides.list_error.clone()}
                        on_query_change={guides.actions.on_query_change.clone()}
                        on_advance={guides.actions.advance_status.clone()}
                        on_history={guides.actions.open_history.clone()}
                    />
                </div>
            </main>

            <HistoryModal
                is_open={guides.store.is_history_modal_open}
                guide={selected_guide}
                on_close={guides.actions.close_history.clone()}
            />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
