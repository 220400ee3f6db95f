use shared::{Guide, GuideStatus};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::{format_last_update, format_timestamp_full};

#[derive(Properties, PartialEq)]
pub struct GuideListProps {
    /// Already filtered by the live query.
    pub guides: Vec<Guide>,
    pub query: String,
    pub loading: bool,
    /// Store-level fetch error.
    pub error: Option<String>,
    /// Row-action error, independent of the fetch error.
    pub list_error: Option<String>,

    pub on_query_change: Callback<Event>,
    pub on_advance: Callback<(String, GuideStatus)>,
    pub on_history: Callback<String>,
}

#[function_component(GuideList)]
pub fn guide_list(props: &GuideListProps) -> Html {
    html! {
        <section class="guide-list-section">
            <h2>{"Guide List"}</h2>

            <div class="form-group guide-search">
                <label for="guide-search">{"Search by tracking number"}</label>
                <input
                    type="text"
                    id="guide-search"
                    placeholder="Search by tracking number"
                    value={props.query.clone()}
                    onchange={props.on_query_change.clone()}
                />
            </div>

            {if let Some(error) = props.error.as_ref() {
                html! { <p class="list-message error" role="alert">{error}</p> }
            } else { html! {} }}

            {if let Some(error) = props.list_error.as_ref() {
                html! { <p class="list-message error" role="alert">{error}</p> }
            } else { html! {} }}

            {if props.loading {
                html! { <div class="loading">{"Loading guides..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="guide-table">
                            <thead>
                                <tr>
                                    <th>{"Tracking number"}</th>
                                    <th>{"Status"}</th>
                                    <th>{"Origin"}</th>
                                    <th>{"Destination"}</th>
                                    <th>{"Created"}</th>
                                    <th>{"Last update"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {for props.guides.iter().map(|guide| {
                                    let on_advance = {
                                        let on_advance = props.on_advance.clone();
                                        let id = guide.id.clone();
                                        let status = guide.status;
                                        Callback::from(move |_: MouseEvent| {
                                            on_advance.emit((id.clone(), status));
                                        })
                                    };
                                    let on_history = {
                                        let on_history = props.on_history.clone();
                                        let id = guide.id.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            on_history.emit(id.clone());
                                        })
                                    };

                                    html! {
                                        <tr key={guide.id.clone()}>
                                            <td class="tracking-number">{&guide.tracking_number}</td>
                                            <td class="status">{guide.status.to_string()}</td>
                                            <td>{&guide.origin}</td>
                                            <td>{&guide.destination}</td>
                                            <td class="date">{format_timestamp_full(&guide.creation_date)}</td>
                                            <td class="date">{format_last_update(guide.last_update.as_deref())}</td>
                                            <td class="actions">
                                                <button onclick={on_advance}>{"Advance"}</button>
                                                <button onclick={on_history}>{"History"}</button>
                                            </td>
                                        </tr>
                                    }
                                })}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
