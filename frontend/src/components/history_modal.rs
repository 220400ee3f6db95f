use shared::Guide;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::{format_last_update, format_timestamp_full};

#[derive(Properties, PartialEq)]
pub struct HistoryModalProps {
    pub is_open: bool,
    /// Selection resolved against the cached list; `None` when the selected
    /// id is no longer cached.
    pub guide: Option<Guide>,
    pub on_close: Callback<()>,
}

#[function_component(HistoryModal)]
pub fn history_modal(props: &HistoryModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="history-modal-backdrop" onclick={on_backdrop_click}>
            <div class="history-modal" onclick={on_modal_click}>
                <div class="history-modal-content">
                    <h3 class="history-title">{"Guide History"}</h3>

                    {if let Some(guide) = &props.guide {
                        html! {
                            <div class="history-info">
                                <div class="history-field">
                                    <label class="history-label">{"Tracking number"}</label>
                                    <div class="history-value">{&guide.tracking_number}</div>
                                </div>

                                <div class="history-field">
                                    <label class="history-label">{"Status"}</label>
                                    <div class="history-value">{guide.status.to_string()}</div>
                                </div>

                                <div class="history-field">
                                    <label class="history-label">{"Route"}</label>
                                    <div class="history-value">
                                        {format!("{} to {}", guide.origin, guide.destination)}
                                    </div>
                                </div>

                                <div class="history-field">
                                    <label class="history-label">{"Recipient"}</label>
                                    <div class="history-value">{&guide.recipient}</div>
                                </div>

                                <div class="history-field">
                                    <label class="history-label">{"Registered"}</label>
                                    <div class="history-value">
                                        {format_timestamp_full(&guide.creation_date)}
                                    </div>
                                </div>

                                <div class="history-field">
                                    <label class="history-label">{"Last update"}</label>
                                    <div class="history-value">
                                        {format_last_update(guide.last_update.as_deref())}
                                    </div>
                                </div>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="history-no-guide">
                                <p>{"No guide selected"}</p>
                            </div>
                        }
                    }}

                    <button class="btn history-close-btn" onclick={on_close_click}>
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
