use std::rc::Rc;

use shared::Guide;
use yew::prelude::*;

/// Client-side cache of the guide list plus UI-transient state.
///
/// All mutation flows through [`GuidesAction`]; the reduce step is pure,
/// so every observable transition is a whole-state swap and a remote call
/// in flight never partially applies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuidesState {
    /// Server-returned order, never sorted locally.
    pub guides: Vec<Guide>,
    pub query: String,
    pub selected_guide_id: Option<String>,
    pub is_history_modal_open: bool,
    pub loading: bool,
    /// Fetch-cycle error. Row-action and form errors live with the
    /// component that triggered them, not here.
    pub error: Option<String>,
}

/// Discrete store transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum GuidesAction {
    FetchStarted,
    /// Full verbatim replacement of the cached list, not a merge.
    FetchSucceeded(Vec<Guide>),
    FetchFailed(String),
    /// Replace the cached entry matching the record's id. An unknown id is
    /// dropped silently.
    GuideUpdated(Guide),
    QueryChanged(String),
    GuideSelected(Option<String>),
    HistoryModalToggled(bool),
}

impl GuidesState {
    /// Guides matching the live query. Derived on every read; the filtered
    /// view is never stored.
    pub fn filtered_guides(&self) -> Vec<Guide> {
        self.guides
            .iter()
            .filter(|g| g.matches_query(&self.query))
            .cloned()
            .collect()
    }

    /// Resolve the current selection against the cached list.
    pub fn selected_guide(&self) -> Option<Guide> {
        let id = self.selected_guide_id.as_deref()?;
        self.guides.iter().find(|g| g.id == id).cloned()
    }

    fn apply(&self, action: GuidesAction) -> GuidesState {
        let mut next = self.clone();
        match action {
            GuidesAction::FetchStarted => {
                next.loading = true;
                next.error = None;
            }
            GuidesAction::FetchSucceeded(guides) => {
                next.guides = guides;
                next.loading = false;
            }
            GuidesAction::FetchFailed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            GuidesAction::GuideUpdated(updated) => {
                if let Some(entry) = next.guides.iter_mut().find(|g| g.id == updated.id) {
                    *entry = updated;
                }
            }
            GuidesAction::QueryChanged(query) => next.query = query,
            GuidesAction::GuideSelected(id) => next.selected_guide_id = id,
            GuidesAction::HistoryModalToggled(open) => next.is_history_modal_open = open,
        }
        next
    }
}

impl Reducible for GuidesState {
    type Action = GuidesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Handle to the single store instance owned by the app root.
pub type GuidesStore = UseReducerHandle<GuidesState>;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::GuideStatus;

    fn guide(id: &str, tracking_number: &str, status: GuideStatus) -> Guide {
        Guide {
            id: id.to_string(),
            tracking_number: tracking_number.to_string(),
            origin: "CDMX".to_string(),
            destination: "GDL".to_string(),
            recipient: "Juan".to_string(),
            creation_date: "2024-01-01T00:00:00.000Z".to_string(),
            status,
            last_update: None,
        }
    }

    fn seeded() -> GuidesState {
        GuidesState {
            guides: vec![
                guide("1", "ABC123", GuideStatus::Pendiente),
                guide("2", "xyz999", GuideStatus::EnTransito),
            ],
            ..GuidesState::default()
        }
    }

    #[test]
    fn test_fetch_started_sets_loading_and_clears_error() {
        let state = GuidesState {
            error: Some("old failure".to_string()),
            ..GuidesState::default()
        };

        let next = state.apply(GuidesAction::FetchStarted);
        assert!(next.loading);
        assert_eq!(next.error, None);
    }

    #[test]
    fn test_fetch_succeeded_replaces_the_list_verbatim() {
        let state = GuidesState {
            guides: vec![guide("1", "OLD", GuideStatus::Pendiente)],
            loading: true,
            ..GuidesState::default()
        };

        let fresh = vec![
            guide("2", "NEW1", GuideStatus::Pendiente),
            guide("3", "NEW2", GuideStatus::Entregado),
        ];
        let next = state.apply(GuidesAction::FetchSucceeded(fresh.clone()));

        assert_eq!(next.guides, fresh);
        assert!(!next.loading);
    }

    #[test]
    fn test_fetch_failed_keeps_prior_guides() {
        let state = GuidesState {
            loading: true,
            ..seeded()
        };

        let next = state.apply(GuidesAction::FetchFailed("no connection".to_string()));
        assert_eq!(next.guides, state.guides);
        assert!(!next.loading);
        assert_eq!(next.error, Some("no connection".to_string()));
    }

    #[test]
    fn test_guide_updated_replaces_matching_entry() {
        let state = seeded();

        let mut updated = guide("2", "xyz999", GuideStatus::Entregado);
        updated.last_update = Some("2024-06-01T12:00:00.000Z".to_string());

        let next = state.apply(GuidesAction::GuideUpdated(updated.clone()));
        assert_eq!(next.guides[0], state.guides[0]);
        assert_eq!(next.guides[1], updated);
    }

    #[test]
    fn test_guide_updated_with_unknown_id_is_a_noop() {
        let state = seeded();
        let stray = guide("99", "STRAY", GuideStatus::Entregado);

        let next = state.apply(GuidesAction::GuideUpdated(stray));
        assert_eq!(next.guides, state.guides);
    }

    #[test]
    fn test_filtered_guides_follows_the_query() {
        let mut state = seeded();

        state.query = "abc".to_string();
        let hits = state.filtered_guides();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tracking_number, "ABC123");

        state.query = String::new();
        assert_eq!(state.filtered_guides().len(), 2);

        state.query = "999".to_string();
        let hits = state.filtered_guides();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tracking_number, "xyz999");
    }

    #[test]
    fn test_selection_and_modal_transitions() {
        let state = seeded();

        let next = state
            .apply(GuidesAction::GuideSelected(Some("2".to_string())))
            .apply(GuidesAction::HistoryModalToggled(true));
        assert!(next.is_history_modal_open);
        assert_eq!(
            next.selected_guide().map(|g| g.tracking_number),
            Some("xyz999".to_string())
        );

        let closed = next
            .apply(GuidesAction::HistoryModalToggled(false))
            .apply(GuidesAction::GuideSelected(None));
        assert!(!closed.is_history_modal_open);
        assert_eq!(closed.selected_guide(), None);
    }

    #[test]
    fn test_selected_guide_missing_from_cache_resolves_to_none() {
        let state = seeded().apply(GuidesAction::GuideSelected(Some("99".to_string())));
        assert_eq!(state.selected_guide(), None);
    }

    #[test]
    fn test_query_change_is_synchronous_state_only() {
        let state = seeded();
        let next = state.apply(GuidesAction::QueryChanged("abc".to_string()));

        assert_eq!(next.query, "abc");
        // The canonical list is untouched; filtering stays derived.
        assert_eq!(next.guides, state.guides);
    }
}
