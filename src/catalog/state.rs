//! View state.
//!
//! [`ViewState`] holds the three filter selections of a session. It is changed only
//! through its transition methods (or [`ViewState::apply`] with a [`Transition`]),
//! all of which are total: there is no invalid state and no validation. Ids that
//! name no user or category are accepted as-is and simply match nothing.
//!
//! The selected categories keep insertion order so controls and logs show them in
//! the order the user picked them.

use crate::filter::FilterCriteria;
use crate::model::{CategoryId, UserId, ALL_USERS};
use tracing::debug;

/// A single change to the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    SelectUser(UserId),
    SetQuery(String),
    ClearQuery,
    ToggleCategory(CategoryId),
    ClearCategories,
    ResetAll,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    selected_user_id: UserId,
    query: String,
    selected_category_ids: Vec<CategoryId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_user_id(&self) -> UserId {
        self.selected_user_id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_category_ids(&self) -> &[CategoryId] {
        &self.selected_category_ids
    }

    /// Selects an owner; `0` clears the owner filter.
    pub fn select_user(&mut self, id: UserId) {
        debug!(user_id = id, "select user");
        self.selected_user_id = id;
    }

    /// Stores the query verbatim. Trimming is the filter pipeline's job.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        debug!(query = %self.query, "set query");
    }

    pub fn clear_query(&mut self) {
        debug!("clear query");
        self.query.clear();
    }

    /// Removes `id` if selected, appends it otherwise.
    pub fn toggle_category(&mut self, id: CategoryId) {
        if let Some(pos) = self.selected_category_ids.iter().position(|c| *c == id) {
            self.selected_category_ids.remove(pos);
        } else {
            self.selected_category_ids.push(id);
        }
        debug!(category_id = id, selected = ?self.selected_category_ids, "toggle category");
    }

    pub fn clear_categories(&mut self) {
        debug!("clear categories");
        self.selected_category_ids.clear();
    }

    pub fn reset_all(&mut self) {
        debug!("reset all filters");
        self.selected_user_id = ALL_USERS;
        self.query.clear();
        self.selected_category_ids.clear();
    }

    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::SelectUser(id) => self.select_user(id),
            Transition::SetQuery(text) => self.set_query(text),
            Transition::ClearQuery => self.clear_query(),
            Transition::ToggleCategory(id) => self.toggle_category(id),
            Transition::ClearCategories => self.clear_categories(),
            Transition::ResetAll => self.reset_all(),
        }
    }

    pub fn is_user_selected(&self, id: UserId) -> bool {
        self.selected_user_id == id
    }

    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.selected_category_ids.contains(&id)
    }

    /// True when the query is non-empty (before trimming), i.e. when a clear
    /// control should be offered.
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            user_id: self.selected_user_id,
            query: self.query.clone(),
            category_ids: self.selected_category_ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_filters() {
        let state = ViewState::new();
        assert_eq!(state.selected_user_id(), ALL_USERS);
        assert_eq!(state.query(), "");
        assert!(state.selected_category_ids().is_empty());
        assert!(state.is_default());
        assert!(!state.criteria().is_active());
    }

    #[test]
    fn select_user_and_clear_with_zero() {
        let mut state = ViewState::new();
        state.select_user(2);
        assert!(state.is_user_selected(2));
        state.select_user(0);
        assert!(state.is_user_selected(ALL_USERS));
    }

    #[test]
    fn set_query_keeps_text_verbatim() {
        let mut state = ViewState::new();
        state.set_query("  Mac ");
        assert_eq!(state.query(), "  Mac ");
        assert!(state.has_query());

        state.clear_query();
        assert!(!state.has_query());
    }

    #[test]
    fn whitespace_query_still_offers_clear() {
        let mut state = ViewState::new();
        state.set_query("   ");
        assert!(state.has_query());
        assert!(!state.criteria().is_active());
    }

    #[test]
    fn toggle_appends_in_order() {
        let mut state = ViewState::new();
        state.toggle_category(5);
        state.toggle_category(2);
        assert_eq!(state.selected_category_ids(), &[5, 2]);
        assert!(state.is_category_selected(2));
        assert!(!state.is_category_selected(3));
    }

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut state = ViewState::new();
        state.toggle_category(1);
        state.toggle_category(4);
        let before = state.selected_category_ids().to_vec();

        state.toggle_category(7);
        state.toggle_category(7);
        assert_eq!(state.selected_category_ids(), before.as_slice());

        state.toggle_category(1);
        state.toggle_category(1);
        let mut after = state.selected_category_ids().to_vec();
        let mut expected = before.clone();
        after.sort_unstable();
        expected.sort_unstable();
        assert_eq!(after, expected);
    }

    #[test]
    fn clear_categories_leaves_other_fields() {
        let mut state = ViewState::new();
        state.select_user(1);
        state.set_query("beer");
        state.toggle_category(2);
        state.clear_categories();

        assert!(state.selected_category_ids().is_empty());
        assert_eq!(state.selected_user_id(), 1);
        assert_eq!(state.query(), "beer");
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut state = ViewState::new();
        state.select_user(3);
        state.set_query("x");
        state.toggle_category(2);
        state.reset_all();
        assert!(state.is_default());
    }

    #[test]
    fn apply_dispatches_transitions() {
        let mut state = ViewState::new();
        state.apply(Transition::SelectUser(2));
        state.apply(Transition::SetQuery("app".into()));
        state.apply(Transition::ToggleCategory(3));

        assert_eq!(
            state.criteria(),
            FilterCriteria {
                user_id: 2,
                query: "app".into(),
                category_ids: vec![3],
            }
        );

        state.apply(Transition::ClearQuery);
        state.apply(Transition::ClearCategories);
        assert_eq!(state.query(), "");
        assert!(state.selected_category_ids().is_empty());

        state.apply(Transition::ResetAll);
        assert!(state.is_default());
    }
}
