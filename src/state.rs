use crate::data::filter::{matching_indices, FilterCriteria};
use crate::data::model::Roster;
use crate::data::seed;
use crate::data::suggest::{study_tips, Suggestion};
use crate::data::trend::TrendWindow;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Outcome line shown in the top bar after an export or a theme change.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            is_error: true,
        }
    }
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The fixed roster, loaded once at startup.
    pub roster: Roster,

    /// Current search and category criteria.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Rolling class-average series fed by the simulated weekly tick.
    pub trend: TrendWindow,

    /// Tip cards, present once the user has asked for them.
    pub suggestions: Option<Vec<Suggestion>>,

    /// Rows-per-page selector value. The selector is shown for parity with
    /// the web dashboard but pagination is not wired up.
    pub rows_per_page: usize,

    /// Whether the dark visuals are active.
    pub dark_mode: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<StatusMessage>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(seed::demo_roster(), false)
    }
}

impl AppState {
    pub fn new(roster: Roster, dark_mode: bool) -> Self {
        let visible_indices = (0..roster.len()).collect();
        AppState {
            roster,
            criteria: FilterCriteria::default(),
            visible_indices,
            trend: TrendWindow::seeded(),
            suggestions: None,
            rows_per_page: 10,
            dark_mode,
            status_message: None,
        }
    }

    /// Recompute `visible_indices` after a criteria change.
    pub fn refilter(&mut self) {
        self.visible_indices = matching_indices(self.roster.records(), &self.criteria);
    }

    /// Generate tip cards for every student. Always covers the full roster,
    /// like the exports.
    pub fn generate_suggestions(&mut self) {
        self.suggestions = Some(study_tips(self.roster.records()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::CategoryFilter;
    use crate::data::model::Category;

    #[test]
    fn fresh_state_shows_everything() {
        let state = AppState::default();
        assert_eq!(state.visible_indices.len(), state.roster.len());
        assert_eq!(state.trend.points().count(), 4);
        assert!(state.suggestions.is_none());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn refilter_updates_the_cached_view() {
        let mut state = AppState::default();
        state.criteria.query = "ibrahim".to_string();
        state.refilter();
        assert_eq!(state.visible_indices, vec![2, 9]);

        state.criteria.query.clear();
        state.criteria.category = CategoryFilter::Only(Category::Excellent);
        state.refilter();
        assert_eq!(state.visible_indices, vec![0, 7]);
    }

    #[test]
    fn suggestions_cover_the_full_roster_despite_a_filter() {
        let mut state = AppState::default();
        state.criteria.query = "fatima".to_string();
        state.refilter();
        state.generate_suggestions();
        assert_eq!(state.suggestions.as_ref().map(Vec::len), Some(10));
    }
}
