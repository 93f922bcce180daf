use super::model::{Category, StudentRecord};

// ---------------------------------------------------------------------------
// Filter criteria: name query + category selector
// ---------------------------------------------------------------------------

/// Category selector state: either everything or a single tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector options in the order the UI lists them.
    pub const OPTIONS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Excellent),
        CategoryFilter::Only(Category::Average),
        CategoryFilter::Only(Category::Poor),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// Current filter inputs, rebuilt by the UI on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Raw search box text; trimmed and lowercased during matching.
    pub query: String,
    pub category: CategoryFilter,
}

/// Return indices of records that pass both filters.
///
/// A record passes when:
/// * its name contains the trimmed query case-insensitively
///   (an empty or whitespace-only query is no constraint), and
/// * the category selector is `All` or matches the record's tier.
///
/// The output preserves roster order. No matches is a valid empty view,
/// not an error.
pub fn matching_indices(records: &[StudentRecord], criteria: &FilterCriteria) -> Vec<usize> {
    let query = criteria.query.trim().to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            if !query.is_empty() && !record.name.to_lowercase().contains(&query) {
                return false;
            }
            match criteria.category {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => record.category() == category,
            }
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed::demo_roster;

    fn criteria(query: &str, category: CategoryFilter) -> FilterCriteria {
        FilterCriteria {
            query: query.to_string(),
            category,
        }
    }

    #[test]
    fn default_criteria_match_everything_in_order() {
        let roster = demo_roster();
        let indices = matching_indices(roster.records(), &FilterCriteria::default());
        assert_eq!(indices, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn query_is_case_insensitive() {
        let roster = demo_roster();
        let lower = matching_indices(roster.records(), &criteria("okoro", CategoryFilter::All));
        let upper = matching_indices(roster.records(), &criteria("OKORO", CategoryFilter::All));
        assert_eq!(lower, vec![0]);
        assert_eq!(upper, vec![0]);
    }

    #[test]
    fn query_matches_substring_anywhere() {
        let roster = demo_roster();
        // "ibrahim" appears as a surname and as a first name.
        let indices = matching_indices(roster.records(), &criteria("ibrahim", CategoryFilter::All));
        assert_eq!(indices, vec![2, 9]);
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let roster = demo_roster();
        let indices = matching_indices(roster.records(), &criteria("  okoro  ", CategoryFilter::All));
        assert_eq!(indices, vec![0]);
        let blank = matching_indices(roster.records(), &criteria("   ", CategoryFilter::All));
        assert_eq!(blank.len(), 10);
    }

    #[test]
    fn category_filter_selects_single_tier() {
        let roster = demo_roster();
        let excellent = matching_indices(
            roster.records(),
            &criteria("", CategoryFilter::Only(Category::Excellent)),
        );
        assert_eq!(excellent, vec![0, 7]);
    }

    #[test]
    fn query_and_category_compose_with_and() {
        let roster = demo_roster();
        // Both Ibrahims match the query but only Ibrahim Daniel is average.
        let indices = matching_indices(
            roster.records(),
            &criteria("ibrahim", CategoryFilter::Only(Category::Average)),
        );
        assert_eq!(indices, vec![9]);
    }

    #[test]
    fn unmatched_query_yields_empty_view() {
        let roster = demo_roster();
        let indices = matching_indices(roster.records(), &criteria("zzz", CategoryFilter::All));
        assert!(indices.is_empty());
    }

    #[test]
    fn matching_is_idempotent() {
        let roster = demo_roster();
        let c = criteria("a", CategoryFilter::All);
        let first = matching_indices(roster.records(), &c);
        let second = matching_indices(roster.records(), &c);
        assert_eq!(first, second);
        // Every demo name contains the letter "a".
        assert_eq!(first.len(), 10);
    }
}
