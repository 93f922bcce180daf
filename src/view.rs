use crate::data::model::{self, Category, Roster, StudentRecord, Subject};
use crate::data::trend::TrendWindow;

// ---------------------------------------------------------------------------
// Table rows
// ---------------------------------------------------------------------------

/// One rendered table row. `rank` is the 1-based position within the
/// filtered view, not the roster index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub rank: usize,
    pub name: String,
    pub math: u32,
    pub science: u32,
    pub english: u32,
    pub average: u32,
    pub category: Category,
}

pub fn table_rows(roster: &Roster, visible: &[usize]) -> Vec<TableRow> {
    visible
        .iter()
        .enumerate()
        .map(|(position, &index)| {
            let record = &roster.records()[index];
            TableRow {
                rank: position + 1,
                name: record.name.clone(),
                math: record.math,
                science: record.science,
                english: record.english,
                average: record.average(),
                category: record.category(),
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// KPI summary
// ---------------------------------------------------------------------------

/// Unrounded per-student mean below this counts as at risk.
pub const RISK_THRESHOLD: f64 = 50.0;

/// Headline numbers for the KPI cards, computed over the whole roster. A
/// filter narrows the table and charts but never these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KpiSummary {
    pub total: usize,
    /// Mean of the per-student unrounded means, rounded once at the end.
    pub overall_average: u32,
    pub risk_count: usize,
}

pub fn kpis(roster: &Roster) -> KpiSummary {
    let records = roster.records();
    let total = records.len();
    let overall_average = if total == 0 {
        0
    } else {
        let sum: f64 = records.iter().map(StudentRecord::mean_score).sum();
        (sum / total as f64).round() as u32
    };
    let risk_count = records
        .iter()
        .filter(|r| r.mean_score() < RISK_THRESHOLD)
        .count();
    KpiSummary {
        total,
        overall_average,
        risk_count,
    }
}

// ---------------------------------------------------------------------------
// Chart data
// ---------------------------------------------------------------------------

/// Grouped per-subject bars over the visible records, one group per student.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceChart {
    pub labels: Vec<String>,
    pub series: [SubjectSeries; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectSeries {
    pub subject: Subject,
    pub values: Vec<f64>,
}

pub fn performance_chart(roster: &Roster, visible: &[usize]) -> PerformanceChart {
    let labels = visible
        .iter()
        .map(|&i| roster.records()[i].name.clone())
        .collect();
    let series = Subject::ALL.map(|subject| SubjectSeries {
        subject,
        values: visible
            .iter()
            .map(|&i| roster.records()[i].score(subject) as f64)
            .collect(),
    });
    PerformanceChart { labels, series }
}

/// Per-subject averages over the visible records, in `Subject::ALL` order.
/// The pie renders these as shares of their sum.
pub fn subject_share_chart(roster: &Roster, visible: &[usize]) -> [f64; 3] {
    model::subject_averages(visible_records(roster, visible))
}

/// Radial comparison data for the strongest visible student, one axis per
/// subject. `None` when nothing is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialChart {
    pub name: String,
    pub scores: [f64; 3],
}

pub fn radial_chart(roster: &Roster, visible: &[usize]) -> Option<RadialChart> {
    model::top_performer(visible_records(roster, visible)).map(|record| RadialChart {
        name: record.name.clone(),
        scores: Subject::ALL.map(|subject| record.score(subject) as f64),
    })
}

/// Trend points as plot coordinates (week number, class average).
pub fn trend_chart(window: &TrendWindow) -> Vec<[f64; 2]> {
    window
        .points()
        .map(|(week, value)| [week as f64, value])
        .collect()
}

fn visible_records<'a>(
    roster: &'a Roster,
    visible: &'a [usize],
) -> impl Iterator<Item = &'a StudentRecord> + 'a {
    visible.iter().map(move |&i| &roster.records()[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{matching_indices, CategoryFilter, FilterCriteria};
    use crate::data::seed::demo_roster;

    fn all_indices(roster: &Roster) -> Vec<usize> {
        (0..roster.len()).collect()
    }

    #[test]
    fn table_rows_rank_from_one_within_the_view() {
        let roster = demo_roster();
        let rows = table_rows(&roster, &[7, 0, 3]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].name, "Fatima Onyek");
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].name, "Adewale Okoro");
        assert_eq!(rows[2].rank, 3);
        assert_eq!(rows[2].average, 72);
        assert_eq!(rows[2].category, Category::Average);
    }

    #[test]
    fn demo_kpis() {
        let roster = demo_roster();
        let summary = kpis(&roster);
        assert_eq!(summary.total, 10);
        // Sum of the ten unrounded means is 715.33, so 71.53 rounds to 72.
        assert_eq!(summary.overall_average, 72);
        // Only Emeka Johnson (mean 47.33) is below the risk threshold.
        assert_eq!(summary.risk_count, 1);
    }

    #[test]
    fn kpis_ignore_the_active_filter() {
        let roster = demo_roster();
        let criteria = FilterCriteria {
            query: "fatima".to_string(),
            category: CategoryFilter::All,
        };
        let visible = matching_indices(roster.records(), &criteria);
        assert_eq!(visible.len(), 1);
        // The summary reads the roster directly, so narrowing the view
        // cannot change it.
        assert_eq!(kpis(&roster).total, 10);
        assert_eq!(kpis(&roster).risk_count, 1);
    }

    #[test]
    fn risk_uses_the_unrounded_mean() {
        // Mean 49.67 rounds to 50, but the unrounded mean is below 50.
        let roster = Roster::new(vec![StudentRecord {
            id: 1,
            name: "edge".to_string(),
            math: 50,
            science: 50,
            english: 49,
        }]);
        assert_eq!(roster.records()[0].average(), 50);
        assert_eq!(kpis(&roster).risk_count, 1);
    }

    #[test]
    fn performance_chart_follows_the_view() {
        let roster = demo_roster();
        let chart = performance_chart(&roster, &[0, 7]);
        assert_eq!(chart.labels, vec!["Adewale Okoro", "Fatima Onyek"]);
        assert_eq!(chart.series[0].subject, Subject::Math);
        assert_eq!(chart.series[0].values, vec![92.0, 95.0]);
        assert_eq!(chart.series[2].values, vec![90.0, 96.0]);
    }

    #[test]
    fn demo_subject_shares() {
        let roster = demo_roster();
        let shares = subject_share_chart(&roster, &all_indices(&roster));
        assert_eq!(shares, [71.5, 70.9, 72.2]);
    }

    #[test]
    fn empty_view_shares_are_zero() {
        let roster = demo_roster();
        assert_eq!(subject_share_chart(&roster, &[]), [0.0; 3]);
    }

    #[test]
    fn radial_chart_tracks_top_performer_of_the_view() {
        let roster = demo_roster();
        let full = radial_chart(&roster, &all_indices(&roster)).unwrap();
        assert_eq!(full.name, "Fatima Onyek");
        assert_eq!(full.scores, [95.0, 93.0, 96.0]);

        // Without Fatima the strongest student is Adewale.
        let without_fatima: Vec<usize> = (0..10).filter(|&i| i != 7).collect();
        let narrowed = radial_chart(&roster, &without_fatima).unwrap();
        assert_eq!(narrowed.name, "Adewale Okoro");
    }

    #[test]
    fn radial_chart_of_empty_view_is_none() {
        let roster = demo_roster();
        assert!(radial_chart(&roster, &[]).is_none());
    }

    #[test]
    fn trend_chart_maps_weeks_to_x() {
        let window = TrendWindow::seeded();
        let points = trend_chart(&window);
        assert_eq!(points, vec![[1.0, 62.0], [2.0, 68.0], [3.0, 73.0], [4.0, 76.0]]);
    }
}
