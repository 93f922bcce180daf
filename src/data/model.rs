// ---------------------------------------------------------------------------
// Subject – the three graded subjects
// ---------------------------------------------------------------------------

/// One of the three graded subjects. The order of [`Subject::ALL`] is the
/// column order used by the table, the charts and both exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Math,
    Science,
    English,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Science, Subject::English];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::English => "English",
        }
    }
}

// ---------------------------------------------------------------------------
// Category – performance tier derived from the rounded average
// ---------------------------------------------------------------------------

/// Performance tier. The thresholds partition [0, 100]:
/// `Excellent` from 85 up, `Average` from 65 to 84, `Poor` below 65.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Excellent,
    Average,
    Poor,
}

impl Category {
    pub fn from_average(average: u32) -> Self {
        if average >= 85 {
            Category::Excellent
        } else if average >= 65 {
            Category::Average
        } else {
            Category::Poor
        }
    }

    /// Lowercase label shown in the table, the CSV rows and the report.
    pub fn label(self) -> &'static str {
        match self {
            Category::Excellent => "excellent",
            Category::Average => "average",
            Category::Poor => "poor",
        }
    }
}

// ---------------------------------------------------------------------------
// StudentRecord – one row of the roster
// ---------------------------------------------------------------------------

/// A single student with one integer score in [0, 100] per subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub id: u32,
    pub name: String,
    pub math: u32,
    pub science: u32,
    pub english: u32,
}

impl StudentRecord {
    pub fn score(&self, subject: Subject) -> u32 {
        match subject {
            Subject::Math => self.math,
            Subject::Science => self.science,
            Subject::English => self.english,
        }
    }

    /// Sum of the three subject scores.
    pub fn total(&self) -> u32 {
        self.math + self.science + self.english
    }

    /// Unrounded mean of the three subjects. The at-risk KPI compares this
    /// against its threshold, so it must stay unrounded.
    pub fn mean_score(&self) -> f64 {
        self.total() as f64 / 3.0
    }

    /// Mean of the three subjects, rounded to the nearest integer.
    pub fn average(&self) -> u32 {
        self.mean_score().round() as u32
    }

    pub fn category(&self) -> Category {
        Category::from_average(self.average())
    }
}

// ---------------------------------------------------------------------------
// Roster – the complete dataset
// ---------------------------------------------------------------------------

/// The full roster, loaded once at startup. Owns the records; everything
/// downstream works on `&[StudentRecord]` and never mutates them.
#[derive(Debug, Clone)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Roster { records }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Number of students.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Collection-level derivations
// ---------------------------------------------------------------------------

/// Per-subject means across the given records, each rounded to one decimal.
/// No records yields `[0.0; 3]` (a defined result, not an error).
pub fn subject_averages<'a, I>(records: I) -> [f64; 3]
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let mut sums = [0.0f64; 3];
    let mut count = 0usize;
    for record in records {
        for (sum, subject) in sums.iter_mut().zip(Subject::ALL) {
            *sum += record.score(subject) as f64;
        }
        count += 1;
    }
    if count == 0 {
        return [0.0; 3];
    }
    sums.map(|sum| round_one_decimal(sum / count as f64))
}

/// Round to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The record with the highest total score, or `None` for no records.
/// Ties keep the earliest record, which a plain `max_by_key` would not
/// (it keeps the last maximum).
pub fn top_performer<'a, I>(records: I) -> Option<&'a StudentRecord>
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let mut best: Option<&StudentRecord> = None;
    for record in records {
        if best.map_or(true, |b| record.total() > b.total()) {
            best = Some(record);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, math: u32, science: u32, english: u32) -> StudentRecord {
        StudentRecord {
            id: 0,
            name: name.to_string(),
            math,
            science,
            english,
        }
    }

    #[test]
    fn average_rounds_to_nearest_integer() {
        // 92 + 88 + 90 = 270, mean 90.0
        assert_eq!(student("a", 92, 88, 90).average(), 90);
        // 44 + 50 + 48 = 142, mean 47.33
        assert_eq!(student("b", 44, 50, 48).average(), 47);
        // 66 + 60 + 64 = 190, mean 63.33
        assert_eq!(student("c", 66, 60, 64).average(), 63);
        // 85 + 79 + 82 = 246, mean 82.0
        assert_eq!(student("d", 85, 79, 82).average(), 82);
        // 70 + 68 + 72 = 210, mean 70.0
        assert_eq!(student("e", 70, 68, 72).average(), 70);
    }

    #[test]
    fn mean_score_is_not_rounded() {
        let s = student("a", 44, 50, 48);
        assert!((s.mean_score() - 142.0 / 3.0).abs() < 1e-9);
        assert!(s.mean_score() < 50.0);
        assert_eq!(s.average(), 47);
    }

    #[test]
    fn category_thresholds() {
        assert_eq!(Category::from_average(100), Category::Excellent);
        assert_eq!(Category::from_average(85), Category::Excellent);
        assert_eq!(Category::from_average(84), Category::Average);
        assert_eq!(Category::from_average(65), Category::Average);
        assert_eq!(Category::from_average(64), Category::Poor);
        assert_eq!(Category::from_average(0), Category::Poor);
    }

    #[test]
    fn category_comes_from_rounded_average() {
        // Mean is 84.67, which rounds to 85 and crosses into excellent.
        let s = student("a", 85, 85, 84);
        assert_eq!(s.average(), 85);
        assert_eq!(s.category(), Category::Excellent);
    }

    #[test]
    fn subject_averages_round_to_one_decimal() {
        let records = vec![student("a", 90, 80, 70), student("b", 85, 81, 71)];
        let averages = subject_averages(&records);
        assert_eq!(averages, [87.5, 80.5, 70.5]);
    }

    #[test]
    fn subject_averages_of_no_records_are_zero() {
        let no_records: Vec<StudentRecord> = Vec::new();
        assert_eq!(subject_averages(&no_records), [0.0; 3]);
    }

    #[test]
    fn top_performer_picks_highest_total() {
        let records = vec![
            student("low", 50, 50, 50),
            student("high", 90, 91, 92),
            student("mid", 70, 70, 70),
        ];
        assert_eq!(top_performer(&records).map(|r| r.name.as_str()), Some("high"));
    }

    #[test]
    fn top_performer_tie_keeps_earliest() {
        let records = vec![
            student("first", 80, 80, 80),
            student("second", 80, 80, 80),
        ];
        assert_eq!(top_performer(&records).map(|r| r.name.as_str()), Some("first"));
    }

    #[test]
    fn top_performer_of_no_records_is_none() {
        let no_records: Vec<StudentRecord> = Vec::new();
        assert!(top_performer(&no_records).is_none());
    }

    #[test]
    fn score_lookup_matches_fields() {
        let s = student("a", 1, 2, 3);
        assert_eq!(s.score(Subject::Math), 1);
        assert_eq!(s.score(Subject::Science), 2);
        assert_eq!(s.score(Subject::English), 3);
        assert_eq!(s.total(), 6);
    }
}
