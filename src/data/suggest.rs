use super::model::{Category, StudentRecord};

/// Per-subject score below which the matching study tip is attached.
const WEAK_SCORE: u32 = 70;
/// Rounded average from which the commendation is attached.
const COMMEND_AVERAGE: u32 = 85;

const MATH_TIP: &str = "Increase daily math practice to 30 minutes.";
const SCIENCE_TIP: &str = "Do short experiments and revise core concepts.";
const ENGLISH_TIP: &str = "Read more and practice essay writing.";
const COMMEND_TIP: &str = "Outstanding results: consider peer mentorship or a competition.";
const GENERIC_TIP: &str = "Keep a consistent study routine and join group study.";

/// One generated tip card for a single student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub average: u32,
    pub category: Category,
    pub tips: Vec<&'static str>,
}

/// Build one suggestion per record, in roster order. Weak subjects each add
/// their tip, a high average adds the commendation, and a student with
/// neither gets the generic tip so no card is ever empty.
pub fn study_tips(records: &[StudentRecord]) -> Vec<Suggestion> {
    records.iter().map(suggestion_for).collect()
}

fn suggestion_for(record: &StudentRecord) -> Suggestion {
    let mut tips = Vec::new();
    if record.math < WEAK_SCORE {
        tips.push(MATH_TIP);
    }
    if record.science < WEAK_SCORE {
        tips.push(SCIENCE_TIP);
    }
    if record.english < WEAK_SCORE {
        tips.push(ENGLISH_TIP);
    }
    let average = record.average();
    if average >= COMMEND_AVERAGE {
        tips.push(COMMEND_TIP);
    }
    if tips.is_empty() {
        tips.push(GENERIC_TIP);
    }
    Suggestion {
        name: record.name.clone(),
        average,
        category: Category::from_average(average),
        tips,
    }
}
