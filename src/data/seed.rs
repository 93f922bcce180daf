use super::model::{Roster, StudentRecord};

/// Fixed demo roster: ten students with three subject scores each.
/// Loaded once at startup; the records never change afterwards.
pub fn demo_roster() -> Roster {
    let rows: [(u32, &str, u32, u32, u32); 10] = [
        (1, "Adewale Okoro", 92, 88, 90),
        (2, "Grace Adebayo", 85, 79, 82),
        (3, "Musa Ibrahim", 58, 61, 55),
        (4, "Chidinma Smith", 72, 70, 75),
        (5, "Emeka Johnson", 44, 50, 48),
        (6, "Lilian Olu", 78, 82, 80),
        (7, "Tunde Adeyemi", 66, 60, 64),
        (8, "Fatima Onyek", 95, 93, 96),
        (9, "Kemi Madu", 55, 58, 60),
        (10, "Ibrahim Daniel", 70, 68, 72),
    ];
    Roster::new(
        rows.into_iter()
            .map(|(id, name, math, science, english)| StudentRecord {
                id,
                name: name.to_string(),
                math,
                science,
                english,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Category;

    #[test]
    fn demo_roster_has_ten_students() {
        let roster = demo_roster();
        assert_eq!(roster.len(), 10);
        assert!(!roster.is_empty());
    }

    #[test]
    fn demo_ids_are_unique_and_scores_in_range() {
        let roster = demo_roster();
        let mut ids: Vec<u32> = roster.records().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        for record in roster.records() {
            assert!(record.math <= 100);
            assert!(record.science <= 100);
            assert!(record.english <= 100);
        }
    }

    #[test]
    fn demo_categories_split_as_expected() {
        let roster = demo_roster();
        let count = |cat: Category| {
            roster
                .records()
                .iter()
                .filter(|r| r.category() == cat)
                .count()
        };
        assert_eq!(count(Category::Excellent), 2);
        assert_eq!(count(Category::Average), 4);
        assert_eq!(count(Category::Poor), 4);
    }

    #[test]
    fn first_demo_student_derivations() {
        let roster = demo_roster();
        let adewale = &roster.records()[0];
        assert_eq!(adewale.name, "Adewale Okoro");
        assert_eq!(adewale.average(), 90);
        assert_eq!(adewale.category(), Category::Excellent);
    }
}
