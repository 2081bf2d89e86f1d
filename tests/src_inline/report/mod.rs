use super::*;
use crate::report::text::render_standings_table;

#[test]
fn test_fraction() {
    assert_eq!(fraction(0, 0), 0.0);
    assert_eq!(fraction(1, 4), 0.25);
}

#[test]
fn test_yes_no() {
    assert_eq!(yes_no(true), "yes");
    assert_eq!(yes_no(false), "no");
}

#[test]
fn test_build_summary_without_files() {
    let book = Gradebook::new(4).unwrap();
    book.register("GinnyGiraffe");
    book.try_accept("GinnyGiraffe", &[1, 0, 0, 0]);
    let summary = build_summary(&book, RosterLoad::default(), IngestReport::default());
    assert_eq!(summary.test_count, 4);
    assert_eq!(summary.satisfactory_threshold, 2);
    assert_eq!(summary.totals.students, 1);
    assert_eq!(summary.totals.satisfactory, 0);
    assert_eq!(summary.standings[0].best_score, Some(1));
}

#[test]
fn test_standings_table_alignment() {
    let standings = vec![
        StudentStanding {
            student: "GinnyGiraffe".to_string(),
            submissions: 1,
            best_score: Some(65),
            satisfactory: true,
            extra_credit: false,
        },
        StudentStanding {
            student: "Al".to_string(),
            submissions: 0,
            best_score: None,
            satisfactory: false,
            extra_credit: false,
        },
    ];
    let table = render_standings_table(&standings);
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("student     "));
    assert!(lines[1].starts_with("GinnyGiraffe  "));
    assert!(lines[2].starts_with("Al            "));
    assert!(lines[2].contains(" - "));
}
