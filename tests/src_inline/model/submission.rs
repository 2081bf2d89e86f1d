use super::*;

#[test]
fn test_total_is_sum_of_scores() {
    let s = Submission::new("GinnyGiraffe", vec![20, 20, 5, 0, 20]);
    assert_eq!(s.total(), 65);
    assert_eq!(s.student(), "GinnyGiraffe");
    assert!(s.belongs_to("GinnyGiraffe"));
    assert!(!s.belongs_to("ginnygiraffe"));
}

#[test]
fn test_total_does_not_overflow_u32() {
    let s = Submission::new("Big", vec![u32::MAX, u32::MAX]);
    assert_eq!(s.total(), 2 * u64::from(u32::MAX));
}

#[test]
fn test_passing_and_all_passed() {
    let s = Submission::new("A", vec![20, 20, 5, 0, 20]);
    assert_eq!(s.passing_count(), 4);
    assert!(!s.all_passed());
    assert!(s.is_satisfactory(2));
    assert!(!s.is_satisfactory(5));

    let full = Submission::new("A", vec![1, 1, 1]);
    assert!(full.all_passed());
}
