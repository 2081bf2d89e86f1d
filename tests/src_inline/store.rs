use std::sync::Arc;

use super::*;

fn setup(test_count: usize) -> (Roster, SubmissionStore) {
    let config = ProjectConfig::new(test_count).unwrap();
    let roster = Roster::new();
    roster.register("GinnyGiraffe");
    roster.register("WallyWalrus");
    (roster, SubmissionStore::new(config))
}

#[test]
fn test_accepts_valid_submission() {
    let (roster, store) = setup(5);
    let outcome = store.submit(&roster, "GinnyGiraffe", &[20, 20, 5, 0, 20]);
    assert!(outcome.is_accepted());
    assert_eq!(store.len(), 1);
    let stored = store.snapshot();
    assert_eq!(stored[0].total(), 65);
    assert_eq!(stored[0].scores(), &[20, 20, 5, 0, 20]);
}

#[test]
fn test_rejections_leave_store_untouched() {
    let (roster, store) = setup(5);

    let cases: Vec<(&str, Vec<i32>, Rejection)> = vec![
        ("", vec![1, 1, 1, 1, 1], Rejection::EmptyName),
        (
            "NobodyNewt",
            vec![1, 1, 1, 1, 1],
            Rejection::UnknownStudent("NobodyNewt".to_string()),
        ),
        ("GinnyGiraffe", vec![], Rejection::EmptyScores),
        (
            "GinnyGiraffe",
            vec![1, 2, 3],
            Rejection::WrongLength {
                expected: 5,
                found: 3,
            },
        ),
        (
            "GinnyGiraffe",
            vec![1, 2, 3, 4, 5, 6],
            Rejection::WrongLength {
                expected: 5,
                found: 6,
            },
        ),
        (
            "GinnyGiraffe",
            vec![1, 2, -3, 4, 5],
            Rejection::NegativeScore {
                position: 3,
                value: -3,
            },
        ),
    ];

    for (name, scores, expected) in cases {
        let outcome = store.submit(&roster, name, &scores);
        assert_eq!(outcome, Acceptance::Rejected(expected));
    }
    assert!(store.is_empty());
}

#[test]
fn test_zero_scores_are_accepted() {
    let (roster, store) = setup(3);
    assert!(
        store
            .submit(&roster, "WallyWalrus", &[0, 0, 0])
            .is_accepted()
    );
    assert_eq!(store.snapshot()[0].total(), 0);
}

#[test]
fn test_concurrent_submits_are_not_lost() {
    let roster = Arc::new(Roster::new());
    roster.register("GinnyGiraffe");
    let store = Arc::new(SubmissionStore::new(ProjectConfig::new(5).unwrap()));

    let workers = 16;
    let per_worker = 16;
    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let roster = Arc::clone(&roster);
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..per_worker {
                    let outcome = store.submit(&roster, "GinnyGiraffe", &[1, 2, 3, 4, 5]);
                    assert!(outcome.is_accepted());
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("thread should not panic");
    }

    assert_eq!(store.len(), workers * per_worker);
    assert!(store.snapshot().iter().all(|s| s.total() == 15));
}
