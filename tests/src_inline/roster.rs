use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[test]
fn test_empty_roster() {
    let roster = Roster::new();
    assert_eq!(roster.count(), 0);
    assert!(!roster.contains("GinnyGiraffe"));
}

#[test]
fn test_register_and_contains() {
    let roster = Roster::new();
    assert!(roster.register("GinnyGiraffe"));
    assert_eq!(roster.count(), 1);
    assert!(roster.contains("GinnyGiraffe"));
    assert!(!roster.contains("ginnygiraffe"));
}

#[test]
fn test_register_rejects_empty_and_duplicate() {
    let roster = Roster::new();
    assert!(!roster.register(""));
    assert!(roster.register("WallyWalrus"));
    assert!(!roster.register("WallyWalrus"));
    assert_eq!(roster.count(), 1);
    assert!(!roster.contains(""));
}

#[test]
fn test_register_is_case_sensitive() {
    let roster = Roster::new();
    assert!(roster.register("Bob"));
    assert!(roster.register("bob"));
    assert_eq!(roster.count(), 2);
}

#[test]
fn test_names_keep_registration_order() {
    let roster = Roster::new();
    roster.register("Zed");
    roster.register("Amy");
    roster.register("Mia");
    assert_eq!(roster.names(), vec!["Zed", "Amy", "Mia"]);
}

#[test]
fn test_concurrent_duplicate_registration_admits_one() {
    let roster = Arc::new(Roster::new());
    let wins = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let roster = Arc::clone(&roster);
            let wins = Arc::clone(&wins);
            std::thread::spawn(move || {
                for i in 0..50 {
                    if roster.register(&format!("student{i}")) {
                        wins.fetch_add(1, Ordering::Relaxed);
                    }
                }
            })
        })
        .collect();

    for h in handles {
        h.join().expect("thread should not panic");
    }

    assert_eq!(wins.load(Ordering::Relaxed), 50);
    assert_eq!(roster.count(), 50);
}
