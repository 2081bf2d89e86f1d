use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("scorebook_roster_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_load_roster_skips_duplicates() {
    let dir = make_temp_dir();
    let path = dir.join("roster.txt");
    fs::write(&path, "GinnyGiraffe\nWallyWalrus\n\nGinnyGiraffe\n").unwrap();

    let roster = Roster::new();
    let load = load_roster(&roster, &path).unwrap();
    assert_eq!(
        load,
        RosterLoad {
            registered: 2,
            duplicates: vec!["GinnyGiraffe".to_string()],
        }
    );
    assert_eq!(roster.count(), 2);
}

#[test]
fn test_load_roster_missing_file() {
    let dir = make_temp_dir();
    let roster = Roster::new();
    assert!(load_roster(&roster, &dir.join("missing.txt")).is_err());
    assert_eq!(roster.count(), 0);
}

#[test]
fn test_register_all_ignores_empty_names() {
    let roster = Roster::new();
    let load = register_all(&roster, vec!["", "Bob", "Bob"]);
    assert_eq!(load.registered, 1);
    assert_eq!(load.duplicates, vec!["Bob".to_string()]);
}
