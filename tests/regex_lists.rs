use huddlebar::regexes::{add_pattern, remove_pattern};

#[test]
fn add_appends_at_the_end() {
    let mut list = vec!["standup".to_string()];
    assert!(add_pattern(&mut list, "retro").unwrap());
    assert_eq!(list, ["standup", "retro"]);
}

#[test]
fn add_is_a_noop_for_duplicates() {
    let mut list = vec!["standup".to_string(), "retro".to_string()];
    assert!(!add_pattern(&mut list, "standup").unwrap());
    assert_eq!(list, ["standup", "retro"]);
}

#[test]
fn add_rejects_patterns_that_do_not_compile() {
    let mut list = vec!["standup".to_string()];
    let err = add_pattern(&mut list, "[").unwrap_err();
    assert!(!err.to_string().is_empty());
    assert_eq!(list, ["standup"]);
}

#[test]
fn remove_is_a_noop_when_absent() {
    let mut list = vec!["standup".to_string()];
    assert!(!remove_pattern(&mut list, "retro"));
    assert_eq!(list, ["standup"]);
}

#[test]
fn remove_then_add_restores_membership() {
    let mut list = vec!["standup".to_string(), "retro".to_string()];
    assert!(remove_pattern(&mut list, "standup"));
    assert_eq!(list, ["retro"]);
    assert!(add_pattern(&mut list, "standup").unwrap());
    assert_eq!(list, ["retro", "standup"]);
}
