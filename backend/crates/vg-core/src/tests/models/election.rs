use crate::{Election, NewElection};

use chrono::{Duration, Utc};

fn new_election() -> NewElection {
    let now = Utc::now();
    NewElection {
        name: "General Elections 2025".to_string(),
        description: None,
        starts_at: now,
        ends_at: now + Duration::days(1),
        ledger_object_id: None,
        is_active: true,
    }
}

#[test]
fn test_valid_election() {
    assert!(new_election().validate().is_ok());
}

#[test]
fn test_empty_name_rejected() {
    let mut election = new_election();
    election.name = "   ".to_string();

    let err = election.validate().unwrap_err();
    assert_eq!(err.field(), Some("name"));
}

#[test]
fn test_end_before_start_rejected() {
    let mut election = new_election();
    election.ends_at = election.starts_at - Duration::hours(1);

    let err = election.validate().unwrap_err();
    assert_eq!(err.field(), Some("endsAt"));
}

#[test]
fn test_is_open_at() {
    let now = Utc::now();
    let election = Election {
        id: 1,
        name: "E".to_string(),
        description: None,
        starts_at: now - Duration::hours(1),
        ends_at: now + Duration::hours(1),
        ledger_object_id: None,
        is_active: true,
        created_at: now,
    };

    assert!(election.is_open_at(now));
    assert!(!election.is_open_at(now + Duration::hours(2)));

    let inactive = Election {
        is_active: false,
        ..election
    };
    assert!(!inactive.is_open_at(now));
}
