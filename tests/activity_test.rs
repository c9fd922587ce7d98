//! Integration tests for challenge/result entry and the derived views

mod common;

use sporta::activity::{add_challenge, add_result, current_record, ChallengeForm, ResultForm};
use sporta::points::PointsSummary;
use sporta::session::Session;
use sporta::views::{result_list, ProfileSummary};
use sporta::{AppError, Sport, ValidationError};

use common::TestEnv;

fn challenge_form(title: &str) -> ChallengeForm {
    ChallengeForm {
        title: title.to_string(),
        sport: "running".to_string(),
        description: "Every morning".to_string(),
        target: "5".to_string(),
        unit: "km".to_string(),
        deadline: "31.12.2025".to_string(),
    }
}

fn result_form(value: &str) -> ResultForm {
    ResultForm {
        sport: "cycling".to_string(),
        value: value.to_string(),
        unit: "km".to_string(),
        note: String::new(),
    }
}

#[test]
fn test_registration_challenge_result_totals_80() {
    let env = TestEnv::new();
    let session = env.register("anna");

    add_challenge(&env.store, &session, challenge_form("Run 5km")).unwrap();
    add_result(&env.store, &session, result_form("12.5")).unwrap();

    let record = env.store.load("anna").unwrap().unwrap();
    assert_eq!(record.points(), 80);
    assert_eq!(record.achievements().len(), 3);
    assert_eq!(record.challenges.len(), 1);
    assert_eq!(record.results.len(), 1);

    let titles: Vec<_> = record
        .achievements()
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Welcome!", "Challenge created!", "Result recorded!"]
    );
    assert_eq!(record.achievements()[1].description, "Created: Run 5km");
    assert_eq!(record.achievements()[2].description, "Cycling: 12.5 km");
}

#[test]
fn test_challenge_fields_are_stored() {
    let env = TestEnv::new();
    let session = env.register("anna");

    add_challenge(&env.store, &session, challenge_form("  Run 5km  ")).unwrap();

    let record = env.store.load("anna").unwrap().unwrap();
    let challenge = &record.challenges[0];
    assert_eq!(challenge.title, "Run 5km");
    assert_eq!(challenge.sport, Sport::Running);
    assert_eq!(challenge.target, "5");
    assert_eq!(challenge.unit, "km");
    assert_eq!(challenge.deadline, "31.12.2025");
    assert_eq!(challenge.created_date.len(), "DD.MM.YYYY".len());
}

#[test]
fn test_non_numeric_result_is_rejected_without_mutation() {
    let env = TestEnv::new();
    let session = env.register("anna");
    let before = env.store.load("anna").unwrap().unwrap();

    let err = add_result(&env.store, &session, result_form("abc")).unwrap_err();
    assert!(
        matches!(&err, AppError::Validation(ValidationError::NotANumber(v)) if v == "abc"),
        "Expected not-a-number error, got: {:?}",
        err
    );

    let after = env.store.load("anna").unwrap().unwrap();
    assert!(after.results.is_empty());
    assert_eq!(before, after);
}

#[test]
fn test_unknown_sport_is_rejected() {
    let env = TestEnv::new();
    let session = env.register("anna");

    let mut form = challenge_form("Curl");
    form.sport = "curling".to_string();
    let err = add_challenge(&env.store, &session, form).unwrap_err();

    assert!(matches!(
        err,
        AppError::Validation(ValidationError::UnknownSport(_))
    ));
    assert!(env.store.load("anna").unwrap().unwrap().challenges.is_empty());
}

#[test]
fn test_results_display_newest_first() {
    let env = TestEnv::new();
    let session = env.register("anna");

    for value in ["1", "2", "3"] {
        add_result(&env.store, &session, result_form(value)).unwrap();
    }

    let record = current_record(&env.store, &session).unwrap();
    let shown: Vec<_> = result_list(&record)
        .iter()
        .map(|r| r.value.as_str())
        .collect();
    assert_eq!(shown, vec!["3", "2", "1"]);

    let stored: Vec<_> = record.results.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(stored, vec!["1", "2", "3"]);
}

#[test]
fn test_points_summary_reaches_athlete_level() {
    let env = TestEnv::new();
    let session = env.register("anna");

    // 50 + 3 * 20 = 110
    for title in ["A", "B", "C"] {
        add_challenge(&env.store, &session, challenge_form(title)).unwrap();
    }

    let record = current_record(&env.store, &session).unwrap();
    let summary = PointsSummary::from_record(&record);
    assert_eq!(summary.total, 110);
    assert_eq!(summary.level.title, "Athlete");
    assert_eq!(summary.next_level_points, Some(300));
    assert_eq!(summary.history.len(), 4);
    assert_eq!(summary.history[0].description, "Created: C");
    assert_eq!(summary.history[3].title, "Welcome!");
}

#[test]
fn test_profile_summary_counts() {
    let env = TestEnv::new();
    let session = env.register("anna");
    add_challenge(&env.store, &session, challenge_form("Run 5km")).unwrap();
    for value in ["1", "2", "3", "4", "5", "6"] {
        add_result(&env.store, &session, result_form(value)).unwrap();
    }

    let record = current_record(&env.store, &session).unwrap();
    let profile = ProfileSummary::from_record(&record, 5);

    assert_eq!(profile.username, "anna");
    assert_eq!(profile.challenge_count, 1);
    assert_eq!(profile.result_count, 6);
    assert_eq!(profile.achievement_count, 8);
    assert_eq!(profile.points, 50 + 20 + 60);
    assert_eq!(profile.recent_results.len(), 5);
    assert_eq!(profile.recent_results[0].value, "6");
}

#[test]
fn test_session_for_missing_record() {
    let env = TestEnv::new();
    let session = Session::start("ghost");

    let err = add_result(&env.store, &session, result_form("1")).unwrap_err();
    assert!(matches!(err, AppError::RecordMissing(name) if name == "ghost"));

    let err = current_record(&env.store, &session).unwrap_err();
    assert!(matches!(err, AppError::RecordMissing(_)));
}

#[test]
fn test_adding_result_keeps_foreign_sport_names() {
    let env = TestEnv::new();
    let session = env.register("anna");

    let path = env.store.record_path("anna").unwrap();
    let mut document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    document["results"] = serde_json::json!([
        {"sport": "Skriešana", "value": "5", "unit": "km", "note": "", "timestamp": ""},
        {"sport": "Running", "value": "3", "unit": "km", "note": "", "timestamp": ""}
    ]);
    std::fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

    add_result(&env.store, &session, result_form("1")).unwrap();

    let record = env.store.load("anna").unwrap().unwrap();
    let sports: Vec<_> = record.results.iter().map(|r| r.sport.clone()).collect();
    assert_eq!(
        sports,
        vec![
            Sport::Custom("Skriešana".to_string()),
            Sport::Running,
            Sport::Cycling
        ]
    );

    let stored = std::fs::read_to_string(&path).unwrap();
    assert!(stored.contains("\"sport\": \"Skriešana\""));
}
