mod common;

use agent_missions::flush::{flush_missions_to_jsonl, load_missions_from_jsonl};
use agent_missions::{MissionPhase, MissionRegistry, PersistError, Tunables};
use common::{mixed_missions, read_lines};

#[test]
fn flush_writes_one_record_per_mission() {
    let setup = mixed_missions();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saves").join("missions.jsonl");

    flush_missions_to_jsonl(&setup.scenario.registry, &path).unwrap();

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 3, "expected 3 missions");
    for line in &lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("agent").is_some());
        assert!(v.get("target").is_some());
        assert!(v.get("phase").is_some());
        assert!(v.get("remaining").is_some());
        assert!(v.get("food_destroyed").is_some());
        assert!(v.get("loyalty_lost").is_some());
    }
}

#[test]
fn load_reproduces_mixed_phases_exactly() {
    let setup = mixed_missions();
    let registry = &setup.scenario.registry;
    assert_eq!(
        registry.mission(setup.traveling).unwrap().phase,
        MissionPhase::Traveling { remaining: 7 }
    );
    assert_eq!(
        registry.mission(setup.infiltrating).unwrap().phase,
        MissionPhase::Infiltrating { remaining: 3 }
    );
    assert_eq!(
        registry.mission(setup.returning).unwrap().phase,
        MissionPhase::Returning { remaining: 4 }
    );

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missions.jsonl");
    flush_missions_to_jsonl(registry, &path).unwrap();
    let restored = load_missions_from_jsonl(&path, Tunables::default()).unwrap();

    assert_eq!(&restored, registry);
    let mole = restored.mission(setup.infiltrating).unwrap();
    assert!(mole.food_destroyed > 0);
    assert!(mole.loyalty_lost > 0.0);
}

#[test]
fn restored_registry_keeps_advancing() {
    let mut setup = mixed_missions();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missions.jsonl");
    flush_missions_to_jsonl(&setup.scenario.registry, &path).unwrap();

    setup.scenario.registry = load_missions_from_jsonl(&path, Tunables::default()).unwrap();
    setup.scenario.tick();

    assert_eq!(
        setup.scenario.registry.mission(setup.traveling).unwrap().phase,
        MissionPhase::Traveling { remaining: 6 }
    );
    assert_eq!(
        setup.scenario.registry.mission(setup.returning).unwrap().phase,
        MissionPhase::Returning { remaining: 3 }
    );
}

#[test]
fn duplicate_agent_lines_are_rejected() {
    let setup = mixed_missions();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missions.jsonl");
    flush_missions_to_jsonl(&setup.scenario.registry, &path).unwrap();
    let first = read_lines(&path).remove(0);
    let mut contents = std::fs::read_to_string(&path).unwrap();
    contents.push_str(&first);
    contents.push('\n');
    std::fs::write(&path, contents).unwrap();

    let err = load_missions_from_jsonl(&path, Tunables::default()).unwrap_err();
    assert!(matches!(err, PersistError::DuplicateAgent(_)), "{err}");
}

#[test]
fn malformed_line_reports_line_number() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missions.jsonl");
    std::fs::write(
        &path,
        "{\"agent\":1,\"target\":2,\"phase\":\"traveling\",\"remaining\":3,\"food_destroyed\":0,\"loyalty_lost\":0.0}\n\n{\"agent\":2,\"phase\":\"lost\"}\n",
    )
    .unwrap();

    let err = load_missions_from_jsonl(&path, Tunables::default()).unwrap_err();
    assert!(matches!(err, PersistError::Json { line: 3, .. }), "{err}");
}

#[test]
fn empty_file_loads_empty_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missions.jsonl");
    flush_missions_to_jsonl(&MissionRegistry::default(), &path).unwrap();

    let restored = load_missions_from_jsonl(&path, Tunables::default()).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_missions_from_jsonl(&dir.path().join("nope.jsonl"), Tunables::default())
        .unwrap_err();
    assert!(matches!(err, PersistError::Io(_)));
}
