//! End-to-end builds over the golden scenarios.

use storyline_builder::{
    load_insights, manifest_file_name, read_manifest, validate_manifest, write_manifest,
    write_manifests, StoryBuilder,
};
use storyline_core::constants::{ADDITIONAL_SECTION_TITLE, FALLBACK_SECTION_TITLE};
use storyline_core::errors::{SerializationError, StoryErrorCode};
use storyline_core::models::{NarrativeMode, RawInsight, StoryManifest, ThesisFrame};

fn golden(name: &str) -> Vec<RawInsight> {
    test_fixtures::load_fixture(&format!("golden/{name}.json"))
}

fn input_ids(manifest: &StoryManifest) -> Vec<String> {
    let mut ids: Vec<String> = manifest
        .sections
        .iter()
        .flat_map(|s| s.insight_ids.iter().cloned())
        .collect();
    ids.sort();
    ids
}

#[test]
fn revenue_churn_story() {
    let manifest = StoryBuilder::new()
        .execute(&golden("revenue_churn"), "Q3 Review", None, NarrativeMode::Executive)
        .unwrap();

    let values: Vec<&str> = manifest.top_kpis.iter().map(|k| k.value.as_str()).collect();
    for expected in ["23%", "8 pts", "14%"] {
        assert!(values.contains(&expected), "missing {expected} in {values:?}");
    }

    let titled = manifest.sections.iter().any(|s| {
        let title = s.title.to_lowercase();
        title.contains("trend")
            || title.contains("comparison")
            || s.title == FALLBACK_SECTION_TITLE
            || s.title == ADDITIONAL_SECTION_TITLE
    });
    assert!(titled, "unexpected titles: {:?}", manifest.sections);

    assert!(
        manifest
            .top_kpis
            .iter()
            .any(|k| manifest.executive_summary.contains(&k.value)),
        "summary quotes no KPI: {}",
        manifest.executive_summary
    );
    assert_eq!(input_ids(&manifest), vec!["insight-1", "insight-2"]);
    assert!(validate_manifest(&manifest, &["insight-1", "insight-2"]).is_empty());
}

#[test]
fn single_insight_builds_a_fallback_story() {
    let manifest = StoryBuilder::new()
        .execute(&golden("single_insight"), "AOV", None, NarrativeMode::Analyst)
        .unwrap();

    assert_eq!(manifest.sections.len(), 1);
    assert_eq!(manifest.sections[0].title, FALLBACK_SECTION_TITLE);
    assert_eq!(manifest.sections[0].insight_ids, vec!["only-1"]);
    assert_eq!(manifest.thesis.frame, ThesisFrame::Fallback);
    assert!((manifest.thesis.confidence.value() - 0.5).abs() < 1e-9);
    assert_eq!(manifest.thesis.supporting_insight_ids, vec!["only-1"]);
    assert!(manifest.top_kpis.len() <= 1);
    assert_eq!(manifest.key_findings.len(), 1);
}

#[test]
fn mode_switching_changes_only_the_prose() {
    let manifests = StoryBuilder::new()
        .execute_all_modes(&golden("mode_switch"), "Support Ops", Some("Explain backlog"))
        .unwrap();
    assert_eq!(manifests.len(), 3);

    let modes: Vec<NarrativeMode> = manifests.iter().map(|m| m.narrative_mode).collect();
    assert_eq!(modes, NarrativeMode::ALL.to_vec());

    let first = &manifests[0];
    for other in &manifests[1..] {
        assert_eq!(other.thesis, first.thesis);
        assert_eq!(other.top_kpis, first.top_kpis);
        assert_eq!(other.metadata.source_hash, first.metadata.source_hash);
        assert_eq!(other.sections.len(), first.sections.len());
        for (a, b) in other.sections.iter().zip(&first.sections) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.insight_ids, b.insight_ids);
            assert_eq!(a.kpis, b.kpis);
            assert_eq!(a.charts, b.charts);
            assert_ne!(a.narrative, b.narrative);
        }
        assert_ne!(other.executive_summary, first.executive_summary);
        assert_ne!(other.id, first.id);
    }
}

#[test]
fn retail_document_builds_in_every_mode() {
    let records = load_insights(&test_fixtures::fixture_path("golden/retail_quarterly.json")).unwrap();
    assert_eq!(records.len(), 8);

    let manifests = StoryBuilder::new()
        .execute_all_modes(&records, "Retail Quarterly", None)
        .unwrap();
    for manifest in &manifests {
        assert_eq!(manifest.metadata.source_insight_count, 8);
        assert_eq!(manifest.metadata.skipped_insight_count, 1);
        assert_eq!(manifest.metadata.skipped_records[0].id.as_deref(), Some("rq-7"));

        let ids = input_ids(manifest);
        assert_eq!(ids.len(), 7);
        assert!(!ids.iter().any(|id| id == "rq-7"));
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        assert_eq!(validate_manifest(manifest, &id_refs), Vec::new());
        assert!(!manifest.executive_summary.is_empty());
        assert!(manifest.sections.iter().all(|s| !s.narrative.is_empty()));
    }
}

#[test]
fn manifests_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let manifests = StoryBuilder::new()
        .execute_all_modes(&golden("revenue_churn"), "Q3 Review", None)
        .unwrap();
    let paths = write_manifests(&manifests, dir.path()).unwrap();
    assert_eq!(paths.len(), 3);
    assert!(paths[0].ends_with("q3-review.executive.story.json"));

    for (original, path) in manifests.iter().zip(&paths) {
        let restored = read_manifest(path).unwrap();
        assert_eq!(restored.id, original.id);
        assert_eq!(restored.narrative_mode, original.narrative_mode);
        assert_eq!(restored.thesis.title, original.thesis.title);
        assert_eq!(restored.thesis.frame, original.thesis.frame);
        assert_eq!(restored.executive_summary, original.executive_summary);
        assert_eq!(restored.key_findings, original.key_findings);
        assert_eq!(restored.metadata.generated_at, original.metadata.generated_at);
        assert_eq!(restored.metadata.source_hash, original.metadata.source_hash);

        let values = |m: &StoryManifest| -> Vec<String> {
            m.top_kpis.iter().map(|k| k.value.clone()).collect()
        };
        assert_eq!(values(&restored), values(original));
        for (a, b) in restored.top_kpis.iter().zip(&original.top_kpis) {
            assert_eq!(a.label, b.label);
            assert_eq!(a.kind, b.kind);
            assert!((a.score - b.score).abs() < 1e-12);
        }
        for (a, b) in restored.sections.iter().zip(&original.sections) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.subtitle, b.subtitle);
            assert_eq!(a.narrative, b.narrative);
            assert_eq!(a.insight_ids, b.insight_ids);
            assert_eq!(a.charts, b.charts);
        }
    }
}

#[test]
fn write_failure_keeps_the_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let manifest = StoryBuilder::new()
        .execute(&golden("single_insight"), "AOV", None, NarrativeMode::Technical)
        .unwrap();
    let err = write_manifest(&manifest, &blocker).unwrap_err();

    assert!(matches!(err, SerializationError::WriteFailed { .. }));
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    assert_eq!(err.manifest().map(|m| m.id.as_str()), Some(manifest.id.as_str()));
    assert_eq!(err.into_manifest(), Some(manifest));
}

#[test]
fn file_names_fall_back_for_unsluggable_projects() {
    let mut manifest = StoryBuilder::new()
        .execute(&golden("single_insight"), "???", None, NarrativeMode::Analyst)
        .unwrap();
    assert_eq!(manifest_file_name(&manifest), "story.analyst.story.json");
    manifest.project_name = "North / South Review".into();
    assert_eq!(manifest_file_name(&manifest), "north-south-review.analyst.story.json");
}

#[test]
fn malformed_document_is_an_adapter_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, br#"{"rows": []}"#).unwrap();
    let err = load_insights(&path).unwrap_err();
    assert_eq!(err.error_code(), "ADAPTER_ERROR");
    assert!(err.to_string().contains("malformed"));
}
