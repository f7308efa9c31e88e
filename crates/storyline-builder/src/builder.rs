//! StoryBuilder: runs the pipeline and assembles manifests.

use chrono::Utc;
use rayon::prelude::*;
use storyline_core::config::StoryConfig;
use storyline_core::constants::{GENERATOR, VERSION};
use storyline_core::errors::{ExtractionWarning, StoryResult};
use storyline_core::models::{ManifestMetadata, NarrativeMode, RawInsight, StoryManifest};
use storyline_core::traits::{IConceptExtractor, IParadoxDetector};
use storyline_extraction::{adapt_insights, extract_kpis_with_report, extract_thesis, KeywordParadoxDetector};
use storyline_narrative::NarrativeSynthesizer;
use storyline_observability::tracing_setup::events;
use storyline_observability::{build_span, render_span};
use storyline_sections::{group_sections, KeywordConceptExtractor};
use tracing::{debug, info};
use uuid::Uuid;

use crate::intermediate::{source_hash, BuildReport, StoryIntermediate};

/// The story pipeline.
///
/// Holds configuration and the two replaceable heuristics. A builder is
/// immutable once constructed and can be shared across threads.
pub struct StoryBuilder {
    config: StoryConfig,
    paradox_detector: Box<dyn IParadoxDetector>,
    concept_extractor: Box<dyn IConceptExtractor>,
    synthesizer: NarrativeSynthesizer,
}

impl StoryBuilder {
    /// Builder with compiled defaults and the keyword heuristics.
    pub fn new() -> Self {
        Self::from_valid_config(StoryConfig::default())
    }

    /// Builder with a caller-supplied configuration. Rejects invalid values.
    pub fn with_config(config: StoryConfig) -> StoryResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: StoryConfig) -> Self {
        Self {
            paradox_detector: Box::new(KeywordParadoxDetector::new()),
            concept_extractor: Box::new(KeywordConceptExtractor::new(config.grouping.min_concept_len)),
            synthesizer: NarrativeSynthesizer::new(config.narrative.clone()),
            config,
        }
    }

    /// Replace the paradox detector.
    pub fn with_paradox_detector(mut self, detector: Box<dyn IParadoxDetector>) -> Self {
        self.paradox_detector = detector;
        self
    }

    /// Replace the concept extractor used for section grouping.
    pub fn with_concept_extractor(mut self, extractor: Box<dyn IConceptExtractor>) -> Self {
        self.concept_extractor = extractor;
        self
    }

    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// Run every mode-independent stage once.
    ///
    /// Fails only when the adapter cannot produce a single insight.
    pub fn prepare(
        &self,
        records: &[RawInsight],
        project_name: &str,
        objective: Option<&str>,
    ) -> StoryResult<StoryIntermediate> {
        let span = build_span!(project_name, records.len());
        let _guard = span.enter();

        let adapted = adapt_insights(records, &self.config.adapter)?;
        for record in &adapted.skipped {
            events::insight_skipped(record);
        }

        let thesis = extract_thesis(
            &adapted.insights,
            self.paradox_detector.as_ref(),
            &self.config.thesis,
        );
        debug!(
            frame = thesis.frame.as_str(),
            detector = self.paradox_detector.name(),
            "thesis extracted"
        );

        let top_limit = self.config.kpi.top_limit(adapted.insights.len());
        let (top_kpis, kpi_warnings) =
            extract_kpis_with_report(&adapted.insights, top_limit, &self.config.kpi);

        let grouping = group_sections(&adapted.insights, self.concept_extractor.as_ref(), &self.config);

        let mut warnings: Vec<ExtractionWarning> = adapted
            .skipped
            .iter()
            .map(|record| ExtractionWarning::SkippedRecord {
                index: record.index,
                reason: record.reason.clone(),
            })
            .collect();
        let recovered = warnings.len();
        warnings.extend(adapted.warnings);
        warnings.extend(kpi_warnings);
        warnings.extend(grouping.warnings);
        for warning in &warnings[recovered..] {
            events::extraction_warning(warning);
        }

        events::build_completed(
            adapted.insights.len(),
            adapted.skipped.len(),
            grouping.sections.len(),
            top_kpis.len(),
        );

        Ok(StoryIntermediate {
            project_name: project_name.to_string(),
            objective: objective.map(str::to_string),
            source_hash: source_hash(&adapted.insights),
            source_count: adapted.source_count,
            insights: adapted.insights,
            thesis,
            top_kpis,
            sections: grouping.sections,
            report: BuildReport {
                skipped: adapted.skipped,
                warnings,
            },
        })
    }

    /// Render one mode from a prepared intermediate.
    pub fn render(&self, intermediate: &StoryIntermediate, mode: NarrativeMode) -> StoryManifest {
        let span = render_span!(mode);
        let _guard = span.enter();

        let narration = self.synthesizer.narrate(
            &intermediate.thesis,
            &intermediate.top_kpis,
            &intermediate.sections,
            &intermediate.insights,
            mode,
        );

        StoryManifest {
            id: format!("story-{}", Uuid::new_v4()),
            project_name: intermediate.project_name.clone(),
            thesis: intermediate.thesis.clone(),
            top_kpis: intermediate.top_kpis.clone(),
            sections: narration.sections,
            narrative_mode: mode,
            executive_summary: narration.executive_summary,
            key_findings: narration.key_findings,
            metadata: ManifestMetadata {
                generated_at: Utc::now(),
                source_insight_count: intermediate.source_count,
                skipped_insight_count: intermediate.report.skipped.len(),
                skipped_records: intermediate.report.skipped.clone(),
                objective: intermediate.objective.clone(),
                source_hash: intermediate.source_hash.clone(),
                generator: GENERATOR.to_string(),
                generator_version: VERSION.to_string(),
            },
        }
    }

    /// Build one manifest.
    pub fn execute(
        &self,
        records: &[RawInsight],
        project_name: &str,
        objective: Option<&str>,
        mode: NarrativeMode,
    ) -> StoryResult<StoryManifest> {
        let intermediate = self.prepare(records, project_name, objective)?;
        Ok(self.render(&intermediate, mode))
    }

    /// Build one manifest in the configured default mode.
    pub fn execute_default(
        &self,
        records: &[RawInsight],
        project_name: &str,
        objective: Option<&str>,
    ) -> StoryResult<StoryManifest> {
        self.execute(records, project_name, objective, self.config.narrative.default_mode)
    }

    /// Build manifests for `modes`, in the order given, sharing one intermediate.
    pub fn execute_modes(
        &self,
        records: &[RawInsight],
        project_name: &str,
        objective: Option<&str>,
        modes: &[NarrativeMode],
    ) -> StoryResult<Vec<StoryManifest>> {
        let intermediate = self.prepare(records, project_name, objective)?;
        let manifests: Vec<StoryManifest> = modes
            .par_iter()
            .map(|&mode| self.render(&intermediate, mode))
            .collect();

        info!(
            project = %project_name,
            modes = manifests.len(),
            "multi-mode build complete"
        );
        Ok(manifests)
    }

    /// Build executive, analyst and technical manifests.
    pub fn execute_all_modes(
        &self,
        records: &[RawInsight],
        project_name: &str,
        objective: Option<&str>,
    ) -> StoryResult<Vec<StoryManifest>> {
        self.execute_modes(records, project_name, objective, &NarrativeMode::ALL)
    }
}

impl Default for StoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
