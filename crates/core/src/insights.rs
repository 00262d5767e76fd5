//! Simulated upload analysis.
//!
//! No media is ever inspected: the "analysis" is a deterministic lookup
//! into the insight tables keyed by the selected focus area, dressed up
//! with the upload metadata. It must stay exactly that.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::insight::ProVideo;
use crate::domain::training::Exercise;
use crate::errors::DomainError;

/// Name and size of the uploaded file; the content is never read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDescriptor {
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub focus_area: String,
    pub upload: UploadDescriptor,
    pub analyzed_at: DateTime<Utc>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// Recommended drills, resolved against the exercise library.
    pub drills: Vec<Exercise>,
    pub pro_videos: Vec<ProVideo>,
}

/// Look up the feedback for a focus area.
///
/// An unrecognized focus area is an error; a drill id without a matching
/// exercise is skipped without failing the whole report.
pub fn analyze_upload(
    catalog: &Catalog,
    focus_area: &str,
    upload: &UploadDescriptor,
) -> Result<AnalysisReport, DomainError> {
    let insight = catalog
        .insight(focus_area)
        .ok_or_else(|| DomainError::UnknownFocusArea(focus_area.to_owned()))?;

    let mut drills = Vec::with_capacity(insight.drills.len());
    for drill_id in &insight.drills {
        match catalog.find_exercise(drill_id) {
            Some(exercise) => drills.push(exercise.clone()),
            None => debug!(
                event_name = "analysis.drill_skipped",
                drill_id = %drill_id.0,
                "drill id has no exercise in the library"
            ),
        }
    }

    Ok(AnalysisReport {
        focus_area: insight.focus_area.clone(),
        upload: upload.clone(),
        analyzed_at: Utc::now(),
        strengths: insight.strengths.clone(),
        improvements: insight.improvements.clone(),
        drills,
        pro_videos: catalog.pro_videos(focus_area).into_iter().cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::domain::insight::InsightEntry;
    use crate::domain::training::{
        Exercise, ExerciseId, ExerciseLevel, Intensity, MediaKind, MediaRef,
    };
    use crate::errors::DomainError;

    use super::{analyze_upload, UploadDescriptor};

    fn upload() -> UploadDescriptor {
        UploadDescriptor { file_name: "rally.mp4".to_owned(), size_bytes: 4_200_000 }
    }

    #[test]
    fn unknown_focus_area_is_a_not_found_error() {
        let catalog = Catalog::builtin();
        let result = analyze_upload(&catalog, "smash", &upload());
        assert_eq!(result, Err(DomainError::UnknownFocusArea("smash".to_owned())));
    }

    #[test]
    fn report_carries_upload_metadata_insights_and_videos() {
        let catalog = Catalog::builtin();
        let report = analyze_upload(&catalog, "topspin", &upload()).expect("known focus area");

        assert_eq!(report.focus_area, "topspin");
        assert_eq!(report.upload.file_name, "rally.mp4");
        assert!(!report.strengths.is_empty());
        assert!(!report.improvements.is_empty());
        assert!(!report.drills.is_empty());
        assert!(!report.pro_videos.is_empty());
        assert!(report.pro_videos.iter().all(|video| video.focus_area == "topspin"));
    }

    #[test]
    fn dangling_drill_ids_are_skipped_silently() {
        let exercise = Exercise {
            id: ExerciseId("ex-real".to_owned()),
            title: "Real drill".to_owned(),
            category: "Technique".to_owned(),
            level: ExerciseLevel::All,
            goals: vec!["Topspin".to_owned()],
            intensity: Intensity::Moderate,
            duration_min: 30,
            description: String::new(),
            media: MediaRef { title: "clip".to_owned(), kind: MediaKind::Video },
        };
        let entry = InsightEntry {
            focus_area: "topspin".to_owned(),
            strengths: vec!["solid base".to_owned()],
            improvements: vec!["more legs".to_owned()],
            drills: vec![ExerciseId("ex-real".to_owned()), ExerciseId("ex-gone".to_owned())],
        };
        let catalog = Catalog::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            vec![exercise],
            vec![entry],
            Vec::new(),
        );

        let report = analyze_upload(&catalog, "topspin", &upload()).expect("known focus area");
        let drill_ids: Vec<_> = report.drills.iter().map(|drill| drill.id.0.as_str()).collect();
        assert_eq!(drill_ids, ["ex-real"]);
    }
}
