use tracing::{debug, info};

use crate::error::PerformanceError;
use crate::models::{InputField, ScoringResult, Semester, SubjectOutcome, SubmissionInput};

/// A subject scoring below this fails; exactly this mark passes.
pub const PASS_MARK: u32 = 30;

pub fn score(semester: Semester, input: &SubmissionInput) -> ScoringResult {
    let subjects = semester.subjects();
    let subject_max = InputField::Subject.max();

    for extra in input.subjects().filter(|subject| !semester.teaches(*subject)) {
        debug!(%semester, subject = %extra, "ignoring score for subject outside semester");
    }

    let outcomes: Vec<SubjectOutcome> = subjects
        .iter()
        .map(|&subject| {
            let score = input.score(subject).unwrap_or_else(|| {
                debug!(%semester, %subject, "no score entered, counting as 0");
                InputField::DEFAULT_VALUE
            });
            SubjectOutcome {
                subject,
                score,
                failed: score < PASS_MARK,
            }
        })
        .collect();

    let failed_subjects: Vec<_> = outcomes
        .iter()
        .filter(|outcome| outcome.failed)
        .map(|outcome| outcome.subject)
        .collect();
    let total: u32 = outcomes.iter().map(|outcome| outcome.score).sum();
    let subject_count = subjects.len() as u32;
    let max_possible = subject_max * subject_count;

    let result = ScoringResult {
        semester,
        total,
        max_possible,
        average: total as f64 / subject_count as f64,
        percentage: 100.0 * total as f64 / max_possible as f64,
        passed: failed_subjects.is_empty(),
        failed_subjects,
        outcomes,
        attendance: input.attendance(),
        assignments: input.assignments(),
        participation: input.participation(),
    };

    info!(
        %semester,
        total = result.total,
        max = result.max_possible,
        passed = result.passed,
        failed = result.failed_subjects.len(),
        "scored submission"
    );
    result
}

/// Scores a submission for a raw semester number.
pub fn score_semester(
    semester: u8,
    input: &SubmissionInput,
) -> Result<ScoringResult, PerformanceError> {
    Ok(score(Semester::new(semester)?, input))
}
