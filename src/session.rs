use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::models::{ScoringResult, Semester, SubmissionInput, SummaryRow};
use crate::scoring;

/// Results submitted during one session, at most one per semester.
///
/// Owned by the caller: created when a session starts and dropped or
/// [`clear`](SessionStore::clear)ed when it ends.
#[derive(Debug, Clone)]
pub struct SessionStore {
    id: Uuid,
    started_at: DateTime<Utc>,
    results: BTreeMap<Semester, ScoringResult>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let store = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            results: BTreeMap::new(),
        };
        info!(session = %store.id, "session started");
        store
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Scores `input` and stores the result, replacing any earlier
    /// submission for the same semester.
    pub fn submit(&mut self, semester: Semester, input: &SubmissionInput) -> &ScoringResult {
        let result = scoring::score(semester, input);
        self.append_or_replace(result);
        &self.results[&semester]
    }

    /// Returns the result this one replaced, if any.
    pub fn append_or_replace(&mut self, result: ScoringResult) -> Option<ScoringResult> {
        let semester = result.semester;
        let previous = self.results.insert(semester, result);
        info!(
            session = %self.id,
            %semester,
            replaced = previous.is_some(),
            "stored semester result"
        );
        previous
    }

    pub fn get(&self, semester: Semester) -> Option<&ScoringResult> {
        self.results.get(&semester)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Every semester sharing the highest percentage, in semester order.
    pub fn best_semesters(&self) -> Vec<Semester> {
        let Some(top) = self
            .results
            .values()
            .map(|result| result.percentage)
            .max_by(f64::total_cmp)
        else {
            return Vec::new();
        };
        self.results
            .values()
            .filter(|result| result.percentage == top)
            .map(|result| result.semester)
            .collect()
    }

    /// Summary rows ordered by semester number.
    pub fn summary(&self) -> Vec<SummaryRow> {
        let best = self.best_semesters();
        self.results
            .values()
            .map(|result| SummaryRow {
                semester: result.semester,
                total: result.total,
                max_possible: result.max_possible,
                percentage: result.percentage,
                status: result.status(),
                best: best.contains(&result.semester),
            })
            .collect()
    }

    pub fn clear(&mut self) {
        info!(session = %self.id, semesters = self.results.len(), "session cleared");
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Status, Subject};

    fn semester(number: u8) -> Semester {
        Semester::new(number).unwrap()
    }

    fn uniform_input(semester: Semester, value: u32) -> SubmissionInput {
        let mut input = SubmissionInput::new();
        for subject in semester.subjects() {
            input.set_score(*subject, value).unwrap();
        }
        input
    }

    #[test]
    fn summary_is_ordered_by_semester_not_submission() {
        let mut session = SessionStore::new();
        session.submit(semester(3), &uniform_input(semester(3), 40));
        session.submit(semester(1), &uniform_input(semester(1), 30));

        let rows = session.summary();
        let order: Vec<u8> = rows.iter().map(|row| row.semester.number()).collect();
        assert_eq!(order, vec![1, 3]);
        assert_eq!(rows[0].marks(), "180/360");
        assert_eq!(rows[1].marks(), "200/300");
    }

    #[test]
    fn resubmission_replaces_previous_result() {
        let mut session = SessionStore::new();
        session.submit(semester(2), &uniform_input(semester(2), 10));
        let first = session.get(semester(2)).unwrap().clone();
        assert_eq!(first.status(), Status::NeedsImprovement);

        let replaced = session.append_or_replace(scoring::score(
            semester(2),
            &uniform_input(semester(2), 50),
        ));
        assert_eq!(replaced, Some(first));
        assert_eq!(session.len(), 1);
        assert_eq!(session.get(semester(2)).unwrap().status(), Status::Pass);
        assert_eq!(session.summary()[0].total, 300);
    }

    #[test]
    fn best_semester_is_marked() {
        let mut session = SessionStore::new();
        session.submit(semester(1), &uniform_input(semester(1), 45));
        session.submit(semester(4), &uniform_input(semester(4), 55));
        session.submit(semester(6), &uniform_input(semester(6), 50));

        assert_eq!(session.best_semesters(), vec![semester(4)]);
        let marked: Vec<bool> = session.summary().iter().map(|row| row.best).collect();
        assert_eq!(marked, vec![false, true, false]);
    }

    #[test]
    fn every_row_tied_for_top_percentage_is_marked() {
        let mut session = SessionStore::new();
        session.submit(semester(1), &uniform_input(semester(1), 45));
        session.submit(semester(4), &uniform_input(semester(4), 55));
        session.submit(semester(6), &uniform_input(semester(6), 55));

        assert_eq!(session.best_semesters(), vec![semester(4), semester(6)]);
        let marked: Vec<bool> = session.summary().iter().map(|row| row.best).collect();
        assert_eq!(marked, vec![false, true, true]);
    }

    #[test]
    fn status_reflects_failed_subjects() {
        let mut session = SessionStore::new();
        let mut input = uniform_input(semester(5), 50);
        input.set_score(Subject::MachineLearning, 12).unwrap();
        let result = session.submit(semester(5), &input);
        assert!(!result.passed);
        assert_eq!(session.summary()[0].status, Status::NeedsImprovement);
    }

    #[test]
    fn clear_empties_the_session() {
        let mut session = SessionStore::new();
        session.submit(semester(1), &SubmissionInput::new());
        assert!(!session.is_empty());
        session.clear();
        assert!(session.is_empty());
        assert!(session.summary().is_empty());
        assert!(session.best_semesters().is_empty());
    }
}
