use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PerformanceError;

macro_rules! subjects {
    ($($variant:ident => $name:literal,)+) => {
        /// A course taught in exactly one semester of the curriculum.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum Subject {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl Subject {
            pub const ALL: &'static [Subject] = &[$(Subject::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(Subject::$variant => $name,)+
                }
            }
        }
    };
}

subjects! {
    CProgramming => "C Programming",
    DifferentialEquations => "Differential Equations",
    FundamentalsOfIt => "Fundamentals of IT",
    DescriptiveStatistics => "Descriptive Statistics",
    GeneralEnglish1 => "General English 1",
    ValueEducation => "Value Education",
    DsThroughC => "DS through C",
    ProbabilityDistributions => "Probability Distributions",
    AbstractAlgebra => "Abstract Algebra",
    OperatingSystems => "Operating Systems",
    GeneralEnglish2 => "General English 2",
    IndianHeritageAndCulture => "Indian Heritage And Culture",
    DatabaseManagementSystems => "Database Management Systems",
    ComputerOrganizations => "Computer Organizations",
    Python => "Python",
    StatisticalMethods => "Statistical Methods",
    EnvironmentalStudies => "Environmental Studies",
    Java => "Java",
    StatisticalInference => "Statistical Inference",
    ComputerNetworks => "Computer Networks",
    RProgramming => "R Programming",
    DataWarehousing => "Data Warehousing",
    AccountingAndFinancialManagement => "Accounting And Financial Management",
    ArtificialIntelligence => "Artificial Intelligence",
    MachineLearning => "Machine Learning",
    AppliedStatistics => "Applied Statistics",
    SoftwareEngineering => "Software Engineering",
    OperationsResearch => "Operations Research",
    DataVisualizationTools => "Data Visualization Tools",
    DataSecurity => "Data Security",
    BigDataAnalytics => "Big Data Analytics",
    SoftwareTesting => "Software Testing",
    CloudComputing => "Cloud Computing",
    MarketingDataAnalytics => "Marketing Data Analytics",
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subject {
    type Err = PerformanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Subject::ALL
            .iter()
            .copied()
            .find(|subject| subject.name() == wanted)
            .ok_or_else(|| PerformanceError::UnknownSubject(wanted.to_string()))
    }
}

/// Semester number, validated to 1..=6 on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Semester(u8);

impl Semester {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 6;

    pub fn new(number: u8) -> Result<Self, PerformanceError> {
        if (Self::FIRST..=Self::LAST).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PerformanceError::UnknownSemester(number))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Semester> {
        (Self::FIRST..=Self::LAST).map(Semester)
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The bounded numeric fields a submission form exposes. Every field is an
/// integer defaulting to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Subject,
    Attendance,
    Assignments,
    Participation,
}

impl InputField {
    pub const DEFAULT_VALUE: u32 = 0;

    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            InputField::Subject => 0..=60,
            InputField::Attendance => 0..=100,
            InputField::Assignments | InputField::Participation => 0..=10,
        }
    }

    pub fn max(self) -> u32 {
        *self.range().end()
    }

    pub fn label(self) -> &'static str {
        match self {
            InputField::Subject => "Subject",
            InputField::Attendance => "Attendance",
            InputField::Assignments => "Assignments",
            InputField::Participation => "Participation",
        }
    }

    fn check_labelled(self, value: u32) -> Result<u32, PerformanceError> {
        self.check(self.label(), value)
    }

    fn check(self, name: &str, value: u32) -> Result<u32, PerformanceError> {
        let range = self.range();
        if range.contains(&value) {
            Ok(value)
        } else {
            Err(PerformanceError::OutOfRange {
                field: name.to_string(),
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}

/// One form submission for a single semester.
///
/// Subjects left unset score 0 when the submission is scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionInput {
    scores: BTreeMap<Subject, u32>,
    attendance: u32,
    assignments: u32,
    participation: u32,
}

impl SubmissionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_score(&mut self, subject: Subject, value: u32) -> Result<(), PerformanceError> {
        let value = InputField::Subject.check(subject.name(), value)?;
        self.scores.insert(subject, value);
        Ok(())
    }

    pub fn score(&self, subject: Subject) -> Option<u32> {
        self.scores.get(&subject).copied()
    }

    pub fn subjects(&self) -> impl Iterator<Item = Subject> + '_ {
        self.scores.keys().copied()
    }

    pub fn set_attendance(&mut self, value: u32) -> Result<(), PerformanceError> {
        self.attendance = InputField::Attendance.check_labelled(value)?;
        Ok(())
    }

    pub fn set_assignments(&mut self, value: u32) -> Result<(), PerformanceError> {
        self.assignments = InputField::Assignments.check_labelled(value)?;
        Ok(())
    }

    pub fn set_participation(&mut self, value: u32) -> Result<(), PerformanceError> {
        self.participation = InputField::Participation.check_labelled(value)?;
        Ok(())
    }

    pub fn attendance(&self) -> u32 {
        self.attendance
    }

    pub fn assignments(&self) -> u32 {
        self.assignments
    }

    pub fn participation(&self) -> u32 {
        self.participation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Pass,
    NeedsImprovement,
}

impl Status {
    /// Label used by the cross-semester summary table.
    pub fn summary_label(self) -> &'static str {
        match self {
            Status::Pass => "Pass",
            Status::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Label used by the single-submission analysis.
    pub fn analysis_label(self) -> &'static str {
        match self {
            Status::Pass => "Passed",
            Status::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectOutcome {
    pub subject: Subject,
    pub score: u32,
    pub failed: bool,
}

/// Result of scoring one submission.
///
/// Attendance, assignments and participation are carried for display only;
/// they take no part in the pass/fail decision or the percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub semester: Semester,
    pub outcomes: Vec<SubjectOutcome>,
    pub total: u32,
    pub max_possible: u32,
    pub average: f64,
    pub percentage: f64,
    pub passed: bool,
    pub failed_subjects: Vec<Subject>,
    pub attendance: u32,
    pub assignments: u32,
    pub participation: u32,
}

impl ScoringResult {
    pub fn status(&self) -> Status {
        if self.passed {
            Status::Pass
        } else {
            Status::NeedsImprovement
        }
    }
}

/// One line of the cross-semester summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub semester: Semester,
    pub total: u32,
    pub max_possible: u32,
    pub percentage: f64,
    pub status: Status,
    pub best: bool,
}

impl SummaryRow {
    pub fn marks(&self) -> String {
        format!("{}/{}", self.total, self.max_possible)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Paper,
    Syllabus,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Paper => "Previous papers",
            ResourceKind::Syllabus => "Syllabus",
        }
    }

    /// File name offered to the user when the resource is downloaded.
    pub fn download_name(self, subject: Subject) -> String {
        match self {
            ResourceKind::Paper => format!("{}_Previous_Papers.pdf", subject.name()),
            ResourceKind::Syllabus => format!("{}_Syllabus.pdf", subject.name()),
        }
    }
}

/// The four recommendation groups, each with the illustration key the
/// presentation layer may show next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceCategory {
    Books,
    Topics,
    Papers,
    Syllabus,
}

impl ResourceCategory {
    pub fn display_key(self) -> &'static str {
        match self {
            ResourceCategory::Books => "books",
            ResourceCategory::Topics => "bulb",
            ResourceCategory::Papers => "question_papers",
            ResourceCategory::Syllabus => "syllabus",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            ResourceCategory::Books => "Recommended Books",
            ResourceCategory::Topics => "Important Topics to Focus On",
            ResourceCategory::Papers => "Previous Question Papers",
            ResourceCategory::Syllabus => "Subject Syllabus",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecommendation {
    pub subject: Subject,
    pub book: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicRecommendation {
    pub subject: Subject,
    pub topics: Vec<&'static str>,
}

/// A reference file that was present in the store when the bundle was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceFile {
    pub subject: Subject,
    pub kind: ResourceKind,
    pub file_name: String,
    pub download_name: String,
    pub size: usize,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Soft marker for a reference file that could not be provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unavailable {
    pub subject: Subject,
    pub kind: ResourceKind,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} not available for {}", self.kind.label(), self.subject)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationBundle {
    pub books: Vec<BookRecommendation>,
    pub topics: Vec<TopicRecommendation>,
    pub papers: Vec<ResourceFile>,
    pub syllabi: Vec<ResourceFile>,
    pub unavailable: Vec<Unavailable>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_names_round_trip_through_from_str() {
        for subject in Subject::ALL {
            assert_eq!(subject.name().parse::<Subject>(), Ok(*subject));
        }
        assert_eq!(Subject::ALL.len(), 34);
    }

    #[test]
    fn unknown_subject_is_rejected() {
        assert_eq!(
            "Astrology".parse::<Subject>(),
            Err(PerformanceError::UnknownSubject("Astrology".to_string()))
        );
    }

    #[test]
    fn semester_bounds_are_enforced() {
        assert!(Semester::new(1).is_ok());
        assert!(Semester::new(6).is_ok());
        assert_eq!(Semester::new(0), Err(PerformanceError::UnknownSemester(0)));
        assert_eq!(Semester::new(7), Err(PerformanceError::UnknownSemester(7)));
        assert_eq!(Semester::all().count(), 6);
    }

    #[test]
    fn input_ranges_match_form_limits() {
        assert_eq!(InputField::Subject.range(), 0..=60);
        assert_eq!(InputField::Attendance.range(), 0..=100);
        assert_eq!(InputField::Assignments.range(), 0..=10);
        assert_eq!(InputField::Participation.range(), 0..=10);
    }

    #[test]
    fn submission_rejects_out_of_range_values() {
        let mut input = SubmissionInput::new();
        assert!(input.set_score(Subject::Java, 60).is_ok());
        assert_eq!(
            input.set_score(Subject::Java, 61),
            Err(PerformanceError::OutOfRange {
                field: "Java".to_string(),
                value: 61,
                min: 0,
                max: 60,
            })
        );
        assert_eq!(input.score(Subject::Java), Some(60));
        assert_eq!(
            input.set_attendance(101),
            Err(PerformanceError::OutOfRange {
                field: "Attendance".to_string(),
                value: 101,
                min: 0,
                max: 100,
            })
        );
        assert!(input.set_assignments(11).is_err());
        assert!(input.set_participation(10).is_ok());
    }

    #[test]
    fn subjects_serialize_by_display_name() {
        let json = serde_json::to_string(&Subject::GeneralEnglish1).unwrap();
        assert_eq!(json, "\"General English 1\"");
    }

    #[test]
    fn download_names_follow_resource_kind() {
        assert_eq!(
            ResourceKind::Paper.download_name(Subject::CProgramming),
            "C Programming_Previous_Papers.pdf"
        );
        assert_eq!(
            ResourceKind::Syllabus.download_name(Subject::Python),
            "Python_Syllabus.pdf"
        );
    }
}
