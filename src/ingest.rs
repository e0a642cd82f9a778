use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};

use crate::error::PerformanceError;
use crate::models::{Semester, Subject, SubmissionInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub semester: Semester,
    pub input: SubmissionInput,
}

#[derive(Debug, Clone, Copy)]
enum Column {
    Semester,
    Attendance,
    Assignments,
    Participation,
    Score(Subject),
}

fn classify(header: &str) -> Result<Column, PerformanceError> {
    match header.trim().to_ascii_lowercase().as_str() {
        "semester" => Ok(Column::Semester),
        "attendance" => Ok(Column::Attendance),
        "assignments" => Ok(Column::Assignments),
        "participation" => Ok(Column::Participation),
        _ => header.parse().map(Column::Score),
    }
}

pub fn load_submissions(csv_path: &Path) -> anyhow::Result<Vec<Submission>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    read_submissions(file).with_context(|| format!("invalid submissions in {}", csv_path.display()))
}

/// Reads one submission per CSV row. Blank cells are left unset.
pub fn read_submissions<R: Read>(source: R) -> anyhow::Result<Vec<Submission>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);
    let columns = reader
        .headers()?
        .iter()
        .map(classify)
        .collect::<Result<Vec<_>, _>>()?;

    let Some(semester_index) = columns.iter().position(|c| matches!(c, Column::Semester)) else {
        bail!("missing `semester` column");
    };

    let mut submissions = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let row = index + 2;

        let raw_semester = record.get(semester_index).unwrap_or_default();
        let semester_number: u8 = raw_semester
            .parse()
            .with_context(|| format!("row {row}: invalid semester `{raw_semester}`"))?;
        let semester = Semester::new(semester_number).with_context(|| format!("row {row}"))?;

        let mut input = SubmissionInput::new();
        for (column, value) in columns.iter().zip(record.iter()) {
            if value.is_empty() || matches!(column, Column::Semester) {
                continue;
            }
            let value: u32 = value
                .parse()
                .with_context(|| format!("row {row}: invalid number `{value}`"))?;

            let applied = match *column {
                Column::Attendance => input.set_attendance(value),
                Column::Assignments => input.set_assignments(value),
                Column::Participation => input.set_participation(value),
                Column::Score(subject) if !semester.teaches(subject) => {
                    Err(PerformanceError::SubjectNotInSemester {
                        subject,
                        semester: semester.number(),
                    })
                }
                Column::Score(subject) => input.set_score(subject, value),
                Column::Semester => Ok(()),
            };
            applied.with_context(|| format!("row {row}"))?;
        }

        submissions.push(Submission { semester, input });
    }

    Ok(submissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
semester,attendance,assignments,participation,C Programming,Differential Equations,Fundamentals of IT,Descriptive Statistics,General English 1,Value Education,Python
1,80,8,8,20,40,40,40,40,40,
3,90,9,,,,,,,,55
";

    #[test]
    fn reads_rows_with_blank_cells() {
        let submissions = read_submissions(SAMPLE.as_bytes()).unwrap();
        assert_eq!(submissions.len(), 2);

        let first = &submissions[0];
        assert_eq!(first.semester.number(), 1);
        assert_eq!(first.input.score(Subject::CProgramming), Some(20));
        assert_eq!(first.input.attendance(), 80);
        assert_eq!(first.input.participation(), 8);

        let second = &submissions[1];
        assert_eq!(second.semester.number(), 3);
        assert_eq!(second.input.score(Subject::Python), Some(55));
        assert_eq!(second.input.score(Subject::CProgramming), None);
        assert_eq!(second.input.participation(), 0);
    }

    #[test]
    fn rejects_unknown_subject_header() {
        let err = read_submissions("semester,Alchemy\n1,40\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("unknown subject: Alchemy"));
    }

    #[test]
    fn rejects_subject_from_another_semester() {
        let err = read_submissions("semester,Java\n1,40\n".as_bytes()).unwrap_err();
        let root = err.root_cause().to_string();
        assert_eq!(root, "Java is not taught in semester 1");
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let err = read_submissions("semester,Python\n3,75\n".as_bytes()).unwrap_err();
        assert!(err.root_cause().to_string().contains("outside 0..=60"));
    }

    #[test]
    fn rejects_unknown_semester() {
        let err = read_submissions("semester\n8\n".as_bytes()).unwrap_err();
        assert!(err.root_cause().to_string().contains("unknown semester 8"));
    }

    #[test]
    fn requires_semester_column() {
        let err = read_submissions("Python\n40\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("missing `semester` column"));
    }
}
