use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod curriculum;
mod error;
mod ingest;
mod models;
mod recommend;
mod report;
mod scoring;
mod session;

use models::{InputField, ResourceKind, Semester, Subject, SubmissionInput};
use recommend::FsResourceStore;
use session::SessionStore;

#[derive(Parser)]
#[command(name = "performance-tracker")]
#[command(about = "Semester score tracking with remediation recommendations", long_about = None)]
struct Cli {
    /// Root of the reference files (previous_papers/ and syllabus/)
    #[arg(
        long,
        global = true,
        env = "PERFORMANCE_RESOURCES_DIR",
        default_value = "static/data"
    )]
    resources_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the subjects of one or every semester
    Subjects {
        #[arg(long)]
        semester: Option<u8>,
    },
    /// Score one semester submission and recommend material for failed subjects
    Score {
        #[arg(long)]
        semester: u8,
        /// Subject score as "Subject=value", repeatable
        #[arg(long = "mark", value_parser = parse_mark)]
        marks: Vec<(Subject, u32)>,
        #[arg(long, default_value_t = 0)]
        attendance: u32,
        #[arg(long, default_value_t = 0)]
        assignments: u32,
        #[arg(long, default_value_t = 0)]
        participation: u32,
        /// Print the result and bundle as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay a CSV of submissions through one session and print the summary
    Session {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Replay a CSV of submissions and write a markdown report
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Save a previous paper or syllabus for a subject
    Fetch {
        #[arg(long)]
        subject: Subject,
        #[arg(long, value_enum)]
        kind: ResourceKind,
        /// Output path, defaults to the download file name
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn parse_mark(raw: &str) -> Result<(Subject, u32), String> {
    let (name, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected Subject=value, got `{raw}`"))?;
    let subject = name.parse::<Subject>().map_err(|err| err.to_string())?;
    let value = value
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid score `{value}`: {err}"))?;
    Ok((subject, value))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(concat!(env!("CARGO_CRATE_NAME"), "=info"))),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = FsResourceStore::new(&cli.resources_dir);

    match cli.command {
        Commands::Subjects { semester } => {
            let numbers: Vec<u8> = match semester {
                Some(number) => vec![number],
                None => Semester::all().map(Semester::number).collect(),
            };
            for number in numbers {
                let subjects = curriculum::subjects_for(number)?;
                println!("Semester {number}:");
                for subject in subjects {
                    println!("- {subject} (Max {})", InputField::Subject.max());
                }
            }
            for field in [
                InputField::Attendance,
                InputField::Assignments,
                InputField::Participation,
            ] {
                println!("{} (Max {})", field.label(), field.max());
            }
            println!("All fields default to {}.", InputField::DEFAULT_VALUE);
        }
        Commands::Score {
            semester,
            marks,
            attendance,
            assignments,
            participation,
            json,
        } => {
            let subjects = curriculum::subjects_for(semester)?;
            let mut input = SubmissionInput::new();
            for (subject, value) in marks {
                if !subjects.contains(&subject) {
                    return Err(
                        error::PerformanceError::SubjectNotInSemester { subject, semester }.into(),
                    );
                }
                input.set_score(subject, value)?;
            }
            input.set_attendance(attendance)?;
            input.set_assignments(assignments)?;
            input.set_participation(participation)?;

            let result = scoring::score_semester(semester, &input)?;
            let bundle = recommend::recommend(&result.failed_subjects, &store);

            if json {
                let payload = serde_json::json!({
                    "result": result,
                    "recommendations": bundle,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                print!("{}", report::render_analysis(&result, &bundle));
            }
        }
        Commands::Session { csv } => {
            let mut session = replay(&csv)?;
            print!("{}", report::render_summary(&session.summary()));
            session.clear();
        }
        Commands::Report { csv, out } => {
            let mut session = replay(&csv)?;
            let report = report::build_report(&session, &store, chrono::Utc::now());
            session.clear();
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Fetch { subject, kind, out } => {
            match recommend::fetch_resource(&store, subject, kind) {
                Some(file) => {
                    let out = out.unwrap_or_else(|| PathBuf::from(&file.download_name));
                    std::fs::write(&out, &file.bytes)
                        .with_context(|| format!("failed to write {}", out.display()))?;
                    println!("Saved {} ({} bytes) to {}.", file.file_name, file.size, out.display());
                }
                None => {
                    println!("{} not available for {subject}.", kind.label());
                }
            }
        }
    }

    Ok(())
}

fn replay(csv: &std::path::Path) -> anyhow::Result<SessionStore> {
    let submissions = ingest::load_submissions(csv)?;
    let mut session = SessionStore::new();
    for submission in &submissions {
        session.submit(submission.semester, &submission.input);
    }
    println!(
        "Replayed {} submissions from {} covering {} semesters.",
        submissions.len(),
        csv.display(),
        session.len()
    );
    Ok(session)
}
