use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::models::{RecommendationBundle, ResourceCategory, ScoringResult, Status, SummaryRow};
use crate::recommend::{self, ResourceStore};
use crate::session::SessionStore;

/// Terminal rendering of one scored submission and its recommendations.
pub fn render_analysis(result: &ScoringResult, bundle: &RecommendationBundle) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Semester {} Performance Analysis", result.semester);
    let _ = writeln!(output, "Total Marks:   {}/{}", result.total, result.max_possible);
    let _ = writeln!(output, "Average Score: {:.1}/60", result.average);
    let _ = writeln!(output, "Performance:   {:.1}%", result.percentage);
    let _ = writeln!(output);

    match result.status() {
        Status::Pass => {
            let _ = writeln!(output, "Status: {}! All the best!", Status::Pass.analysis_label());
        }
        Status::NeedsImprovement => {
            let _ = writeln!(output, "Status: {}", Status::NeedsImprovement.analysis_label());
            let _ = writeln!(output, "Subjects Requiring Attention:");
            for outcome in result.outcomes.iter().filter(|outcome| outcome.failed) {
                let _ = writeln!(output, "- {} (Score: {}/60)", outcome.subject, outcome.score);
            }
        }
    }

    write_bundle(&mut output, bundle, "");
    output
}

fn write_bundle(output: &mut String, bundle: &RecommendationBundle, heading_prefix: &str) {
    if !bundle.books.is_empty() {
        write_heading(output, heading_prefix, ResourceCategory::Books);
        for entry in &bundle.books {
            let _ = writeln!(output, "- {}: {}", entry.subject, entry.book);
        }
    }

    if !bundle.topics.is_empty() {
        write_heading(output, heading_prefix, ResourceCategory::Topics);
        for entry in &bundle.topics {
            let _ = writeln!(output, "- {}:", entry.subject);
            for topic in &entry.topics {
                let _ = writeln!(output, "  - {topic}");
            }
        }
    }

    for (category, files) in [
        (ResourceCategory::Papers, &bundle.papers),
        (ResourceCategory::Syllabus, &bundle.syllabi),
    ] {
        if files.is_empty() {
            continue;
        }
        write_heading(output, heading_prefix, category);
        for file in files {
            let _ = writeln!(
                output,
                "- {}: {} ({} bytes)",
                file.subject, file.download_name, file.size
            );
        }
    }

    if !bundle.unavailable.is_empty() {
        let _ = writeln!(output);
        for missing in &bundle.unavailable {
            let _ = writeln!(output, "warning: {missing}");
        }
    }
}

fn write_heading(output: &mut String, prefix: &str, category: ResourceCategory) {
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "{prefix}{} [{}]",
        category.heading(),
        category.display_key()
    );
}

/// Cross-semester table; the best percentage is starred.
pub fn render_summary(rows: &[SummaryRow]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Overall Performance Summary");

    if rows.is_empty() {
        let _ = writeln!(
            output,
            "No semester data available yet. Please submit data for at least one semester."
        );
        return output;
    }

    let _ = writeln!(
        output,
        "{:<9} {:<12} {:<11} {}",
        "Semester", "Total Marks", "Percentage", "Status"
    );
    for row in rows {
        let percentage = format!("{:.1}%{}", row.percentage, if row.best { "*" } else { "" });
        let _ = writeln!(
            output,
            "{:<9} {:<12} {:<11} {}",
            row.semester.number(),
            row.marks(),
            percentage,
            row.status.summary_label()
        );
    }
    output
}

/// Markdown report of a whole session, including the recommendations for
/// every semester that still needs improvement.
pub fn build_report(
    session: &SessionStore,
    store: &dyn ResourceStore,
    generated_at: DateTime<Utc>,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Student Performance Report");
    let _ = writeln!(
        output,
        "Session {} started {}, generated {}",
        session.id(),
        session.started_at().format("%Y-%m-%d %H:%M UTC"),
        generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Overall Performance Summary");

    if session.is_empty() {
        let _ = writeln!(output, "No semester data submitted in this session.");
        return output;
    }

    let rows = session.summary();
    let _ = writeln!(output, "| Semester | Total Marks | Percentage | Status |");
    let _ = writeln!(output, "|---|---|---|---|");
    for row in &rows {
        let percentage = if row.best {
            format!("**{:.1}%**", row.percentage)
        } else {
            format!("{:.1}%", row.percentage)
        };
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} |",
            row.semester,
            row.marks(),
            percentage,
            row.status.summary_label()
        );
    }

    for row in rows.iter().filter(|row| row.status == Status::NeedsImprovement) {
        let Some(result) = session.get(row.semester) else {
            continue;
        };
        let _ = writeln!(output);
        let _ = writeln!(output, "## Semester {} Needs Improvement", result.semester);
        for outcome in result.outcomes.iter().filter(|outcome| outcome.failed) {
            let _ = writeln!(output, "- {} (Score: {}/60)", outcome.subject, outcome.score);
        }
        let bundle = recommend::recommend(&result.failed_subjects, store);
        write_bundle(&mut output, &bundle, "### ");
    }

    output
}
