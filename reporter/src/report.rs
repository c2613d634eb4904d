use common::match_report::{rank_by_value_desc, MatchReport};

const SEPARATOR: &str = "---------------------------------------";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report")]
    Json(#[from] serde_json::Error),
}

/// Numbers the matches starting at 1 and ranks scores and causes of death.
pub fn build_reports(records: &[analysis::MatchRecord]) -> Vec<MatchReport> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| MatchReport {
            number: idx + 1,
            total_kills: record.total_kills,
            scores: rank_by_value_desc(&record.player_scores),
            causes_of_death: rank_by_value_desc(&record.cause_of_death),
        })
        .collect()
}

pub struct TextReport<'r>(pub &'r [MatchReport]);

impl std::fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Matches kill report:")?;
        writeln!(f, "{SEPARATOR}")?;

        for report in self.0 {
            writeln!(f, "Match {}:", report.number)?;
            writeln!(f, "Total Kills: {}", report.total_kills)?;
            writeln!(f, "Scores:")?;
            for entry in report.scores.iter() {
                writeln!(f, "- {}: {}", entry.name, entry.value)?;
            }
            writeln!(f, "Cause of Death:")?;
            for entry in report.causes_of_death.iter() {
                writeln!(f, "- {}: {}", entry.name, entry.value)?;
            }
            writeln!(f, "{SEPARATOR}")?;
        }

        Ok(())
    }
}

pub fn render_text(reports: &[MatchReport]) -> String {
    TextReport(reports).to_string()
}

pub fn render_json(reports: &[MatchReport]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(reports)?)
}
