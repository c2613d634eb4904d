pub mod config;
pub mod report;
pub mod source;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Source(#[from] source::SourceError),
    #[error(transparent)]
    Report(#[from] report::ReportError),
}

/// The error followed by all of its sources, joined with `: `.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

/// Loads the configured log, parses it and renders the report in the
/// requested format.
#[tracing::instrument(skip(args), fields(format = ?args.format))]
pub async fn run(args: &config::Args) -> Result<String, RunError> {
    let source = args.source();

    tracing::info!(source = %source.describe(), "Loading log");
    let content = source.load().await?;
    tracing::info!(bytes = content.len(), "Loaded log");

    let records = analysis::parse_str(&content);
    tracing::info!(matches = records.len(), "Parsed log");

    let reports = report::build_reports(&records);

    match args.format {
        config::OutputFormat::Text => Ok(report::render_text(&reports)),
        config::OutputFormat::Json => Ok(report::render_json(&reports)?),
    }
}
