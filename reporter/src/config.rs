use crate::source::{FileSource, LogSource, UrlSource};

pub static DEFAULT_LOG_URL: &str = "https://gist.githubusercontent.com/cloudwalk-tests/be1b636e58abff14088c8b5309f575d8/raw/df6ef4a9c0b326ce3760233ef24ae8bfa8e33940/qgames.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, clap::Parser)]
#[command(version, about = "Kill report per match of a Quake 3 Arena server log")]
pub struct Args {
    /// Where to download the log from
    #[arg(long, env = "QUAKE_LOG_URL", default_value = DEFAULT_LOG_URL)]
    pub url: String,

    /// Read a local log file instead of downloading one, takes precedence over --url
    #[arg(long)]
    pub file: Option<std::path::PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// More log output on stderr, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn source(&self) -> Box<dyn LogSource> {
        match self.file.as_ref() {
            Some(path) => Box::new(FileSource::new(path.clone())),
            None => Box::new(UrlSource::new(self.url.clone())),
        }
    }

    pub fn level_filter(&self) -> tracing::level_filters::LevelFilter {
        use tracing::level_filters::LevelFilter;

        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
