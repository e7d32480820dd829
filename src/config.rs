use std::ffi::OsString;
use std::path::PathBuf;

use chrono::DateTime;
use chrono::TimeZone;
use color_eyre::eyre::bail;

/// Environment variable holding the [`tracing_subscriber::EnvFilter`] directives.
pub const LOG_ENV_VAR: &str = "SHOP_REPORTS_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

const USAGE: &str = "usage: shop-reports [SOURCE_DIR] [OUTPUT_DIR] [LOG_DIR]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where `products.csv`, `customers.csv` and `orders.csv` live.
    pub source_dir: PathBuf,
    /// Where reports are written.
    pub output_dir: PathBuf,
    /// Where the run log file is written, the output dir unless told otherwise.
    pub log_dir: PathBuf,
}

impl Config {
    /// Builds the [`Config`] from the program arguments, program name excluded.
    /// Source and output directories default to the current one, the log directory to the output one.
    ///
    /// # Errors
    ///
    /// Returns an error if more than three arguments are supplied.
    pub fn from_args<I>(args: I) -> color_eyre::Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let source_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);
        let output_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);
        let log_dir = args.next().map_or_else(|| output_dir.clone(), PathBuf::from);
        if let Some(unexpected) = args.next() {
            bail!("unexpected argument={unexpected:?}, {USAGE}");
        }
        Ok(Self {
            source_dir,
            output_dir,
            log_dir,
        })
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// One log file per run, named after the run start time, e.g. `automation-20240131-235959.log`.
    pub fn log_path<Tz>(&self, started_at: &DateTime<Tz>) -> PathBuf
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.log_dir
            .join(format!("automation-{}.log", started_at.format("%Y%m%d-%H%M%S")))
    }
}
