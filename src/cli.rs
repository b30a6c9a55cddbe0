use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use lucky_clock::clock::{ClockMode, ClockTime};
use lucky_clock::report::{check_all_times, check_time, reasons_listing, table_listing, Summary};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Lucky clock - classify clock times by digit patterns
#[derive(Parser, Debug)]
#[command(name = "lucky-clock")]
#[command(about = "Classify clock times as lucky or unlucky by digit-pattern rules")]
#[command(version)]
pub struct CliArgs {
    /// Single time to check, e.g. 9:18; every time on the clock when omitted
    pub time: Option<String>,

    /// Enumerate a 24-hour clock instead of a 12-hour one
    #[arg(long)]
    pub twenty_four_hour: bool,

    /// Print the tab-separated per-rule table instead of the listing
    #[arg(long)]
    pub table: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub time: Option<ClockTime>,
    pub mode: ClockMode,
    pub table: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    // Validate the positional time up front
    let time = match args.time.as_deref() {
        Some(text) => Some(text.parse::<ClockTime>().context("Invalid time")?),
        None => None,
    };

    let mode = if args.twenty_four_hour {
        ClockMode::TwentyFourHour
    } else {
        ClockMode::TwelveHour
    };

    Ok(CliConfig {
        time,
        mode,
        table: args.table,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    if let Some(time) = config.time {
        let row = check_time(time);
        print!("{}", reasons_listing(&[row]));
        return Ok(());
    }

    info!(
        "Classifying every time on a {}-hour clock",
        config.mode.max_hour()
    );

    let rows = check_all_times(config.mode);
    if config.table {
        print!("{}", table_listing(&rows));
    } else {
        print!("{}", reasons_listing(&rows));
        println!();
        print!("{}", Summary::tally(&rows));
    }
    Ok(())
}
