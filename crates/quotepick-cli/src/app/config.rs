use anyhow::bail;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration for the `quotepick` binary.
///
/// All values are parsed from CLI arguments or environment variables (a `.env`
/// file is honored too), with defaults that print a single built-in quote.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "quotepick",
    version,
    about = "Pick random quotes (or lines of a file) and print them"
)]
pub struct CliArgs {
    /// Number of picks to make before exiting.
    ///
    /// Environment variable: `QUOTEPICK_COUNT`
    #[arg(short = 'n', long, env = "QUOTEPICK_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Milliseconds between picks.
    ///
    /// When unset, picks are made back to back. When set, the first pick
    /// happens immediately and each following pick waits for the next tick;
    /// Ctrl+C or SIGTERM stops early.
    ///
    /// Environment variable: `QUOTEPICK_INTERVAL_MS`
    #[arg(long, env = "QUOTEPICK_INTERVAL_MS")]
    pub interval_ms: Option<u64>,

    /// Seed for reproducible picks.
    ///
    /// The same seed over the same items always prints the same sequence.
    /// Without a seed, the thread-local RNG is used.
    ///
    /// Environment variable: `QUOTEPICK_SEED`
    #[arg(long, env = "QUOTEPICK_SEED")]
    pub seed: Option<u64>,

    /// Read items from this file, one per line, instead of the built-in
    /// quotes. Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// Environment variable: `QUOTEPICK_FILE`
    #[arg(short, long, env = "QUOTEPICK_FILE")]
    pub file: Option<PathBuf>,

    /// Output format for each pick.
    ///
    /// Environment variable: `QUOTEPICK_FORMAT`
    #[arg(long, env = "QUOTEPICK_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The picked item, one per line.
    Text,
    /// One `{"item":...,"index":...}` object per line.
    Json,
}

/// Where items come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSource {
    Builtin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct PickerConfig {
    pub count: usize,
    pub interval: Option<Duration>,
    pub seed: Option<u64>,
    pub items: ItemSource,
    pub format: OutputFormat,
}

impl TryFrom<CliArgs> for PickerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("QUOTEPICK_COUNT must be greater than 0");
        }

        let interval = match args.interval_ms {
            Some(0) => bail!("QUOTEPICK_INTERVAL_MS must be greater than 0 when set"),
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        };

        let items = args.file.map_or(ItemSource::Builtin, ItemSource::File);

        Ok(Self {
            count: args.count,
            interval,
            seed: args.seed,
            items,
            format: args.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("quotepick").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_pick_one_builtin_quote() {
        let config = PickerConfig::try_from(parse(&[])).unwrap();
        assert_eq!(config.count, 1);
        assert_eq!(config.interval, None);
        assert_eq!(config.seed, None);
        assert_eq!(config.items, ItemSource::Builtin);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn parses_all_flags() {
        let args = parse(&[
            "-n",
            "5",
            "--interval-ms",
            "250",
            "--seed",
            "7",
            "--file",
            "items.txt",
            "--format",
            "json",
        ]);
        let config = PickerConfig::try_from(args).unwrap();
        assert_eq!(config.count, 5);
        assert_eq!(config.interval, Some(Duration::from_millis(250)));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.items, ItemSource::File(PathBuf::from("items.txt")));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_zero_count() {
        let err = PickerConfig::try_from(parse(&["--count", "0"])).unwrap_err();
        assert!(err.to_string().contains("QUOTEPICK_COUNT"));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = PickerConfig::try_from(parse(&["--interval-ms", "0"])).unwrap_err();
        assert!(err.to_string().contains("QUOTEPICK_INTERVAL_MS"));
    }

    #[test]
    fn rejects_unknown_format() {
        let res = CliArgs::try_parse_from(["quotepick", "--format", "yaml"]);
        assert!(res.is_err());
    }
}
