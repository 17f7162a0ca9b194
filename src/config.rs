//! Command-line configuration and logger setup for the `urlfp` binary.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::LevelFilter;

use crate::types::{FingerprintKind, KeySpace};

/// Logging level for the binary.
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Which fingerprint columns to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Apex,
    Host,
    Full,
    FullNoPage,
    /// All four kinds, in apex/host/full/full-no-page order
    All,
}

impl KindArg {
    /// The kinds selected, in column order.
    pub fn kinds(&self) -> Vec<FingerprintKind> {
        match self {
            KindArg::Apex => vec![FingerprintKind::Apex],
            KindArg::Host => vec![FingerprintKind::Host],
            KindArg::Full => vec![FingerprintKind::Full],
            KindArg::FullNoPage => vec![FingerprintKind::FullNoPage],
            KindArg::All => FingerprintKind::ALL.to_vec(),
        }
    }
}

/// Key space of the printed fingerprints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SpaceArg {
    /// xxh64, 16 hex characters
    Fast64,
    /// SHA-256, 64 hex characters
    Digest256,
}

impl From<SpaceArg> for KeySpace {
    fn from(s: SpaceArg) -> Self {
        match s {
            SpaceArg::Fast64 => KeySpace::Fast64,
            SpaceArg::Digest256 => KeySpace::Digest256,
        }
    }
}

/// Canonicalize and fingerprint URLs, one per input line.
///
/// Output is tab separated: the canonical URL followed by the requested
/// columns. Rejected lines are printed as `-` followed by the raw input.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "urlfp", version, about)]
pub struct Config {
    /// File to read URLs from; stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Fingerprint kind(s) to print
    #[arg(long, value_enum, default_value_t = KindArg::All)]
    pub kind: KindArg,

    /// Key space of the fingerprints
    #[arg(long, value_enum, default_value_t = SpaceArg::Fast64)]
    pub space: SpaceArg,

    /// Do not transcode Unicode domains to punycode
    #[arg(long)]
    pub no_idna: bool,

    /// Drop a leading "www." label before keying
    #[arg(long)]
    pub no_www: bool,

    /// Drop the port before keying
    #[arg(long)]
    pub no_port: bool,

    /// Reduce the host to its registrable domain before keying
    #[arg(long)]
    pub no_label: bool,

    /// Also print the apex and the labels in front of it
    #[arg(long)]
    pub segments: bool,

    /// Also print whether the host is a private IP address
    #[arg(long)]
    pub private: bool,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Config {
    /// Input file, or `None` for stdin.
    pub fn input(&self) -> Option<&Path> {
        self.file.as_deref().filter(|path| *path != Path::new("-"))
    }
}

/// Initialize `env_logger`.
///
/// `RUST_LOG` is read first; `level` overrides it for this crate so
/// `--log-level` always wins. Safe to call more than once.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_module("urlfp", level);
    builder.try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["urlfp"]).unwrap();
        assert_eq!(config.file, None);
        assert_eq!(config.kind, KindArg::All);
        assert_eq!(config.space, SpaceArg::Fast64);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(!config.no_idna && !config.no_www && !config.segments);
        assert_eq!(config.input(), None);
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "urlfp",
            "urls.txt",
            "--kind",
            "full-no-page",
            "--space",
            "digest256",
            "--no-idna",
            "--no-www",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.input(), Some(Path::new("urls.txt")));
        assert_eq!(config.kind.kinds(), vec![FingerprintKind::FullNoPage]);
        assert_eq!(KeySpace::from(config.space), KeySpace::Digest256);
        assert!(config.no_idna);
        assert!(config.no_www);
        assert_eq!(LevelFilter::from(config.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_dash_means_stdin() {
        let config = Config::try_parse_from(["urlfp", "-"]).unwrap();
        assert_eq!(config.input(), None);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(Config::try_parse_from(["urlfp", "--kind", "page"]).is_err());
    }

    #[test]
    fn test_init_logger_twice() {
        let _ = init_logger(LevelFilter::Info);
        // Second initialization reports an error instead of panicking
        assert!(init_logger(LevelFilter::Info).is_err());
    }
}
