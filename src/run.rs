//! The line-processing loop behind the `urlfp` binary.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::core::fingerprint::fingerprint;
use crate::error::UrlError;
use crate::types::{KeySpace, Url};
use crate::url::{is_private, segmentize, Parser};

/// Counts of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read from the input
    pub lines: usize,
    /// Lines that parsed into a canonical URL
    pub parsed: usize,
    /// Lines rejected as malformed
    pub rejected: usize,
}

/// Process every line of `reader`, writing one output row per line.
pub fn run<R: BufRead, W: Write>(config: &Config, reader: R, out: &mut W) -> Result<Summary> {
    let parser = Parser::new().suppress_transcoding(config.no_idna);
    let kinds = config.kind.kinds();
    let space = KeySpace::from(config.space);
    let mut summary = Summary::default();

    for result in parser.stream(reader) {
        match result {
            Ok(mut url) => {
                summary.lines += 1;
                summary.parsed += 1;
                apply_mutators(config, &mut url);

                let mut row = vec![url.to_string()];
                for kind in &kinds {
                    row.push(fingerprint(&url, *kind, space).unwrap_or_else(|_| "-".to_string()));
                }
                if config.segments {
                    let segments = segmentize(&url);
                    row.push(or_dash(segments.apex));
                    row.push(or_dash(segments.labels.join(".")));
                }
                if config.private {
                    row.push(is_private(&url).to_string());
                }
                writeln!(out, "{}", row.join("\t")).context("Failed to write output")?;
            }
            Err(UrlError::MalformedInput(raw)) => {
                summary.lines += 1;
                summary.rejected += 1;
                writeln!(out, "-\t{}", raw).context("Failed to write output")?;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read input after {} lines", summary.lines));
            }
        }
    }

    log::info!(
        "processed {} line{} ({} parsed, {} rejected)",
        summary.lines,
        if summary.lines == 1 { "" } else { "s" },
        summary.parsed,
        summary.rejected
    );

    Ok(summary)
}

fn apply_mutators(config: &Config, url: &mut Url) {
    if config.no_www {
        url.no_www();
    }
    if config.no_port {
        url.no_port();
    }
    if config.no_label {
        url.no_label();
    }
}

fn or_dash(s: String) -> String {
    if s.is_empty() {
        "-".to_string()
    } else {
        s
    }
}
