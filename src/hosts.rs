//! Hosts file assembly and inspection.
//!
//! A generated hosts file has three parts, in order:
//!
//! ```text
//! <prior content of the input file, or PRIOR_PLACEHOLDER>
//!
//! # Ad blocking hosts generated 2026-10-16T09:30:00+02:00
//! # Don't write below this line. It will be lost if you run hostblock again.
//!
//! 0.0.0.0 ads.example.com
//! 0.0.0.0 bad.example.com
//! ```
//!
//! The prior content is copied verbatim, including any block generated by an
//! earlier run, so running `update` twice against the same file leaves two
//! generated blocks. [`strip_generated_block`] undoes this.

use chrono::{Local, SecondsFormat};
use std::path::Path;
use tracing::{debug, warn};

use crate::fs_abstraction::FileSystem;

/// Written in place of the prior content when the input file cannot be read
pub const PRIOR_PLACEHOLDER: &str = "# Original user hosts not found or couldn't be read\n";

/// Start of the first line of every generated block
pub const GENERATED_HEADER_PREFIX: &str = "# Ad blocking hosts generated ";

/// Second line of every generated block
pub const GENERATED_WARNING: &str =
    "# Don't write below this line. It will be lost if you run hostblock again.";

/// Read the prior hosts content from `input_path` and append a freshly
/// generated block for `blacklist`.
///
/// The whitelist is accepted but not applied: every blacklisted domain is
/// written, even when it also appears in the whitelist.
pub fn build_final_hosts(
    fs: &dyn FileSystem,
    input_path: &Path,
    sentinel: &str,
    blacklist: &[String],
    _whitelist: &[String],
) -> String {
    let prior = match fs.read_to_string(input_path) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!("Could not read hosts file {:?}: {}", input_path, e);
            None
        }
    };

    let generated_at = Local::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    render_hosts(prior.as_deref(), &generated_at, sentinel, blacklist)
}

/// Assemble the final hosts content from its parts.
pub fn render_hosts(
    prior: Option<&str>,
    generated_at: &str,
    sentinel: &str,
    blacklist: &[String],
) -> String {
    let prior = prior.unwrap_or(PRIOR_PLACEHOLDER);

    let mut hosts = String::with_capacity(
        prior.len() + 160 + blacklist.iter().map(|d| d.len() + sentinel.len() + 2).sum::<usize>(),
    );
    hosts.push_str(prior);

    hosts.push('\n');
    hosts.push_str(GENERATED_HEADER_PREFIX);
    hosts.push_str(generated_at);
    hosts.push('\n');
    hosts.push_str(GENERATED_WARNING);
    hosts.push_str("\n\n");

    for domain in blacklist {
        hosts.push_str(sentinel);
        hosts.push(' ');
        hosts.push_str(domain);
        hosts.push('\n');
    }

    debug!("Rendered {} block entries", blacklist.len());
    hosts
}

/// Count lines starting with `sentinel`.
///
/// This is a plain prefix match over the whole content, so sentinel lines in
/// the prior content are counted too.
pub fn count_blocked(content: &str, sentinel: &str) -> usize {
    content
        .split('\n')
        .filter(|line| line.starts_with(sentinel))
        .count()
}

/// Index of the first line opening a generated block.
pub fn find_generated_header(content: &str) -> Option<usize> {
    content
        .split('\n')
        .position(|line| line.starts_with(GENERATED_HEADER_PREFIX))
}

/// Number of generated blocks present in `content`.
pub fn count_generated_blocks(content: &str) -> usize {
    content
        .split('\n')
        .filter(|line| line.starts_with(GENERATED_HEADER_PREFIX))
        .count()
}

/// Drop everything from the first generated block onwards, together with the
/// blank separator line the builder put in front of it.
///
/// Returns `None` when `content` holds no generated block.
pub fn strip_generated_block(content: &str) -> Option<String> {
    let header = find_generated_header(content)?;

    let mut kept: Vec<&str> = content.split('\n').take(header).collect();
    if kept.last() == Some(&"") {
        kept.pop();
    }

    if kept.is_empty() {
        return Some(String::new());
    }
    let mut stripped = kept.join("\n");
    stripped.push('\n');
    Some(stripped)
}
