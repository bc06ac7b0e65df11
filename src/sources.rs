//! Loading of source lists (one URL per line).

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error};

/// Append every non-empty, trimmed line of `path` to `sources`.
///
/// A missing file leaves `sources` untouched. A file that exists but cannot
/// be opened or read is logged, and whatever was collected up to the failure
/// is returned. Lines are not validated as URLs, and `#` has no special
/// meaning here.
pub fn read_sources(path: &Path, mut sources: Vec<String>) -> Vec<String> {
    if !path.exists() {
        debug!("Sources file {:?} not found, skipping", path);
        return sources;
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            error!("Error opening file {:?}: {}", path, e);
            return sources;
        }
    };

    // Lines are raw bytes: a non-UTF-8 byte is replaced, not a read failure
    for line in BufReader::new(file).split(b'\n') {
        match line {
            Ok(line) => {
                let line = String::from_utf8_lossy(&line);
                let source = line.trim();
                if !source.is_empty() {
                    sources.push(source.to_string());
                }
            }
            Err(e) => {
                error!("Error scanning file {:?}: {}", path, e);
                break;
            }
        }
    }

    debug!("Loaded {} sources from {:?}", sources.len(), path);
    sources
}
