//! Reading `KEY=value` dictionary files.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, error, info, warn};

use super::SlangDictionary;

/// Counters collected while reading a dictionary source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub loaded: usize,
    pub skipped: usize,
}

/// Split a line on its first `=` into a trimmed `(key, value)` pair.
///
/// Returns `None` for lines without a delimiter or with an empty key.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

fn read_entries<R: BufRead>(
    reader: R,
    dict: &mut SlangDictionary,
    stats: &mut LoadStats,
) -> io::Result<()> {
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some((key, value)) => {
                dict.insert(key, value);
                stats.loaded += 1;
            }
            None => {
                debug!("Skipping malformed dictionary line {}: {:?}", line_no + 1, line);
                stats.skipped += 1;
            }
        }
    }
    Ok(())
}

impl SlangDictionary {
    /// Load a dictionary file.
    ///
    /// Never fails: a missing file yields an empty dictionary, and a read
    /// error keeps whatever was parsed before it.
    pub fn load(path: &Path) -> SlangDictionary {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Slang file not found at {}", path.display());
                return SlangDictionary::new();
            }
            Err(e) => {
                error!("Failed to open slang file {}: {}", path.display(), e);
                return SlangDictionary::new();
            }
        };

        let (dict, stats) = Self::from_reader(BufReader::new(file), &path.display().to_string());
        info!(
            "Loaded {} slang entries from {} ({} lines skipped)",
            dict.len(),
            path.display(),
            stats.skipped
        );
        dict
    }

    /// Parse in-memory dictionary text with the same rules as [`SlangDictionary::load`].
    pub fn parse(content: &str) -> SlangDictionary {
        Self::from_reader(content.as_bytes(), "<memory>").0
    }

    /// Read entries until end of input or the first I/O error.
    pub fn from_reader<R: BufRead>(reader: R, source: &str) -> (SlangDictionary, LoadStats) {
        let mut dict = SlangDictionary::new();
        let mut stats = LoadStats::default();

        if let Err(e) = read_entries(reader, &mut dict, &mut stats) {
            error!(
                "Error reading slang dictionary from {} after {} entries: {}",
                source, stats.loaded, e
            );
        }

        (dict, stats)
    }
}
