//! Polarity lexicon
//!
//! Maps lowercase tokens to a base valence (roughly -4.0..=4.0). The file
//! format is the VADER lexicon layout, one entry per line:
//!
//! ```text
//! token<TAB>mean_valence[<TAB>std_dev<TAB>raw_ratings]
//! ```
//!
//! Only the first two columns are read. A copy is embedded in the binary
//! so the scorer works without any data files; `Lexicon::load` swaps in a
//! full lexicon from disk. Either way the table is built once and shared
//! read-only behind an `Arc`.

pub mod rules;

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Lexicon shipped inside the binary
const BUNDLED_LEXICON: &str = include_str!("../../data/vader_lexicon.txt");

/// Name reported in errors and logs for the embedded copy
const BUNDLED_SOURCE: &str = "<bundled>";

/// Name reported for lexicons built with `from_entries`
const MEMORY_SOURCE: &str = "<memory>";

/// Valences are means of ratings on a -4..=4 scale
pub const MAX_VALENCE: f64 = 4.0;

fn is_valid_valence(valence: f64) -> bool {
    valence.is_finite() && valence.abs() <= MAX_VALENCE
}

/// Errors raised while loading a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed lexicon entry at {source_name}:{line}: expected `token<TAB>valence`")]
    Malformed { source_name: String, line: usize },

    #[error("Invalid valence '{value}' for '{token}' at {source_name}:{line}")]
    InvalidValence {
        source_name: String,
        line: usize,
        token: String,
        value: String,
    },

    #[error("Lexicon {source_name} contains no entries")]
    Empty { source_name: String },
}

/// Immutable token → valence table
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: FxHashMap<String, f64>,
    source: String,
}

impl Lexicon {
    /// Parse the lexicon embedded at build time
    pub fn bundled() -> Result<Self, LexiconError> {
        Self::parse(BUNDLED_SOURCE, BUNDLED_LEXICON)
    }

    /// Load a lexicon file from disk.
    ///
    /// The file is read in a single call so the handle never outlives
    /// this function, on success or failure.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse(&path.display().to_string(), &content)?;
        info!(
            "Loaded {} lexicon entries from {}",
            lexicon.len(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Load from `path` when given, otherwise fall back to the bundled copy
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, LexiconError> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let lexicon = Self::bundled()?;
                debug!("Using bundled lexicon ({} entries)", lexicon.len());
                Ok(lexicon)
            }
        }
    }

    /// Build a lexicon directly from (token, valence) pairs. Valences
    /// outside [-4, 4] are rejected just as they are in files.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut table = FxHashMap::default();
        for (idx, (token, valence)) in entries.into_iter().enumerate() {
            let token = token.as_ref();
            if !is_valid_valence(valence) {
                return Err(LexiconError::InvalidValence {
                    source_name: MEMORY_SOURCE.to_string(),
                    line: idx + 1,
                    token: token.to_string(),
                    value: valence.to_string(),
                });
            }
            table.insert(token.to_lowercase(), valence);
        }
        Ok(Self {
            entries: table,
            source: MEMORY_SOURCE.to_string(),
        })
    }

    /// Parse lexicon text. `source_name` only labels errors.
    pub fn parse(source_name: &str, content: &str) -> Result<Self, LexiconError> {
        let mut entries = FxHashMap::default();

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let mut columns = raw.split('\t');
            let (Some(token), Some(value)) = (columns.next(), columns.next()) else {
                return Err(LexiconError::Malformed {
                    source_name: source_name.to_string(),
                    line: line_no,
                });
            };

            let token = token.trim();
            if token.is_empty() {
                return Err(LexiconError::Malformed {
                    source_name: source_name.to_string(),
                    line: line_no,
                });
            }

            let valence: f64 = value
                .trim()
                .parse()
                .ok()
                .filter(|v: &f64| is_valid_valence(*v))
                .ok_or_else(|| LexiconError::InvalidValence {
                    source_name: source_name.to_string(),
                    line: line_no,
                    token: token.to_string(),
                    value: value.trim().to_string(),
                })?;

            entries.insert(token.to_lowercase(), valence);
        }

        if entries.is_empty() {
            return Err(LexiconError::Empty {
                source_name: source_name.to_string(),
            });
        }

        Ok(Self {
            entries,
            source: source_name.to_string(),
        })
    }

    /// Valence of an already-lowercased token
    pub fn get(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where the entries came from (file path, `<bundled>`, or `<memory>`)
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bundled_lexicon_parses() {
        let lexicon = Lexicon::bundled().expect("bundled lexicon");
        assert!(lexicon.len() > 100);
        assert!(lexicon.get("good").unwrap() > 0.0);
        assert!(lexicon.get("terrible").unwrap() < 0.0);
        assert_eq!(lexicon.source(), "<bundled>");
    }

    #[test]
    fn test_bundled_lexicon_excludes_modifiers() {
        // Boosters and negations only work as modifiers when absent from the table
        let lexicon = Lexicon::bundled().unwrap();
        for word in ["very", "absolutely", "slightly", "not", "never", "but"] {
            assert!(!lexicon.contains(word), "{word} should not carry valence");
        }
    }

    #[test]
    fn test_parse_ignores_extra_columns_and_blank_lines() {
        let content = "good\t1.9\t0.9434\t[2, 1, 1, 3, 2, 4, 2, 2, 1, 1]\n\nbad\t-2.5\t0.67082\n";
        let lexicon = Lexicon::parse("test", content).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("good"), Some(1.9));
        assert_eq!(lexicon.get("bad"), Some(-2.5));
    }

    #[test]
    fn test_parse_lowercases_tokens() {
        let lexicon = Lexicon::parse("test", ":D\t2.3\nWOW\t2.8\n").unwrap();
        assert_eq!(lexicon.get(":d"), Some(2.3));
        assert_eq!(lexicon.get("wow"), Some(2.8));
        assert!(lexicon.get("WOW").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_valence() {
        let err = Lexicon::parse("test", "good\t1.9\nbroken-line\n").unwrap_err();
        match err {
            LexiconError::Malformed { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_number() {
        let err = Lexicon::parse("test", "good\tlots\n").unwrap_err();
        assert!(matches!(err, LexiconError::InvalidValence { ref token, .. } if token == "good"));
        assert!(err.to_string().contains("lots"));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(Lexicon::parse("test", "good\tNaN\n").is_err());
        assert!(Lexicon::parse("test", "good\tinf\n").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let err = Lexicon::parse("test", "good\t1.9\nhuge\t1e308\n").unwrap_err();
        match err {
            LexiconError::InvalidValence { line, ref token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "huge");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(Lexicon::parse("test", "bad\t-4.5\n").is_err());
        // The scale's end points are still valid
        let lexicon = Lexicon::parse("test", "best\t4.0\nworst\t-4\n").unwrap();
        assert_eq!(lexicon.get("worst"), Some(-4.0));
    }

    #[test]
    fn test_load_rejects_out_of_range_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "good\t1e308").unwrap();
        let err = Lexicon::load(file.path()).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidValence { .. }));
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = Lexicon::parse("test", "\n\n").unwrap_err();
        assert!(matches!(err, LexiconError::Empty { .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = Lexicon::load(&path).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "splendid\t2.8").unwrap();
        writeln!(file, "dreadful\t-1.9").unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("dreadful"), Some(-1.9));
        assert!(lexicon.source().ends_with(&*file.path().file_name().unwrap().to_string_lossy()));
    }

    #[test]
    fn test_load_or_bundled_falls_back() {
        let lexicon = Lexicon::load_or_bundled(None).unwrap();
        assert_eq!(lexicon.source(), "<bundled>");
    }

    #[test]
    fn test_from_entries() {
        let lexicon = Lexicon::from_entries([("Nice", 1.8), ("meh", -0.3)]).unwrap();
        assert_eq!(lexicon.get("nice"), Some(1.8));
        assert_eq!(lexicon.len(), 2);
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.source(), "<memory>");
    }

    #[test]
    fn test_from_entries_rejects_out_of_range() {
        let err = Lexicon::from_entries([("fine", 1.0), ("boom", f64::MAX)]).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidValence { line: 2, .. }));
        assert!(Lexicon::from_entries([("nan", f64::NAN)]).is_err());
    }
}
