//! Dictionary-word field types: `words` and `word`.
//!
//! Words are drawn from a line-addressable dictionary file. The file
//! path is re-resolved on every generation call; resolution is
//! deliberately lazy so a schema that never reaches a `words` field
//! compiles without a dictionary present.

use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::registry::{Config, GenContext, Registry, Value};

const DEFAULT_MIN_WORDS: usize = 2;
const DEFAULT_MAX_WORDS: usize = 5;

const SYSTEM_WORD_FILES: &[&str] = &["/usr/share/dict/words", "/usr/dict/words"];

pub(crate) fn register(registry: &mut Registry) {
    registry.register_generator("words", words_field);
    registry.register_arg_parser("words", words_arg);
    registry.register_generator("word", word_field);
}

/// A line-addressable word file: count lines, fetch line k (1-based).
/// Each operation opens and reads the file in its own pass; no handle
/// is held across row boundaries.
pub struct WordSource {
    path: PathBuf,
}

impl WordSource {
    /// Locate a dictionary: `./words` in the working directory, then
    /// the standard system paths.
    pub fn locate() -> Result<Self> {
        let mut candidates = vec![PathBuf::from("words")];
        candidates.extend(SYSTEM_WORD_FILES.iter().map(PathBuf::from));
        Self::locate_among(&candidates)
    }

    fn locate_among(candidates: &[PathBuf]) -> Result<Self> {
        candidates
            .iter()
            .find(|path| path.exists())
            .map(|path| Self { path: path.clone() })
            .ok_or(Error::NoWordSource)
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line_count(&self) -> Result<usize> {
        let reader = BufReader::new(File::open(&self.path)?);
        let mut count = 0;
        for line in reader.lines() {
            line?;
            count += 1;
        }
        Ok(count)
    }

    /// Fetch line `k` (1-based), trimmed.
    pub fn line(&self, k: usize) -> Result<String> {
        let reader = BufReader::new(File::open(&self.path)?);
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if index + 1 == k {
                return Ok(line.trim().to_string());
            }
        }
        Err(Error::Generation(format!(
            "line {k} is beyond the end of {}",
            self.path.display()
        )))
    }
}

/// Optional argument: `n` (exact count) or `n,m` (inclusive range);
/// absent means the default range [2, 5].
fn words_arg(raw: Option<&str>) -> Result<Config> {
    let raw = match raw.map(str::trim) {
        None | Some("") => {
            return Ok(Config::WordRange {
                min: DEFAULT_MIN_WORDS,
                max: DEFAULT_MAX_WORDS,
            })
        }
        Some(raw) => raw,
    };

    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() > 2 {
        return Err(Error::Argument(format!(
            "words takes at most two arguments, got {raw:?}"
        )));
    }
    let parse = |s: &str| -> Result<usize> {
        s.trim().parse().map_err(|_| {
            Error::Argument(format!("words count must be a non-negative integer, got {s:?}"))
        })
    };
    let min = parse(parts[0])?;
    let max = parse(parts[parts.len() - 1])?;
    if min > max {
        return Err(Error::Argument(format!(
            "words range is reversed: {min} > {max}"
        )));
    }
    Ok(Config::WordRange { min, max })
}

fn words_field(ctx: &mut GenContext, config: &Config) -> Result<Value> {
    match config {
        Config::WordRange { min, max } => {
            let source = WordSource::locate()?;
            generate_words(ctx, *min, *max, &source)
        }
        other => Err(Error::Generation(format!(
            "words invoked with mismatched config {other:?}"
        ))),
    }
}

fn word_field(ctx: &mut GenContext, _config: &Config) -> Result<Value> {
    let source = WordSource::locate()?;
    generate_words(ctx, 1, 1, &source)
}

/// Draw a word count uniformly in [min, max], then that many random
/// lines from the source, space-joined. Repeats are acceptable.
pub(crate) fn generate_words(
    ctx: &mut GenContext,
    min: usize,
    max: usize,
    source: &WordSource,
) -> Result<Value> {
    let total = source.line_count()?;
    if total == 0 {
        return Err(Error::Generation(format!(
            "word file {} is empty",
            source.path().display()
        )));
    }

    let count = ctx.rng.gen_range(min..=max);
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        let k = ctx.rng.gen_range(1..=total);
        words.push(source.line(k)?);
    }
    Ok(Value::Str(words.join(" ")))
}
