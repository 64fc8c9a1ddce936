//! Error types for schema compilation and row generation.

/// Errors produced while compiling a schema or generating rows.
///
/// `TypeNotFound` and `Argument` surface at compile time, before any
/// row is produced. `NoWordSource` and `DependencyMissing` surface at
/// generation time because the resources they describe are resolved
/// lazily, on first use. All failures are terminal for the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Schema references a type name with no registered generator.
    #[error("unknown field type: {0}")]
    TypeNotFound(String),

    /// Malformed or missing required type argument.
    #[error("{0}")]
    Argument(String),

    /// No dictionary word file could be located for `words`/`word`.
    #[error("no words file found (searched ./words, /usr/share/dict/words, /usr/dict/words)")]
    NoWordSource,

    /// An optional provider referenced by the schema is not available.
    #[error("the `{0}` provider is not available in this build")]
    DependencyMissing(&'static str),

    /// A generator failed on malformed or out-of-range data.
    #[error("generation failed: {0}")]
    Generation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
