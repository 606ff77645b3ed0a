use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for front-end loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Run-fatal errors raised while loading or enumerating the solution.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read solution snapshot '{path}'")]
    #[diagnostic(
        code(clientgen::io),
        help("pass the JSON snapshot exported from the compiled solution")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse solution snapshot")]
    #[diagnostic(code(clientgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid snapshot here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("no front-end projects match '{prefix}*{suffix}'")]
    #[diagnostic(
        code(clientgen::no_projects),
        help("loaded projects: {available}")
    )]
    NoMatchingProjects {
        prefix: String,
        suffix: String,
        available: String,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = byte_offset(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Convert serde_json's 1-based line / column into a byte offset.
fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
