use std::path::PathBuf;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Errors raised while extracting or writing one controller's services.
///
/// Any of these aborts the controller being processed; the driver records it
/// and moves on to the next controller.
#[derive(Debug, Error, Diagnostic)]
pub enum ExtractError {
    #[error("method has no <summary> documentation")]
    #[diagnostic(
        code(clientgen::missing_documentation),
        help("add a `/// <summary>` comment; it becomes the client function's doc comment")
    )]
    MissingDocumentation,

    #[error("method has no HTTP verb annotation")]
    #[diagnostic(
        code(clientgen::missing_verb),
        help("annotate the action with one of [HttpGet], [HttpPost], [HttpPut], [HttpDelete], [HttpPatch]")
    )]
    MissingVerbAnnotation,

    #[error("method has more than one HTTP verb annotation ({verbs})")]
    #[diagnostic(
        code(clientgen::ambiguous_verb),
        help("split the action so that each method has exactly one verb")
    )]
    AmbiguousVerbAnnotation { verbs: String },

    #[error("more than one parameter is bound from the request body ({parameters})")]
    #[diagnostic(
        code(clientgen::ambiguous_body),
        help("wrap the values in a single request type and bind that with [FromBody]")
    )]
    AmbiguousBodyParameter { parameters: String },

    #[error("base controller '{base}' is not declared in the loaded solution")]
    #[diagnostic(
        code(clientgen::unresolvable_base),
        help("include the project that declares '{base}' in the solution snapshot")
    )]
    UnresolvableBaseController { base: String },

    #[error("malformed route: {reason}")]
    #[diagnostic(code(clientgen::malformed_route))]
    MalformedRoute {
        #[source_code]
        route: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: &'static str,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(clientgen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub(crate) fn malformed_route(route: &str, offset: usize, reason: &'static str) -> Self {
        Self::MalformedRoute {
            route: route.to_string(),
            span: (offset, 1).into(),
            reason,
        }
    }
}

/// An [`ExtractError`] attributed to the controller (and method) it aborted.
#[derive(Debug, Error, Diagnostic)]
#[error("{controller}{}", .method.as_ref().map(|m| format!(".{}", m)).unwrap_or_default())]
pub struct ControllerFailure {
    pub controller: String,
    pub method: Option<String>,
    #[source]
    #[diagnostic_source]
    pub error: ExtractError,
}

impl ControllerFailure {
    pub fn new(controller: impl Into<String>, error: ExtractError) -> Self {
        Self {
            controller: controller.into(),
            method: None,
            error,
        }
    }

    pub fn in_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }
}
