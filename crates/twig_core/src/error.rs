//! Engine error types.

use std::path::PathBuf;

use thiserror::Error;
use twig_ast::{Hook, VisitError};

use crate::VisitorId;

/// Errors that abort a traversal.
///
/// A failed traversal leaves no guarantee about the forest it consumed; use
/// [`NodeTraverser::traverse_cloned`](crate::NodeTraverser::traverse_cloned)
/// when the input must survive a failure.
#[derive(Debug, Error)]
pub enum TraverseError {
    /// A visitor hook returned an error.
    #[error("Visitor {visitor} failed in {hook}: {source}")]
    Visitor {
        visitor: VisitorId,
        hook: Hook,
        #[source]
        source: VisitError,
    },

    /// A visitor requested an edit that is not possible where the node sits.
    #[error(
        "Visitor {visitor} returned '{action}' from {hook} for a node outside a list; only keep and replace are allowed there"
    )]
    InvalidAction {
        visitor: VisitorId,
        hook: Hook,
        action: &'static str,
    },

    /// Node nesting exceeded the configured limit.
    #[error("Node nesting exceeds the maximum depth of {limit}")]
    DepthLimitExceeded { limit: usize },
}

impl TraverseError {
    /// Creates a visitor failure error.
    pub fn visitor(visitor: VisitorId, hook: Hook, source: VisitError) -> Self {
        Self::Visitor {
            visitor,
            hook,
            source,
        }
    }

    /// Creates an invalid action error.
    pub fn invalid_action(visitor: VisitorId, hook: Hook, action: &'static str) -> Self {
        Self::InvalidAction {
            visitor,
            hook,
            action,
        }
    }

    /// Returns the visitor that caused the error, if any.
    pub fn visitor_id(&self) -> Option<VisitorId> {
        match self {
            Self::Visitor { visitor, .. } | Self::InvalidAction { visitor, .. } => Some(*visitor),
            Self::DepthLimitExceeded { .. } => None,
        }
    }

    /// Unwraps the error a visitor hook returned.
    ///
    /// Returns `Err(self)` for errors raised by the engine itself.
    pub fn into_visitor_error(self) -> Result<VisitError, Self> {
        match self {
            Self::Visitor { source, .. } => Ok(source),
            other => Err(other),
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON or has unexpected properties.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
