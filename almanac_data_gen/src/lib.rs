// Copyright 2026 the Almanac Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small CLI that refreshes the CLDR-derived locale data checked into the
//! `almanac_data` crate. It reads a local `cldr-json` checkout, reshapes the
//! per-locale metadata Almanac needs at runtime, and writes Rust modules that
//! are embedded directly into the repository.
//!
//! See `./main.rs` for the command surface.

pub mod cldr;
pub mod generate;
pub mod locale_name;
pub mod pattern;
pub mod plural;
pub mod render;

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::plural::PluralError;

/// A fatal generator error.
///
/// Per-locale problems (unknown or malformed identifiers) are reported and
/// skipped instead of surfacing here; everything that does surface aborts the
/// run.
#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// A CLDR file was not valid JSON.
    Json {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        source: serde_json::Error,
    },
    /// A CLDR file parsed but did not have the expected shape.
    Schema {
        /// The file involved.
        path: PathBuf,
        /// What was missing or malformed.
        detail: String,
    },
    /// A plural or ordinal rule failed to compile.
    Plural {
        /// The locale whose rules were being compiled.
        locale: String,
        /// The underlying error.
        source: PluralError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "{}: invalid JSON: {source}", path.display())
            }
            Self::Schema { path, detail } => write!(f, "{}: {detail}", path.display()),
            Self::Plural { locale, source } => {
                write!(f, "plural rules for '{locale}': {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Schema { .. } => None,
            Self::Plural { source, .. } => Some(source),
        }
    }
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn schema(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
