//! Generate the rust source defining the drawing `Color` enum and the `CairoColorExt` trait
//! that sets a color on a cairo context.
//!
//! ```no_run
//! use cg_codegen::{generate, Policy};
//! use cg_palette::COLORS;
//!
//! let file = generate(COLORS, Policy::Strict)?;
//! file.write_to("src/image/colors.rs")?;
//! # Ok::<(), cg_codegen::GenerateError>(())
//! ```

use crate::template::ColorsFile;
use crate::validate::resolve;
use cg_palette::{ColorEntry, HexError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

mod template;
mod validate;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Normalized name is not usable as an enum variant.
    #[error("entry {name:?} normalizes to {identifier:?}, which is not a valid variant name")]
    InvalidIdentifier { name: String, identifier: String },

    /// Two entries normalize to the same variant name.
    #[error("entries {first:?} and {second:?} both normalize to variant {identifier:?}")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },

    /// Hex value of an entry can not be used.
    #[error("entry {name:?} has unusable hex value {hex:?}: {source}")]
    Hex {
        name: String,
        hex: String,
        source: HexError,
    },

    #[error("io error on generated file {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// What to do with entries whose hex value decodes to neither 3 nor 4 bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    /// Reject the whole run.
    #[default]
    Strict,

    /// Keep the enum variant but emit no match arm for it, logging a warning.
    ///
    /// The generated match is then not exhaustive and fails to compile downstream.
    SkipUnsupported,
}

/// Content of a generated file, rendered in full before anything touches the disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    content: String,
    variants: usize,
    arms: usize,
    skipped: Vec<String>,
}

impl GeneratedFile {
    pub fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Count of enum variants, one per table entry.
    pub fn variants(&self) -> usize {
        self.variants
    }

    /// Count of match arms.
    pub fn arms(&self) -> usize {
        self.arms
    }

    /// Names of the entries that got a variant but no match arm.
    pub fn skipped(&self) -> &[String] {
        self.skipped.as_slice()
    }

    /// Every variant has a match arm.
    pub fn is_exhaustive(&self) -> bool {
        self.variants == self.arms
    }

    /// Write the content to `path`, replacing any existing file.
    ///
    /// Missing parent directories are created.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), GenerateError> {
        let path = path.as_ref();
        let io_error = |source| GenerateError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, self.content.as_bytes()).map_err(io_error)?;
        debug!("wrote {} bytes to {}", self.content.len(), path.display());
        Ok(())
    }

    /// Whether `path` already holds this content.
    ///
    /// Whitespace runs inside a line and blank lines are ignored, so a file reformatted by
    /// rustfmt (aligned trailing comments) still counts as up to date. A missing file is reported
    /// as not up to date rather than as an error.
    pub fn is_up_to_date(&self, path: impl AsRef<Path>) -> Result<bool, GenerateError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(existing) => {
                Ok(normalize_whitespace(&existing) == normalize_whitespace(&self.content))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(GenerateError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

/// Collapse every whitespace run in a line to one space and drop blank lines.
fn normalize_whitespace(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Generate the colors source file from `table`.
///
/// The table is validated as a whole before rendering, see [`GenerateError`] for what is
/// rejected. Output follows table order and is identical for identical input.
pub fn generate(table: &[ColorEntry], policy: Policy) -> Result<GeneratedFile, GenerateError> {
    debug!("generating {} colors with {policy:?}", table.len());

    let entries = resolve(table, policy)?;
    let content = ColorsFile { entries: &entries }.to_string();
    let skipped = entries
        .iter()
        .filter(|e| e.channels.is_none())
        .map(|e| e.entry.name.to_string())
        .collect::<Vec<_>>();

    Ok(GeneratedFile {
        content,
        variants: entries.len(),
        arms: entries.len() - skipped.len(),
        skipped,
    })
}
