use crate::validate::Resolved;
use cg_palette::ChannelTuple;
use std::fmt;
use std::fmt::Formatter;

/// Imports, notice and the opening of the enum.
pub(crate) const HEADER: &str = r"use cairo::Context;

// generated file - do not edit

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
";

/// Closes the enum, declares the extension trait and opens the match in its impl.
pub(crate) const MIDDLE: &str = r"}

pub trait CairoColorExt {
    fn color(&self, color: Color);
}

impl CairoColorExt for Context {
    fn color(&self, color: Color) {
        match color {
";

pub(crate) const TRAILER: &str = r"        }
    }
}
";

/// The whole generated file, rendered through [`fmt::Display`].
pub(crate) struct ColorsFile<'a> {
    pub(crate) entries: &'a [Resolved<'a>],
}

impl fmt::Display for ColorsFile<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(HEADER)?;
        for entry in self.entries {
            write_variant(f, entry)?;
        }
        f.write_str(MIDDLE)?;
        for entry in self.entries {
            if let Some(channels) = &entry.channels {
                write_arm(f, entry, channels)?;
            }
        }
        f.write_str(TRAILER)
    }
}

fn write_variant(f: &mut Formatter<'_>, entry: &Resolved<'_>) -> fmt::Result {
    writeln!(f, "    {}, // {}", entry.identifier, entry.comment)
}

fn write_arm(f: &mut Formatter<'_>, entry: &Resolved<'_>, channels: &ChannelTuple) -> fmt::Result {
    let setter = if channels.has_alpha() {
        "set_source_rgba"
    } else {
        "set_source_rgb"
    };
    writeln!(f, "            Color::{} => {{", entry.identifier)?;
    writeln!(
        f,
        "                self.{setter}({channels}); // {}",
        entry.comment
    )?;
    writeln!(f, "            }}")
}
