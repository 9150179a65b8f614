use crate::{GenerateError, Policy};
use cg_palette::{ChannelTuple, ColorEntry};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{trace, warn};

/// Regex matching names usable as an enum variant in the generated file.
static IDENTIFIER_RE: OnceLock<Regex> = OnceLock::new();

/// A table entry with everything the templates need already computed.
#[derive(Debug)]
pub(crate) struct Resolved<'a> {
    pub(crate) entry: &'a ColorEntry,
    pub(crate) identifier: String,
    pub(crate) comment: String,

    /// `None` if the entry is skipped and gets no match arm.
    pub(crate) channels: Option<ChannelTuple>,
}

/// `Self` is the only keyword the regex lets through.
fn is_valid_identifier(identifier: &str) -> bool {
    identifier != "Self"
        && IDENTIFIER_RE
            .get_or_init(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("invalid identifier regex"))
            .is_match(identifier)
}

/// Check the whole table and resolve every entry, in table order.
///
/// Fails on the first entry with a bad identifier, a colliding identifier or a hex value that can
/// not be decoded. Under [`Policy::SkipUnsupported`] a hex value with a length other than 6 or 8
/// digits is not an error, the entry is resolved without channels instead.
pub(crate) fn resolve(
    table: &[ColorEntry],
    policy: Policy,
) -> Result<Vec<Resolved<'_>>, GenerateError> {
    let mut seen = HashMap::<String, &ColorEntry>::with_capacity(table.len());
    let mut resolved = Vec::with_capacity(table.len());

    for entry in table {
        let identifier = entry.identifier();
        trace!("resolving {:?} as {identifier:?}", entry.name);

        if !is_valid_identifier(&identifier) {
            return Err(GenerateError::InvalidIdentifier {
                name: entry.name.to_string(),
                identifier,
            });
        }

        if let Some(first) = seen.get(&identifier) {
            return Err(GenerateError::DuplicateIdentifier {
                identifier,
                first: first.name.to_string(),
                second: entry.name.to_string(),
            });
        }
        seen.insert(identifier.clone(), entry);

        let channels = match entry.channels() {
            Ok(channels) => Some(channels),
            Err(e) if e.is_unsupported_length() && policy == Policy::SkipUnsupported => {
                warn!(
                    "skipping match arm for {:?}: {} ({e})",
                    entry.name, entry.hex
                );
                None
            }
            Err(e) => {
                return Err(GenerateError::Hex {
                    name: entry.name.to_string(),
                    hex: entry.hex.to_string(),
                    source: e,
                })
            }
        };

        resolved.push(Resolved {
            entry,
            identifier,
            comment: entry.comment(),
            channels,
        });
    }

    Ok(resolved)
}
