use crate::{decode_hex, pascal_case, ChannelTuple, HexError};
use serde::Serialize;

/// Colors used when drawing.
///
/// Picked on <https://coolors.co>. Order here is the order of the generated enum variants and
/// match arms. Names must stay unique after [`pascal_case`].
pub const COLORS: &[ColorEntry] = &[
    ColorEntry::new("white", "#ffffff"),
    ColorEntry::new("black", "#000000"),
    ColorEntry::new("red", "#ff0000"),
    ColorEntry::new("black_bean", "#331a1a"),
    ColorEntry::new("gray", "#808080"),
    ColorEntry::new("silver", "#cccccc"),
    ColorEntry::new("russian_violet", "#330033"),
    ColorEntry::new("citrine", "#e6cc33"),
    ColorEntry::new("folder_back", "#1e3319"),
    ColorEntry::new("folder_title", "#94bc8a"),
    ColorEntry::new("folder_msg", "#c0cebf"),
    ColorEntry::new("archive_back", "#23213c"),
    ColorEntry::new("archive_title", "#89a6d2"),
    ColorEntry::new("archive_msg", "#c3ccd9"),
    ColorEntry::new("unsupported_back", "#292500"),
    ColorEntry::new("unsupported_title", "#c4b850"),
    ColorEntry::new("unsupported_msg", "#d0cc9f"),
    ColorEntry::new("error_back", "#372020"),
    ColorEntry::new("error_title", "#b38888"),
    ColorEntry::new("error_msg", "#dbb5b5"),
];

/// A named color in the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    /// Lowercase words joined by single underscores, like `folder_back`.
    pub name: &'static str,

    /// `#rrggbb` or `#rrggbbaa`.
    pub hex: &'static str,
}

impl ColorEntry {
    pub const fn new(name: &'static str, hex: &'static str) -> Self {
        Self { name, hex }
    }

    /// Variant name in the generated enum.
    pub fn identifier(&self) -> String {
        pascal_case(self.name)
    }

    /// Provenance comment attached to generated lines, the hex value lower-cased.
    pub fn comment(&self) -> String {
        self.hex.to_lowercase()
    }

    pub fn channels(&self) -> Result<ChannelTuple, HexError> {
        decode_hex(self.hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_names_are_snake_case() {
        for entry in COLORS {
            assert!(
                entry
                    .name
                    .split('_')
                    .all(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())),
                "bad name {:?}",
                entry.name
            );
        }
    }

    #[test]
    fn test_table_identifiers_unique() {
        let identifiers = COLORS
            .iter()
            .map(ColorEntry::identifier)
            .collect::<HashSet<_>>();
        assert_eq!(identifiers.len(), COLORS.len());
    }

    #[test]
    fn test_table_hex_decodes() {
        for entry in COLORS {
            assert!(entry.hex.starts_with('#'), "missing '#' in {}", entry.hex);
            let channels = entry.channels();
            assert!(channels.is_ok(), "{}: {channels:?}", entry.name);
        }
    }

    #[test]
    fn test_entry_accessors() {
        let entry = ColorEntry::new("folder_back", "#1E3319");
        assert_eq!(entry.identifier(), "FolderBack");
        assert_eq!(entry.comment(), "#1e3319");
        assert_eq!(entry.channels().unwrap().to_string(), "0.12, 0.20, 0.10");
    }
}
