use crate::cmd::ListArgs;
use anyhow::{Context, Result};
use cg_palette::{ColorEntry, COLORS};
use serde::Serialize;

/// One palette entry as shown to the user.
#[derive(Debug, Serialize)]
struct ListRow {
    #[serde(flatten)]
    entry: ColorEntry,

    identifier: String,

    /// Decoded channel values, absent when the hex value does not decode.
    channels: Option<Vec<f64>>,

    /// Why decoding failed.
    error: Option<String>,

    /// Channels with two decimals, or the error.
    #[serde(skip)]
    detail: String,
}

impl ListRow {
    fn new(entry: &ColorEntry) -> Self {
        let (channels, error, detail) = match entry.channels() {
            Ok(channels) => (Some(channels.values()), None, channels.to_string()),
            Err(e) => (None, Some(e.to_string()), format!("error: {e}")),
        };
        Self {
            entry: *entry,
            identifier: entry.identifier(),
            channels,
            error,
            detail,
        }
    }

    fn to_line(&self) -> String {
        format!(
            "{:<20} {:<10} {}",
            self.identifier,
            self.entry.comment(),
            self.detail
        )
    }
}

fn list_rows(table: &[ColorEntry]) -> Vec<ListRow> {
    table.iter().map(ListRow::new).collect()
}

pub fn run_list_command(args: ListArgs) -> Result<()> {
    let rows = list_rows(COLORS);

    if args.json {
        let json = serde_json::to_string_pretty(&rows).context("when serializing palette")?;
        println!("{json}");
    } else {
        for row in rows {
            println!("{}", row.to_line());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_rows_follow_table() {
        let rows = list_rows(COLORS);
        assert_eq!(rows.len(), COLORS.len());
        assert_eq!(rows[8].identifier, "FolderBack");
        assert!(rows.iter().all(|r| r.channels.is_some() && r.error.is_none()));
        assert_eq!(
            rows[2].to_line(),
            format!("{:<20} {:<10} 1.00, 0.00, 0.00", "Red", "#ff0000")
        );
    }

    #[test]
    fn test_list_json() {
        let rows = list_rows(&[
            ColorEntry::new("red", "#FF0000"),
            ColorEntry::new("broken", "#12345"),
        ]);
        let value = serde_json::to_value(&rows).unwrap();

        assert_eq!(value[0]["name"], "red");
        assert_eq!(value[0]["hex"], "#FF0000");
        assert_eq!(value[0]["identifier"], "Red");
        assert_eq!(value[0]["channels"], serde_json::json!([1.0, 0.0, 0.0]));
        assert!(value[0]["error"].is_null());

        assert!(value[1]["channels"].is_null());
        assert_eq!(
            value[1]["error"],
            "expected 6 or 8 hex digits, found 5"
        );
    }
}
