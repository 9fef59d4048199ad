//! The extraction index log.
//!
//! Unpacking writes `dds_index.txt` next to the extracted textures. Each
//! entry records the file name, the offset in the container (decimal and
//! hex) and the FourCC:
//!
//! ```text
//! dds_001.dds
//!   Offset: 1024 bytes (0x400)
//!   Format: DXT5
//! ```
//!
//! Repacking reads the names and decimal offsets back. The log is plain text
//! so users can inspect it, and parsing tolerates edits to the other lines.

use regex::Regex;
use std::sync::LazyLock;

/// Default name of the index log.
pub const INDEX_FILE: &str = "dds_index.txt";

/// Name of the log of skipped or mismatched entries written by a repack.
pub const REPAIR_LOG_FILE: &str = "dds_repair_log.txt";

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_ENTRY, r"(dds_\d+\.dds)\s*?\n\s*Offset:\s*(\d+)");

/// One extracted texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// File name inside the extraction folder.
    pub name: String,
    /// Byte offset of the texture in the container.
    pub offset: usize,
    /// FourCC label.
    pub format: String,
}

/// File name for the `number`-th texture (1-based).
pub fn entry_name(number: usize) -> String {
    format!("dds_{:03}.dds", number)
}

/// Render the index log for textures extracted from `source_name`.
pub fn render_index(source_name: &str, entries: &[IndexEntry]) -> String {
    let mut out = format!("Extracted DDS Files Log for {}\n", source_name);
    out.push_str("===========================================\n\n");
    for entry in entries {
        out.push_str(&format!(
            "{}\n  Offset: {} bytes (0x{:X})\n  Format: {}\n\n",
            entry.name, entry.offset, entry.offset, entry.format
        ));
    }
    out
}

/// Read `(name, offset)` pairs back from an index log, in file order.
///
/// Offsets too large for `usize` are dropped.
pub fn parse_index(text: &str) -> Vec<(String, usize)> {
    RE_ENTRY
        .captures_iter(text)
        .filter_map(|caps| {
            let offset = caps[2].parse().ok()?;
            Some((caps[1].to_string(), offset))
        })
        .collect()
}
