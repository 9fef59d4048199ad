//! Extracting DDS textures from a container file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dds::{entry_name, find_signatures, fourcc, render_index, split_ranges, IndexEntry, INDEX_FILE};
use crate::error::{Result, TexkitError};
use crate::ui::UserInterface;

use super::convert::TextureConverter;
use super::{display_name, sorted_children};

/// Default folder for a single-file unpack.
pub const DEFAULT_OUTPUT_DIR: &str = "extracted_dds";

/// Suffix of the folder a batch unpack writes for each file.
pub const EXTRACTED_SUFFIX: &str = "_extracted";

/// What an unpack produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpackReport {
    /// One entry per texture found, in file order.
    pub entries: Vec<IndexEntry>,
    /// How many textures were converted to PNG.
    pub converted: usize,
    /// Where the index log was written; `None` when nothing was found.
    pub index_path: Option<PathBuf>,
}

/// Splits container files into textures and converts them to PNG.
pub struct Unpacker<'a> {
    converter: &'a dyn TextureConverter,
}

impl<'a> Unpacker<'a> {
    /// Create an unpacker that converts through `converter`.
    pub fn new(converter: &'a dyn TextureConverter) -> Self {
        Self { converter }
    }

    /// Extract every texture in `input` into `output_dir`.
    ///
    /// Each texture becomes `dds_NNN.png`. The intermediate `.dds` is removed
    /// once its PNG exists and kept when conversion fails.
    pub fn unpack(
        &self,
        input: &Path,
        output_dir: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<UnpackReport> {
        let data = fs::read(input)?;
        fs::create_dir_all(output_dir)?;

        let offsets = find_signatures(&data);
        let source_name = display_name(input);
        if offsets.is_empty() {
            ui.warning(&format!("No DDS files found in {}.", input.display()));
            return Ok(UnpackReport::default());
        }
        ui.message(&format!(
            "Found {} DDS headers in \"{}\":",
            offsets.len(),
            source_name
        ));

        let mut report = UnpackReport::default();
        for (i, range) in split_ranges(&offsets, data.len()).into_iter().enumerate() {
            let chunk = &data[range.clone()];
            let entry = IndexEntry {
                name: entry_name(i + 1),
                offset: range.start,
                format: fourcc(chunk),
            };

            let dds_path = output_dir.join(&entry.name);
            fs::write(&dds_path, chunk)?;
            ui.message(&format!(
                "{}. DDS found at 0x{:X} -> \"{}\" [{}]",
                i + 1,
                entry.offset,
                entry.name,
                entry.format
            ));

            if self.convert(&dds_path, ui) {
                report.converted += 1;
            }
            report.entries.push(entry);
        }

        let index_path = output_dir.join(INDEX_FILE);
        fs::write(&index_path, render_index(&source_name, &report.entries))?;

        if report.converted == report.entries.len() {
            ui.success("All DDS files extracted and converted to PNG.");
        } else {
            ui.warning(&format!(
                "{} of {} textures could not be converted; their .dds files were kept.",
                report.entries.len() - report.converted,
                report.entries.len()
            ));
        }
        ui.message(&format!("Log saved to: {}", index_path.display()));

        report.index_path = Some(index_path);
        Ok(report)
    }

    /// Unpack every file in `dir` into a `<stem>_extracted` folder beside it.
    ///
    /// A file that fails is reported and the batch moves on.
    pub fn batch_unpack(&self, dir: &Path, ui: &mut dyn UserInterface) -> Result<usize> {
        if !dir.is_dir() {
            return Err(TexkitError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        let files: Vec<PathBuf> = sorted_children(dir)?
            .into_iter()
            .filter(|p| p.is_file())
            .collect();
        if files.is_empty() {
            ui.warning("No files found in directory.");
            return Ok(0);
        }

        ui.show_header(&format!(
            "Starting batch DDS extraction from {}",
            dir.display()
        ));
        let mut unpacked = 0;
        for (idx, file) in files.iter().enumerate() {
            let stem = file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let output_dir = dir.join(format!("{}{}", stem, EXTRACTED_SUFFIX));
            ui.message(&format!("[{}] Processing file: {}", idx + 1, display_name(file)));

            match self.unpack(file, &output_dir, ui) {
                Ok(_) => unpacked += 1,
                Err(e) => ui.error(&format!("{}: {}", display_name(file), e)),
            }
        }
        ui.success("Batch extraction complete!");
        Ok(unpacked)
    }

    fn convert(&self, dds_path: &Path, ui: &mut dyn UserInterface) -> bool {
        let png_path = dds_path.with_extension("png");
        if let Err(e) = self.converter.dds_to_png(dds_path, &png_path) {
            tracing::debug!("Conversion of {} failed: {:?}", dds_path.display(), e);
            ui.error(&format!("Failed to convert DDS to PNG: {}", e));
            return false;
        }
        ui.success(&format!("PNG saved: {}", png_path.display()));

        match fs::remove_file(dds_path) {
            Ok(()) => {
                if ui.output_mode().shows_details() {
                    ui.message(&format!("Deleted DDS: {}", dds_path.display()));
                }
            }
            Err(e) => ui.warning(&format!("Failed to delete DDS: {}", e)),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dds::header::tests::header;
    use crate::dds::parse_index;
    use crate::textures::tests::FakeConverter;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn container() -> Vec<u8> {
        let mut data = b"PAKHEADER".to_vec();
        data.extend(header(b"DXT1", 1));
        data.extend([1u8; 8]);
        data.extend(header(b"DXT5", 3));
        data.extend([2u8; 16]);
        data
    }

    #[test]
    fn extracts_converts_and_indexes() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("global.pab.xen");
        fs::write(&input, container()).unwrap();
        let out = temp.path().join("out");
        let converter = FakeConverter::default();
        let mut ui = MockUI::new();

        let report = Unpacker::new(&converter)
            .unpack(&input, &out, &mut ui)
            .unwrap();

        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.entries[0].offset, 9);
        assert_eq!(report.entries[0].format, "DXT1");
        assert_eq!(report.entries[1].offset, 9 + 128 + 8);
        assert_eq!(report.entries[1].format, "DXT5");
        assert_eq!(report.converted, 2);

        assert!(out.join("dds_001.png").exists());
        assert!(out.join("dds_002.png").exists());
        assert!(!out.join("dds_001.dds").exists());

        let index = fs::read_to_string(out.join(INDEX_FILE)).unwrap();
        assert!(index.starts_with("Extracted DDS Files Log for global.pab.xen"));
        assert_eq!(
            parse_index(&index),
            vec![("dds_001.dds".to_string(), 9), ("dds_002.dds".to_string(), 145)]
        );
        assert!(ui.has_message("DDS found at 0x9"));
        assert!(ui.has_success("All DDS files extracted"));
    }

    #[test]
    fn chunk_bytes_are_passed_to_converter() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("a.pak");
        let data = container();
        fs::write(&input, &data).unwrap();
        let converter = FakeConverter::default();

        Unpacker::new(&converter)
            .unpack(&input, temp.path(), &mut MockUI::new())
            .unwrap();

        let decoded = converter.decoded.borrow();
        assert_eq!(decoded[0], data[9..145].to_vec());
        assert_eq!(decoded[1], data[145..].to_vec());
    }

    #[test]
    fn failed_conversion_keeps_dds() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("a.pak");
        fs::write(&input, container()).unwrap();
        let converter = FakeConverter {
            fail_decode: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let report = Unpacker::new(&converter)
            .unpack(&input, temp.path(), &mut ui)
            .unwrap();

        assert_eq!(report.converted, 0);
        assert!(temp.path().join("dds_001.dds").exists());
        assert!(!temp.path().join("dds_001.png").exists());
        assert!(ui.has_error("Failed to convert DDS to PNG"));
        assert!(ui.has_warning("2 of 2 textures"));
    }

    #[test]
    fn file_without_textures_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("plain.bin");
        fs::write(&input, b"nothing to see").unwrap();
        let out = temp.path().join("out");
        let mut ui = MockUI::new();

        let report = Unpacker::new(&FakeConverter::default())
            .unpack(&input, &out, &mut ui)
            .unwrap();

        assert!(report.entries.is_empty());
        assert!(report.index_path.is_none());
        assert!(!out.join(INDEX_FILE).exists());
        assert!(ui.has_warning("No DDS files found"));
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let temp = TempDir::new().unwrap();
        let err = Unpacker::new(&FakeConverter::default())
            .unpack(
                &temp.path().join("absent.pak"),
                temp.path(),
                &mut MockUI::new(),
            )
            .unwrap_err();
        assert!(matches!(err, TexkitError::Io(_)));
    }

    #[test]
    fn batch_unpacks_each_file_into_its_own_folder() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("global.pab.xen"), container()).unwrap();
        fs::write(temp.path().join("notes.txt"), b"no textures").unwrap();
        fs::create_dir(temp.path().join("subdir")).unwrap();
        let mut ui = MockUI::new();

        let count = Unpacker::new(&FakeConverter::default())
            .batch_unpack(temp.path(), &mut ui)
            .unwrap();

        assert_eq!(count, 2);
        assert!(temp
            .path()
            .join("global.pab_extracted")
            .join(INDEX_FILE)
            .exists());
        assert!(ui.has_message("[1] Processing file: global.pab.xen"));
        assert!(ui.has_message("[2] Processing file: notes.txt"));
        assert!(ui.has_success("Batch extraction complete!"));
    }

    #[test]
    fn batch_requires_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.pak");
        fs::write(&file, b"x").unwrap();

        let err = Unpacker::new(&FakeConverter::default())
            .batch_unpack(&file, &mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, TexkitError::NotADirectory { .. }));
    }

    #[test]
    fn batch_on_empty_directory_warns() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let count = Unpacker::new(&FakeConverter::default())
            .batch_unpack(temp.path(), &mut ui)
            .unwrap();

        assert_eq!(count, 0);
        assert!(ui.has_warning("No files found in directory."));
    }
}
