//! Writing edited textures back into a container file.
//!
//! Repacking walks the index log of an extraction folder. For every entry
//! it prefers an edited `dds_NNN.png` (encoded through texconv in the
//! texture's original format) and falls back to `dds_NNN.dds`. A
//! replacement must fit the slot the original texture occupied; shorter
//! data is zero-padded so every other byte of the container keeps its
//! offset. Entries that cannot be replaced are skipped and recorded in
//! `dds_repair_log.txt`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::dds::{
    dxgi_format, embedded_len, fourcc, header_format, mipmap_count, parse_index,
    texconv_format_for_dxgi, texconv_format_for_fourcc, DX10_FOURCC, DX10_HEADER_LEN, HEADER_LEN,
    REPAIR_LOG_FILE, SIGNATURE,
};
use crate::error::{Result, TexkitError};
use crate::ui::UserInterface;

use super::convert::{fit_to_slot, EncodeOptions, TextureConverter};
use super::unpack::EXTRACTED_SUFFIX;
use super::{display_name, sorted_children};

/// Default output file for a single repack.
pub const DEFAULT_OUTPUT_FILE: &str = "global.pab.xen_repacked";

/// Suffix of the file a batch repack writes for each folder.
pub const REPACKED_SUFFIX: &str = "_repacked";

/// One repack to perform.
#[derive(Debug, Clone)]
pub struct RepackJob {
    /// The untouched container file.
    pub original: PathBuf,
    /// Folder holding the index log and the edited textures.
    pub dds_dir: PathBuf,
    /// Name of the index log inside `dds_dir`.
    pub index_file: String,
    /// Where the repacked container is written.
    pub output: PathBuf,
}

/// What a repack did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepackReport {
    /// Entries listed in the index log.
    pub entries: usize,
    /// Entries whose slot was overwritten.
    pub replaced: usize,
    /// Lines written to the repair log.
    pub repair_log: Vec<String>,
    /// Whether the output and repair log were written.
    pub written: bool,
}

/// Where a replacement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Replacement {
    Generated,
    Existing,
}

/// Collects repair-log lines and echoes each one as a warning.
struct RepairLog {
    lines: Vec<String>,
}

impl RepairLog {
    fn note(&mut self, ui: &mut dyn UserInterface, msg: String) {
        ui.warning(&msg);
        self.lines.push(msg);
    }
}

/// The texture an index entry points at.
struct Slot<'a> {
    number: usize,
    name: &'a str,
    offset: usize,
    len: usize,
    format: String,
    mips: u32,
}

/// Writes edited textures back into container files.
pub struct Repacker<'a> {
    converter: &'a dyn TextureConverter,
}

impl<'a> Repacker<'a> {
    /// Create a repacker that converts through `converter`.
    pub fn new(converter: &'a dyn TextureConverter) -> Self {
        Self { converter }
    }

    /// Run one repack.
    pub fn repack(&self, job: &RepackJob, ui: &mut dyn UserInterface) -> Result<RepackReport> {
        let index_path = job.dds_dir.join(&job.index_file);
        if !index_path.exists() {
            return Err(TexkitError::IndexNotFound { path: index_path });
        }
        let entries = parse_index(&fs::read_to_string(&index_path)?);
        if entries.is_empty() {
            ui.warning("No DDS entries found in log file.");
            return Ok(RepackReport::default());
        }

        let mut data = fs::read(&job.original)?;
        ui.message(&format!(
            "Loaded original file: {} ({} bytes)",
            job.original.display(),
            data.len()
        ));
        ui.message(&format!("Found {} DDS entries to replace.", entries.len()));

        let mut log = RepairLog { lines: Vec::new() };
        let mut replaced = 0;
        for (i, (name, offset)) in entries.iter().enumerate() {
            if self.repack_entry(i + 1, name, *offset, &mut data, &job.dds_dir, &mut log, ui)? {
                replaced += 1;
            }
        }

        fs::write(&job.output, &data)?;
        let repair_path = job.dds_dir.join(REPAIR_LOG_FILE);
        fs::write(&repair_path, log.lines.join("\n"))?;
        ui.success(&format!(
            "Repacking complete! New file saved as: {}",
            job.output.display()
        ));
        ui.message(&format!("Repair log written to: {}", repair_path.display()));

        Ok(RepackReport {
            entries: entries.len(),
            replaced,
            repair_log: log.lines,
            written: true,
        })
    }

    /// Repack every `<base>_extracted` folder in `dir` into `<base>_repacked`.
    ///
    /// The original is the first file (by name) starting with `<base>` that
    /// is neither an extraction folder nor an earlier repack output.
    pub fn batch_repack(
        &self,
        dir: &Path,
        index_file: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<usize> {
        if !dir.is_dir() {
            return Err(TexkitError::NotADirectory {
                path: dir.to_path_buf(),
            });
        }
        let children = sorted_children(dir)?;
        let folders: Vec<&PathBuf> = children
            .iter()
            .filter(|p| p.is_dir() && display_name(p).ends_with(EXTRACTED_SUFFIX))
            .collect();
        if folders.is_empty() {
            ui.warning("No *_extracted folders found in directory.");
            return Ok(0);
        }

        ui.show_header(&format!("Starting batch DDS repack from {}", dir.display()));
        let mut repacked = 0;
        for (idx, folder) in folders.iter().enumerate() {
            let folder_name = display_name(folder);
            let base = folder_name
                .strip_suffix(EXTRACTED_SUFFIX)
                .unwrap_or(&folder_name);
            let original = children.iter().find(|p| {
                let name = display_name(p);
                p.is_file() && name.starts_with(base) && !name.ends_with(REPACKED_SUFFIX)
            });
            let Some(original) = original else {
                ui.warning(&format!(
                    "[{}] Could not find original file for '{}'. Skipping.",
                    idx + 1,
                    folder_name
                ));
                continue;
            };

            ui.message(&format!("[{}] Repacking using folder: {}", idx + 1, folder_name));
            let job = RepackJob {
                original: original.clone(),
                dds_dir: (*folder).clone(),
                index_file: index_file.to_string(),
                output: dir.join(format!("{}{}", base, REPACKED_SUFFIX)),
            };
            match self.repack(&job, ui) {
                Ok(_) => repacked += 1,
                Err(e) => ui.error(&format!("{}: {}", folder_name, e)),
            }
        }
        ui.success("Batch repack complete!");
        Ok(repacked)
    }

    #[allow(clippy::too_many_arguments)]
    fn repack_entry(
        &self,
        number: usize,
        name: &str,
        offset: usize,
        data: &mut [u8],
        dir: &Path,
        log: &mut RepairLog,
        ui: &mut dyn UserInterface,
    ) -> Result<bool> {
        let stem = name.strip_suffix(".dds").unwrap_or(name);
        let dds_path = dir.join(name);
        let png_path = dir.join(format!("{}.png", stem));
        let has_dds = dds_path.exists();
        let has_png = png_path.exists();

        if !has_dds && !has_png {
            log.note(ui, format!("Missing file: {} (and no {}.png) - skipping.", name, stem));
            return Ok(false);
        }
        if offset + HEADER_LEN > data.len() {
            log.note(
                ui,
                format!(
                    "{} at 0x{:X}: Not enough data for DDS header in original file - skipping.",
                    name, offset
                ),
            );
            return Ok(false);
        }
        let header = &data[offset..offset + HEADER_LEN];
        if !header.starts_with(SIGNATURE) {
            log.note(
                ui,
                format!(
                    "{} at 0x{:X}: No DDS header found in original file - skipping.",
                    name, offset
                ),
            );
            return Ok(false);
        }

        let slot = Slot {
            number,
            name,
            offset,
            len: embedded_len(data, offset),
            format: fourcc(header),
            mips: mipmap_count(header),
        };

        let generated = if has_png {
            self.encode_png(&slot, &png_path, data, log, ui)
        } else {
            None
        };

        let replacement = match generated {
            Some(bytes) => {
                if let Some(got) = header_format(&bytes).filter(|f| *f != slot.format) {
                    log.note(
                        ui,
                        format!(
                            "{} generated format mismatch: expected {}, got {}; skipping replacement.",
                            name, slot.format, got
                        ),
                    );
                    return Ok(false);
                }
                data[offset..offset + slot.len].copy_from_slice(&bytes[..slot.len]);
                Replacement::Generated
            }
            None if has_dds => match self.existing_dds(&slot, &dds_path, log, ui)? {
                Some(bytes) => {
                    data[offset..offset + slot.len].copy_from_slice(&bytes);
                    Replacement::Existing
                }
                None => return Ok(false),
            },
            None => {
                log.note(
                    ui,
                    format!(
                        "{} at 0x{:X}: No usable replacement available - skipping.",
                        name, offset
                    ),
                );
                return Ok(false);
            }
        };

        let source = match replacement {
            Replacement::Generated => "generated PNG->DDS (padded to match embedded size)",
            Replacement::Existing => name,
        };
        ui.success(&format!(
            "Replaced DDS at 0x{:X} ({} bytes) with {}",
            offset, offset, source
        ));
        Ok(true)
    }

    /// Encode the edited PNG in the slot's format, or `None` to fall back.
    fn encode_png(
        &self,
        slot: &Slot,
        png_path: &Path,
        data: &[u8],
        log: &mut RepairLog,
        ui: &mut dyn UserInterface,
    ) -> Option<Vec<u8>> {
        if slot.format == DX10_FOURCC {
            let end = data.len().min(slot.offset + HEADER_LEN + DX10_HEADER_LEN);
            let dxgi = dxgi_format(&data[slot.offset..end]);
            let Some(format) = dxgi.and_then(texconv_format_for_dxgi) else {
                let code = dxgi.map_or_else(|| "missing".to_string(), |d| d.to_string());
                log.note(
                    ui,
                    format!(
                        "{} DX10: Unknown DXGI format ({}) - cannot convert PNG reliably.",
                        slot.name, code
                    ),
                );
                return None;
            };

            ui.message(&format!(
                "{}. {}: Converting PNG to DX10-derived format (DXGI {}) with {} mips...",
                slot.number,
                slot.name,
                dxgi.unwrap_or_default(),
                slot.mips
            ));
            let options = EncodeOptions {
                format,
                mip_count: slot.mips,
                srgb: false,
                dx10_header: true,
            };
            return match self.encode_to_fit(png_path, options, slot.len, ui) {
                Ok(Some(bytes)) => Some(bytes),
                Ok(None) => {
                    log.note(
                        ui,
                        format!(
                            "{}: generated DX10 DDS larger than embedded space ({}).",
                            slot.name, slot.len
                        ),
                    );
                    None
                }
                Err(e) => {
                    log.note(ui, format!("{}: texconv failed for DX10 mapping: {}", slot.name, e));
                    None
                }
            };
        }

        ui.message(&format!(
            "{}. {}: Converting PNG to {} with {} mips (target size {} bytes)",
            slot.number, slot.name, slot.format, slot.mips, slot.len
        ));
        let encoded = match texconv_format_for_fourcc(&slot.format) {
            Some(format) => {
                let options = EncodeOptions {
                    format,
                    mip_count: slot.mips,
                    srgb: true,
                    dx10_header: false,
                };
                self.encode_to_fit(png_path, options, slot.len, ui)
            }
            None => {
                ui.message(&format!("Unsupported FourCC for conversion: {}", slot.format));
                Ok(None)
            }
        };

        match encoded {
            Ok(Some(bytes)) => return Some(bytes),
            Ok(None) => {}
            Err(e) => ui.error(&e.to_string()),
        }
        log.note(
            ui,
            format!(
                "{}: PNG->DDS conversion failed or output too large - will try existing DDS file if present.",
                slot.name
            ),
        );
        None
    }

    /// Encode, retrying with a single mip level when the result is too big.
    fn encode_to_fit(
        &self,
        png_path: &Path,
        options: EncodeOptions,
        slot_len: usize,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<Vec<u8>>> {
        let mut bytes = self.converter.png_to_dds(png_path, &options)?;
        if bytes.len() > slot_len && options.mip_count > 1 {
            ui.message("Generated DDS larger than original; retrying with 1 mip level...");
            let single = EncodeOptions {
                mip_count: 1,
                srgb: false,
                ..options
            };
            bytes = self.converter.png_to_dds(png_path, &single)?;
        }

        let size = bytes.len();
        let fitted = fit_to_slot(bytes, slot_len);
        if fitted.is_none() {
            tracing::debug!("Generated DDS ({} bytes) exceeds slot of {}", size, slot_len);
        }
        Ok(fitted)
    }

    /// Use the extracted `.dds` as the replacement, or `None` to skip.
    fn existing_dds(
        &self,
        slot: &Slot,
        dds_path: &Path,
        log: &mut RepairLog,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<Vec<u8>>> {
        if slot.mips > 1 {
            ui.message(&format!(
                "    Regenerating {} mipmaps for {}...",
                slot.mips, slot.name
            ));
            if let Err(e) = self.converter.regenerate_mipmaps(dds_path, slot.mips) {
                ui.warning(&format!("    texconv failed: {}", e));
            }
        }

        let bytes = fs::read(dds_path)?;
        let Some(new_format) = header_format(&bytes) else {
            log.note(
                ui,
                format!(
                    "{} at 0x{:X}: Could not determine DDS format - skipping.",
                    slot.name, slot.offset
                ),
            );
            return Ok(None);
        };

        if new_format != slot.format {
            log.note(
                ui,
                format!(
                    "{} at 0x{:X}: Format mismatch - expected {}, got {}.",
                    slot.name, slot.offset, slot.format, new_format
                ),
            );
        } else {
            ui.message(&format!(
                "{}. {} matches format ({}), mipmaps: {}",
                slot.number, slot.name, slot.format, slot.mips
            ));
        }

        let size = bytes.len();
        match fit_to_slot(bytes, slot.len) {
            Some(fitted) => Ok(Some(fitted)),
            None => {
                log.note(
                    ui,
                    format!(
                        "{} file size ({}) larger than embedded space ({}) - skipping replacement.",
                        slot.name, size, slot.len
                    ),
                );
                Ok(None)
            }
        }
    }
}
