//! Running Microsoft's texconv.
//!
//! texconv writes its output into a directory, so every call gets a fresh
//! scratch directory from `tempfile` and the produced `.dds` is read back.
//! The executable is downloaded from the DirectXTex releases the first time
//! it is needed.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context};

use crate::error::{Result, TexkitError};
use crate::shell::{display_command, execute, CommandOptions};

use super::convert::EncodeOptions;

/// Where texconv is downloaded from.
pub const TEXCONV_URL: &str =
    "https://github.com/microsoft/DirectXTex/releases/download/oct2025/texconv.exe";

/// Default location of the texconv executable.
pub const DEFAULT_TEXCONV: &str = "texconv.exe";

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// A texconv executable at a known path.
#[derive(Debug, Clone)]
pub struct Texconv {
    path: PathBuf,
    download_url: String,
}

impl Texconv {
    /// Use texconv at `path`, downloading it there if it is missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            download_url: TEXCONV_URL.to_string(),
        }
    }

    /// Download from `url` instead of the DirectXTex release.
    pub fn with_download_url(mut self, url: &str) -> Self {
        self.download_url = url.to_string();
        self
    }

    /// Path of the executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the executable exists, downloading it if needed.
    pub fn ensure(&self) -> Result<&Path> {
        if self.path.exists() {
            return Ok(&self.path);
        }
        tracing::info!("Downloading texconv from {}", self.download_url);
        download(&self.download_url, &self.path)?;
        Ok(&self.path)
    }

    /// Encode `png` and return the produced DDS bytes.
    pub fn encode(&self, png: &Path, options: &EncodeOptions) -> Result<Vec<u8>> {
        let scratch = tempfile::Builder::new().prefix("png_to_dds_").tempdir()?;
        let args = encode_args(png, options, scratch.path());
        self.run(&args)?;

        let generated = find_generated(scratch.path(), png)?;
        Ok(fs::read(generated)?)
    }

    /// Rebuild the mip chain of `dds` in place.
    pub fn regenerate_mipmaps(&self, dds: &Path, mip_count: u32) -> Result<()> {
        let parent = match dds.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let scratch = tempfile::Builder::new()
            .prefix("_temp_mipmaps")
            .tempdir_in(parent)?;
        let args = mipmap_args(dds, mip_count, scratch.path());
        self.run(&args)?;

        let generated = find_generated(scratch.path(), dds)?;
        fs::rename(generated, dds)?;
        Ok(())
    }

    fn run(&self, args: &[String]) -> Result<()> {
        let program = std::path::absolute(self.ensure()?)?
            .to_string_lossy()
            .into_owned();
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let options = CommandOptions {
            capture_stdout: true,
            capture_stderr: true,
        };

        let result = execute(&program, &arg_refs, &options)?;
        if !result.success {
            tracing::debug!("texconv stderr: {}", result.stderr);
            return Err(TexkitError::CommandFailed {
                command: display_command(&program, &arg_refs),
                code: result.exit_code,
            });
        }
        Ok(())
    }
}

/// Arguments for encoding a PNG into `out_dir`.
pub fn encode_args(png: &Path, options: &EncodeOptions, out_dir: &Path) -> Vec<String> {
    let mut args = vec![
        "-ft".to_string(),
        "DDS".to_string(),
        "-f".to_string(),
        options.format.to_string(),
        "-m".to_string(),
        options.mip_count.to_string(),
    ];
    if options.srgb {
        args.push("-srgb".to_string());
    }
    if options.dx10_header {
        args.push("-dx10".to_string());
    }
    args.extend([
        "-y".to_string(),
        "-o".to_string(),
        out_dir.display().to_string(),
        png.display().to_string(),
    ]);
    args
}

/// Arguments for regenerating the mip chain of a DDS into `out_dir`.
pub fn mipmap_args(dds: &Path, mip_count: u32, out_dir: &Path) -> Vec<String> {
    vec![
        "-m".to_string(),
        mip_count.to_string(),
        "-nologo".to_string(),
        "-y".to_string(),
        "-o".to_string(),
        out_dir.display().to_string(),
        dds.display().to_string(),
    ]
}

/// The `.dds` texconv wrote for `source`: `<stem>.dds`, else the first one.
fn find_generated(out_dir: &Path, source: &Path) -> Result<PathBuf> {
    if let Some(stem) = source.file_stem() {
        let expected = out_dir.join(format!("{}.dds", stem.to_string_lossy()));
        if expected.exists() {
            return Ok(expected);
        }
    }

    let mut candidates: Vec<PathBuf> = fs::read_dir(out_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("dds"))
        })
        .collect();
    candidates.sort();
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| TexkitError::Conversion {
            path: source.to_path_buf(),
            message: "texconv did not produce a .dds file".to_string(),
        })
}

fn download(url: &str, destination: &Path) -> anyhow::Result<()> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()
        .context("Failed to create HTTP client")?;
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("Failed to fetch {}", url))?;

    if !response.status().is_success() {
        return Err(anyhow!("HTTP {} fetching {}", response.status(), url));
    }

    let bytes = response
        .bytes()
        .with_context(|| format!("Failed to read response from {}", url))?;
    fs::write(destination, &bytes)
        .with_context(|| format!("Failed to save texconv to {}", destination.display()))?;
    make_executable(destination)?;
    tracing::info!("Saved texconv to {}", destination.display());
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .with_context(|| format!("Failed to mark {} executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}
