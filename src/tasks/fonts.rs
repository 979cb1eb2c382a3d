//! Making sure the theme's font family is installed.
use std::ffi::OsStr;
use std::fmt;
use std::path::Path;

use super::{Context, Task, TaskResult};
use crate::config::{FONT_EXTENSION, FontSpec, JETBRAINS_MONO};
use crate::error::InstallError;
use crate::exec;
use crate::resources::{font_archive, fs};

/// Largest archive body accepted from the network.
const MAX_ARCHIVE_BYTES: u64 = 64 * 1024 * 1024;

/// Name of the extraction tool.
const UNZIP: &str = "unzip";

/// Downloads a URL into memory.
#[cfg_attr(test, mockall::automock)]
pub trait Fetch {
    /// Fetch the full response body of `url`.
    ///
    /// # Errors
    ///
    /// Returns the transport or HTTP status error.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ureq::Error>;
}

/// Unpacks an archive into a directory.
#[cfg_attr(test, mockall::automock)]
pub trait Extract {
    /// Extract `archive` into `dest`, creating `dest` if needed.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::UnzipUnavailable`] if the tool cannot be
    /// launched, or [`InstallError::FontExtractionFailed`] if it fails.
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), InstallError>;
}

/// Blocking HTTP(S) fetcher backed by `ureq`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ureq::Error> {
        let mut response = ureq::get(url).call()?;
        response
            .body_mut()
            .with_config()
            .limit(MAX_ARCHIVE_BYTES)
            .read_to_vec()
    }
}

/// Extractor that shells out to `unzip`.
#[derive(Debug, Clone)]
pub struct Unzip {
    tool: String,
}

impl Unzip {
    /// Extract with `tool` instead of `unzip`. It is resolved on `PATH` and
    /// invoked with `unzip`'s arguments.
    #[must_use]
    pub fn with_tool(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

impl Default for Unzip {
    fn default() -> Self {
        Self::with_tool(UNZIP)
    }
}

impl Extract for Unzip {
    fn extract(&self, archive: &Path, dest: &Path) -> Result<(), InstallError> {
        let unavailable = || InstallError::UnzipUnavailable {
            tool: self.tool.clone(),
        };
        let program = exec::which(&self.tool).ok_or_else(unavailable)?;
        let args = [
            OsStr::new("-q"),
            OsStr::new("-o"),
            archive.as_os_str(),
            OsStr::new("-d"),
            dest.as_os_str(),
        ];
        let result = exec::run_unchecked(&program, &args).map_err(|_| unavailable())?;
        if !result.success {
            tracing::debug!(
                tool = %self.tool,
                status = ?result.code,
                "extraction failed: {}",
                result.stderr.trim()
            );
            return Err(InstallError::FontExtractionFailed {
                status: result.code.unwrap_or(-1),
            });
        }
        Ok(())
    }
}

/// Download and install a font family unless it is already present.
pub struct ProvisionFont {
    font: FontSpec,
    fetcher: Box<dyn Fetch>,
    extractor: Box<dyn Extract>,
}

impl ProvisionFont {
    /// Provision `font` using the given fetcher and extractor.
    #[must_use]
    pub fn new(font: FontSpec, fetcher: Box<dyn Fetch>, extractor: Box<dyn Extract>) -> Self {
        Self {
            font,
            fetcher,
            extractor,
        }
    }

    /// Stage the archive in a temporary directory, extract it and copy the
    /// font files into the fonts directory. Returns the number of files
    /// installed.
    ///
    /// The staging directory is removed when this returns, whatever the
    /// outcome.
    fn install_archive(&self, bytes: &[u8], ctx: &Context) -> Result<usize, InstallError> {
        let staging = tempfile::Builder::new()
            .prefix("hexxa-font-")
            .tempdir()
            .map_err(InstallError::io("create staging directory in", std::env::temp_dir()))?;

        let archive = staging.path().join(archive_name(self.font.url));
        std::fs::write(&archive, bytes).map_err(InstallError::io("write", &archive))?;

        let root = staging.path().join("extracted");
        self.extractor.extract(&archive, &root)?;

        let payload = font_archive::locate_payload(&root)?;
        ctx.log.debug(&format!("font payload: {}", payload.display()));

        let files = fs::files_with_extension(&payload, FONT_EXTENSION)?;
        if files.is_empty() {
            return Err(InstallError::MissingFontFiles(payload));
        }
        for file in &files {
            let target = fs::replace_into(file, &ctx.fonts_dir)?;
            ctx.log.debug(&format!("installed {}", target.display()));
        }
        Ok(files.len())
    }
}

impl Default for ProvisionFont {
    fn default() -> Self {
        Self::new(
            JETBRAINS_MONO,
            Box::new(HttpFetcher),
            Box::new(Unzip::default()),
        )
    }
}

impl fmt::Debug for ProvisionFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvisionFont")
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

impl Task for ProvisionFont {
    fn name(&self) -> &str {
        "Provision font"
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult, InstallError> {
        let font = &self.font;
        if ctx.fonts_dir.join(font.reference_file).exists() {
            ctx.log.info(&format!("{} is already installed", font.family));
            return Ok(TaskResult::Skipped("already installed".to_string()));
        }

        if ctx.dry_run() {
            ctx.log.dry_run(&format!(
                "Would download {} {} from {} into {}",
                font.family,
                font.version,
                font.url,
                ctx.fonts_dir.display()
            ));
            return Ok(TaskResult::DryRun);
        }

        fs::ensure_dir(&ctx.fonts_dir)?;
        ctx.log
            .info(&format!("Downloading {} {}", font.family, font.version));
        let bytes = self
            .fetcher
            .fetch(font.url)
            .map_err(|source| InstallError::FontDownloadFailed {
                url: font.url.to_string(),
                source,
            })?;
        ctx.log.debug(&format!("downloaded {} bytes", bytes.len()));

        let count = self.install_archive(&bytes, ctx)?;
        ctx.log.info(&format!(
            "Installed {count} {} font files to {}",
            font.family,
            ctx.fonts_dir.display()
        ));
        if !ctx.fonts_dir.join(font.reference_file).exists() {
            ctx.log.warn(&format!(
                "{} was not in the archive; the font will be downloaded again next run",
                font.reference_file
            ));
        }
        Ok(TaskResult::Ok)
    }
}

/// File name for the staged archive, taken from the URL's last segment.
fn archive_name(url: &str) -> &str {
    url.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("font.zip")
}
