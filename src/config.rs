//! Fixed settings and the parsed run configuration.
use std::path::PathBuf;

/// Extension of Xcode color theme files.
pub const THEME_EXTENSION: &str = "xccolortheme";

/// Extension of the font files copied out of the archive.
pub const FONT_EXTENSION: &str = "ttf";

/// Environment variable that overrides the resource bundle location.
pub const RESOURCES_ENV: &str = "HEXXA_RESOURCES";

/// Environment variable holding the console log filter.
pub const LOG_ENV: &str = "HEXXA_LOG";

/// A downloadable font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    /// Family name used in messages.
    pub family: &'static str,
    /// Release version of the archive.
    pub version: &'static str,
    /// Version-pinned archive URL.
    pub url: &'static str,
    /// File whose presence means the family is already installed.
    pub reference_file: &'static str,
}

/// The font the Hexxa theme is designed around.
pub const JETBRAINS_MONO: FontSpec = FontSpec {
    family: "JetBrains Mono",
    version: "2.304",
    url: "https://github.com/JetBrains/JetBrainsMono/releases/download/v2.304/JetBrainsMono-2.304.zip",
    reference_file: "JetBrainsMono-Regular.ttf",
};

/// Run configuration produced by the option parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory theme files are copied into.
    pub destination: PathBuf,
    /// Report actions without touching the filesystem.
    pub dry_run: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            dry_run: false,
        }
    }
}

/// The user's home directory, falling back to the working directory.
#[must_use]
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// `~/Library/Developer/Xcode/UserData/FontAndColorThemes`
#[must_use]
pub fn default_destination() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Developer")
        .join("Xcode")
        .join("UserData")
        .join("FontAndColorThemes")
}

/// `~/Library/Fonts`
#[must_use]
pub fn fonts_dir() -> PathBuf {
    home_dir().join("Library").join("Fonts")
}
