// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed environment (resource bundle, home
// directory, destination) plus fake fetchers and extractors, so each test
// can run the installer in isolation without network access or `unzip`.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use hexxa_install::config::JETBRAINS_MONO;
use hexxa_install::error::InstallError;
use hexxa_install::tasks::fonts::{Extract, Fetch};

/// An isolated installer environment backed by a [`tempfile::TempDir`].
///
/// Layout:
/// - `Resources/Themes/`      bundled themes
/// - `home/`                  stand-in for the user's home directory
/// - `out/`                   install destination (not created up front)
pub struct TestEnv {
    pub root: tempfile::TempDir,
}

impl TestEnv {
    /// Create an environment with an empty themes directory.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("Resources/Themes"))
            .expect("create themes dir");
        std::fs::create_dir_all(root.path().join("home")).expect("create home dir");
        Self { root }
    }

    pub fn bundle(&self) -> PathBuf {
        self.root.path().join("Resources")
    }

    pub fn themes(&self) -> PathBuf {
        self.bundle().join("Themes")
    }

    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// `~/Library/Fonts` inside the fake home directory.
    pub fn fonts_dir(&self) -> PathBuf {
        self.home().join("Library/Fonts")
    }

    pub fn destination(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Sorted file names directly inside `dir`.
    pub fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .expect("read dir")
            .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

/// Fluent builder for [`TestEnv`].
pub struct TestEnvBuilder {
    env: TestEnv,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self { env: TestEnv::new() }
    }

    /// Add a file to the bundled themes directory. The content is the name,
    /// so copies can be told apart.
    pub fn with_bundled_file(self, name: &str) -> Self {
        std::fs::write(self.env.themes().join(name), name).expect("write bundled file");
        self
    }

    /// Remove the themes directory from the bundle.
    pub fn without_themes_dir(self) -> Self {
        std::fs::remove_dir_all(self.env.themes()).expect("remove themes dir");
        self
    }

    /// Mark the font family as installed in the fake home directory.
    pub fn with_installed_font(self) -> Self {
        let fonts = self.env.fonts_dir();
        std::fs::create_dir_all(&fonts).expect("create fonts dir");
        std::fs::write(fonts.join(JETBRAINS_MONO.reference_file), "").expect("write font");
        self
    }

    pub fn build(self) -> TestEnv {
        self.env
    }
}

/// A fetcher that returns fixed bytes and counts calls.
#[derive(Clone, Default)]
pub struct CountingFetcher {
    pub calls: Arc<AtomicUsize>,
    pub fail: bool,
}

impl CountingFetcher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetch for CountingFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, ureq::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ureq::Error::StatusCode(404));
        }
        Ok(b"PK\x03\x04".to_vec())
    }
}

/// An extractor that writes a fixed set of files under the extraction root
/// and remembers where that root was.
#[derive(Clone)]
pub struct LayoutExtractor {
    files: &'static [&'static str],
    pub root: Arc<Mutex<Option<PathBuf>>>,
}

impl LayoutExtractor {
    pub fn new(files: &'static [&'static str]) -> Self {
        Self {
            files,
            root: Arc::new(Mutex::new(None)),
        }
    }

    /// The extraction root, once extraction has run.
    pub fn extracted_root(&self) -> Option<PathBuf> {
        self.root.lock().expect("lock").clone()
    }
}

impl Extract for LayoutExtractor {
    fn extract(&self, _archive: &Path, dest: &Path) -> Result<(), InstallError> {
        for file in self.files {
            let path = dest.join(file);
            std::fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
            std::fs::write(&path, b"font").expect("write font");
        }
        *self.root.lock().expect("lock") = Some(dest.to_path_buf());
        Ok(())
    }
}

/// Archive layout of the upstream JetBrains Mono release.
pub const NESTED_LAYOUT: &[&str] = &[
    "fonts/ttf/JetBrainsMono-Regular.ttf",
    "fonts/ttf/JetBrainsMono-Bold.ttf",
    "fonts/webfonts/JetBrainsMono-Regular.woff2",
    "OFL.txt",
];

/// Archive with the fonts in a top-level `ttf/` directory.
pub const DIRECT_LAYOUT: &[&str] = &[
    "ttf/JetBrainsMono-Regular.ttf",
    "ttf/JetBrainsMono-Italic.ttf",
];
