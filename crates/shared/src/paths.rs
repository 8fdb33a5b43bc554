//! Output path utilities for rendered pages.
//!
//! Centralizes where each page of the site lands on disk.

use crate::config::SiteConfig;
use std::path::{Path, PathBuf};

/// Pages the portal can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Shows,
    Movies,
}

impl Page {
    pub fn as_str(&self) -> &str {
        match self {
            Page::Home => "home",
            Page::Shows => "shows",
            Page::Movies => "movies",
        }
    }
}

/// File path manager for rendered pages
#[derive(Debug, Clone)]
pub struct SitePaths {
    root: PathBuf,
    home_page: String,
    shows_page: String,
    movies_page: String,
}

impl SitePaths {
    /// Create site paths rooted at the given output directory
    pub fn new(root: impl AsRef<Path>, site: &SiteConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            home_page: site.home_page.clone(),
            shows_page: site.shows_page.clone(),
            movies_page: site.movies_page.clone(),
        }
    }

    /// Get the root output directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name a page is published under
    pub fn file_name(&self, page: Page) -> &str {
        match page {
            Page::Home => &self.home_page,
            Page::Shows => &self.shows_page,
            Page::Movies => &self.movies_page,
        }
    }

    /// Full output path for a page
    pub fn page_file(&self, page: Page) -> PathBuf {
        self.root.join(self.file_name(page))
    }

    /// Create the output directory
    pub fn create_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)
    }
}
