//! Book icon generator
//!
//! Procedurally draws the TuVung "book" glyph (cover, spine, page edge and two
//! title lines) and saves it as RGBA PNG files for use as application icons.
//!
//! # Example
//!
//! ```no_run
//! use bookicon::IconConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconConfig::default();
//! bookicon::generate_icons(&config, |icon| {
//!     println!("Created {} ({}x{})", icon.file_name, icon.size, icon.size);
//! })?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

pub mod error;
pub use error::{Error, Result};

pub mod rendering;
pub use rendering::{render_book, RenderedIcon};

/// One output file: pixel size plus file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: String,
}

impl IconTarget {
    pub fn new(size: u32, file_name: impl Into<String>) -> Self {
        Self {
            size,
            file_name: file_name.into(),
        }
    }
}

/// Configuration for a generation run
///
/// The defaults write `icon16.png`, `icon48.png` and `icon128.png` into the
/// current directory.
///
/// # Examples
///
/// ```
/// let cfg = bookicon::IconConfig::default();
/// assert_eq!(cfg.targets.len(), 3);
/// assert_eq!(cfg.targets[0].file_name, "icon16.png");
/// ```
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Directory the files are written into; created if missing
    pub out_dir: PathBuf,
    /// Icons to draw, in order
    pub targets: Vec<IconTarget>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            targets: vec![
                IconTarget::new(16, "icon16.png"),
                IconTarget::new(48, "icon48.png"),
                IconTarget::new(128, "icon128.png"),
            ],
        }
    }
}

/// A file written by `generate_icons`
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub size: u32,
    pub file_name: String,
    pub path: PathBuf,
}

/// Render the book glyph at `size` and write it to `path` as PNG.
pub fn render_icon(size: u32, path: impl AsRef<Path>) -> Result<RenderedIcon> {
    let path = path.as_ref();
    let icon = render_book(size)?;
    fs::write(path, &icon.png_data).map_err(|source| Error::WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} ({} bytes)", path.display(), icon.png_data.len());
    Ok(icon)
}

/// Render every configured target in order.
///
/// `on_created` runs right after each file lands on disk. The first failure
/// aborts the run; files already written are left in place.
pub fn generate_icons<F>(config: &IconConfig, mut on_created: F) -> Result<Vec<GeneratedIcon>>
where
    F: FnMut(&GeneratedIcon),
{
    fs::create_dir_all(&config.out_dir).map_err(|source| Error::WriteError {
        path: config.out_dir.clone(),
        source,
    })?;

    let mut generated = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        let path = config.out_dir.join(&target.file_name);
        render_icon(target.size, &path)?;
        let icon = GeneratedIcon {
            size: target.size,
            file_name: target.file_name.clone(),
            path,
        };
        on_created(&icon);
        generated.push(icon);
    }
    Ok(generated)
}
