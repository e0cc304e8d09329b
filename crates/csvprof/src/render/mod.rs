//! Report renderers: JSON and Markdown.

mod json;
mod markdown;

pub use json::{render_json, write_json};
pub use markdown::{render_markdown, write_markdown};

use std::fs;
use std::path::Path;

use crate::error::{ProfileError, Result};

/// Write a rendered document, creating parent directories as needed.
fn write_document(path: &Path, contents: &str) -> Result<()> {
    let io_err = |e| ProfileError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}
