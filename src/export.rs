//! Export the dictionary as a browser-side data file.
//!
//! Produces `const SLANG_DATA = {...};` so the frontend can translate
//! offline without calling the API.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::dictionary::SlangDictionary;
use crate::error::{Result, SlangError};

pub const DEFAULT_EXPORT_PATH: &str = "frontend/js/slangData.js";

/// Render the JavaScript module text for `dict`.
pub fn render_js(dict: &SlangDictionary, source_name: &str) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    dict.serialize(&mut ser)?;
    let json = String::from_utf8(buf).map_err(|e| SlangError::Export(e.to_string()))?;

    Ok(format!(
        "/**\n * Auto-generated from {}\n * Direct mapping for offline translation\n */\nconst SLANG_DATA = {};\n",
        source_name, json
    ))
}

/// Write the data file, creating parent directories. Returns the entry count.
pub fn export_js(dict: &SlangDictionary, source_name: &str, output: &Path) -> Result<usize> {
    let content = render_js(dict, source_name)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, content)?;

    info!("Wrote {} entries to {}", dict.len(), output.display());
    Ok(dict.len())
}
