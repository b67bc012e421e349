//! PNG export for composited bots

use crate::io::error::{GeneratorError, Result};
use image::RgbaImage;
use std::path::Path;

/// Save a composited bot as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_bot_png(bot: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| GeneratorError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
    }

    bot.save(output_path)
        .map_err(|source| GeneratorError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;

    Ok(())
}
