//! Template loading and atomic PNG export

use crate::compose::template::Template;
use crate::io::error::{AutotileError, Result, output_io};
use image::{ImageFormat, ImageReader, RgbaImage};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Open, decode and validate a template strip
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The contents are not a decodable image
/// - The dimensions are not five square cells of even size
pub fn load_template(path: &Path) -> Result<Template> {
    let decoded = ImageReader::open(path)
        .map_err(|e| AutotileError::TemplateLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .with_guessed_format()
        .map_err(|e| AutotileError::TemplateLoad {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?
        .decode()
        .map_err(|e| AutotileError::TemplateLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    Template::from_image(decoded)
}

// Staged files get the mode a plain create would, rather than owner-only
#[cfg(unix)]
fn staging_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = tempfile::Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn staging_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}

/// Save the composed canvas, replacing `output_path` in a single step
///
/// The encoder is chosen from the file extension. Pixels are written to a
/// temporary file next to the destination which is then renamed over it,
/// so a failed save never leaves a truncated image behind.
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not name a supported image format
/// - The destination directory does not exist or is not writable
/// - Encoding or renaming fails
pub fn save_canvas(canvas: &RgbaImage, output_path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(output_path).map_err(|e| AutotileError::OutputSave {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    let directory = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let staging = staging_builder()
        .tempfile_in(directory)
        .map_err(|e| output_io(output_path, e))?;

    let mut writer = BufWriter::new(staging);
    canvas
        .write_to(&mut writer, format)
        .map_err(|e| AutotileError::OutputSave {
            path: output_path.to_path_buf(),
            source: e,
        })?;
    writer.flush().map_err(|e| output_io(output_path, e))?;

    let staged = writer
        .into_inner()
        .map_err(|e| output_io(output_path, e.into_error()))?;
    staged
        .persist(output_path)
        .map_err(|e| output_io(output_path, e.error))?;

    tracing::debug!(path = %output_path.display(), ?format, "Saved tileset");

    Ok(())
}
