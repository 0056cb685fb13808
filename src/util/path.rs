//! Output path derivation.

use std::path::{Path, PathBuf};

/// Conventional extension of the output document.
pub const GRAPHML_EXTENSION: &str = "graphml";

/// Derive the default output path from the input path.
///
/// Replaces the input's final extension with `.graphml`; an input without a
/// recognizable extension gets `.graphml` appended instead of being
/// overwritten in place.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use lyricgraph::util::path::derive_output_path;
///
/// let output = derive_output_path(Path::new("songs/imagine.txt"));
/// assert_eq!(output, Path::new("songs/imagine.graphml").to_path_buf());
/// ```
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension(GRAPHML_EXTENSION)
}
