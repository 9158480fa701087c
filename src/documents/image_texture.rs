//! Image textures. The file is never parsed; the path is the identifier.

use std::path::{Component, Path};

use super::builder::DocumentBuilder;
use super::symbols::IMAGE_TEXTURE;
use super::BuildError;

pub const KIND: &str = "image_texture";

pub const PATTERNS: &[&str] = &["**/textures/**/*.png", "**/textures/**/*.tga"];

/// Pack-relative identifier of a texture file, e.g.
/// `RP/textures/entity/pig/pig.png` → `textures/entity/pig/pig`.
pub fn texture_identifier(path: &Path) -> Option<String> {
    let stem = path.with_extension("");
    let segments: Vec<&str> = stem
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    let start = segments.iter().rposition(|s| *s == "textures")?;
    if start + 1 >= segments.len() {
        return None;
    }
    Some(segments[start..].join("/"))
}

pub fn build(builder: &mut DocumentBuilder<'_>) -> Result<(), BuildError> {
    let path = builder
        .path()
        .map(Path::to_path_buf)
        .ok_or(BuildError::MissingField("path"))?;
    let identifier =
        texture_identifier(&path).ok_or_else(|| BuildError::InvalidPath(path.clone()))?;
    builder
        .define_document(IMAGE_TEXTURE, &identifier)
        .ok_or(BuildError::InvalidPath(path))?;
    Ok(())
}
