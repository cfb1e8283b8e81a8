use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;
use rayon::prelude::*;

enum Entry {
    Decoded(egui::ColorImage),
    Texture(egui::TextureHandle),
    Failed,
}

/// Decoded images and their uploaded textures, keyed by media reference.
pub struct ImageCache {
    base_path: PathBuf,
    entries: RefCell<HashMap<String, Entry>>,
}

impl ImageCache {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Decode every reference up front, in parallel. Textures are created
    /// lazily on the UI thread the first time each image is drawn.
    pub fn preload<'a>(&self, references: impl IntoIterator<Item = &'a str>) {
        let pending: Vec<&str> = {
            let entries = self.entries.borrow();
            references
                .into_iter()
                .filter(|r| !entries.contains_key(*r))
                .collect()
        };
        if pending.is_empty() {
            return;
        }

        let base = &self.base_path;
        let decoded: Vec<(String, Entry)> = pending
            .par_iter()
            .map(|reference| {
                let entry = match decode(base, reference) {
                    Some(image) => Entry::Decoded(image),
                    None => Entry::Failed,
                };
                (reference.to_string(), entry)
            })
            .collect();

        tracing::debug!(count = decoded.len(), "images decoded");
        self.entries.borrow_mut().extend(decoded);
    }

    /// Texture for `reference`, decoding it now if it was not preloaded.
    pub fn get_or_load(&self, ctx: &egui::Context, reference: &str) -> Option<egui::TextureHandle> {
        let mut entries = self.entries.borrow_mut();
        let entry = entries.remove(reference).unwrap_or_else(|| {
            match decode(&self.base_path, reference) {
                Some(image) => Entry::Decoded(image),
                None => Entry::Failed,
            }
        });

        let (entry, texture) = match entry {
            Entry::Texture(handle) => (Entry::Texture(handle.clone()), Some(handle)),
            Entry::Decoded(image) => {
                let handle = ctx.load_texture(reference, image, egui::TextureOptions::LINEAR);
                (Entry::Texture(handle.clone()), Some(handle))
            }
            Entry::Failed => (Entry::Failed, None),
        };
        entries.insert(reference.to_string(), entry);
        texture
    }

    /// Forget everything, e.g. after the catalog was reloaded.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Local file path for a media reference. Remote URLs are not fetched.
/// A leading `/` is relative to the base path, like a web base URL.
pub fn resolve(base: &Path, reference: &str) -> Option<PathBuf> {
    let reference = reference.trim();
    if reference.is_empty() || reference.contains("://") || reference.starts_with("//") {
        return None;
    }
    Some(base.join(reference.trim_start_matches('/')))
}

fn decode(base: &Path, reference: &str) -> Option<egui::ColorImage> {
    let Some(path) = resolve(base, reference) else {
        tracing::debug!(reference, "not a local image, skipping");
        return None;
    };
    let image = match image::open(&path) {
        Ok(image) => image.into_rgba8(),
        Err(e) => {
            tracing::warn!("Failed to load image {}: {e}", path.display());
            return None;
        }
    };
    let size = [image.width() as usize, image.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_and_rooted() {
        let base = Path::new("/srv/brochure");
        assert_eq!(
            resolve(base, "/images/a.jpg"),
            Some(PathBuf::from("/srv/brochure/images/a.jpg"))
        );
        assert_eq!(
            resolve(base, "images/a.jpg"),
            Some(PathBuf::from("/srv/brochure/images/a.jpg"))
        );
    }

    #[test]
    fn test_resolve_skips_remote() {
        let base = Path::new(".");
        assert_eq!(resolve(base, "https://img.youtube.com/vi/x/hqdefault.jpg"), None);
        assert_eq!(resolve(base, "//cdn.example.com/a.jpg"), None);
        assert_eq!(resolve(base, "  "), None);
    }

    #[test]
    fn test_missing_file_is_not_decoded() {
        let cache = ImageCache::new(PathBuf::from("/nonexistent"));
        cache.preload(["/images/missing.jpg"]);
        let entries = cache.entries.borrow();
        assert!(matches!(
            entries.get("/images/missing.jpg"),
            Some(Entry::Failed)
        ));
    }
}
