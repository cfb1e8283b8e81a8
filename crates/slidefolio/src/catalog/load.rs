use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{Catalog, CatalogInfo, Section, SectionId, Slide, SlideId};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    info: CatalogInfo,
    #[serde(default)]
    sections: Vec<SectionEntry>,
}

#[derive(Debug, Deserialize)]
struct SectionEntry {
    id: SectionId,
    name: String,
    color: String,
    #[serde(default)]
    slides: Vec<SlideEntry>,
}

#[derive(Debug, Deserialize)]
struct SlideEntry {
    id: SlideId,
    title: String,
    #[serde(default, alias = "content")]
    body: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    video: Option<String>,
}

impl From<SlideEntry> for Slide {
    fn from(entry: SlideEntry) -> Self {
        let mut slide = Slide::new(entry.id, entry.title, entry.body);
        if let Some(image) = entry.image {
            slide = slide.with_image(image);
        }
        if let Some(video) = entry.video {
            slide = slide.with_video(video);
        }
        slide
    }
}

/// Parse a catalog from YAML text.
pub fn from_yaml_str(content: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_yaml::from_str(content)?;
    let sections = file
        .sections
        .into_iter()
        .map(|s| {
            let slides = s.slides.into_iter().map(Slide::from).collect();
            Section::new(s.id, s.name, s.color, slides)
        })
        .collect();
    let catalog = Catalog::new(file.info, sections)?;
    if catalog.slide_count() == 0 {
        tracing::warn!("catalog has no slides");
    }
    Ok(catalog)
}

/// Read and parse a catalog file.
pub fn from_path(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    from_yaml_str(&content).with_context(|| format!("Invalid catalog {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Media;

    const SAMPLE: &str = r##"
info:
  title: Harbor Days
  chips: [Harbor, "10:00 - 17:00"]
sections:
  - id: 1
    name: Films
    color: "#7eb8c9"
    slides:
      - id: 11
        title: Ferry
        content: Morning crossing
        video: https://www.youtube.com/embed/dQw4w9WgXcQ
      - id: 12
        title: Pier
        body: Evening walk
        image: /images/pier.jpg
  - id: 2
    name: Notes
    color: "#8bc9a8"
    slides:
      - id: 21
        title: Tickets
"##;

    #[test]
    fn test_load_sections_and_slides() {
        let catalog = from_yaml_str(SAMPLE).unwrap();
        assert_eq!(catalog.info.title.as_deref(), Some("Harbor Days"));
        assert_eq!(catalog.info.chips.len(), 2);
        let ids: Vec<SlideId> = catalog.flatten().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![11, 12, 21]);
    }

    #[test]
    fn test_load_accepts_content_alias_and_classifies_media() {
        let catalog = from_yaml_str(SAMPLE).unwrap();
        let flat = catalog.flatten();
        assert_eq!(flat[0].slide.body, "Morning crossing");
        assert!(matches!(flat[0].slide.media, Media::RemoteVideo { .. }));
        assert_eq!(flat[1].slide.media, Media::Image("/images/pier.jpg".to_string()));
        assert_eq!(flat[2].slide.body, "");
        assert_eq!(flat[2].slide.media, Media::None);
    }

    #[test]
    fn test_load_rejects_duplicate_ids() {
        let yaml = r##"
sections:
  - id: 1
    name: A
    color: "#111111"
    slides:
      - { id: 5, title: x }
      - { id: 5, title: y }
"##;
        let err = from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate slide id 5"));
    }

    #[test]
    fn test_load_empty_document() {
        let catalog = from_yaml_str("{}").unwrap();
        assert_eq!(catalog.slide_count(), 0);
    }

    #[test]
    fn test_load_missing_file() {
        let err = from_path(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
