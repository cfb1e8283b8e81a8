pub mod builtin;
pub mod load;
pub mod media;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use media::Media;

pub type SlideId = u32;
pub type SectionId = u32;

/// One unit of content: title, body and an optional media reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    /// Display media, classified once from `image` and `video`.
    #[serde(skip)]
    pub media: Media,
}

impl Slide {
    pub fn new(id: SlideId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            image: None,
            video: None,
            media: Media::None,
        }
    }

    pub fn with_image(mut self, path: impl Into<String>) -> Self {
        self.image = Some(path.into());
        self.reclassify();
        self
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video = Some(url.into());
        self.reclassify();
        self
    }

    fn reclassify(&mut self) {
        self.media = Media::classify(self.image.as_deref(), self.video.as_deref());
    }
}

/// A named, colored group of slides. Slide order is display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub name: String,
    /// Accent color token, usually a hex string such as `#7eb8c9`.
    pub color: String,
    pub slides: Vec<Arc<Slide>>,
}

impl Section {
    pub fn new(
        id: SectionId,
        name: impl Into<String>,
        color: impl Into<String>,
        slides: Vec<Slide>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            slides: slides.into_iter().map(Arc::new).collect(),
        }
    }
}

/// Page chrome shown around the card grid: hero header and footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kicker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contact: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hours: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate slide id {id} (in section {first_section} and section {second_section})")]
    DuplicateSlideId {
        id: SlideId,
        first_section: SectionId,
        second_section: SectionId,
    },

    #[error("duplicate section id {0}")]
    DuplicateSectionId(SectionId),
}

/// An immutable, validated collection of sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub info: CatalogInfo,
    sections: Vec<Section>,
}

/// A slide annotated with its owning section, in flattened display order.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatSlide {
    pub slide: Arc<Slide>,
    pub section_id: SectionId,
    pub color: String,
}

impl FlatSlide {
    pub fn id(&self) -> SlideId {
        self.slide.id
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate slide or section identifiers.
    pub fn new(info: CatalogInfo, sections: Vec<Section>) -> Result<Self, CatalogError> {
        let mut section_ids: Vec<SectionId> = Vec::with_capacity(sections.len());
        let mut owners: HashMap<SlideId, SectionId> = HashMap::new();

        for section in &sections {
            if section_ids.contains(&section.id) {
                return Err(CatalogError::DuplicateSectionId(section.id));
            }
            section_ids.push(section.id);

            for slide in &section.slides {
                if let Some(&first_section) = owners.get(&slide.id) {
                    return Err(CatalogError::DuplicateSlideId {
                        id: slide.id,
                        first_section,
                        second_section: section.id,
                    });
                }
                owners.insert(slide.id, section.id);
            }
        }

        tracing::debug!(
            sections = sections.len(),
            slides = owners.len(),
            "catalog constructed"
        );
        Ok(Self { info, sections })
    }

    /// The brochure compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        builtin::catalog()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn slide_count(&self) -> usize {
        self.sections.iter().map(|s| s.slides.len()).sum()
    }

    /// All slides in section order, then slide order, annotated with their
    /// section's id and accent color.
    pub fn flatten(&self) -> Vec<FlatSlide> {
        self.sections
            .iter()
            .flat_map(|section| {
                section.slides.iter().map(move |slide| FlatSlide {
                    slide: Arc::clone(slide),
                    section_id: section.id,
                    color: section.color.clone(),
                })
            })
            .collect()
    }

    /// Position of `id` in the flattened sequence.
    pub fn locate(&self, id: SlideId) -> Option<usize> {
        locate(&self.flatten(), id)
    }
}

/// Linear scan for the first flattened entry with the given id.
pub fn locate(slides: &[FlatSlide], id: SlideId) -> Option<usize> {
    slides.iter().position(|s| s.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            CatalogInfo::default(),
            vec![
                Section::new(
                    1,
                    "Movies",
                    "#7eb8c9",
                    vec![
                        Slide::new(101, "Sea", "Clear water").with_video("/videos/sea.mp4"),
                        Slide::new(102, "Sunset", "Golden hour"),
                    ],
                ),
                Section::new(2, "Empty", "#000000", vec![]),
                Section::new(
                    3,
                    "Access",
                    "#8bc9a8",
                    vec![
                        Slide::new(301, "Airport", "30 minutes by car"),
                        Slide::new(302, "Parking", "100 spaces"),
                        Slide::new(303, "Bus", "Every hour"),
                    ],
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_flatten_length_is_sum_of_sections() {
        let catalog = sample();
        let expected: usize = catalog.sections().iter().map(|s| s.slides.len()).sum();
        assert_eq!(catalog.flatten().len(), expected);
        assert_eq!(catalog.slide_count(), 5);
    }

    #[test]
    fn test_flatten_preserves_section_then_slide_order() {
        let ids: Vec<SlideId> = sample().flatten().iter().map(FlatSlide::id).collect();
        assert_eq!(ids, vec![101, 102, 301, 302, 303]);
    }

    #[test]
    fn test_flatten_annotates_section() {
        let flat = sample().flatten();
        assert_eq!(flat[1].section_id, 1);
        assert_eq!(flat[1].color, "#7eb8c9");
        assert_eq!(flat[2].section_id, 3);
        assert_eq!(flat[2].color, "#8bc9a8");
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let catalog = sample();
        assert_eq!(catalog.flatten(), catalog.flatten());
    }

    #[test]
    fn test_locate_present_ids() {
        let catalog = sample();
        let flat = catalog.flatten();
        for slide in &flat {
            let pos = locate(&flat, slide.id()).unwrap();
            assert_eq!(flat[pos].id(), slide.id());
        }
        assert_eq!(catalog.locate(301), Some(2));
    }

    #[test]
    fn test_locate_absent_id() {
        let catalog = sample();
        assert_eq!(catalog.locate(999), None);
        assert_eq!(locate(&[], 101), None);
    }

    #[test]
    fn test_duplicate_slide_id_rejected() {
        let err = Catalog::new(
            CatalogInfo::default(),
            vec![
                Section::new(1, "A", "#111111", vec![Slide::new(7, "x", "")]),
                Section::new(2, "B", "#222222", vec![Slide::new(7, "y", "")]),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSlideId {
                id: 7,
                first_section: 1,
                second_section: 2,
            }
        );
    }

    #[test]
    fn test_duplicate_section_id_rejected() {
        let err = Catalog::new(
            CatalogInfo::default(),
            vec![
                Section::new(4, "A", "#111111", vec![]),
                Section::new(4, "B", "#222222", vec![]),
            ],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSectionId(4));
    }

    #[test]
    fn test_section_lookup() {
        let catalog = sample();
        assert_eq!(catalog.section(3).map(|s| s.name.as_str()), Some("Access"));
        assert!(catalog.section(42).is_none());
    }

    #[test]
    fn test_slide_builder_classifies_media() {
        let slide = Slide::new(1, "t", "b").with_image("/images/a.jpg");
        assert_eq!(slide.media, Media::Image("/images/a.jpg".to_string()));
        let slide = slide.with_video("/videos/a.mp4");
        assert_eq!(slide.media, Media::LocalVideo("/videos/a.mp4".to_string()));
    }
}
