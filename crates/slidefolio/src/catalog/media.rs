use std::sync::LazyLock;

use regex::Regex;

/// Host match for embeddable video URLs (YouTube and its short/no-cookie hosts).
static REMOTE_VIDEO_HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:https?:)?//(?:[a-z0-9-]+\.)*(?:youtube\.com|youtube-nocookie\.com|youtu\.be)(?:[/?#:]|$)",
    )
    .expect("video host pattern is valid")
});

/// Video identifier inside an embed, watch, shorts or short-link URL.
static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:/embed/|/shorts/|/v/|[?&]v=|youtu\.be/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)")
        .expect("video id pattern is valid")
});

/// What a slide displays, decided once when the slide is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Media {
    #[default]
    None,
    Image(String),
    LocalVideo(String),
    RemoteVideo {
        embed_url: String,
        video_id: Option<String>,
    },
}

impl Media {
    /// Pick the display media for a slide. Video takes precedence over an
    /// image when both are set; blank references count as absent.
    pub fn classify(image: Option<&str>, video: Option<&str>) -> Self {
        let image = image.map(str::trim).filter(|s| !s.is_empty());
        let video = video.map(str::trim).filter(|s| !s.is_empty());

        if let Some(url) = video {
            if image.is_some() {
                tracing::debug!(video = url, "slide has both image and video, using video");
            }
            if is_remote_video(url) {
                return Media::RemoteVideo {
                    embed_url: url.to_string(),
                    video_id: remote_video_id(url).map(str::to_string),
                };
            }
            return Media::LocalVideo(url.to_string());
        }

        match image {
            Some(path) => Media::Image(path.to_string()),
            None => Media::None,
        }
    }

    /// Thumbnail address for remote videos with a known identifier.
    pub fn thumbnail_url(&self) -> Option<String> {
        match self {
            Media::RemoteVideo {
                video_id: Some(id), ..
            } => Some(thumbnail_url(id)),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Media::None => "text",
            Media::Image(_) => "image",
            Media::LocalVideo(_) => "video",
            Media::RemoteVideo { .. } => "embed",
        }
    }
}

pub fn is_remote_video(url: &str) -> bool {
    REMOTE_VIDEO_HOST.is_match(url)
}

pub fn remote_video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn test_no_media() {
        assert_eq!(Media::classify(None, None), Media::None);
        assert_eq!(Media::classify(Some(""), Some("  ")), Media::None);
    }

    #[test]
    fn test_image_only() {
        assert_eq!(
            Media::classify(Some("/images/beach.jpg"), None),
            Media::Image("/images/beach.jpg".to_string())
        );
    }

    #[test]
    fn test_local_video() {
        let media = Media::classify(None, Some("/videos/74939_1280x720.mp4"));
        assert_eq!(
            media,
            Media::LocalVideo("/videos/74939_1280x720.mp4".to_string())
        );
        assert_eq!(media.thumbnail_url(), None);
    }

    #[test]
    fn test_remote_embed_video() {
        let url = format!("https://www.youtube.com/embed/{ID}");
        let media = Media::classify(None, Some(&url));
        assert_eq!(
            media,
            Media::RemoteVideo {
                embed_url: url.clone(),
                video_id: Some(ID.to_string()),
            }
        );
        assert_eq!(
            media.thumbnail_url().as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
    }

    #[test]
    fn test_video_wins_over_image() {
        let media = Media::classify(Some("/images/a.jpg"), Some("/videos/a.mp4"));
        assert_eq!(media, Media::LocalVideo("/videos/a.mp4".to_string()));
    }

    #[test]
    fn test_video_id_shapes() {
        assert_eq!(remote_video_id(&format!("https://www.youtube.com/watch?v={ID}&t=4")), Some(ID));
        assert_eq!(remote_video_id(&format!("https://youtu.be/{ID}?si=abc")), Some(ID));
        assert_eq!(remote_video_id(&format!("https://youtube.com/shorts/{ID}")), Some(ID));
        assert_eq!(
            remote_video_id(&format!("https://www.youtube-nocookie.com/embed/{ID}")),
            Some(ID)
        );
        assert_eq!(remote_video_id("https://www.youtube.com/@beach"), None);
        assert_eq!(remote_video_id("https://www.youtube.com/embed/short"), None);
    }

    #[test]
    fn test_remote_host_detection() {
        assert!(is_remote_video("https://www.youtube.com/embed/x"));
        assert!(is_remote_video("https://youtu.be/x"));
        assert!(is_remote_video("//m.youtube.com/watch?v=x"));
        assert!(!is_remote_video("/videos/youtube.com.mp4"));
        assert!(!is_remote_video("https://example.com/youtube.com/embed/x"));
        assert!(!is_remote_video("https://vimeo.com/12345"));
    }

    #[test]
    fn test_unrecognized_url_falls_back_to_local() {
        let media = Media::classify(None, Some("https://vimeo.com/12345"));
        assert_eq!(media, Media::LocalVideo("https://vimeo.com/12345".to_string()));
    }

    #[test]
    fn test_remote_video_without_id_has_no_thumbnail() {
        let media = Media::classify(None, Some("https://www.youtube.com/@beach"));
        assert!(matches!(media, Media::RemoteVideo { video_id: None, .. }));
        assert_eq!(media.thumbnail_url(), None);
    }
}
