//! Choosing the preferred source out of a media item's encoding variants.

use crate::resources::MediaSource;

/// MIME type of playable/downloadable video variants.
pub const VIDEO_MIME: &str = "video/mp4";
/// MIME type of audio-only variants.
pub const AUDIO_MIME: &str = "audio/mp4";

/// Pick the "best" source from a list of variants.
///
/// Preference order: the widest `video/mp4` source (the first seen wins a
/// width tie; a source with no width counts as width 0), then the first
/// `audio/mp4` source, then nothing. Visual content beats audio-only even
/// when the audio variant appears earlier in the list.
pub fn best_source(sources: &[MediaSource]) -> Option<&MediaSource> {
    let mut best_video: Option<&MediaSource> = None;
    for source in sources.iter().filter(|s| s.mime_type == VIDEO_MIME) {
        match best_video {
            Some(current) if source.width.unwrap_or(0) <= current.width.unwrap_or(0) => {}
            _ => best_video = Some(source),
        }
    }
    if best_video.is_some() {
        return best_video;
    }

    sources.iter().find(|s| s.mime_type == AUDIO_MIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(mime_type: &str, width: Option<u32>) -> MediaSource {
        MediaSource {
            mime_type: mime_type.to_string(),
            url: format!("https://cdn.invalid/{}-{:?}", mime_type.replace('/', "-"), width),
            width,
            height: width.map(|w| w * 9 / 16),
        }
    }

    #[test]
    fn test_widest_video_wins() {
        let sources = vec![
            source("video/mp4", Some(480)),
            source("video/mp4", Some(720)),
            source("audio/mp4", None),
        ];
        let best = best_source(&sources).unwrap();
        assert_eq!(best.width, Some(720));
    }

    #[test]
    fn test_video_preferred_over_earlier_audio() {
        let sources = vec![source("audio/mp4", None), source("video/mp4", Some(360))];
        assert_eq!(best_source(&sources).unwrap().mime_type, "video/mp4");
    }

    #[test]
    fn test_first_seen_wins_width_tie() {
        let mut first = source("video/mp4", Some(640));
        first.url = "https://cdn.invalid/first".to_string();
        let mut second = source("video/mp4", Some(640));
        second.url = "https://cdn.invalid/second".to_string();
        let sources = vec![first, second];
        assert_eq!(best_source(&sources).unwrap().url, "https://cdn.invalid/first");
    }

    #[test]
    fn test_first_audio_when_no_video() {
        let mut a = source("audio/mp4", None);
        a.url = "https://cdn.invalid/a".to_string();
        let mut b = source("audio/mp4", None);
        b.url = "https://cdn.invalid/b".to_string();
        let sources = vec![source("text/vtt", None), a, b];
        assert_eq!(best_source(&sources).unwrap().url, "https://cdn.invalid/a");
    }

    #[test]
    fn test_no_match_yields_none() {
        assert!(best_source(&[]).is_none());
        assert!(best_source(&[source("text/vtt", None)]).is_none());
    }

    #[test]
    fn test_exact_mime_match_only() {
        // Near-miss MIME types must not be selected.
        let sources = vec![source("video/webm", Some(1080)), source("audio/mpeg", None)];
        assert!(best_source(&sources).is_none());
    }

    #[test]
    fn test_unmeasured_video_loses_to_measured() {
        let sources = vec![source("video/mp4", None), source("video/mp4", Some(144))];
        assert_eq!(best_source(&sources).unwrap().width, Some(144));
    }
}
