//! Track list model, parsed once at startup from the embedded manifest.
//! The set of tracks is fixed for the lifetime of the page.

use serde::Deserialize;

use crate::diagnostics::log_warn;

static MANIFEST: &str = include_str!("../assets/playlist.json");

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    cover: Option<String>,
    #[serde(default)]
    tracks: Vec<ManifestTrack>,
}

#[derive(Debug, Deserialize)]
struct ManifestTrack {
    url: String,
    title: String,
}

/// One playable entry: position in the list, resource URL, display title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub index: usize,
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    tracks: Vec<Track>,
    cover: Option<String>,
}

impl Playlist {
    /// Parse the embedded manifest.
    pub fn load() -> Self {
        Self::from_manifest(MANIFEST)
    }

    /// A malformed manifest degrades to the empty playlist, which leaves the
    /// whole widget inert. Not a fault, just the empty-input path.
    pub fn from_manifest(raw: &str) -> Self {
        match serde_json::from_str::<Manifest>(raw) {
            Ok(manifest) => Self {
                tracks: manifest
                    .tracks
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| Track {
                        index,
                        url: entry.url,
                        title: entry.title,
                    })
                    .collect(),
                cover: manifest.cover,
            },
            Err(err) => {
                log_warn("playlist", &format!("ignoring malformed manifest: {err}"));
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Cover art URL shared by the whole list, when the manifest names one.
    pub fn cover(&self) -> Option<&str> {
        self.cover.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tracks_in_manifest_order() {
        let playlist = Playlist::from_manifest(
            r#"{"tracks":[{"url":"/a.mp3","title":"A"},{"url":"/b.mp3","title":"B"}]}"#,
        );
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.track(0).map(|t| t.title.as_str()), Some("A"));
        assert_eq!(playlist.track(1).map(|t| t.url.as_str()), Some("/b.mp3"));
        assert_eq!(playlist.track(1).map(|t| t.index), Some(1));
        assert!(playlist.cover().is_none());
    }

    #[test]
    fn cover_is_optional() {
        let playlist = Playlist::from_manifest(
            r#"{"cover":"/art.png","tracks":[{"url":"/a.mp3","title":"A"}]}"#,
        );
        assert_eq!(playlist.cover(), Some("/art.png"));
    }

    #[test]
    fn malformed_manifest_yields_empty_playlist() {
        let playlist = Playlist::from_manifest("not json");
        assert!(playlist.is_empty());
        assert!(playlist.track(0).is_none());
    }

    #[test]
    fn missing_tracks_key_yields_empty_playlist() {
        let playlist = Playlist::from_manifest("{}");
        assert!(playlist.is_empty());
    }

    #[test]
    fn embedded_manifest_parses() {
        assert!(!Playlist::load().is_empty());
    }
}
