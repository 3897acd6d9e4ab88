//! Song search against the iTunes-style search endpoint.
//!
//! Only metadata is handled: searching, and the little text helpers a player
//! card needs. Nothing here downloads or plays audio.

use crate::error::{Error, Result};
use reqwest::Url;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info};

pub const DEFAULT_TRACK_API: &str = "https://itunes.apple.com";
pub const SEARCH_LIMIT: usize = 5;
pub const SEARCH_FAILED: &str = "Search failed. Check network connection.";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(default)]
    pub track_name: String,
    #[serde(default)]
    pub artist_name: String,
    pub collection_name: Option<String>,
    pub artwork_url100: Option<String>,
    pub preview_url: Option<String>,
    pub release_date: Option<String>,
    pub primary_genre_name: Option<String>,
    pub track_time_millis: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    results: Vec<Track>,
}

/// `m:ss`; anything that is not a finite, non-negative number shows as 0:00.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

impl Track {
    /// The 600×600 variant of the 100×100 artwork link.
    pub fn hires_artwork(&self) -> Option<String> {
        self.artwork_url100.as_ref().map(|u| u.replace("100x100", "600x600"))
    }

    /// Four-digit year from an ISO date such as `2011-05-16T07:00:00Z`.
    pub fn release_year(&self) -> Option<u32> {
        let date = self.release_date.as_deref()?;
        date.get(..4)?.parse().ok()
    }

    pub fn duration_label(&self) -> String {
        match self.track_time_millis {
            Some(ms) if ms > 0 => format!("DURATION: {}", format_time(ms as f64 / 1000.0)),
            _ => "FORMAT: STUDIO ALBUM (LP)".to_string(),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - {}", self.track_name, self.artist_name)?;
        writeln!(f, "  {}", self.collection_name.as_deref().unwrap_or("—"))?;
        let year = self.release_year().map(|y| format!("©{y}")).unwrap_or_default();
        writeln!(
            f,
            "  GENRE: {}  {}  {}",
            self.primary_genre_name.as_deref().unwrap_or("—"),
            self.duration_label(),
            year
        )?;
        match &self.preview_url {
            Some(url) => writeln!(f, "  preview: {url}")?,
            None => writeln!(f, "  preview: none")?,
        }
        write!(f, "  artwork: {}", self.hires_artwork().as_deref().unwrap_or("none"))
    }
}

pub struct TrackClient {
    base: String,
    client: reqwest::Client,
}

impl TrackClient {
    pub fn new(base: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pixel-canvas/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { base: base.trim_end_matches('/').to_string(), client })
    }

    pub fn search_url(&self, term: &str) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/search", self.base),
            &[("term", term), ("entity", "song"), ("limit", SEARCH_LIMIT.to_string().as_str())],
        )
        .map_err(|e| Error::Decode(e.to_string()))
    }

    /// Up to five songs matching `term`. A blank term sends nothing.
    pub async fn search(&self, term: &str) -> Result<Vec<Track>> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        let url = self.search_url(term)?;
        debug!(%url, "searching tracks");
        let body: SearchBody = self.client.get(url).send().await?.error_for_status()?.json().await?;
        info!(term, found = body.results.len(), "track search done");
        Ok(body.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn time_formatting() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.9), "0:09");
        assert_eq!(format_time(61.0), "1:01");
        assert_eq!(format_time(754.2), "12:34");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn search_body_parses_itunes_shape() {
        let body: SearchBody = serde_json::from_str(
            r#"{"resultCount":1,"results":[{
                "wrapperType":"track","trackName":"Rolling in the Deep","artistName":"Adele",
                "collectionName":"21","artworkUrl100":"https://a.test/x/100x100bb.jpg",
                "previewUrl":"https://a.test/p.m4a","releaseDate":"2010-11-29T08:00:00Z",
                "primaryGenreName":"Pop","trackTimeMillis":228293}]}"#,
        )
        .unwrap();
        let t = &body.results[0];
        assert_eq!(t.track_name, "Rolling in the Deep");
        assert_eq!(t.release_year(), Some(2010));
        assert_eq!(t.duration_label(), "DURATION: 3:48");
        assert_eq!(t.hires_artwork().as_deref(), Some("https://a.test/x/600x600bb.jpg"));
    }

    #[test]
    fn sparse_result_still_parses() {
        let body: SearchBody = serde_json::from_str(r#"{"results":[{"trackName":"X"}]}"#).unwrap();
        let t = &body.results[0];
        assert_eq!(t.artist_name, "");
        assert_eq!(t.release_year(), None);
        assert_eq!(t.duration_label(), "FORMAT: STUDIO ALBUM (LP)");
        assert!(serde_json::from_str::<SearchBody>("{}").unwrap().results.is_empty());
    }

    #[test]
    fn printed_block_carries_large_artwork() {
        let t = Track {
            track_name: "Halo".into(),
            artist_name: "Beyoncé".into(),
            collection_name: Some("I Am... Sasha Fierce".into()),
            artwork_url100: Some("https://a.test/art/100x100bb.jpg".into()),
            release_date: Some("2008-11-18T08:00:00Z".into()),
            primary_genre_name: Some("Pop".into()),
            track_time_millis: Some(261_000),
            ..Default::default()
        };
        assert_eq!(
            t.to_string(),
            "Halo - Beyoncé\n  I Am... Sasha Fierce\n  GENRE: Pop  DURATION: 4:21  ©2008\n  \
             preview: none\n  artwork: https://a.test/art/600x600bb.jpg"
        );
        let bare = Track { track_name: "X".into(), ..Default::default() };
        assert!(bare.to_string().ends_with("  artwork: none"));
    }

    #[test]
    fn search_url_encodes_term() {
        let client = TrackClient::new("https://itunes.test").unwrap();
        assert_eq!(
            client.search_url("AC/DC & friends").unwrap().as_str(),
            "https://itunes.test/search?term=AC%2FDC+%26+friends&entity=song&limit=5"
        );
    }
}
