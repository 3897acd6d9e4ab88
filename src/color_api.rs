//! Client for the remote color service (`/random` and `/scheme`).

use crate::error::{Error, Result};
use crate::palette::SchemeMode;
use crate::types::Color;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_COLOR_API: &str = "https://www.thecolorapi.com";

#[derive(Debug, Deserialize)]
struct HexField {
    value: String,
}

/// One color object; the service sends much more, we only read `hex.value`.
#[derive(Debug, Deserialize)]
pub struct ColorBody {
    hex: HexField,
}

#[derive(Debug, Deserialize)]
pub struct SchemeBody {
    #[serde(default)]
    colors: Vec<ColorBody>,
}

impl ColorBody {
    pub fn color(&self) -> Result<Color> {
        Color::from_hex(&self.hex.value)
            .ok_or_else(|| Error::Decode(format!("bad hex value {:?}", self.hex.value)))
    }
}

impl SchemeBody {
    pub fn colors(&self) -> Result<Vec<Color>> {
        self.colors.iter().map(ColorBody::color).collect()
    }
}

#[derive(Clone)]
pub struct ColorApiClient {
    base: String,
    client: reqwest::Client,
}

impl ColorApiClient {
    /// No timeout: a slow service just leaves the button pending.
    pub fn new(base: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pixel-canvas/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { base: base.trim_end_matches('/').to_string(), client })
    }

    pub fn random_url(&self) -> Result<Url> {
        Url::parse(&format!("{}/random", self.base)).map_err(|e| Error::Decode(e.to_string()))
    }

    pub fn scheme_url(&self, seed: Color, mode: SchemeMode, count: usize) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/scheme", self.base),
            &[
                ("hex", seed.hex_digits()),
                ("mode", mode.as_str().to_string()),
                ("count", count.to_string()),
            ],
        )
        .map_err(|e| Error::Decode(e.to_string()))
    }

    pub async fn random(&self) -> Result<Color> {
        let url = self.random_url()?;
        debug!(%url, "fetching random color");
        let body: ColorBody = self.client.get(url).send().await?.error_for_status()?.json().await?;
        body.color()
    }

    pub async fn scheme(&self, seed: Color, mode: SchemeMode, count: usize) -> Result<Vec<Color>> {
        let url = self.scheme_url(seed, mode, count)?;
        debug!(%url, "fetching color scheme");
        let body: SchemeBody = self.client.get(url).send().await?.error_for_status()?.json().await?;
        body.colors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn urls_match_the_service_contract() {
        let api = ColorApiClient::new("https://colors.test/").unwrap();
        assert_eq!(api.random_url().unwrap().as_str(), "https://colors.test/random");
        let url = api.scheme_url(Color::rgb(0xAB, 0xCD, 0xEF), SchemeMode::AnalogicComplement, 5).unwrap();
        assert_eq!(
            url.as_str(),
            "https://colors.test/scheme?hex=abcdef&mode=analogic-complement&count=5"
        );
    }

    #[test]
    fn random_body_reads_hex_value() {
        let body: ColorBody = serde_json::from_str(
            r##"{"hex":{"value":"#0047AB","clean":"0047AB"},"name":{"value":"Cobalt"}}"##,
        )
        .unwrap();
        assert_eq!(body.color().unwrap(), Color::rgb(0x00, 0x47, 0xAB));
    }

    #[test]
    fn scheme_body_reads_every_color() {
        let body: SchemeBody = serde_json::from_str(
            r##"{"mode":"triad","count":"3","colors":[
                {"hex":{"value":"#FF0000"}},
                {"hex":{"value":"#00FF00"}},
                {"hex":{"value":"#0000FF"}}]}"##,
        )
        .unwrap();
        assert_eq!(
            body.colors().unwrap(),
            vec![Color::rgb(255, 0, 0), Color::rgb(0, 255, 0), Color::rgb(0, 0, 255)]
        );
    }

    #[test]
    fn one_bad_swatch_fails_the_whole_scheme() {
        let body: SchemeBody = serde_json::from_str(
            r##"{"colors":[{"hex":{"value":"#FF0000"}},{"hex":{"value":"nope"}}]}"##,
        )
        .unwrap();
        assert!(body.colors().is_err());
    }

    #[test]
    fn missing_hex_is_a_decode_error() {
        assert!(serde_json::from_str::<ColorBody>(r#"{"name":{"value":"x"}}"#).is_err());
    }
}
