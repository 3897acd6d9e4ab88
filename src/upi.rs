//! UPI payment links and their QR images.
//!
//! The link is built locally; the QR itself is rendered by a remote endpoint
//! and only downloaded and checked here.

use crate::error::{Error, Result};
use regex::Regex;
use reqwest::Url;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

pub const DEFAULT_QR_API: &str = "https://api.qrserver.com";
pub const DEFAULT_QR_SIZE: u32 = 400;

static UPI_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.\-_]{2,}@[a-zA-Z]{2,}[a-zA-Z0-9]*$").expect("static pattern")
});

/// A validated payment request.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub payee: String,
    pub amount: f64,
    pub name: Option<String>,
}

impl PaymentRequest {
    /// Check the raw form values, in the order a user would fix them.
    pub fn parse(payee: &str, amount: &str, name: &str) -> Result<Self> {
        let payee = payee.trim();
        if payee.is_empty() {
            return Err(Error::InvalidUpi("Please enter a UPI ID.".into()));
        }
        if !UPI_ID.is_match(payee) {
            return Err(Error::InvalidUpi("Invalid UPI ID format. Example: merchant@bank".into()));
        }
        let amount = amount.trim();
        if amount.is_empty() {
            return Err(Error::InvalidAmount("Please enter an amount.".into()));
        }
        let amount = match amount.parse::<f64>() {
            Ok(a) if a.is_finite() && a > 0.0 => a,
            _ => return Err(Error::InvalidAmount("Amount must be a positive number.".into())),
        };
        let name = Some(name.trim()).filter(|n| !n.is_empty()).map(str::to_string);
        Ok(Self { payee: payee.to_string(), amount, name })
    }

    /// `upi://pay?pa=..&pn=..&am=..&cu=INR`, form-encoded.
    pub fn link(&self) -> Result<String> {
        let mut url = Url::parse("upi://pay").map_err(|e| Error::Decode(e.to_string()))?;
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("pa", &self.payee);
            if let Some(name) = &self.name {
                q.append_pair("pn", name);
            }
            q.append_pair("am", &format!("{:.2}", self.amount));
            q.append_pair("cu", "INR");
        }
        Ok(url.to_string())
    }
}

/// Address of the QR image for `data` at `size`×`size` pixels.
pub fn qr_url(base: &str, data: &str, size: u32) -> Result<Url> {
    Url::parse_with_params(
        &format!("{}/v1/create-qr-code/", base.trim_end_matches('/')),
        &[("size", format!("{size}x{size}")), ("data", data.to_string()), ("qzone", "1".to_string())],
    )
    .map_err(|e| Error::Decode(e.to_string()))
}

pub struct QrClient {
    client: reqwest::Client,
}

impl QrClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pixel-canvas/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Download the QR and make sure it really is an image.
    pub async fn fetch(&self, url: Url) -> Result<image::DynamicImage> {
        debug!(%url, "fetching QR image");
        let bytes = self.client.get(url).send().await?.error_for_status()?.bytes().await?;
        let img = image::load_from_memory(&bytes)?;
        info!(width = img.width(), height = img.height(), "QR image received");
        Ok(img)
    }
}

/// Write the QR as PNG.
pub fn save_png(img: &image::DynamicImage, path: &Path) -> Result<()> {
    img.save_with_format(path, image::ImageFormat::Png)?;
    info!(path = %path.display(), "QR saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn message(err: Error) -> String {
        err.to_string()
    }

    #[test]
    fn valid_request_builds_link() {
        let req = PaymentRequest::parse(" shop.42@okbank ", "250", "  Tea Stall ").unwrap();
        assert_eq!(req.link().unwrap(), "upi://pay?pa=shop.42%40okbank&pn=Tea+Stall&am=250.00&cu=INR");
    }

    #[test]
    fn blank_name_is_left_out() {
        let req = PaymentRequest::parse("ab@cd", "1.5", "   ").unwrap();
        assert_eq!(req.name, None);
        assert_eq!(req.link().unwrap(), "upi://pay?pa=ab%40cd&am=1.50&cu=INR");
    }

    #[test]
    fn validation_messages_match_the_form() {
        assert_eq!(message(PaymentRequest::parse("", "1", "").unwrap_err()), "Please enter a UPI ID.");
        assert_eq!(
            message(PaymentRequest::parse("a@bank", "1", "").unwrap_err()),
            "Invalid UPI ID format. Example: merchant@bank"
        );
        assert_eq!(
            message(PaymentRequest::parse("me@b", "1", "").unwrap_err()),
            "Invalid UPI ID format. Example: merchant@bank"
        );
        assert_eq!(message(PaymentRequest::parse("me@bank", " ", "").unwrap_err()), "Please enter an amount.");
        for bad in ["abc", "0", "-3", "NaN", "inf"] {
            assert_eq!(
                message(PaymentRequest::parse("me@bank", bad, "").unwrap_err()),
                "Amount must be a positive number."
            );
        }
    }

    #[test]
    fn id_pattern_accepts_handles_with_digits_after_letters() {
        assert!(UPI_ID.is_match("john_doe-1@ybl"));
        assert!(UPI_ID.is_match("x.y@axis2"));
        assert!(!UPI_ID.is_match("x.y@2axis"));
        assert!(!UPI_ID.is_match("no-at-sign"));
    }

    #[test]
    fn qr_url_carries_size_data_and_quiet_zone() {
        let url = qr_url("https://qr.test/", "upi://pay?pa=a@b", 400).unwrap();
        assert_eq!(
            url.as_str(),
            "https://qr.test/v1/create-qr-code/?size=400x400&data=upi%3A%2F%2Fpay%3Fpa%3Da%40b&qzone=1"
        );
    }

    #[test]
    fn saved_png_decodes_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.png");
        let img = image::DynamicImage::new_luma8(8, 8);
        save_png(&img, &path).unwrap();
        let back = image::open(&path).unwrap();
        assert_eq!((back.width(), back.height()), (8, 8));
    }
}
