// Runs color fetches in the background so the window never stalls.
// Visual: pressing Random/Scheme changes the button label to "..." until the
// answer (or the failure alert) arrives a few frames later.

use crate::color_api::ColorApiClient;
use crate::error::{Error, Result};
use crate::palette::{FetchOutcome, SchemeMode};
use crate::types::Color;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

pub struct PaletteFetcher {
    runtime: Runtime,
    api: ColorApiClient,
    tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,
    random_pending: bool,
    scheme_pending: bool,
}

impl PaletteFetcher {
    pub fn new(api: ColorApiClient) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("palette-fetch")
            .enable_all()
            .build()
            .map_err(|e| Error::Runtime(e.to_string()))?;
        let (tx, rx) = mpsc::unbounded_channel();
        Ok(Self { runtime, api, tx, rx, random_pending: false, scheme_pending: false })
    }

    pub fn random_pending(&self) -> bool {
        self.random_pending
    }

    pub fn scheme_pending(&self) -> bool {
        self.scheme_pending
    }

    /// Start a random-color fetch. Ignored while one is already in flight.
    pub fn request_random(&mut self) {
        if self.random_pending {
            return;
        }
        self.random_pending = true;
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = api.random().await.map_err(|e| e.to_string());
            // receiver gone means the window closed; nothing left to tell
            let _ = tx.send(FetchOutcome::Random(outcome));
        });
        debug!("random color requested");
    }

    /// Start a scheme fetch seeded from `seed`. Ignored while one is in flight.
    pub fn request_scheme(&mut self, seed: Color, mode: SchemeMode, count: usize) {
        if self.scheme_pending {
            return;
        }
        self.scheme_pending = true;
        let api = self.api.clone();
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let outcome = api.scheme(seed, mode, count).await.map_err(|e| e.to_string());
            let _ = tx.send(FetchOutcome::Scheme(outcome));
        });
        debug!(%seed, %mode, count, "color scheme requested");
    }

    /// Drain everything that finished since the last frame.
    pub fn poll(&mut self) -> Vec<FetchOutcome> {
        let mut done = Vec::new();
        // never blocks: `try_recv` only looks at what is already queued
        while let Ok(outcome) = self.rx.try_recv() {
            done.push(outcome);
        }
        for outcome in &done {
            match outcome {
                FetchOutcome::Random(_) => self.random_pending = false,
                FetchOutcome::Scheme(_) => self.scheme_pending = false,
            }
        }
        done
    }
}
