// What you SEE when the window opens:
// • Toolbar on top: Size field, Reset, Erase/Draw toggle, Random, Scheme, and
//   a chip with the active color.
// • A square canvas of N×N cells (checkerboard = unpainted).
// • Two rows below: fixed picker colors plus a hex field (click it, type
//   six hex digits, Enter), then the last fetched scheme.
// • Hold Left Mouse on the canvas to paint (or erase) every cell you pass.
// • Keys: R reset, E toggle erase, N random color, S scheme, ESC quits.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, DrawArgs};
use pixel_canvas::app::{App, Command, FrameInput};
use pixel_canvas::color_api::ColorApiClient;
use pixel_canvas::config::Config;
use pixel_canvas::draw::Drawer;
use pixel_canvas::error::{Error, Result};
use pixel_canvas::fetcher::PaletteFetcher;
use pixel_canvas::grid::GridSize;
use pixel_canvas::render::{Pending, draw_frame};
use pixel_canvas::tracks::{SEARCH_FAILED, TrackClient};
use pixel_canvas::types::FrameBuffer;
use pixel_canvas::upi::{self, PaymentRequest, QrClient};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .init();

    let cfg = Config::from_env();
    debug!(?cfg, "settings from environment");

    match cli.command {
        None => run_canvas(cfg, DrawArgs::default()),
        Some(Commands::Draw(args)) => run_canvas(cfg, args),
        Some(Commands::Upi { payee, amount, name, size, out }) => {
            run_upi(&cfg, &payee, &amount, &name, size, &out)
        }
        Some(Commands::Search { term }) => run_search(&cfg, &term.join(" ")),
    }
}

/// Command-line flags win over the environment.
fn apply_flags(mut cfg: Config, args: DrawArgs) -> Config {
    if let Some(size) = args.size {
        cfg.initial_size = GridSize::parse(&size);
    }
    if let Some(color) = args.color {
        cfg.initial_color = color;
    }
    if let Some(px) = args.canvas_px {
        cfg.canvas_px = px;
    }
    if let Some(api) = args.color_api {
        cfg.color_api = api;
    }
    if let Some(mode) = args.scheme_mode {
        cfg.scheme_mode = mode;
    }
    if let Some(count) = args.scheme_count {
        cfg.scheme_count = count;
    }
    cfg.normalise()
}

fn run_canvas(cfg: Config, args: DrawArgs) -> Result<()> {
    let cfg = apply_flags(cfg, args);
    info!(
        size = cfg.initial_size.get(),
        color = %cfg.initial_color,
        canvas_px = cfg.canvas_px,
        "starting pixel canvas"
    );

    /* --- App state + window setup ---
       Visual: window opens with an empty 30×30 (or configured) canvas. */
    let mut app = App::new(cfg.canvas_px, cfg.initial_size).with_color(cfg.initial_color);
    let (w, h) = (app.window.width, app.window.height);
    let mut drawer = Drawer::new("Pixel Canvas", w, h)?;

    /* --- Reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut screen = FrameBuffer::new(w, h, 0);

    /* --- Background color fetches ---
       Visual: Random/Scheme buttons read "..." while a request is out. */
    let mut fetcher = PaletteFetcher::new(ColorApiClient::new(&cfg.color_api)?)?;

    /* --- FPS counter --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    'frames: while drawer.is_open() {
        /* 1) Read input for this frame. */
        let input = FrameInput {
            mouse: drawer.mouse_pos(),
            left_down: drawer.left_mouse_down(),
            keys: drawer.keys_pressed(),
        };

        /* 2) Let the app react: UI clicks, shortcuts, painting.
           Visual: cells under the pointer change color right away. */
        for command in app.frame(&input) {
            match command {
                Command::FetchRandom => fetcher.request_random(),
                Command::FetchScheme { seed } => fetcher.request_scheme(seed, cfg.scheme_mode, cfg.scheme_count),
                Command::Quit => break 'frames,
            }
        }

        /* 3) Pick up finished fetches.
           Visual: chip/swatches update, or the failure alert pops up. */
        for outcome in fetcher.poll() {
            app.apply_fetch(outcome);
        }

        /* 4) Draw everything into the screen buffer. */
        let pending = Pending { random: fetcher.random_pending(), scheme: fetcher.scheme_pending() };
        draw_frame(&mut screen, &app, pending, input.mouse);

        /* 5) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 6) FPS counter (debug log once per second) */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            debug!(fps = format_args!("{:.1}", frames_this_second as f32 / secs), "frame rate");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!(painted = app.grid.painted_count(), "window closed");
    Ok(())
}

fn block_on<F: std::future::Future>(fut: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Runtime(e.to_string()))?;
    Ok(runtime.block_on(fut))
}

fn run_upi(cfg: &Config, payee: &str, amount: &str, name: &str, size: u32, out: &Path) -> Result<()> {
    let request = PaymentRequest::parse(payee, amount, name)?;
    let link = request.link()?;
    println!("{link}");

    let url = upi::qr_url(&cfg.qr_api, &link, size)?;
    let qr = QrClient::new()?;
    let img = block_on(qr.fetch(url))??;
    upi::save_png(&img, out)?;
    println!("QR saved to {}", out.display());
    Ok(())
}

fn run_search(cfg: &Config, term: &str) -> Result<()> {
    let client = TrackClient::new(&cfg.track_api)?;
    let tracks = match block_on(client.search(term))? {
        Ok(tracks) => tracks,
        Err(e) => {
            error!(error = %e, "track search failed");
            eprintln!("{SEARCH_FAILED}");
            return Err(e);
        }
    };
    if tracks.is_empty() {
        println!("No results found");
        return Ok(());
    }
    for track in &tracks {
        println!("{track}\n");
    }
    Ok(())
}
