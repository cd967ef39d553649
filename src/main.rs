use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use cezi::app::{App, ResultView};
use cezi::config::Config;
use cezi::export;
use cezi::interpret::InterpretClient;
use cezi::markup;
use cezi::script::SessionScript;
use cezi::share::{DetachedHost, HostSession, ShareDependencies, ShareProvider, Sharer, clipboard};

/// Extra time granted on top of the request timeout before giving up on a result.
const SETTLE_GRACE: Duration = Duration::from_secs(5);

#[derive(Parser, Debug)]
#[command(name = "cezi")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CEZI_GIT_HASH"), ")"),
    about = "Ask a question, draw a character, read the interpretation"
)]
struct Cli {
    /// Replay a JSON session script and print the resulting markup
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Render an interpretation text file to markup
    #[arg(long, value_name = "FILE", conflicts_with = "script")]
    render: Option<PathBuf>,

    /// Also save the submitted drawing as a PNG into this directory
    #[arg(long, value_name = "DIR", requires = "script")]
    save_drawing: Option<String>,

    /// Share the interpretation once it arrives
    #[arg(long, action = ArgAction::SetTrue, requires = "script")]
    share: bool,

    /// Write the example config to the default location and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::get_config_path()?;
        Config::create_default_file(&path)?;
        println!("Created {}", path.display());
    } else if let Some(path) = cli.render.as_deref() {
        render_file(path)?;
    } else if let Some(path) = cli.script.as_deref() {
        let save_dir = cli.save_drawing.as_deref().map(export::expand_tilde);
        run_script(path, save_dir.as_deref(), cli.share)?;
    } else {
        // No flags: show usage
        println!("cezi: Ask a question, draw a character, read the interpretation");
        println!();
        println!("Usage:");
        println!("  cezi --script <FILE>                     Replay a recorded session");
        println!("  cezi --script <FILE> --save-drawing DIR  ...and keep the drawing");
        println!("  cezi --script <FILE> --share             ...and share the result");
        println!("  cezi --render <FILE>                     Render interpretation text");
        println!("  cezi --init-config                       Write the example config");
        println!("  cezi --help                              Show help");
        println!();
        println!("Configuration:");
        println!("  ~/.config/cezi/config.toml (endpoint can be overridden with CEZI_ENDPOINT)");
        println!("  Without an endpoint, a local test-mode answer is shown.");
    }

    Ok(())
}

fn render_file(path: &Path) -> Result<()> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    println!("{}", markup::render(&text).markup);
    Ok(())
}

fn run_script(path: &Path, save_dir: Option<&Path>, share: bool) -> Result<()> {
    let config = Config::load()?;
    let script = SessionScript::load(path)?;

    let runtime = tokio::runtime::Runtime::new()
        .context("Failed to create Tokio runtime for interpretation requests")?;

    let client = InterpretClient::new(config.endpoint(), config.timeout())
        .context("Failed to create HTTP client")?;
    if !client.endpoint().is_configured() {
        log::warn!("No interpretation endpoint configured, running in test mode");
    }

    let host = HostSession::new(Arc::new(DetachedHost), config.host.enabled);
    runtime.block_on(host.initialize(&config.host.credential));
    let sharer = Sharer::new(
        ShareDependencies {
            host,
            ..ShareDependencies::default()
        },
        config.share.title.clone(),
    );

    let mut app = App::new(&config, runtime.handle().clone(), Arc::new(client), sharer)?;
    script.replay(&mut app)?;

    if let (Some(dir), Some(submission)) = (save_dir, app.recap()) {
        let saved = export::save_drawing(&submission.image, dir)?;
        eprintln!("Drawing saved to {}", saved.display());
    }

    runtime.block_on(app.settle(config.timeout() + SETTLE_GRACE))?;

    match app.view() {
        ResultView::Content(rendered) => println!("{}", rendered.markup),
        ResultView::Failed(panel) => {
            println!("{}", panel.markup);
            return Err(anyhow::anyhow!("Interpretation failed: {}", panel.message));
        }
        ResultView::Empty | ResultView::Loading => {
            return Err(anyhow::anyhow!("No interpretation was produced"));
        }
    }

    if share {
        if app.share_provider() == ShareProvider::ClipboardFallback
            && !clipboard::is_clipboard_available()
        {
            log::warn!("wl-copy not found, relying on the built-in Wayland clipboard");
        }
        let provider = runtime.block_on(app.share())?;
        eprintln!("Shared via {:?}", provider);
    }

    Ok(())
}
