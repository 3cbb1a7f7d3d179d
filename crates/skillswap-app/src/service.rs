use crate::command::{self, Command, HELP};
use crate::config::Config;
use crate::terminal::TerminalSurface;
use anyhow::{Context, Result};
use skillswap_controller::{Controller, Runtime};
use skillswap_logging::LogFormat;
use skillswap_store::{seed, ListingStore};
use skillswap_view::Surface;
use std::future::Future;
use std::io::{self, BufRead};
use std::thread;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Why the event loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// `quit` command
    Quit,
    /// Input closed; pending timers were allowed to finish
    EndOfInput,
    /// Shutdown signal
    Shutdown,
    /// Reading input failed
    InputError,
}

/// Read stdin on its own thread.
///
/// A blocking read cannot be cancelled, so it must not live on the runtime:
/// the process exits from `main` while this thread is still parked in `read`.
fn spawn_stdin_reader() -> Result<mpsc::UnboundedReceiver<io::Result<String>>> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::Builder::new()
        .name("skillswap-stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        })
        .context("Failed to start stdin reader")?;
    Ok(rx)
}

/// Apply input lines and fired timers until quit, end of input or `shutdown`.
///
/// Pending timers are cancelled on quit and shutdown, and drained on end of input.
pub async fn drive<S: Surface>(
    runtime: &mut Runtime<S>,
    lines: &mut mpsc::UnboundedReceiver<io::Result<String>>,
    shutdown: impl Future<Output = ()>,
) -> Result<LoopExit> {
    tokio::pin!(shutdown);

    let exit = loop {
        tokio::select! {
            line = lines.recv() => {
                let line = match line {
                    Some(Ok(line)) => line,
                    Some(Err(e)) => {
                        error!("Failed to read input: {}", e);
                        break LoopExit::InputError;
                    }
                    None => {
                        info!("End of input, waiting for pending timers");
                        runtime.settle().await?;
                        break LoopExit::EndOfInput;
                    }
                };

                match command::parse(&line) {
                    Ok(Some(Command::Event(event))) => runtime.dispatch(event)?,
                    Ok(Some(Command::Show)) => runtime.refresh()?,
                    Ok(Some(Command::Help)) => eprintln!("{}", HELP),
                    Ok(Some(Command::Quit)) => break LoopExit::Quit,
                    Ok(None) => {}
                    Err(e) => warn!("{} (type 'help' for commands)", e),
                }
            }
            Some(fired) = runtime.next_timer() => {
                runtime.fire(fired)?;
            }
            _ = &mut shutdown => {
                info!("Shutting down gracefully...");
                break LoopExit::Shutdown;
            }
        }
    };

    runtime.shutdown();
    Ok(exit)
}

/// SkillSwap page service - reads commands, runs timers, prints frames
pub struct SkillswapService {
    config: Config,
}

impl SkillswapService {
    /// Create a new page service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run until `quit`, end of input or Ctrl+C
    pub async fn run(self) -> Result<()> {
        // Initialize logging
        let format: LogFormat = self.config.logging.format.parse()?;
        skillswap_logging::init_logging(&self.config.logging.level, format)?;
        info!("Starting SkillSwap");

        let seed_path = self.config.seed.path();
        let listings = seed::load(seed_path.as_deref())?;
        let store = ListingStore::new(listings).context("Seed data rejected")?;

        let timings = self.config.ui.timings();
        info!(
            "UI timings: notification_visible={:?}, notification_fade={:?}, \
             overlay_hide_delay={:?}",
            timings.notification_visible, timings.notification_fade, timings.overlay_hide_delay
        );

        let controller = Controller::new(store, timings);
        let surface = TerminalSurface::new(self.config.ui.render, io::stdout());
        let mut runtime = Runtime::start(controller, surface)?;

        let mut lines = spawn_stdin_reader()?;

        // Setup signal handler for graceful shutdown
        let shutdown = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to install Ctrl+C handler: {}", e);
                // Without a handler the loop only ends on quit or end of input
                std::future::pending::<()>().await;
            }
            info!("Received shutdown signal");
        };

        let exit = drive(&mut runtime, &mut lines, shutdown).await?;
        info!("SkillSwap stopped ({:?})", exit);
        Ok(())
    }
}
