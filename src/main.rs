use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;

use yurban_driver::app::{App, AppMessage};
use yurban_driver::cli::{parse_args, run_cli_command, VERSION};
use yurban_driver::logging;
use yurban_driver::startup::{AppConfig, Services};
use yurban_driver::terminal::{setup_panic_hook, TerminalManager};
use yurban_driver::ui;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env()?;

    // Flags run before any terminal setup
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command, &config).await {
        return result;
    }

    if let Err(e) = logging::init(&config.log_path(), &config.log_filter) {
        eprintln!(
            "Warning: could not open log file {}: {}",
            config.log_path().display(),
            e
        );
    }
    info!(version = VERSION, api_url = %config.api_url, "Starting Yurban Driver");

    setup_panic_hook();

    let services = Services::from_config(&config);
    let signed_in = services.session.restore().await.is_some();
    info!(signed_in, "Session restored");

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(services, signed_in);
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    info!("Exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        // 16ms tick drives spinners and toast expiry
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.mark_dirty();
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => app.quit(),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
