use crate::config::Config;
use crate::rest::ShopApi;
use crate::router::{RouteTable, Router};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::executor::spawn_executor;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

const COMMAND_BUFFER: usize = 64;

/// Run the UI loop until the user quits.
///
/// Backend calls run on `handle`; everything else stays on this thread.
pub fn run(config: Config, handle: Handle) -> io::Result<()> {
    let api = ShopApi::new(&config.backend).map_err(io::Error::other)?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let executor = spawn_executor(&handle, api, command_rx, events.sender());

    let mut app = App::new(Router::new(RouteTable::shop(), &config.ui.start_path));
    app.attach_commands(command_tx);
    tracing::info!(
        base_url = %config.backend.base_url,
        start = %app.router().location(),
        "UI started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app, &config.backend.base_url))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "Terminal resized");
            }
            Ok(AppEvent::Api { tag, response }) => app.on_api_response(tag, response),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    executor.abort();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
