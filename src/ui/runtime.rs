use crate::config::Config;
use crate::data::InMemoryRewardRepository;
use crate::share::ShareSheet;
use crate::shutdown::{listen_for_signals, ShutdownHandle};
use crate::ui::app::{App, AppContext};
use crate::ui::common::Wake;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

/// Run the storefront until the user quits or a signal arrives.
///
/// `open` is a route path applied after start, on top of Home.
pub fn run(config: Config, open: Option<String>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("jetreward-data")
        .build()
        .context("Failed to start async runtime")?;

    let shutdown = ShutdownHandle::new();
    runtime.spawn(listen_for_signals(shutdown.clone()));

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let shutdown_tx = events.sender();
    let shutdown_wait = shutdown.clone();
    runtime.spawn(async move {
        shutdown_wait.wait().await;
        let _ = shutdown_tx.send(AppEvent::Shutdown);
    });

    let repository = InMemoryRewardRepository::new(config.catalog.clone())
        .with_latency(Duration::from_millis(config.data.fetch_latency_ms))
        .with_failure(config.data.fail_with.clone());

    let wake_tx = parking_lot::Mutex::new(events.sender());
    let wake: Wake = Arc::new(move || {
        let _ = wake_tx.lock().send(AppEvent::DataReady);
    });

    let mut app = App::new(AppContext {
        runtime: runtime.handle().clone(),
        repository: Arc::new(repository),
        share_sheet: ShareSheet::from_config(&config.share),
        profile: config.profile.clone(),
        wake: Some(wake),
    });

    let nav_tx = parking_lot::Mutex::new(events.sender());
    app.nav_mut().subscribe_route(move |route| {
        let _ = nav_tx.lock().send(AppEvent::Navigated(route));
    });

    if let Some(path) = open.as_deref() {
        let route = app
            .open_deep_link(path)
            .with_context(|| format!("Cannot open '{path}'"))?;
        tracing::info!(%route, "opened deep link");
    }

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    if let Ok((_, rows)) = crossterm::terminal::size() {
        app.on_resize(rows);
    }
    tracing::info!("storefront started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, rows)) => app.on_resize(rows),
            Ok(AppEvent::DataReady) => app.on_data_ready(),
            Ok(AppEvent::Navigated(route)) => {
                tracing::debug!(%route, "navigated");
                app.on_tick();
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("storefront stopped");
    Ok(())
}
