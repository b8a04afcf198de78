use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::info;

use unit_admin::app::{App, AppConfig};
use unit_admin::logging;
use unit_admin::units::{HttpUnitsApi, UnitsApi};

const TICK: Duration = Duration::from_millis(250);

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    let _guard = logging::init_logging(&config.log_dir)?;

    let api = HttpUnitsApi::new(&config.api_base_url, &config.units_path, config.request_timeout())
        .context("invalid backend address")?;
    info!(backend = %api.location(), "starting");

    let mut app = App::new(config, Box::new(api));
    app.mount();

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();

    info!("exiting");
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| app.render(frame))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key);
        }
    }
    Ok(())
}
