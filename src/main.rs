use std::time::Duration;

use medley::app::{App, Tui, TuiEvent};
use medley::config::UiConfig;
use medley::Result;

fn main() -> Result<()> {
    let config = UiConfig::load()?;
    let mut app = App::new(&config);

    let mut tui = Tui::new(Duration::from_millis(config.tick_rate_ms))?;
    tui.init()?;
    let result = run(&mut tui, &mut app);
    tui.restore()?;

    // Navigation bugs are programmer errors; surface them loudly
    result
}

fn run(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        tui.draw(|f| app.draw(f))?;
        match tui.next_event()? {
            TuiEvent::Tick => app.tick(),
            TuiEvent::Key(key) => app.handle_key(key)?,
        }
    }
    Ok(())
}
