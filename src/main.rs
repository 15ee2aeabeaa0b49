use anyhow::Result;
use panelhost::config::AppConfig;
use panelhost::panel::{HeadlessWindow, IdleController};
use panelhost::{init_logging, ipc, log_debug, log_panic, telemetry, PanelApp};
use std::io::{self, BufReader};
use std::panic;

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    init_logging(&config);
    telemetry::init_tracing(&config);

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        log_panic(info);
        default_hook(info);
    }));

    let settings = config.display_settings();
    let window = HeadlessWindow::new(
        settings.window_size.0,
        settings.window_size.1,
        &settings.window_title,
    );
    let mut app = PanelApp::new(window, IdleController, settings);

    if config.demo {
        // Standalone path: no host channel, one direct show with defaults.
        log_debug("Starting panelhost (demo)");
        app.show(None);
        return Ok(());
    }

    // Attached mode: the host owns our stdin and drives us over it until a
    // quit command or EOF.
    log_debug("Starting panelhost (attached)");
    let (tx, rx) = crossbeam_channel::unbounded();
    let _listener = ipc::spawn_listener(BufReader::new(io::stdin()), tx);
    app.run(&rx);

    log_debug("panelhost exiting");
    Ok(())
}
