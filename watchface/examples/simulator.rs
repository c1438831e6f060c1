use std::{thread, time::Duration};

use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use log::LevelFilter;
use watchface::{
    layout::{CANVAS_HEIGHT, CANVAS_WIDTH},
    App, BinarySexagesimal, SystemClock, WatchfaceSettings,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .parse_default_env()
        .init();

    let is_24h_style = std::env::var("WATCHFACE_24H").is_ok_and(|value| value == "1");

    let display: SimulatorDisplay<BinaryColor> =
        SimulatorDisplay::new(Size::new(CANVAS_WIDTH, CANVAS_HEIGHT));

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::Default)
        .scale(2)
        .pixel_spacing(0)
        .build();
    let mut window = Window::new("Simulator", &output_settings);

    let watchface = BinarySexagesimal::new(WatchfaceSettings::default())?;
    let mut app = App::new(watchface, SystemClock::new(is_24h_style), display);

    app.init()?;

    'running: loop {
        app.step();

        window.update(app.display());

        for event in window.events() {
            if let SimulatorEvent::Quit = event {
                break 'running;
            }
        }

        thread::sleep(POLL_INTERVAL);
    }

    Ok(())
}
