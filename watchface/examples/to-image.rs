use chrono::{Local, NaiveDateTime};
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay};
use watchface::{
    layout::{CANVAS_HEIGHT, CANVAS_WIDTH},
    App, BinarySexagesimal, FixedClock, WatchfaceSettings,
};

/// Usage: to-image [output.png] [YYYY-MM-DDTHH:MM:SS] [24h]
fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);

    let path = args.next().unwrap_or_else(|| "output.png".to_string());
    let now = match args.next() {
        Some(time) => NaiveDateTime::parse_from_str(&time, "%Y-%m-%dT%H:%M:%S")?,
        None => Local::now().naive_local(),
    };
    let is_24h_style = args.next().as_deref() == Some("24h");

    let display: SimulatorDisplay<BinaryColor> =
        SimulatorDisplay::new(Size::new(CANVAS_WIDTH, CANVAS_HEIGHT));

    let output_settings = OutputSettingsBuilder::new()
        .theme(BinaryColorTheme::Default)
        .scale(1)
        .pixel_spacing(0)
        .build();

    let watchface = BinarySexagesimal::new(WatchfaceSettings::default())?;
    let mut app = App::new(watchface, FixedClock::new(now, is_24h_style), display);

    app.init()?;

    let output_image = app.display().to_rgb_output_image(&output_settings);
    output_image.save_png(path)?;

    Ok(())
}
