use chrono::{NaiveDate, NaiveDateTime, Timelike};
use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point},
    text::Text,
    Drawable,
};
use std::fmt::Debug;

use crate::{
    clock::{Clock, ClockReading},
    draw::{clear, DrawError},
    error::WatchfaceError,
    page::watch_page::WatchPage,
    settings::WatchfaceSettings,
    state::WatchfaceState,
    White,
};

/// Granularity at which a watch face wants to hear about the time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TickUnit {
    #[default]
    Second,
    Minute,
    Hour,
    Day,
}

impl TickUnit {
    fn key(self, time: &NaiveDateTime) -> (NaiveDate, u32) {
        let seconds = time.num_seconds_from_midnight();

        let unit = match self {
            TickUnit::Second => seconds,
            TickUnit::Minute => seconds / 60,
            TickUnit::Hour => seconds / 3600,
            TickUnit::Day => 0,
        };

        (time.date(), unit)
    }

    /// Whether `now` lies in another unit than `previous`.
    pub fn changed(self, previous: &NaiveDateTime, now: &NaiveDateTime) -> bool {
        self.key(previous) != self.key(now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickEvent {
    pub tick_time: NaiveDateTime,
    pub unit: TickUnit,
}

/// Handlers a watch face registers with the host.
pub trait Watchface {
    fn on_init(&mut self, now: NaiveDateTime) -> Result<(), WatchfaceError>;

    fn on_tick(&mut self, tick: &TickEvent) -> Result<(), WatchfaceError>;

    fn draw<Display>(&self, display: &mut Display, reading: &ClockReading) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = BinaryColor>,
        Display::Error: Debug;

    fn tick_unit(&self) -> TickUnit {
        TickUnit::Second
    }
}

/// Hours, minutes and seconds in binary, with the day and date on the left.
#[derive(Debug, Clone)]
pub struct BinarySexagesimal {
    state: WatchfaceState,
}

impl BinarySexagesimal {
    pub fn new(settings: WatchfaceSettings) -> Result<Self, WatchfaceError> {
        Ok(Self {
            state: WatchfaceState::new(settings)?,
        })
    }

    pub fn state(&self) -> &WatchfaceState {
        &self.state
    }
}

impl Watchface for BinarySexagesimal {
    fn on_init(&mut self, now: NaiveDateTime) -> Result<(), WatchfaceError> {
        self.state.update_text(now.date())
    }

    fn on_tick(&mut self, tick: &TickEvent) -> Result<(), WatchfaceError> {
        self.state.update_text(tick.tick_time.date())
    }

    fn draw<Display>(&self, display: &mut Display, reading: &ClockReading) -> Result<(), DrawError>
    where
        Display: DrawTarget<Color = BinaryColor>,
        Display::Error: Debug,
    {
        WatchPage::new(&self.state, *reading).draw(display)
    }

    fn tick_unit(&self) -> TickUnit {
        self.state.settings().tick_unit
    }
}

/// Single threaded host loop: polls the clock, delivers ticks, redraws.
pub struct App<W, C, Display> {
    watchface: W,
    clock: C,
    display: Display,
    last_tick: Option<NaiveDateTime>,
}

impl<W, C, Display> App<W, C, Display>
where
    W: Watchface,
    C: Clock,
    Display: DrawTarget<Color = BinaryColor>,
    Display::Error: Debug,
{
    pub fn new(watchface: W, clock: C, display: Display) -> Self {
        Self {
            watchface,
            clock,
            display,
            last_tick: None,
        }
    }

    pub fn init(&mut self) -> Result<(), WatchfaceError> {
        log::info!("initialize");

        let now = self.clock.now();
        self.watchface.on_init(now)?;
        self.last_tick = Some(now);

        self.draw_at(&now)
    }

    /// Delivers a tick and redraws if the tick unit rolled over.
    ///
    /// Returns whether a new frame was drawn.
    pub fn poll(&mut self) -> Result<bool, WatchfaceError> {
        let now = self.clock.now();
        let unit = self.watchface.tick_unit();

        if let Some(previous) = &self.last_tick {
            if !unit.changed(previous, &now) {
                return Ok(false);
            }
        }

        self.last_tick = Some(now);
        log::debug!("tick {:?} at {}", unit, now);

        self.watchface.on_tick(&TickEvent {
            tick_time: now,
            unit,
        })?;
        self.draw_at(&now)?;

        Ok(true)
    }

    /// Draws a frame for the current time without delivering a tick.
    pub fn redraw(&mut self) -> Result<(), WatchfaceError> {
        let now = self.clock.now();
        self.draw_at(&now)
    }

    /// Like [`App::poll`], but shows errors on the screen instead of returning them.
    pub fn step(&mut self) -> bool {
        match self.poll() {
            Ok(drawn) => drawn,
            Err(e) => {
                self.handle_error(e);
                true
            }
        }
    }

    fn draw_at(&mut self, now: &NaiveDateTime) -> Result<(), WatchfaceError> {
        let reading = ClockReading::from_time(now, self.clock.is_24h_style());
        self.watchface.draw(&mut self.display, &reading)?;

        log::debug!(
            "frame {:02}:{:02}:{:02}",
            reading.display_hour(),
            reading.minute,
            reading.second
        );

        Ok(())
    }

    // Show error message on the screen
    fn handle_error(&mut self, e: WatchfaceError) {
        log::error!("Unexpected error: {:?}", e);

        let style = MonoTextStyle::new(&FONT_6X10, White);

        let shown = clear(&mut self.display).and_then(|_| {
            Text::new(&format!("Error:\n{}", e), Point::new(2, 12), style)
                .draw(&mut self.display)
                .map(|_| ())
                .map_err(|err| DrawError::DrawFailed(format!("{:?}", err)))
        });

        if let Err(err) = shown {
            log::error!("Failed to show error: {}", err);
        }
    }

    pub fn watchface(&self) -> &W {
        &self.watchface
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn into_display(self) -> Display {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::FixedClock, display::FrameBuffer, layout::GridLayout, Black};
    use chrono::Duration;
    use embedded_graphics::{
        prelude::{OriginDimensions, Size},
        Pixel,
    };

    fn at(day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn app(
        now: NaiveDateTime,
        tick_unit: TickUnit,
    ) -> App<BinarySexagesimal, FixedClock, FrameBuffer<BinaryColor>> {
        let settings = WatchfaceSettings::default().tick_unit(tick_unit);

        App::new(
            BinarySexagesimal::new(settings).unwrap(),
            FixedClock::new(now, false),
            FrameBuffer::watch(),
        )
    }

    fn is_filled(
        app: &App<BinarySexagesimal, FixedClock, FrameBuffer<BinaryColor>>,
        column: usize,
        row: usize,
    ) -> bool {
        let center = GridLayout::default().cell_center(column, row);
        app.display().get_pixel(center) == White
    }

    #[test]
    fn tick_units() {
        let base = at(16, 10, 0, 0);
        let later = base + Duration::milliseconds(500);

        assert!(!TickUnit::Second.changed(&base, &later));
        assert!(TickUnit::Second.changed(&base, &at(16, 10, 0, 1)));
        assert!(!TickUnit::Minute.changed(&at(16, 10, 0, 1), &at(16, 10, 0, 59)));
        assert!(TickUnit::Minute.changed(&at(16, 10, 0, 59), &at(16, 10, 1, 0)));
        assert!(TickUnit::Hour.changed(&at(16, 10, 59, 59), &at(16, 11, 0, 0)));
        assert!(!TickUnit::Day.changed(&at(16, 0, 0, 0), &at(16, 23, 59, 59)));
        assert!(TickUnit::Day.changed(&at(16, 23, 59, 59), &at(17, 0, 0, 0)));
        // same second of day, other day
        assert!(TickUnit::Second.changed(&at(16, 10, 0, 0), &at(17, 10, 0, 0)));
    }

    #[test]
    fn init_draws_first_frame() {
        let mut app = app(at(16, 14, 5, 0), TickUnit::Second);
        app.init().unwrap();

        assert_eq!(app.watchface().state().day_text(), "Fri");
        assert_eq!(app.watchface().state().date_text(), "Oct\n16");

        // 2 o'clock
        assert!(is_filled(&app, 0, 4));
        assert!(!is_filled(&app, 0, 5));
        // 5 minutes
        assert!(is_filled(&app, 1, 3));
        assert!(is_filled(&app, 1, 5));
        assert!(!is_filled(&app, 2, 5));
    }

    #[test]
    fn poll_waits_for_next_second() {
        let mut app = app(at(16, 14, 5, 0), TickUnit::Second);
        app.init().unwrap();

        assert!(!app.poll().unwrap());

        app.clock_mut().advance(Duration::seconds(1));
        assert!(app.poll().unwrap());
        assert!(is_filled(&app, 2, 5));
        assert!(!app.poll().unwrap());
    }

    #[test]
    fn minute_ticks_skip_seconds() {
        let mut app = app(at(16, 14, 5, 0), TickUnit::Minute);
        app.init().unwrap();

        app.clock_mut().advance(Duration::seconds(30));
        assert!(!app.poll().unwrap());
        assert!(!is_filled(&app, 2, 5));

        app.clock_mut().advance(Duration::seconds(30));
        assert!(app.poll().unwrap());
        assert!(is_filled(&app, 1, 4));
    }

    #[test]
    fn date_text_follows_midnight() {
        let mut app = app(at(16, 23, 59, 59), TickUnit::Second);
        app.init().unwrap();

        app.clock_mut().advance(Duration::seconds(1));
        app.poll().unwrap();

        assert_eq!(app.watchface().state().day_text(), "Sat");
        assert_eq!(app.watchface().state().date_text(), "Oct\n17");
        // midnight in 12 hour mode
        assert!(is_filled(&app, 0, 2));
        assert!(is_filled(&app, 0, 3));
    }

    #[test]
    fn twenty_four_hour_style_comes_from_clock() {
        let mut app = app(at(16, 14, 5, 0), TickUnit::Second);
        app.clock_mut().set_24h_style(true);
        app.init().unwrap();

        // 14 = 001110
        assert!(is_filled(&app, 0, 2));
        assert!(is_filled(&app, 0, 3));
        assert!(is_filled(&app, 0, 4));
        assert!(!is_filled(&app, 0, 5));
    }

    #[test]
    fn redraw_keeps_text_from_last_tick() {
        let mut app = app(at(16, 23, 59, 59), TickUnit::Second);
        app.init().unwrap();

        app.clock_mut().advance(Duration::seconds(1));
        app.redraw().unwrap();

        // new frame, but no tick was delivered
        assert_eq!(app.watchface().state().day_text(), "Fri");
        assert!(is_filled(&app, 0, 2));
        assert!(!is_filled(&app, 2, 5));

        // the missed tick still arrives on the next poll
        assert!(app.poll().unwrap());
        assert_eq!(app.watchface().state().day_text(), "Sat");
    }

    #[test]
    fn poll_before_init_ticks() {
        let mut app = app(at(16, 14, 5, 0), TickUnit::Hour);

        assert!(app.poll().unwrap());
        assert_eq!(app.watchface().state().day_text(), "Fri");
    }

    struct BrokenDisplay;

    impl DrawTarget for BrokenDisplay {
        type Color = BinaryColor;
        type Error = &'static str;

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Err("bus error")
        }
    }

    impl OriginDimensions for BrokenDisplay {
        fn size(&self) -> Size {
            Size::new(144, 168)
        }
    }

    #[test]
    fn poll_reports_draw_failures() {
        let mut app = App::new(
            BinarySexagesimal::new(WatchfaceSettings::default()).unwrap(),
            FixedClock::new(at(16, 14, 5, 0), false),
            BrokenDisplay,
        );

        assert!(matches!(app.poll(), Err(WatchfaceError::Draw(_))));

        app.clock_mut().advance(Duration::seconds(1));
        assert!(app.step());
    }

    #[test]
    fn step_shows_errors_on_screen() {
        struct FailingFace;

        impl Watchface for FailingFace {
            fn on_init(&mut self, _now: NaiveDateTime) -> Result<(), WatchfaceError> {
                Ok(())
            }

            fn on_tick(&mut self, _tick: &TickEvent) -> Result<(), WatchfaceError> {
                Err(WatchfaceError::TextOverflow {
                    field: "day",
                    capacity: 3,
                })
            }

            fn draw<Display>(
                &self,
                _display: &mut Display,
                _reading: &ClockReading,
            ) -> Result<(), DrawError>
            where
                Display: DrawTarget<Color = BinaryColor>,
                Display::Error: Debug,
            {
                Ok(())
            }
        }

        let mut app = App::new(
            FailingFace,
            FixedClock::new(at(16, 14, 5, 0), false),
            FrameBuffer::watch(),
        );

        assert!(app.step());
        assert!(app.display().count(White) > 0);
        assert!(app.display().count(Black) > 0);
    }
}
