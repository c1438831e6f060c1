use chrono::NaiveDate;
use core::fmt::Write;
use heapless::String;

use crate::{error::WatchfaceError, settings::WatchfaceSettings};

/// Room for an abbreviated weekday, "Fri".
pub const DAY_TEXT_LEN: usize = 3;
/// Room for an abbreviated month and day on two lines, "Oct\n16".
pub const DATE_TEXT_LEN: usize = 6;

const DAY_FORMAT: &str = "%a";
const DATE_FORMAT: &str = "%b\n%e";

/// Everything the watch face keeps between ticks.
#[derive(Debug, Clone)]
pub struct WatchfaceState {
    day_text: String<DAY_TEXT_LEN>,
    date_text: String<DATE_TEXT_LEN>,
    settings: WatchfaceSettings,
}

impl WatchfaceState {
    pub fn new(settings: WatchfaceSettings) -> Result<Self, WatchfaceError> {
        settings.layout.validate()?;

        Ok(Self {
            day_text: String::new(),
            date_text: String::new(),
            settings,
        })
    }

    /// Refreshes the day and date text for `date`.
    pub fn update_text(&mut self, date: NaiveDate) -> Result<(), WatchfaceError> {
        self.day_text = format_into(date, DAY_FORMAT, "day")?;
        self.date_text = format_into(date, DATE_FORMAT, "date")?;

        Ok(())
    }

    pub fn day_text(&self) -> &str {
        self.day_text.as_str()
    }

    pub fn date_text(&self) -> &str {
        self.date_text.as_str()
    }

    pub fn settings(&self) -> &WatchfaceSettings {
        &self.settings
    }
}

fn format_into<const N: usize>(
    date: NaiveDate,
    format: &str,
    field: &'static str,
) -> Result<String<N>, WatchfaceError> {
    let mut text = String::new();

    write!(text, "{}", date.format(format))
        .map_err(|_| WatchfaceError::TextOverflow { field, capacity: N })?;

    Ok(text)
}
