use chrono::{Local, NaiveDateTime, Timelike};

/// A single reading of the host clock, as consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockReading {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub is_24h_mode: bool,
}

impl ClockReading {
    pub fn new(hour: u8, minute: u8, second: u8, is_24h_mode: bool) -> Self {
        Self {
            hour,
            minute,
            second,
            is_24h_mode,
        }
    }

    pub fn from_time<T: Timelike>(time: &T, is_24h_mode: bool) -> Self {
        // chrono keeps these in 0..24 and 0..60 (leap seconds live in the nanoseconds)
        Self::new(
            time.hour() as u8,
            time.minute() as u8,
            time.second() as u8,
            is_24h_mode,
        )
    }

    pub fn display_hour(&self) -> u8 {
        display_hour(self.hour, self.is_24h_mode)
    }

    /// Values for the hours, minutes and seconds columns, in column order.
    pub fn fields(&self) -> [u8; 3] {
        [self.display_hour(), self.minute, self.second]
    }
}

/// Applies the 12/24-hour display policy to a 0-23 hour.
pub fn display_hour(hour: u8, is_24h_mode: bool) -> u8 {
    if is_24h_mode {
        return hour;
    }

    // 0 and 12 both show as 12
    match hour % 12 {
        0 => 12,
        hour => hour,
    }
}

pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    fn is_24h_style(&self) -> bool;

    fn reading(&self) -> ClockReading {
        ClockReading::from_time(&self.now(), self.is_24h_style())
    }
}

/// Local wall clock of the machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    is_24h_style: bool,
}

impl SystemClock {
    pub fn new(is_24h_style: bool) -> Self {
        Self { is_24h_style }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn is_24h_style(&self) -> bool {
        self.is_24h_style
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
    is_24h_style: bool,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime, is_24h_style: bool) -> Self {
        Self { now, is_24h_style }
    }

    pub fn set(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn set_24h_style(&mut self, is_24h_style: bool) {
        self.is_24h_style = is_24h_style;
    }

    pub fn advance(&mut self, by: chrono::Duration) {
        self.now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn is_24h_style(&self) -> bool {
        self.is_24h_style
    }
}
