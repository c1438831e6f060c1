use crate::{app::TickUnit, cell::RingMethod, layout::GridLayout};

/// Build-time configuration of the watch face.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchfaceSettings {
    pub layout: GridLayout,
    pub ring_method: RingMethod,
    pub tick_unit: TickUnit,
}

impl WatchfaceSettings {
    pub fn layout(mut self, layout: GridLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn ring_method(mut self, ring_method: RingMethod) -> Self {
        self.ring_method = ring_method;
        self
    }

    pub fn tick_unit(mut self, tick_unit: TickUnit) -> Self {
        self.tick_unit = tick_unit;
        self
    }
}
