//! Fonts used by the watch face text.

pub use u8g2_fonts::fonts::{
    u8g2_font_helvB18_tf as helv_bold_18, u8g2_font_helvR18_tf as helv_regular_18,
};
