mod i420;
mod rgb;
mod visit_2x2;

pub(crate) use i420::{I420Reader, I420ToRgb};
pub(crate) use rgb::RgbWriter;
