//! Data models for Car assist

pub mod keys;
mod options;
mod settings;

pub use options::{
    AutoLaunchTarget, DayNightMode, Speaker, AUTO_LAUNCH_AMAP, AUTO_LAUNCH_INNER,
    AUTO_LAUNCH_NONE,
};
pub use settings::Settings;
