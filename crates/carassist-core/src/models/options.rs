//! Typed views over the enumerated integer preferences
//!
//! The record stores raw integers so that codes written by newer builds
//! survive a load/save cycle. These enums are for consumers; unknown codes
//! map to the variant that is safe to fall back to.

use std::fmt;

/// Auto-launch code: launch nothing
pub const AUTO_LAUNCH_NONE: i32 = 0;
/// Auto-launch code: launch the external AMap app
pub const AUTO_LAUNCH_AMAP: i32 = 1;
/// Auto-launch code: launch the built-in map
pub const AUTO_LAUNCH_INNER: i32 = 2;

/// Display theme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayNightMode {
    /// Follow time of day
    #[default]
    Auto,
    Day,
    Night,
}

impl DayNightMode {
    pub const ALL: [Self; 3] = [Self::Auto, Self::Day, Self::Night];

    pub const fn code(self) -> i32 {
        match self {
            Self::Auto => 0,
            Self::Day => 1,
            Self::Night => 2,
        }
    }

    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Day,
            2 => Self::Night,
            _ => Self::Auto,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Day => "Day",
            Self::Night => "Night",
        }
    }
}

impl fmt::Display for DayNightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Navigation voice, in the head unit's speaker list order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speaker {
    #[default]
    AmapDefault,
    NormalWoman,
    NormalMan,
    SpecificWoman,
    SpecificMan,
    Child,
}

impl Speaker {
    pub const ALL: [Self; 6] = [
        Self::AmapDefault,
        Self::NormalWoman,
        Self::NormalMan,
        Self::SpecificWoman,
        Self::SpecificMan,
        Self::Child,
    ];

    pub const fn index(self) -> i32 {
        match self {
            Self::AmapDefault => 0,
            Self::NormalWoman => 1,
            Self::NormalMan => 2,
            Self::SpecificWoman => 3,
            Self::SpecificMan => 4,
            Self::Child => 5,
        }
    }

    pub const fn from_index(index: i32) -> Self {
        match index {
            1 => Self::NormalWoman,
            2 => Self::NormalMan,
            3 => Self::SpecificWoman,
            4 => Self::SpecificMan,
            5 => Self::Child,
            _ => Self::AmapDefault,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::AmapDefault => "AMap default",
            Self::NormalWoman => "Standard female",
            Self::NormalMan => "Standard male",
            Self::SpecificWoman => "Featured female",
            Self::SpecificMan => "Featured male",
            Self::Child => "Child",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Navigation app launched automatically at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoLaunchTarget {
    #[default]
    None,
    /// External AMap app
    Amap,
    /// Built-in map
    Inner,
}

impl AutoLaunchTarget {
    pub const fn code(self) -> i32 {
        match self {
            Self::None => AUTO_LAUNCH_NONE,
            Self::Amap => AUTO_LAUNCH_AMAP,
            Self::Inner => AUTO_LAUNCH_INNER,
        }
    }

    pub const fn from_code(code: i32) -> Self {
        match code {
            AUTO_LAUNCH_AMAP => Self::Amap,
            AUTO_LAUNCH_INNER => Self::Inner,
            _ => Self::None,
        }
    }
}

impl fmt::Display for AutoLaunchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "None",
            Self::Amap => "AMap",
            Self::Inner => "Built-in map",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_launch_codes() {
        assert_eq!(AutoLaunchTarget::default().code(), 0);
        assert_eq!(AutoLaunchTarget::Amap.code(), 1);
        assert_eq!(AutoLaunchTarget::Inner.code(), 2);
        assert_eq!(AutoLaunchTarget::from_code(9), AutoLaunchTarget::None);
    }

    #[test]
    fn test_speaker_index_order() {
        for (index, speaker) in (0..).zip(Speaker::ALL) {
            assert_eq!(speaker.index(), index);
            assert_eq!(Speaker::from_index(index), speaker);
        }
        assert_eq!(Speaker::from_index(6), Speaker::AmapDefault);
        assert_eq!(Speaker::from_index(-1), Speaker::AmapDefault);
    }

    #[test]
    fn test_day_night_unknown_is_auto() {
        for mode in DayNightMode::ALL {
            assert_eq!(DayNightMode::from_code(mode.code()), mode);
        }
        assert_eq!(DayNightMode::from_code(3), DayNightMode::Auto);
        assert_eq!(DayNightMode::Night.to_string(), "Night");
    }
}
