//! Head unit user preferences

use super::keys;
use super::options::{AutoLaunchTarget, DayNightMode, Speaker, AUTO_LAUNCH_NONE};
use crate::error::Result;
use crate::prefs::{PreferenceSink, PreferenceSource};

/// User preferences for the head unit
///
/// Enumerated integers (`day_night_mode`, `speaker_index`, `auto_launch_item`)
/// are kept as raw codes and are not range-checked; use the typed readers
/// when a known variant is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Turn Bluetooth on at startup
    pub auto_open_bt: bool,
    /// Turn GPS on at startup
    pub auto_open_gps: bool,
    pub keep_screen_on: bool,
    /// 0 auto, 1 day, 2 night
    pub day_night_mode: i32,
    pub traffic_voice_on: bool,
    pub navi_voice_on: bool,
    pub navi_3d_on: bool,
    /// Pause music during voice prompts instead of lowering it
    pub voice_pause_music: bool,
    /// Route strategy: avoid congestion
    pub congestion: i32,
    /// Route strategy: avoid highways
    pub avoid_high_speed: i32,
    /// Route strategy: avoid tolls
    pub cost: i32,
    /// Route strategy: prefer highways
    pub high_speed: i32,
    pub temp_voice_on: i32,
    pub voltage_voice_on: i32,
    /// Tire pressure alerts
    pub tpms_voice_on: i32,
    pub handbrake_voice_on: i32,
    pub seatbelt_voice_on: i32,
    pub door_voice_on: i32,
    /// Index into [`Speaker::ALL`]
    pub speaker_index: i32,
    pub car_type: String,
    /// License plate
    pub car_number: String,
    /// Driving restriction reminders
    pub restriction: bool,
    pub voice_wakeup: bool,
    /// One of the `AUTO_LAUNCH_*` codes
    pub auto_launch_item: i32,
    /// Speed limit overlay on the dashboard
    pub dsp_limit_speed: bool,
    /// App notification overlay on the dashboard
    pub dsp_app_notification: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_open_bt: true,
            auto_open_gps: true,
            keep_screen_on: true,
            day_night_mode: 0,
            traffic_voice_on: true,
            navi_voice_on: true,
            navi_3d_on: false,
            voice_pause_music: false,
            congestion: 1,
            avoid_high_speed: 0,
            cost: 0,
            high_speed: 1,
            temp_voice_on: 1,
            voltage_voice_on: 0,
            tpms_voice_on: 1,
            handbrake_voice_on: 1,
            seatbelt_voice_on: 1,
            door_voice_on: 1,
            speaker_index: 0,
            car_type: "0".to_string(),
            car_number: String::new(),
            restriction: true,
            voice_wakeup: true,
            auto_launch_item: AUTO_LAUNCH_NONE,
            dsp_limit_speed: true,
            dsp_app_notification: false,
        }
    }
}

impl Settings {
    /// Build a record from `source`, using defaults for missing keys
    pub fn from_source(source: &impl PreferenceSource) -> Self {
        let mut settings = Self::default();
        settings.restore(source);
        settings
    }

    /// Write every field under its persisted key, then commit once
    pub fn store(&self, sink: &mut impl PreferenceSink) -> Result<()> {
        sink.put_bool(keys::DSP_LIMIT_SPEED, self.dsp_limit_speed);
        sink.put_bool(keys::AUTO_OPEN_BT, self.auto_open_bt);
        sink.put_bool(keys::AUTO_OPEN_GPS, self.auto_open_gps);
        sink.put_bool(keys::KEEP_SCREEN_ON, self.keep_screen_on);
        sink.put_bool(keys::TRAFFIC_VOICE_ON, self.traffic_voice_on);
        sink.put_bool(keys::NAVI_VOICE_ON, self.navi_voice_on);
        sink.put_bool(keys::NAVI_3D_ON, self.navi_3d_on);
        sink.put_bool(keys::VOICE_PAUSE_MUSIC, self.voice_pause_music);
        sink.put_bool(keys::RESTRICTION, self.restriction);
        sink.put_bool(keys::VOICE_WAKEUP, self.voice_wakeup);
        sink.put_bool(keys::DSP_APP_NOTIFICATION, self.dsp_app_notification);
        sink.put_int(keys::DAY_NIGHT_MODE, self.day_night_mode);
        sink.put_int(keys::CONGESTION, self.congestion);
        sink.put_int(keys::AVOID_HIGH_SPEED, self.avoid_high_speed);
        sink.put_int(keys::COST, self.cost);
        sink.put_int(keys::HIGH_SPEED, self.high_speed);
        sink.put_int(keys::TEMP_VOICE_ON, self.temp_voice_on);
        sink.put_int(keys::VOLTAGE_VOICE_ON, self.voltage_voice_on);
        sink.put_int(keys::TPMS_VOICE_ON, self.tpms_voice_on);
        sink.put_int(keys::HANDBRAKE_VOICE_ON, self.handbrake_voice_on);
        sink.put_int(keys::SEATBELT_VOICE_ON, self.seatbelt_voice_on);
        sink.put_int(keys::DOOR_VOICE_ON, self.door_voice_on);
        sink.put_int(keys::SPEAKER_INDEX, self.speaker_index);
        sink.put_text(keys::CAR_TYPE, &self.car_type);
        sink.put_text(keys::CAR_NUMBER, &self.car_number);
        sink.put_int(keys::AUTO_LAUNCH_ITEM, self.auto_launch_item);

        if let Err(error) = sink.commit() {
            tracing::error!(%error, "Failed to commit settings");
            return Err(error);
        }
        tracing::debug!("Settings stored");
        Ok(())
    }

    /// Overwrite every field from `source`; missing keys take their default
    pub fn restore(&mut self, source: &impl PreferenceSource) {
        self.dsp_limit_speed = source.get_bool(keys::DSP_LIMIT_SPEED, true);
        self.auto_open_bt = source.get_bool(keys::AUTO_OPEN_BT, true);
        self.auto_open_gps = source.get_bool(keys::AUTO_OPEN_GPS, true);
        self.keep_screen_on = source.get_bool(keys::KEEP_SCREEN_ON, true);
        self.traffic_voice_on = source.get_bool(keys::TRAFFIC_VOICE_ON, true);
        self.navi_voice_on = source.get_bool(keys::NAVI_VOICE_ON, true);
        self.navi_3d_on = source.get_bool(keys::NAVI_3D_ON, false);
        self.voice_pause_music = source.get_bool(keys::VOICE_PAUSE_MUSIC, false);
        self.restriction = source.get_bool(keys::RESTRICTION, true);
        self.voice_wakeup = source.get_bool(keys::VOICE_WAKEUP, true);
        self.dsp_app_notification = source.get_bool(keys::DSP_APP_NOTIFICATION, false);
        self.day_night_mode = source.get_int(keys::DAY_NIGHT_MODE, 0);
        self.congestion = source.get_int(keys::CONGESTION, 1);
        self.avoid_high_speed = source.get_int(keys::AVOID_HIGH_SPEED, 0);
        self.high_speed = source.get_int(keys::HIGH_SPEED, 1);
        self.cost = source.get_int(keys::COST, 0);
        self.temp_voice_on = source.get_int(keys::TEMP_VOICE_ON, 1);
        self.voltage_voice_on = source.get_int(keys::VOLTAGE_VOICE_ON, 0);
        self.tpms_voice_on = source.get_int(keys::TPMS_VOICE_ON, 1);
        self.handbrake_voice_on = source.get_int(keys::HANDBRAKE_VOICE_ON, 1);
        self.seatbelt_voice_on = source.get_int(keys::SEATBELT_VOICE_ON, 1);
        self.door_voice_on = source.get_int(keys::DOOR_VOICE_ON, 1);
        self.speaker_index = source.get_int(keys::SPEAKER_INDEX, 0);
        self.car_type = source.get_text(keys::CAR_TYPE, "0");
        self.car_number = source.get_text(keys::CAR_NUMBER, "");
        self.auto_launch_item = source.get_int(keys::AUTO_LAUNCH_ITEM, AUTO_LAUNCH_NONE);
        tracing::debug!("Settings restored");
    }

    pub const fn day_night(&self) -> DayNightMode {
        DayNightMode::from_code(self.day_night_mode)
    }

    pub fn set_day_night(&mut self, mode: DayNightMode) {
        self.day_night_mode = mode.code();
    }

    pub const fn speaker(&self) -> Speaker {
        Speaker::from_index(self.speaker_index)
    }

    pub fn set_speaker(&mut self, speaker: Speaker) {
        self.speaker_index = speaker.index();
    }

    pub const fn auto_launch_target(&self) -> AutoLaunchTarget {
        AutoLaunchTarget::from_code(self.auto_launch_item)
    }

    pub fn set_auto_launch_target(&mut self, target: AutoLaunchTarget) {
        self.auto_launch_item = target.code();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::options::{AUTO_LAUNCH_AMAP, AUTO_LAUNCH_INNER};
    use crate::prefs::{PreferenceValue, Preferences};
    use pretty_assertions::assert_eq;

    fn stored(settings: &Settings) -> Preferences {
        let mut prefs = Preferences::new();
        settings.store(&mut prefs.edit()).unwrap();
        prefs
    }

    fn round_trip(settings: &Settings) -> Settings {
        Settings::from_source(&stored(settings))
    }

    /// Sink whose commit always fails
    struct FailingSink;

    impl PreferenceSink for FailingSink {
        fn put(&mut self, _key: &str, _value: PreferenceValue) {}

        fn commit(&mut self) -> Result<()> {
            Err(Error::InvalidValue("disk full".to_string()))
        }
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.traffic_voice_on);
        assert_eq!(settings.day_night_mode, 0);
        assert_eq!(settings.car_type, "0");
        assert_eq!(settings.car_number, "");
        assert_eq!(settings.auto_launch_target(), AutoLaunchTarget::None);
    }

    #[test]
    fn test_load_from_empty_source_matches_field_defaults() {
        let loaded = Settings::from_source(&Preferences::new());
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_restore_overwrites_every_field_with_load_defaults() {
        let mut settings = Settings {
            auto_open_bt: false,
            auto_open_gps: false,
            keep_screen_on: false,
            day_night_mode: 2,
            traffic_voice_on: false,
            navi_voice_on: false,
            navi_3d_on: true,
            voice_pause_music: true,
            congestion: 0,
            avoid_high_speed: 1,
            cost: 1,
            high_speed: 0,
            temp_voice_on: 0,
            voltage_voice_on: 1,
            tpms_voice_on: 0,
            handbrake_voice_on: 0,
            seatbelt_voice_on: 0,
            door_voice_on: 0,
            speaker_index: 5,
            car_type: "9".to_string(),
            car_number: "X".to_string(),
            restriction: false,
            voice_wakeup: false,
            auto_launch_item: AUTO_LAUNCH_INNER,
            dsp_limit_speed: false,
            dsp_app_notification: true,
        };
        settings.restore(&Preferences::new());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_fresh_load_scenario() {
        let loaded = Settings::from_source(&Preferences::new());
        assert!(loaded.traffic_voice_on);
        assert_eq!(loaded.day_night_mode, 0);
        assert_eq!(loaded.car_number, "");
    }

    #[test]
    fn test_store_writes_every_key_with_native_kind() {
        let prefs = stored(&Settings::default());
        assert_eq!(prefs.len(), keys::ALL.len());
        for (key, kind) in keys::ALL {
            let value = prefs.value(key).unwrap_or_else(|| panic!("{key} missing"));
            assert_eq!(value.kind(), kind, "{key}");
        }
    }

    #[test]
    fn test_keep_screen_on_uses_legacy_key() {
        let settings = Settings {
            keep_screen_on: false,
            ..Settings::default()
        };
        let prefs = stored(&settings);
        assert_eq!(
            prefs.value("bKeepScreenOn"),
            Some(&PreferenceValue::Bool(false))
        );
        assert!(!prefs.contains_key("isKeepScreenOn"));
    }

    #[test]
    fn test_round_trip_all_fields() {
        let settings = Settings {
            auto_open_bt: false,
            auto_open_gps: false,
            keep_screen_on: false,
            day_night_mode: 1,
            traffic_voice_on: false,
            navi_voice_on: false,
            navi_3d_on: true,
            voice_pause_music: true,
            congestion: 0,
            avoid_high_speed: 1,
            cost: 1,
            high_speed: 0,
            temp_voice_on: 0,
            voltage_voice_on: 1,
            tpms_voice_on: 0,
            handbrake_voice_on: 0,
            seatbelt_voice_on: 0,
            door_voice_on: 0,
            speaker_index: 3,
            car_type: "7".to_string(),
            car_number: "ABC123".to_string(),
            restriction: false,
            voice_wakeup: false,
            auto_launch_item: AUTO_LAUNCH_AMAP,
            dsp_limit_speed: false,
            dsp_app_notification: true,
        };
        assert_eq!(round_trip(&settings), settings);
    }

    #[test]
    fn test_car_identity_round_trip() {
        let settings = Settings {
            car_type: "7".to_string(),
            car_number: "ABC123".to_string(),
            ..Settings::default()
        };
        let loaded = round_trip(&settings);
        assert_eq!(loaded.car_type, "7");
        assert_eq!(loaded.car_number, "ABC123");
    }

    #[test]
    fn test_store_is_idempotent() {
        let settings = Settings {
            cost: 1,
            car_number: "ABC123".to_string(),
            ..Settings::default()
        };
        let mut prefs = Preferences::new();
        settings.store(&mut prefs.edit()).unwrap();
        let first = prefs.clone();
        settings.store(&mut prefs.edit()).unwrap();
        assert_eq!(prefs, first);
    }

    #[test]
    fn test_auto_launch_codes_round_trip() {
        assert_eq!(AUTO_LAUNCH_NONE, 0);
        for code in [AUTO_LAUNCH_NONE, AUTO_LAUNCH_AMAP, AUTO_LAUNCH_INNER] {
            let settings = Settings {
                auto_launch_item: code,
                ..Settings::default()
            };
            assert_eq!(round_trip(&settings).auto_launch_item, code);
        }
    }

    #[test]
    fn test_speaker_indexes_round_trip() {
        for index in 0..=5 {
            let settings = Settings {
                speaker_index: index,
                ..Settings::default()
            };
            let loaded = round_trip(&settings);
            assert_eq!(loaded.speaker_index, index);
            assert_eq!(loaded.speaker().index(), index);
        }
    }

    #[test]
    fn test_unknown_codes_are_kept_verbatim() {
        let settings = Settings {
            day_night_mode: 7,
            speaker_index: 42,
            auto_launch_item: 3,
            ..Settings::default()
        };
        let loaded = round_trip(&settings);
        assert_eq!(loaded, settings);
        assert_eq!(loaded.day_night(), DayNightMode::Auto);
        assert_eq!(loaded.speaker(), Speaker::AmapDefault);
        assert_eq!(loaded.auto_launch_target(), AutoLaunchTarget::None);
    }

    #[test]
    fn test_typed_setters_store_codes() {
        let mut settings = Settings::default();
        settings.set_day_night(DayNightMode::Night);
        settings.set_speaker(Speaker::Child);
        settings.set_auto_launch_target(AutoLaunchTarget::Inner);
        assert_eq!(settings.day_night_mode, 2);
        assert_eq!(settings.speaker_index, 5);
        assert_eq!(settings.auto_launch_item, AUTO_LAUNCH_INNER);
    }

    #[test]
    fn test_restore_ignores_wrongly_typed_values() {
        let prefs: Preferences = [
            (
                keys::CONGESTION.to_string(),
                PreferenceValue::Text("2".to_string()),
            ),
            (keys::CAR_TYPE.to_string(), PreferenceValue::Int(7)),
            (keys::COST.to_string(), PreferenceValue::Int(1)),
        ]
        .into_iter()
        .collect();
        let loaded = Settings::from_source(&prefs);
        assert_eq!(loaded.congestion, 1);
        assert_eq!(loaded.car_type, "0");
        assert_eq!(loaded.cost, 1);
    }

    #[test]
    fn test_store_surfaces_commit_failure() {
        let result = Settings::default().store(&mut FailingSink);
        assert!(matches!(result, Err(Error::InvalidValue(_))));
    }
}
