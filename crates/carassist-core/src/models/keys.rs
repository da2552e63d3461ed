//! Persisted key names
//!
//! These strings are the on-disk contract and must not change. Note that
//! `keep_screen_on` is stored under `bKeepScreenOn`.

use crate::prefs::PreferenceKind;

pub const DSP_LIMIT_SPEED: &str = "mDspLimitSpeed";
pub const AUTO_OPEN_BT: &str = "bAutoOpenBT";
pub const AUTO_OPEN_GPS: &str = "bAutoOpenGps";
pub const KEEP_SCREEN_ON: &str = "bKeepScreenOn";
pub const TRAFFIC_VOICE_ON: &str = "isTrafficVoiceOn";
pub const NAVI_VOICE_ON: &str = "isNaviVoiceOn";
pub const NAVI_3D_ON: &str = "is3DNaviOn";
pub const VOICE_PAUSE_MUSIC: &str = "voicePauseMusic";
pub const RESTRICTION: &str = "mRestriction";
pub const VOICE_WAKEUP: &str = "mVoiceWakeup";
pub const DSP_APP_NOTIFICATION: &str = "mDspAppNotification";
pub const DAY_NIGHT_MODE: &str = "dayNightMode";
pub const CONGESTION: &str = "mCongestion";
pub const AVOID_HIGH_SPEED: &str = "mAvoidHighSpeed";
pub const COST: &str = "mCost";
pub const HIGH_SPEED: &str = "mHighSpeed";
pub const TEMP_VOICE_ON: &str = "mTempVoiceOn";
pub const VOLTAGE_VOICE_ON: &str = "mVoltageVoiceOn";
pub const TPMS_VOICE_ON: &str = "mTpmsVoiceOn";
pub const HANDBRAKE_VOICE_ON: &str = "mHandbrakeVoiceOn";
pub const SEATBELT_VOICE_ON: &str = "mSeatbeltVoiceOn";
pub const DOOR_VOICE_ON: &str = "mDoorVoiceOn";
pub const SPEAKER_INDEX: &str = "mSpeakerIndex";
pub const CAR_TYPE: &str = "mCarType";
pub const CAR_NUMBER: &str = "mCarNumber";
pub const AUTO_LAUNCH_ITEM: &str = "mAutoLaunchItem";

/// Every persisted key with its storage kind, in store order
pub const ALL: [(&str, PreferenceKind); 26] = [
    (DSP_LIMIT_SPEED, PreferenceKind::Bool),
    (AUTO_OPEN_BT, PreferenceKind::Bool),
    (AUTO_OPEN_GPS, PreferenceKind::Bool),
    (KEEP_SCREEN_ON, PreferenceKind::Bool),
    (TRAFFIC_VOICE_ON, PreferenceKind::Bool),
    (NAVI_VOICE_ON, PreferenceKind::Bool),
    (NAVI_3D_ON, PreferenceKind::Bool),
    (VOICE_PAUSE_MUSIC, PreferenceKind::Bool),
    (RESTRICTION, PreferenceKind::Bool),
    (VOICE_WAKEUP, PreferenceKind::Bool),
    (DSP_APP_NOTIFICATION, PreferenceKind::Bool),
    (DAY_NIGHT_MODE, PreferenceKind::Int),
    (CONGESTION, PreferenceKind::Int),
    (AVOID_HIGH_SPEED, PreferenceKind::Int),
    (COST, PreferenceKind::Int),
    (HIGH_SPEED, PreferenceKind::Int),
    (TEMP_VOICE_ON, PreferenceKind::Int),
    (VOLTAGE_VOICE_ON, PreferenceKind::Int),
    (TPMS_VOICE_ON, PreferenceKind::Int),
    (HANDBRAKE_VOICE_ON, PreferenceKind::Int),
    (SEATBELT_VOICE_ON, PreferenceKind::Int),
    (DOOR_VOICE_ON, PreferenceKind::Int),
    (SPEAKER_INDEX, PreferenceKind::Int),
    (CAR_TYPE, PreferenceKind::Text),
    (CAR_NUMBER, PreferenceKind::Text),
    (AUTO_LAUNCH_ITEM, PreferenceKind::Int),
];

/// Storage kind of a persisted key, `None` if the key is not in the layout
pub fn kind_of(key: &str) -> Option<PreferenceKind> {
    ALL.iter()
        .find(|(name, _)| *name == key)
        .map(|(_, kind)| *kind)
}
