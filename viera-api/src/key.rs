//! Remote control key codes
//!
//! Each variant maps to the `NRC_*-ONOFF` code the TV expects in an
//! `X_SendKey` request, and to a short lowercase name usable on command lines.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

macro_rules! define_keys {
    ($($variant:ident => ($name:literal, $code:literal)),* $(,)?) => {
        /// A key of the TV remote
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            /// Every known key, in declaration order
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// Code sent to the TV
            pub fn code(&self) -> &'static str {
                match self {
                    $(Key::$variant => $code,)*
                }
            }

            /// Short lowercase name
            pub fn name(&self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)*
                }
            }
        }
    };
}

define_keys! {
    ThirtySecondSkip => ("30s_skip", "NRC_30S_SKIP-ONOFF"),
    Toggle3d => ("3d", "NRC_3D-ONOFF"),
    Apps => ("apps", "NRC_APPS-ONOFF"),
    Aspect => ("aspect", "NRC_ASPECT-ONOFF"),
    Blue => ("blue", "NRC_BLUE-ONOFF"),
    Cancel => ("cancel", "NRC_CANCEL-ONOFF"),
    ClosedCaptions => ("cc", "NRC_CC-ONOFF"),
    ChannelDown => ("ch_down", "NRC_CH_DOWN-ONOFF"),
    ChannelUp => ("ch_up", "NRC_CH_UP-ONOFF"),
    Input => ("input", "NRC_CHG_INPUT-ONOFF"),
    Network => ("network", "NRC_CHG_NETWORK-ONOFF"),
    Num0 => ("0", "NRC_D0-ONOFF"),
    Num1 => ("1", "NRC_D1-ONOFF"),
    Num2 => ("2", "NRC_D2-ONOFF"),
    Num3 => ("3", "NRC_D3-ONOFF"),
    Num4 => ("4", "NRC_D4-ONOFF"),
    Num5 => ("5", "NRC_D5-ONOFF"),
    Num6 => ("6", "NRC_D6-ONOFF"),
    Num7 => ("7", "NRC_D7-ONOFF"),
    Num8 => ("8", "NRC_D8-ONOFF"),
    Num9 => ("9", "NRC_D9-ONOFF"),
    DigaControl => ("diga_control", "NRC_DIGA_CTL-ONOFF"),
    Display => ("display", "NRC_DISP_MODE-ONOFF"),
    Down => ("down", "NRC_DOWN-ONOFF"),
    Enter => ("enter", "NRC_ENTER-ONOFF"),
    Epg => ("epg", "NRC_EPG-ONOFF"),
    EzSync => ("ez_sync", "NRC_EZ_SYNC-ONOFF"),
    Favorite => ("favorite", "NRC_FAVORITE-ONOFF"),
    FastForward => ("fast_forward", "NRC_FF-ONOFF"),
    Game => ("game", "NRC_GAME-ONOFF"),
    Green => ("green", "NRC_GREEN-ONOFF"),
    Guide => ("guide", "NRC_GUIDE-ONOFF"),
    Hold => ("hold", "NRC_HOLD-ONOFF"),
    Home => ("home", "NRC_HOME-ONOFF"),
    Index => ("index", "NRC_INDEX-ONOFF"),
    Info => ("info", "NRC_INFO-ONOFF"),
    Internet => ("internet", "NRC_INTERNET-ONOFF"),
    Left => ("left", "NRC_LEFT-ONOFF"),
    Menu => ("menu", "NRC_MENU-ONOFF"),
    Mpx => ("mpx", "NRC_MPX-ONOFF"),
    Mute => ("mute", "NRC_MUTE-ONOFF"),
    OffTimer => ("off_timer", "NRC_OFFTIMER-ONOFF"),
    Pause => ("pause", "NRC_PAUSE-ONOFF"),
    Play => ("play", "NRC_PLAY-ONOFF"),
    Power => ("power", "NRC_POWER-ONOFF"),
    Program => ("program", "NRC_PROG-ONOFF"),
    Record => ("record", "NRC_REC-ONOFF"),
    Red => ("red", "NRC_RED-ONOFF"),
    Return => ("return", "NRC_RETURN-ONOFF"),
    Rewind => ("rewind", "NRC_REW-ONOFF"),
    Right => ("right", "NRC_RIGHT-ONOFF"),
    LastView => ("last_view", "NRC_R_TUNE-ONOFF"),
    Sap => ("sap", "NRC_SAP-ONOFF"),
    SdCard => ("sd_card", "NRC_SD_CARD-ONOFF"),
    SkipNext => ("skip_next", "NRC_SKIP_NEXT-ONOFF"),
    SkipPrev => ("skip_prev", "NRC_SKIP_PREV-ONOFF"),
    Split => ("split", "NRC_SPLIT-ONOFF"),
    Stop => ("stop", "NRC_STOP-ONOFF"),
    Subtitles => ("subtitles", "NRC_STTL-ONOFF"),
    SubMenu => ("option", "NRC_SUBMENU-ONOFF"),
    Surround => ("surround", "NRC_SURROUND-ONOFF"),
    Swap => ("swap", "NRC_SWAP-ONOFF"),
    Text => ("text", "NRC_TEXT-ONOFF"),
    Tv => ("tv", "NRC_TV-ONOFF"),
    Up => ("up", "NRC_UP-ONOFF"),
    VieraLink => ("link", "NRC_VIERA_LINK-ONOFF"),
    VolumeDown => ("volume_down", "NRC_VOLDOWN-ONOFF"),
    VolumeUp => ("volume_up", "NRC_VOLUP-ONOFF"),
    VieraTools => ("vtools", "NRC_VTOOLS-ONOFF"),
    Yellow => ("yellow", "NRC_YELLOW-ONOFF"),
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        self.code()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parses either a short name (`volume_up`, case-insensitive) or a raw code
/// (`NRC_VOLUP-ONOFF`).
impl FromStr for Key {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(s) || key.code() == s)
            .ok_or_else(|| ApiError::Usage(format!("Unknown key '{}'", s)))
    }
}
