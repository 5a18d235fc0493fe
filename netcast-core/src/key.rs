//! Remote control key definitions

use std::fmt;

use crate::error::{Error, Result};

/// Remote control key codes
///
/// All key codes from the NetCast ROAP protocol. The code is embedded
/// verbatim into the `<value>` element of a key-input command envelope.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum RemoteKey {
    Power = 1,
    Number0 = 2,
    Number1 = 3,
    Number2 = 4,
    Number3 = 5,
    Number4 = 6,
    Number5 = 7,
    Number6 = 8,
    Number7 = 9,
    Number8 = 10,
    Number9 = 11,

    // Navigation
    Up = 12,
    Down = 13,
    Left = 14,
    Right = 15,
    Ok = 20,
    HomeMenu = 21,
    Back = 23,

    // Volume & channel
    VolumeUp = 24,
    VolumeDown = 25,
    MuteToggle = 26,
    ChannelUp = 27,
    ChannelDown = 28,

    // Color keys
    Blue = 29,
    Green = 30,
    Red = 31,
    Yellow = 32,

    // Playback
    Play = 33,
    Pause = 34,
    Stop = 35,
    FastForward = 36,
    Rewind = 37,
    SkipForward = 38,
    SkipBackward = 39,
    Record = 40,
    RecordingList = 41,
    Repeat = 42,

    // TV functions
    LiveTv = 43,
    Epg = 44,
    ProgramInformation = 45,
    AspectRatio = 46,
    ExternalInput = 47,
    PipSecondaryVideo = 48,
    ShowSubtitle = 49,
    ProgramList = 50,
    TeleText = 51,
    Mark = 52,

    // Extended keys
    Video3d = 400,
    Lr3d = 401,
    Dash = 402,
    PreviousChannel = 403,
    FavoriteChannel = 404,
    QuickMenu = 405,
    TextOption = 406,
    AudioDescription = 407,
    EnergySaving = 409,
    AvMode = 410,
    Simplink = 411,
    Exit = 412,
    ReservationProgramList = 413,
    PipChannelUp = 414,
    PipChannelDown = 415,
    SwitchVideo = 416,
    Apps = 417,
}

impl From<RemoteKey> for u16 {
    fn from(key: RemoteKey) -> u16 {
        key as u16
    }
}

impl TryFrom<u16> for RemoteKey {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            1 => Ok(Self::Power),
            2 => Ok(Self::Number0),
            3 => Ok(Self::Number1),
            4 => Ok(Self::Number2),
            5 => Ok(Self::Number3),
            6 => Ok(Self::Number4),
            7 => Ok(Self::Number5),
            8 => Ok(Self::Number6),
            9 => Ok(Self::Number7),
            10 => Ok(Self::Number8),
            11 => Ok(Self::Number9),
            12 => Ok(Self::Up),
            13 => Ok(Self::Down),
            14 => Ok(Self::Left),
            15 => Ok(Self::Right),
            20 => Ok(Self::Ok),
            21 => Ok(Self::HomeMenu),
            23 => Ok(Self::Back),
            24 => Ok(Self::VolumeUp),
            25 => Ok(Self::VolumeDown),
            26 => Ok(Self::MuteToggle),
            27 => Ok(Self::ChannelUp),
            28 => Ok(Self::ChannelDown),
            29 => Ok(Self::Blue),
            30 => Ok(Self::Green),
            31 => Ok(Self::Red),
            32 => Ok(Self::Yellow),
            33 => Ok(Self::Play),
            34 => Ok(Self::Pause),
            35 => Ok(Self::Stop),
            36 => Ok(Self::FastForward),
            37 => Ok(Self::Rewind),
            38 => Ok(Self::SkipForward),
            39 => Ok(Self::SkipBackward),
            40 => Ok(Self::Record),
            41 => Ok(Self::RecordingList),
            42 => Ok(Self::Repeat),
            43 => Ok(Self::LiveTv),
            44 => Ok(Self::Epg),
            45 => Ok(Self::ProgramInformation),
            46 => Ok(Self::AspectRatio),
            47 => Ok(Self::ExternalInput),
            48 => Ok(Self::PipSecondaryVideo),
            49 => Ok(Self::ShowSubtitle),
            50 => Ok(Self::ProgramList),
            51 => Ok(Self::TeleText),
            52 => Ok(Self::Mark),
            400 => Ok(Self::Video3d),
            401 => Ok(Self::Lr3d),
            402 => Ok(Self::Dash),
            403 => Ok(Self::PreviousChannel),
            404 => Ok(Self::FavoriteChannel),
            405 => Ok(Self::QuickMenu),
            406 => Ok(Self::TextOption),
            407 => Ok(Self::AudioDescription),
            409 => Ok(Self::EnergySaving),
            410 => Ok(Self::AvMode),
            411 => Ok(Self::Simplink),
            412 => Ok(Self::Exit),
            413 => Ok(Self::ReservationProgramList),
            414 => Ok(Self::PipChannelUp),
            415 => Ok(Self::PipChannelDown),
            416 => Ok(Self::SwitchVideo),
            417 => Ok(Self::Apps),
            _ => Err(Error::UnknownKey(value)),
        }
    }
}

impl fmt::Display for RemoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, *self as u16)
    }
}
