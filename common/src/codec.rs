//! Recorder platform enumerations.
//!
//! The integer values match the constants of the Android
//! [MediaRecorder](https://developer.android.com/reference/android/media/MediaRecorder)
//! subsystem, because that is what ends up in the ordered record. Devices
//! and platform versions add values over time, so every enumeration has an
//! `Other` variant holding an unnamed value verbatim; conversion from `i32`
//! never fails and converting back yields the same integer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! platform_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident,
        { $($(#[$variant_meta:meta])* $variant:ident = $value:literal,)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
        #[cfg_attr(feature = "serde", serde(from = "i32", into = "i32"))]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
            /// A value without a name here. Conversions from `i32` only
            /// produce it for integers no other variant claims.
            Other(i32),
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => $value,)+
                    $name::Other(value) => value,
                }
            }
        }
    };
}

platform_enum! {
    /// Container format of the recorded file.
    OutputFormat, default = Mpeg4, {
        Default = 0,
        ThreeGpp = 1,
        /// MPEG-4 part 14 container.
        Mpeg4 = 2,
        AmrNb = 3,
        AmrWb = 4,
        AacAdts = 6,
        Mpeg2Ts = 8,
        Webm = 9,
        Ogg = 11,
    }
}

platform_enum! {
    /// Where the audio track is captured from.
    AudioSource, default = Default, {
        Default = 0,
        Mic = 1,
        VoiceUplink = 2,
        VoiceDownlink = 3,
        VoiceCall = 4,
        /// Microphone tuned for video recording, same orientation as the
        /// camera.
        Camcorder = 5,
        VoiceRecognition = 6,
        VoiceCommunication = 7,
        RemoteSubmix = 8,
        Unprocessed = 9,
        VoicePerformance = 10,
    }
}

platform_enum! {
    /// Audio codec.
    AudioEncoder, default = Aac, {
        Default = 0,
        AmrNb = 1,
        AmrWb = 2,
        /// [AAC](https://en.wikipedia.org/wiki/Advanced_Audio_Coding) low
        /// complexity profile.
        Aac = 3,
        HeAac = 4,
        AacEld = 5,
        Vorbis = 6,
        Opus = 7,
    }
}

platform_enum! {
    /// Where the video track is captured from.
    VideoSource, default = Camera, {
        Default = 0,
        Camera = 1,
        Surface = 2,
    }
}

platform_enum! {
    /// Video codec.
    VideoEncoder, default = H264, {
        Default = 0,
        H263 = 1,
        /// [H.264](https://en.wikipedia.org/wiki/Advanced_Video_Coding)
        ///
        /// Advanced Video Coding, the only codec every Android camera device
        /// is required to support for recording.
        H264 = 2,
        Mpeg4Sp = 3,
        Vp8 = 4,
        Hevc = 5,
        Vp9 = 6,
        DolbyVision = 7,
        Av1 = 8,
    }
}
