use std::{
    fmt,
    io::{Error, ErrorKind},
    str::FromStr,
};

use common::Size;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const WIDTH_2160P: i32 = 3840;
pub const HEIGHT_2160P: i32 = 2160;
pub const BITRATE_HQ_2160P: i32 = 40_000_000;
pub const BITRATE_MQ_2160P: i32 = 28_000_000;
pub const BITRATE_LQ_2160P: i32 = 20_000_000;

pub const WIDTH_1080P: i32 = 1920;
pub const HEIGHT_1080P: i32 = 1080;
pub const BITRATE_HQ_1080P: i32 = 12_000_000;
pub const BITRATE_MQ_1080P: i32 = 8_000_000;
pub const BITRATE_LQ_1080P: i32 = 5_000_000;

pub const WIDTH_720P: i32 = 1280;
pub const HEIGHT_720P: i32 = 720;
pub const BITRATE_HQ_720P: i32 = 2_000_000;
pub const BITRATE_MQ_720P: i32 = 1_200_000;
pub const BITRATE_LQ_720P: i32 = 800_000;

pub const WIDTH_480P: i32 = 640;
pub const HEIGHT_480P: i32 = 480;
pub const BITRATE_HQ_480P: i32 = 1_000_000;
pub const BITRATE_MQ_480P: i32 = 700_000;
pub const BITRATE_LQ_480P: i32 = 500_000;

pub const FPS_30: i32 = 30;

/// Encoding quality tier, used together with a resolution to pick a bitrate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CaptureQuality {
    #[default]
    High,
    Medium,
    Low,
}

impl CaptureQuality {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];
}

impl fmt::Display for CaptureQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        })
    }
}

impl FromStr for CaptureQuality {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "high" | "hq" => Self::High,
            "medium" | "mq" => Self::Medium,
            "low" | "lq" => Self::Low,
            _ => return Err(Error::new(ErrorKind::InvalidInput, value)),
        })
    }
}

/// Named capture resolution.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum CaptureResolution {
    #[cfg_attr(feature = "serde", serde(rename = "2160p"))]
    Res2160p,
    #[cfg_attr(feature = "serde", serde(rename = "1080p"))]
    Res1080p,
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "720p"))]
    Res720p,
    #[cfg_attr(feature = "serde", serde(rename = "480p"))]
    Res480p,
}

impl CaptureResolution {
    pub const ALL: [Self; 4] = [Self::Res2160p, Self::Res1080p, Self::Res720p, Self::Res480p];

    pub const fn width(&self) -> i32 {
        match self {
            Self::Res2160p => WIDTH_2160P,
            Self::Res1080p => WIDTH_1080P,
            Self::Res720p => WIDTH_720P,
            Self::Res480p => WIDTH_480P,
        }
    }

    pub const fn height(&self) -> i32 {
        match self {
            Self::Res2160p => HEIGHT_2160P,
            Self::Res1080p => HEIGHT_1080P,
            Self::Res720p => HEIGHT_720P,
            Self::Res480p => HEIGHT_480P,
        }
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Target bitrate in bits per second for this resolution at the given
    /// quality. Always positive.
    pub const fn bitrate(&self, quality: CaptureQuality) -> i32 {
        match (self, quality) {
            (Self::Res2160p, CaptureQuality::High) => BITRATE_HQ_2160P,
            (Self::Res2160p, CaptureQuality::Medium) => BITRATE_MQ_2160P,
            (Self::Res2160p, CaptureQuality::Low) => BITRATE_LQ_2160P,
            (Self::Res1080p, CaptureQuality::High) => BITRATE_HQ_1080P,
            (Self::Res1080p, CaptureQuality::Medium) => BITRATE_MQ_1080P,
            (Self::Res1080p, CaptureQuality::Low) => BITRATE_LQ_1080P,
            (Self::Res720p, CaptureQuality::High) => BITRATE_HQ_720P,
            (Self::Res720p, CaptureQuality::Medium) => BITRATE_MQ_720P,
            (Self::Res720p, CaptureQuality::Low) => BITRATE_LQ_720P,
            (Self::Res480p, CaptureQuality::High) => BITRATE_HQ_480P,
            (Self::Res480p, CaptureQuality::Medium) => BITRATE_MQ_480P,
            (Self::Res480p, CaptureQuality::Low) => BITRATE_LQ_480P,
        }
    }
}

impl fmt::Display for CaptureResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Res2160p => "2160p",
            Self::Res1080p => "1080p",
            Self::Res720p => "720p",
            Self::Res480p => "480p",
        })
    }
}

impl FromStr for CaptureResolution {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "2160p" | "4k" => Self::Res2160p,
            "1080p" => Self::Res1080p,
            "720p" => Self::Res720p,
            "480p" => Self::Res480p,
            _ => return Err(Error::new(ErrorKind::InvalidInput, value)),
        })
    }
}
