mod builder;
mod predefined;
mod record;

use std::time::Duration;

use thiserror::Error;

pub use self::{builder::*, predefined::*, record::*};
pub use common::{codec::*, Size};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const MBYTE_TO_BYTE: i32 = 1024 * 1024;
pub const MSEC_TO_SEC: i32 = 1000;

pub const NO_DURATION_LIMIT: i32 = -1;
pub const NO_FILESIZE_LIMIT: i32 = -1;

pub const DEFAULT_FPS: i32 = FPS_30;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CaptureConfigurationError {
    #[error("invalid configuration: {field}={value}")]
    InvalidConfiguration { field: &'static str, value: i32 },
}

/// Recorder subsystem settings carried along with every configuration.
///
/// These are fixed for a given platform and never chosen by callers, the
/// type exists so that the ordered record stays complete.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct RecorderProfile {
    pub output_format: OutputFormat,
    pub audio_source: AudioSource,
    pub audio_encoder: AudioEncoder,
    pub video_source: VideoSource,
    pub video_encoder: VideoEncoder,
}

/// Optional capture parameters, expressed in caller units.
///
/// Every field has a default, so callers only spell out what they care
/// about:
///
/// ```
/// use capture_configuration::{
///     CaptureConfiguration, CaptureOptions, CaptureQuality, CaptureResolution,
/// };
///
/// let configuration = CaptureConfiguration::with_options(
///     CaptureResolution::Res1080p,
///     CaptureQuality::Medium,
///     CaptureOptions {
///         max_duration_secs: Some(30),
///         frame_rate: 24,
///         ..Default::default()
///     },
/// );
///
/// assert_eq!(configuration.max_capture_duration(), 30_000);
/// assert_eq!(configuration.video_fps(), 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CaptureOptions {
    /// Maximum capture duration in seconds, `None` for no limit.
    ///
    /// Converted to milliseconds with a saturating multiply, so anything
    /// above `i32::MAX / 1000` seconds becomes `i32::MAX` ms instead of
    /// wrapping. `Some(-1)` is the same as `None`.
    pub max_duration_secs: Option<i32>,
    /// Maximum file size in megabytes, `None` for no limit.
    ///
    /// Converted to bytes with a saturating multiply: 2048 MB and above end
    /// up as `i32::MAX` bytes rather than wrapping (4096 MB would otherwise
    /// turn into 0). `Some(-1)` is the same as `None`.
    pub max_filesize_mb: Option<i32>,
    /// Display a timer while capturing.
    pub show_timer: bool,
    /// Offer the front facing camera toggle before capturing.
    pub allow_front_facing_camera: bool,
    /// Frames per second.
    pub frame_rate: i32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            max_duration_secs: None,
            max_filesize_mb: None,
            show_timer: false,
            allow_front_facing_camera: true,
            frame_rate: DEFAULT_FPS,
        }
    }
}

impl CaptureOptions {
    /// Options with only the duration and file size limits set.
    pub fn with_limits(max_duration_secs: i32, max_filesize_mb: i32) -> Self {
        Self {
            max_duration_secs: Some(max_duration_secs),
            max_filesize_mb: Some(max_filesize_mb),
            ..Default::default()
        }
    }
}

// A caller passing the sentinel itself keeps the limit disabled instead of
// having it scaled into a meaningless negative value.
fn convert_limit(value: Option<i32>, factor: i32, unlimited: i32) -> i32 {
    match value {
        Some(value) if value != unlimited => value.saturating_mul(factor),
        _ => unlimited,
    }
}

pub(crate) fn duration_to_ms(secs: Option<i32>) -> i32 {
    convert_limit(secs, MSEC_TO_SEC, NO_DURATION_LIMIT)
}

pub(crate) fn filesize_to_bytes(mb: Option<i32>) -> i32 {
    convert_limit(mb, MBYTE_TO_BYTE, NO_FILESIZE_LIMIT)
}

/// Parameters of a video capture session.
///
/// Immutable once constructed. Duration and file size limits are stored in
/// milliseconds and bytes, converted from seconds and megabytes exactly once
/// when the value is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct CaptureConfiguration {
    video_width: i32,
    video_height: i32,
    bitrate: i32,
    max_duration_ms: i32,
    max_filesize_bytes: i32,
    video_fps: i32,
    show_timer: bool,
    allow_front_facing_camera: bool,
    profile: RecorderProfile,
}

impl Default for CaptureConfiguration {
    fn default() -> Self {
        Self::new(CaptureResolution::Res720p, CaptureQuality::High)
    }
}

impl CaptureConfiguration {
    // Every public constructor ends up here, so the defaults live in
    // `CaptureOptions::default` and nowhere else.
    pub(crate) fn assemble(size: Size, bitrate: i32, options: &CaptureOptions) -> Self {
        Self {
            video_width: size.width,
            video_height: size.height,
            bitrate,
            max_duration_ms: duration_to_ms(options.max_duration_secs),
            max_filesize_bytes: filesize_to_bytes(options.max_filesize_mb),
            video_fps: options.frame_rate,
            show_timer: options.show_timer,
            allow_front_facing_camera: options.allow_front_facing_camera,
            profile: RecorderProfile::default(),
        }
    }

    /// Dimensions from the resolution, bitrate from the predefined table.
    pub fn new(resolution: CaptureResolution, quality: CaptureQuality) -> Self {
        Self::with_options(resolution, quality, CaptureOptions::default())
    }

    pub fn with_limits(
        resolution: CaptureResolution,
        quality: CaptureQuality,
        max_duration_secs: i32,
        max_filesize_mb: i32,
    ) -> Self {
        Self::with_options(
            resolution,
            quality,
            CaptureOptions::with_limits(max_duration_secs, max_filesize_mb),
        )
    }

    pub fn with_options(
        resolution: CaptureResolution,
        quality: CaptureQuality,
        options: CaptureOptions,
    ) -> Self {
        Self::assemble(resolution.size(), resolution.bitrate(quality), &options)
    }

    /// Raw dimensions and bitrate, bypassing the predefined table. Values are
    /// taken as is; see [`CaptureConfiguration::validate`].
    pub fn from_raw(video_width: i32, video_height: i32, bitrate: i32) -> Self {
        Self::from_raw_with_options(video_width, video_height, bitrate, CaptureOptions::default())
    }

    pub fn from_raw_with_limits(
        video_width: i32,
        video_height: i32,
        bitrate: i32,
        max_duration_secs: i32,
        max_filesize_mb: i32,
    ) -> Self {
        Self::from_raw_with_options(
            video_width,
            video_height,
            bitrate,
            CaptureOptions::with_limits(max_duration_secs, max_filesize_mb),
        )
    }

    pub fn from_raw_with_options(
        video_width: i32,
        video_height: i32,
        bitrate: i32,
        options: CaptureOptions,
    ) -> Self {
        Self::assemble(Size::new(video_width, video_height), bitrate, &options)
    }

    pub fn builder(
        resolution: CaptureResolution,
        quality: CaptureQuality,
    ) -> CaptureConfigurationBuilder {
        CaptureConfigurationBuilder::new(resolution, quality)
    }

    pub fn builder_from_raw(
        video_width: i32,
        video_height: i32,
        bitrate: i32,
    ) -> CaptureConfigurationBuilder {
        CaptureConfigurationBuilder::from_raw(video_width, video_height, bitrate)
    }

    /// Check the positivity invariants. Construction never does this on its
    /// own.
    pub fn validate(&self) -> Result<(), CaptureConfigurationError> {
        let positive = [
            ("video_width", self.video_width),
            ("video_height", self.video_height),
            ("bitrate", self.bitrate),
            ("video_fps", self.video_fps),
        ];

        let limits = [
            ("max_duration_ms", self.max_duration_ms, NO_DURATION_LIMIT),
            ("max_filesize_bytes", self.max_filesize_bytes, NO_FILESIZE_LIMIT),
        ];

        let invalid = positive
            .into_iter()
            .find(|(_, value)| *value <= 0)
            .or_else(|| {
                limits
                    .into_iter()
                    .find(|(_, value, unlimited)| *value <= 0 && value != unlimited)
                    .map(|(field, value, _)| (field, value))
            });

        if let Some((field, value)) = invalid {
            log::warn!("invalid capture configuration: {}={}", field, value);

            return Err(CaptureConfigurationError::InvalidConfiguration { field, value });
        }

        Ok(())
    }

    /// Width of the captured video in pixels.
    pub fn video_width(&self) -> i32 {
        self.video_width
    }

    /// Height of the captured video in pixels.
    pub fn video_height(&self) -> i32 {
        self.video_height
    }

    pub fn size(&self) -> Size {
        Size::new(self.video_width, self.video_height)
    }

    /// Bitrate of the captured video in bits per second.
    pub fn video_bitrate(&self) -> i32 {
        self.bitrate
    }

    /// Maximum capture duration in milliseconds, or [`NO_DURATION_LIMIT`].
    pub fn max_capture_duration(&self) -> i32 {
        self.max_duration_ms
    }

    /// Maximum file size in bytes, or [`NO_FILESIZE_LIMIT`].
    pub fn max_capture_file_size(&self) -> i32 {
        self.max_filesize_bytes
    }

    pub fn max_duration(&self) -> Option<Duration> {
        (self.max_duration_ms > 0).then(|| Duration::from_millis(self.max_duration_ms as u64))
    }

    pub fn max_file_size(&self) -> Option<u64> {
        (self.max_filesize_bytes > 0).then_some(self.max_filesize_bytes as u64)
    }

    pub fn video_fps(&self) -> i32 {
        self.video_fps
    }

    /// Whether a timer is displayed during capture.
    pub fn show_timer(&self) -> bool {
        self.show_timer
    }

    /// Whether the front facing camera toggle is offered before capture.
    pub fn allow_front_facing_camera(&self) -> bool {
        self.allow_front_facing_camera
    }

    pub fn profile(&self) -> RecorderProfile {
        self.profile
    }

    pub fn output_format(&self) -> OutputFormat {
        self.profile.output_format
    }

    pub fn audio_source(&self) -> AudioSource {
        self.profile.audio_source
    }

    pub fn audio_encoder(&self) -> AudioEncoder {
        self.profile.audio_encoder
    }

    pub fn video_source(&self) -> VideoSource {
        self.profile.video_source
    }

    pub fn video_encoder(&self) -> VideoEncoder {
        self.profile.video_encoder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_scale_once() {
        assert_eq!(duration_to_ms(Some(60)), 60_000);
        assert_eq!(filesize_to_bytes(Some(50)), 52_428_800);
        assert_eq!(duration_to_ms(None), NO_DURATION_LIMIT);
        assert_eq!(filesize_to_bytes(None), NO_FILESIZE_LIMIT);
    }

    #[test]
    fn sentinel_input_stays_unlimited() {
        assert_eq!(duration_to_ms(Some(NO_DURATION_LIMIT)), NO_DURATION_LIMIT);
        assert_eq!(filesize_to_bytes(Some(NO_FILESIZE_LIMIT)), NO_FILESIZE_LIMIT);
    }

    #[test]
    fn oversized_limits_saturate() {
        assert_eq!(duration_to_ms(Some(i32::MAX)), i32::MAX);
        assert_eq!(filesize_to_bytes(Some(4096)), i32::MAX);
    }

    #[test]
    fn typed_views_hide_the_sentinel() {
        let configuration = CaptureConfiguration::default();
        assert_eq!(configuration.max_duration(), None);
        assert_eq!(configuration.max_file_size(), None);

        let configuration =
            CaptureConfiguration::with_limits(CaptureResolution::Res720p, CaptureQuality::Low, 2, 1);
        assert_eq!(configuration.max_duration(), Some(Duration::from_secs(2)));
        assert_eq!(configuration.max_file_size(), Some(1024 * 1024));
    }

    #[test]
    fn validate_reports_the_first_offending_field() {
        assert_eq!(CaptureConfiguration::default().validate(), Ok(()));

        assert_eq!(
            CaptureConfiguration::from_raw(0, 720, 1_000_000).validate(),
            Err(CaptureConfigurationError::InvalidConfiguration {
                field: "video_width",
                value: 0
            })
        );

        assert_eq!(
            CaptureConfiguration::from_raw(1280, 720, -5).validate(),
            Err(CaptureConfigurationError::InvalidConfiguration {
                field: "bitrate",
                value: -5
            })
        );

        let configuration = CaptureConfiguration::from_raw_with_options(
            1280,
            720,
            1_000_000,
            CaptureOptions {
                frame_rate: 0,
                ..Default::default()
            },
        );

        assert_eq!(
            configuration.validate(),
            Err(CaptureConfigurationError::InvalidConfiguration {
                field: "video_fps",
                value: 0
            })
        );
    }

    #[test]
    fn validate_rejects_zero_limits() {
        let configuration =
            CaptureConfiguration::from_raw_with_limits(1280, 720, 1_000_000, 0, 10);

        assert_eq!(
            configuration.validate(),
            Err(CaptureConfigurationError::InvalidConfiguration {
                field: "max_duration_ms",
                value: 0
            })
        );
    }

    #[test]
    fn validate_accepts_disabled_limits() {
        let configuration = CaptureConfiguration::from_raw_with_limits(
            1280,
            720,
            1_000_000,
            NO_DURATION_LIMIT,
            NO_FILESIZE_LIMIT,
        );

        assert_eq!(configuration.max_capture_duration(), NO_DURATION_LIMIT);
        assert_eq!(configuration.max_capture_file_size(), NO_FILESIZE_LIMIT);
        assert_eq!(configuration.validate(), Ok(()));

        assert_eq!(
            CaptureConfiguration::from_raw_with_limits(1280, 720, 1_000_000, 10, -2).validate(),
            Err(CaptureConfigurationError::InvalidConfiguration {
                field: "max_filesize_bytes",
                value: -2 * MBYTE_TO_BYTE
            })
        );
    }
}
