use crate::{
    CaptureConfiguration, CaptureConfigurationError, CaptureOptions, CaptureQuality,
    CaptureResolution, Size,
};

/// Fluent construction of a [`CaptureConfiguration`].
///
/// The base (dimensions and bitrate) is fixed when the builder is created,
/// everything else starts at its default. Repeated calls for the same field
/// overwrite each other, and [`build`](Self::build) can be called any number
/// of times, each call returning an independent value.
///
/// ```
/// use capture_configuration::{CaptureConfigurationBuilder, CaptureQuality, CaptureResolution};
///
/// let configuration =
///     CaptureConfigurationBuilder::new(CaptureResolution::Res720p, CaptureQuality::High)
///         .max_duration(60)
///         .max_file_size(50)
///         .show_timer()
///         .build();
///
/// assert_eq!(configuration.max_capture_file_size(), 52_428_800);
/// ```
#[derive(Debug, Clone)]
pub struct CaptureConfigurationBuilder {
    size: Size,
    bitrate: i32,
    options: CaptureOptions,
}

impl CaptureConfigurationBuilder {
    pub fn new(resolution: CaptureResolution, quality: CaptureQuality) -> Self {
        Self {
            size: resolution.size(),
            bitrate: resolution.bitrate(quality),
            options: CaptureOptions::default(),
        }
    }

    pub fn from_raw(width: i32, height: i32, bitrate: i32) -> Self {
        Self {
            size: Size::new(width, height),
            bitrate,
            options: CaptureOptions::default(),
        }
    }

    /// Maximum capture duration in seconds.
    ///
    /// Stored in milliseconds, saturating at `i32::MAX`. `-1` keeps the
    /// duration unlimited rather than becoming `-1000`.
    pub fn max_duration(&mut self, max_duration_secs: i32) -> &mut Self {
        self.options.max_duration_secs = Some(max_duration_secs);
        self
    }

    /// Maximum file size in megabytes.
    ///
    /// Stored in bytes, saturating at `i32::MAX`, so 4096 MB does not wrap
    /// to 0. `-1` keeps the size unlimited.
    pub fn max_file_size(&mut self, max_filesize_mb: i32) -> &mut Self {
        self.options.max_filesize_mb = Some(max_filesize_mb);
        self
    }

    pub fn frame_rate(&mut self, frame_rate: i32) -> &mut Self {
        self.options.frame_rate = frame_rate;
        self
    }

    pub fn show_timer(&mut self) -> &mut Self {
        self.options.show_timer = true;
        self
    }

    /// Hide the front facing camera toggle.
    pub fn no_camera_toggle(&mut self) -> &mut Self {
        self.options.allow_front_facing_camera = false;
        self
    }

    pub fn build(&self) -> CaptureConfiguration {
        let configuration = CaptureConfiguration::assemble(self.size, self.bitrate, &self.options);
        log::debug!("build capture configuration: {:?}", configuration);

        configuration
    }

    /// Same as [`build`](Self::build), followed by
    /// [`CaptureConfiguration::validate`].
    pub fn try_build(&self) -> Result<CaptureConfiguration, CaptureConfigurationError> {
        let configuration = self.build();
        configuration.validate()?;

        Ok(configuration)
    }
}
