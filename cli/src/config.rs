use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use configuration::{
    CaptureConfiguration, CaptureConfigurationBuilder, CaptureQuality, CaptureResolution,
};

use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Config {
    #[arg(long, env = "CAPTURE_LOG_LEVEL", default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
    /// Directory for daily log files, stderr only when omitted.
    #[arg(long, env = "CAPTURE_LOG_PATH")]
    pub log_path: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a configuration and print it.
    Encode(EncodeArgs),
    /// Decode a hex encoded ordered record and print it as json.
    Decode { record: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    Json,
    Record,
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    #[arg(long, env = "CAPTURE_RESOLUTION", default_value_t = CaptureResolution::Res720p)]
    pub resolution: CaptureResolution,
    #[arg(long, env = "CAPTURE_QUALITY", default_value_t = CaptureQuality::High)]
    pub quality: CaptureQuality,
    /// Raw width in pixels, overrides the resolution.
    #[arg(long, requires_all = ["height", "bitrate"])]
    pub width: Option<i32>,
    /// Raw height in pixels, overrides the resolution.
    #[arg(long, requires_all = ["width", "bitrate"])]
    pub height: Option<i32>,
    /// Raw bitrate in bits per second, overrides the quality.
    #[arg(long, requires_all = ["width", "height"])]
    pub bitrate: Option<i32>,
    /// Maximum capture duration in seconds.
    #[arg(long, env = "CAPTURE_MAX_DURATION")]
    pub max_duration: Option<i32>,
    /// Maximum file size in megabytes.
    #[arg(long, env = "CAPTURE_MAX_FILE_SIZE")]
    pub max_file_size: Option<i32>,
    #[arg(long, env = "CAPTURE_FRAME_RATE")]
    pub frame_rate: Option<i32>,
    #[arg(long)]
    pub show_timer: bool,
    #[arg(long)]
    pub no_camera_toggle: bool,
    #[arg(long, value_enum, default_value_t = OutputKind::Json)]
    pub format: OutputKind,
}

impl EncodeArgs {
    pub fn builder(&self) -> CaptureConfigurationBuilder {
        let mut builder = match (self.width, self.height, self.bitrate) {
            (Some(width), Some(height), Some(bitrate)) => {
                CaptureConfiguration::builder_from_raw(width, height, bitrate)
            }
            _ => CaptureConfiguration::builder(self.resolution, self.quality),
        };

        if let Some(secs) = self.max_duration {
            builder.max_duration(secs);
        }

        if let Some(mb) = self.max_file_size {
            builder.max_file_size(mb);
        }

        if let Some(fps) = self.frame_rate {
            builder.frame_rate(fps);
        }

        if self.show_timer {
            builder.show_timer();
        }

        if self.no_camera_toggle {
            builder.no_camera_toggle();
        }

        builder
    }
}
