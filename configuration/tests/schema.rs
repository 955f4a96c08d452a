#![cfg(feature = "serde")]

use capture_configuration::*;
use serde_json::{json, Value};

#[test]
fn named_fields() {
    let configuration =
        CaptureConfiguration::builder(CaptureResolution::Res720p, CaptureQuality::High)
            .max_duration(60)
            .show_timer()
            .build();

    let value = serde_json::to_value(configuration).unwrap();

    assert_eq!(
        value,
        json!({
            "video_width": 1280,
            "video_height": 720,
            "bitrate": 2_000_000,
            "max_duration_ms": 60_000,
            "max_filesize_bytes": -1,
            "video_fps": 30,
            "show_timer": true,
            "allow_front_facing_camera": true,
            "profile": {
                "output_format": 2,
                "audio_source": 0,
                "audio_encoder": 3,
                "video_source": 1,
                "video_encoder": 2
            }
        })
    );

    let decoded: CaptureConfiguration = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, configuration);
}

#[test]
fn unnamed_platform_values_round_trip() {
    let mut value = serde_json::to_value(CaptureConfiguration::default()).unwrap();
    value["profile"]["audio_source"] = Value::from(8);
    value["profile"]["video_encoder"] = Value::from(99);

    let decoded: CaptureConfiguration = serde_json::from_value(value.clone()).unwrap();

    assert_eq!(decoded.audio_source(), AudioSource::RemoteSubmix);
    assert_eq!(decoded.video_encoder(), VideoEncoder::Other(99));
    assert_eq!(serde_json::to_value(decoded).unwrap(), value);
}

#[test]
fn options_fill_missing_fields_with_defaults() {
    let options: CaptureOptions = serde_json::from_value(json!({ "frame_rate": 24 })).unwrap();

    assert_eq!(
        options,
        CaptureOptions {
            frame_rate: 24,
            ..Default::default()
        }
    );
}

#[test]
fn resolution_and_quality_names() {
    assert_eq!(
        serde_json::to_value(CaptureResolution::Res1080p).unwrap(),
        json!("1080p")
    );

    assert_eq!(
        serde_json::from_value::<CaptureQuality>(json!("medium")).unwrap(),
        CaptureQuality::Medium
    );
}
