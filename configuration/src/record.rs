//! Ordered record codec.
//!
//! A configuration crosses component boundaries as a flat sequence of
//! primitives with no field names and no framing, so the field order below
//! is the format:
//!
//! | # | field | encoding |
//! |---|---|---|
//! | 1 | video width | i32 |
//! | 2 | video height | i32 |
//! | 3 | bitrate | i32 |
//! | 4 | max duration (ms) | i32 |
//! | 5 | max file size (bytes) | i32 |
//! | 6 | fps | i32 |
//! | 7 | show timer | u8 |
//! | 8 | allow front facing camera | u8 |
//! | 9..13 | output format, audio source, audio encoder, video source, video encoder | i32 |
//!
//! Integers are little endian, matching the native parcel layout on the
//! devices that produce these records. Decoding is lossless: every integer
//! read, including platform values without a name, is written back as is.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use thiserror::Error;

use crate::{CaptureConfiguration, RecorderProfile};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    #[error("record truncated: expected {expected} bytes, {remaining} remaining")]
    Truncated { expected: usize, remaining: usize },
    #[error("{0} unexpected bytes after the record")]
    TrailingBytes(usize),
}

/// A value with a fixed size, order dependent binary layout.
pub trait Record: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    fn encode<B: BufMut>(&self, buf: &mut B);

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, RecordError>;
}

fn ensure_remaining<B: Buf>(buf: &B, expected: usize) -> Result<(), RecordError> {
    let remaining = buf.remaining();
    if remaining < expected {
        return Err(RecordError::Truncated {
            expected,
            remaining,
        });
    }

    Ok(())
}

impl Record for RecorderProfile {
    const SIZE: usize = 5 * 4;

    fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_i32_le(self.output_format.into());
        buf.put_i32_le(self.audio_source.into());
        buf.put_i32_le(self.audio_encoder.into());
        buf.put_i32_le(self.video_source.into());
        buf.put_i32_le(self.video_encoder.into());
    }

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, RecordError> {
        ensure_remaining(buf, Self::SIZE)?;

        Ok(Self {
            output_format: buf.get_i32_le().into(),
            audio_source: buf.get_i32_le().into(),
            audio_encoder: buf.get_i32_le().into(),
            video_source: buf.get_i32_le().into(),
            video_encoder: buf.get_i32_le().into(),
        })
    }
}

impl Record for CaptureConfiguration {
    const SIZE: usize = 6 * 4 + 2 + RecorderProfile::SIZE;

    fn encode<B: BufMut>(&self, buf: &mut B) {
        buf.put_i32_le(self.video_width());
        buf.put_i32_le(self.video_height());
        buf.put_i32_le(self.video_bitrate());
        buf.put_i32_le(self.max_capture_duration());
        buf.put_i32_le(self.max_capture_file_size());
        buf.put_i32_le(self.video_fps());
        buf.put_u8(self.show_timer() as u8);
        buf.put_u8(self.allow_front_facing_camera() as u8);
        self.profile().encode(buf);
    }

    fn decode<B: Buf>(buf: &mut B) -> Result<Self, RecordError> {
        ensure_remaining(buf, Self::SIZE)?;

        Ok(Self {
            video_width: buf.get_i32_le(),
            video_height: buf.get_i32_le(),
            bitrate: buf.get_i32_le(),
            max_duration_ms: buf.get_i32_le(),
            max_filesize_bytes: buf.get_i32_le(),
            video_fps: buf.get_i32_le(),
            show_timer: buf.get_u8() != 0,
            allow_front_facing_camera: buf.get_u8() != 0,
            profile: RecorderProfile::decode(buf)?,
        })
    }
}

impl CaptureConfiguration {
    pub const RECORD_SIZE: usize = <Self as Record>::SIZE;

    pub fn to_record(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::RECORD_SIZE);
        self.encode(&mut buf);
        buf.freeze()
    }

    /// Decode a buffer holding exactly one record.
    pub fn from_record(mut bytes: &[u8]) -> Result<Self, RecordError> {
        let configuration = Self::decode(&mut bytes).inspect_err(|e| {
            log::warn!("failed to decode capture configuration record: {}", e);
        })?;

        if !bytes.is_empty() {
            log::warn!(
                "capture configuration record has {} trailing bytes",
                bytes.len()
            );

            return Err(RecordError::TrailingBytes(bytes.len()));
        }

        Ok(configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CaptureQuality, CaptureResolution};

    #[test]
    fn record_size() {
        assert_eq!(CaptureConfiguration::RECORD_SIZE, 46);
        assert_eq!(CaptureConfiguration::default().to_record().len(), 46);
    }

    #[test]
    fn default_layout() {
        let record = CaptureConfiguration::default().to_record();

        #[rustfmt::skip]
        let expected: [u8; 46] = [
            0x00, 0x05, 0x00, 0x00, // 1280
            0xd0, 0x02, 0x00, 0x00, // 720
            0x80, 0x84, 0x1e, 0x00, // 2_000_000
            0xff, 0xff, 0xff, 0xff, // no duration limit
            0xff, 0xff, 0xff, 0xff, // no file size limit
            0x1e, 0x00, 0x00, 0x00, // 30 fps
            0x00,                   // timer hidden
            0x01,                   // front camera allowed
            0x02, 0x00, 0x00, 0x00, // mpeg4
            0x00, 0x00, 0x00, 0x00, // default audio source
            0x03, 0x00, 0x00, 0x00, // aac
            0x01, 0x00, 0x00, 0x00, // camera
            0x02, 0x00, 0x00, 0x00, // h264
        ];

        assert_eq!(&record[..], &expected[..]);
    }

    #[test]
    fn decode_reads_in_order_from_a_stream() {
        let first =
            CaptureConfiguration::with_limits(CaptureResolution::Res1080p, CaptureQuality::Low, 10, 20);

        let second =
            CaptureConfiguration::builder(CaptureResolution::Res480p, CaptureQuality::Medium)
                .no_camera_toggle()
                .build();

        let mut buf = BytesMut::new();
        first.encode(&mut buf);
        second.encode(&mut buf);

        let mut buf = buf.freeze();
        assert_eq!(CaptureConfiguration::decode(&mut buf), Ok(first));
        assert_eq!(CaptureConfiguration::decode(&mut buf), Ok(second));
        assert!(!buf.has_remaining());
    }

    #[test]
    fn any_non_zero_flag_is_true() {
        let mut record = CaptureConfiguration::default().to_record().to_vec();
        record[24] = 7;

        assert!(CaptureConfiguration::from_record(&record).unwrap().show_timer());
    }
}
