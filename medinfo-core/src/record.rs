// ============================================================================
// medinfo-core/src/record.rs
// ============================================================================
//
// OUTPUT RECORD: Fixed-Shape Media Metadata
//
// This module defines the record produced for every extracted file. The record
// has four sections, one per track category. A section is None when the
// report never mentioned that category; inside a section every field is a
// string and an unreported field is the empty string.
//
// SERIALIZATION:
// Keys are lowercase with underscores. Missing sections are left out of the
// JSON entirely and are restored as None when reading it back.

// ---- Internal crate imports ----
use crate::error::CoreResult;
use crate::mapping::map_report;
use crate::report::parse_report;

// ---- External crate imports ----
use serde::{Deserialize, Serialize};

/// Normalized metadata for one media file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general: Option<General>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Audio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<Menu>,
}

/// Container-level properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct General {
    pub format: String,
    pub duration: String,
    pub file_size: String,
    pub overall_bit_rate_mode: String,
    pub overall_bit_rate: String,
    pub complete_name: String,
    pub file_name: String,
    pub file_extension: String,
    pub frame_rate: String,
    pub stream_size: String,
    pub writing_application: String,
}

/// Video stream properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub width: String,
    pub height: String,
    pub format: String,
    #[serde(rename = "bitrate")]
    pub bit_rate: String,
    pub duration: String,
    pub format_info: String,
    pub format_profile: String,
    pub format_settings_cabac: String,
    pub format_settings_reframes: String,
    pub frame_rate: String,
    pub bit_depth: String,
    pub scan_type: String,
    pub interlacement: String,
    pub writing_library: String,
}

/// Audio stream properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Audio {
    pub format: String,
    pub duration: String,
    #[serde(rename = "bitrate")]
    pub bit_rate: String,
    pub channels: String,
    pub frame_rate: String,
    pub format_info: String,
    pub sampling_rate: String,
    pub format_profile: String,
}

/// Chapter/menu listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    pub format: String,
    pub duration: String,
}

impl MediaRecord {
    /// Parses raw mediainfo output and folds it into a record.
    pub fn from_report_bytes(bytes: &[u8]) -> CoreResult<Self> {
        Ok(map_report(&parse_report(bytes)?))
    }

    /// Returns true when both a video and an audio duration were reported.
    ///
    /// This is a heuristic for "audio and video play together". Files with
    /// only one of the two streams are not media by this definition.
    pub fn is_media(&self) -> bool {
        let video_duration = self.video.as_ref().map_or("", |v| v.duration.as_str());
        let audio_duration = self.audio.as_ref().map_or("", |a| a.duration.as_str());
        !video_duration.is_empty() && !audio_duration.is_empty()
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn av_record(video_duration: &str, audio_duration: &str) -> MediaRecord {
        MediaRecord {
            video: Some(Video {
                duration: video_duration.to_string(),
                ..Default::default()
            }),
            audio: Some(Audio {
                duration: audio_duration.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_media_requires_both_durations() {
        assert!(av_record("5005", "5000").is_media());
        assert!(!av_record("", "5000").is_media());
        assert!(!av_record("5005", "").is_media());
    }

    #[test]
    fn test_is_media_missing_section() {
        let mut record = av_record("5005", "5000");
        record.audio = None;
        assert!(!record.is_media());
        assert!(!MediaRecord::default().is_media());
    }

    #[test]
    fn test_json_keys_and_omitted_sections() {
        let record = MediaRecord {
            audio: Some(Audio {
                bit_rate: "128000".to_string(),
                channels: "2".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(value["audio"]["bitrate"], "128000");
        assert_eq!(value["audio"]["channels"], "2");
        assert_eq!(value["audio"]["sampling_rate"], "");
    }

    #[test]
    fn test_json_round_trip() {
        let record = MediaRecord {
            general: Some(General {
                format: "MPEG-4".to_string(),
                duration: "120.5".to_string(),
                ..Default::default()
            }),
            video: Some(Video {
                format_settings_reframes: "4".to_string(),
                interlacement: "TFF".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };

        let restored = MediaRecord::from_json(&record.to_json_pretty().unwrap()).unwrap();
        assert_eq!(restored, record);
        assert!(restored.audio.is_none());
        assert!(restored.menu.is_none());
    }

    #[test]
    fn test_from_json_tolerates_missing_fields() {
        let record = MediaRecord::from_json(r#"{"menu":{"duration":"90000"}}"#).unwrap();
        let menu = record.menu.unwrap();
        assert_eq!(menu.duration, "90000");
        assert_eq!(menu.format, "");
        assert!(record.general.is_none());
    }
}
