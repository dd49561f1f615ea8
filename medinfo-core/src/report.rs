//! Deserialized form of the mediainfo XML report.
//!
//! The report is a `MediaInfo` root holding one `media` element (named `File`
//! by older mediainfo releases) with an ordered list of `track` elements.
//! Each track carries a `type` attribute and any number of named fields.
//! Some fields are inherently singular and are modelled as `Option<String>`;
//! if one is nevertheless repeated, the last occurrence is kept. The rest may
//! be emitted once per measurement variant (raw value, rounded value, string
//! form, ...) and are modelled as `Vec<String>`. Elements not listed here are
//! skipped.

use crate::error::{CoreResult, ReportError};
use serde::{Deserialize, Deserializer};

/// Root of the mediainfo report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename = "MediaInfo")]
pub struct Report {
    #[serde(rename = "media", alias = "File", default)]
    pub media: Media,
}

/// Container for the track list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Media {
    #[serde(rename = "track", default)]
    pub tracks: Vec<Track>,
}

impl Report {
    pub fn tracks(&self) -> &[Track] {
        &self.media.tracks
    }
}

/// Parses raw mediainfo output into a [`Report`].
///
/// Anything that is not a complete, well-formed report is rejected with
/// [`CoreError::MalformedReport`](crate::CoreError::MalformedReport).
pub fn parse_report(bytes: &[u8]) -> CoreResult<Report> {
    let text = std::str::from_utf8(bytes).map_err(ReportError::from)?;
    let report: Report = quick_xml::de::from_str(text).map_err(ReportError::from)?;
    log::trace!("Parsed mediainfo report with {} track(s)", report.tracks().len());
    Ok(report)
}

// ============================================================================
// TRACK CLASSIFICATION
// ============================================================================

/// Category of a track, taken from its `type` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackKind {
    General,
    Video,
    Audio,
    Menu,
    /// Any label the mapper does not know about (Text, Image, Other, ...).
    Other(String),
}

impl TrackKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "General" => TrackKind::General,
            "Video" => TrackKind::Video,
            "Audio" => TrackKind::Audio,
            "Menu" => TrackKind::Menu,
            other => TrackKind::Other(other.to_string()),
        }
    }
}

// ============================================================================
// TRACK
// ============================================================================

/// One track of the report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Track {
    #[serde(rename = "@type", default)]
    pub track_type: String,

    // ---- Single-valued fields ----
    #[serde(rename = "File_name", default, deserialize_with = "last_value")]
    pub file_name: Option<String>,
    #[serde(rename = "Format_Info", default, deserialize_with = "last_value")]
    pub format_info: Option<String>,
    #[serde(rename = "Complete_name", default, deserialize_with = "last_value")]
    pub complete_name: Option<String>,
    #[serde(rename = "Format_profile", default, deserialize_with = "last_value")]
    pub format_profile: Option<String>,
    #[serde(rename = "File_extension", default, deserialize_with = "last_value")]
    pub file_extension: Option<String>,
    #[serde(rename = "Writing_application", default, deserialize_with = "last_value")]
    pub writing_application: Option<String>,

    // ---- Repeated fields ----
    #[serde(rename = "Width", default)]
    pub width: Vec<String>,
    #[serde(rename = "Height", default)]
    pub height: Vec<String>,
    #[serde(rename = "Format", default)]
    pub format: Vec<String>,
    #[serde(rename = "Duration", default)]
    pub duration: Vec<String>,
    #[serde(rename = "Bit_rate", default)]
    pub bit_rate: Vec<String>,
    #[serde(rename = "Bit_depth", default)]
    pub bit_depth: Vec<String>,
    #[serde(rename = "Scan_type", default)]
    pub scan_type: Vec<String>,
    #[serde(rename = "File_size", default)]
    pub file_size: Vec<String>,
    #[serde(rename = "Frame_rate", default)]
    pub frame_rate: Vec<String>,
    #[serde(rename = "Channel_s_", default)]
    pub channels: Vec<String>,
    #[serde(rename = "Stream_size", default)]
    pub stream_size: Vec<String>,
    #[serde(rename = "Interlacement", default)]
    pub interlacement: Vec<String>,
    #[serde(rename = "Sampling_rate", default)]
    pub sampling_rate: Vec<String>,
    #[serde(rename = "Writing_library", default)]
    pub writing_library: Vec<String>,
    #[serde(rename = "Overall_bit_rate", default)]
    pub overall_bit_rate: Vec<String>,
    #[serde(rename = "Overall_bit_rate_mode", default)]
    pub overall_bit_rate_mode: Vec<String>,
    #[serde(rename = "Format_settings__CABAC", default)]
    pub format_settings_cabac: Vec<String>,
    #[serde(rename = "Format_settings__ReFrames", default)]
    pub format_settings_reframes: Vec<String>,
}

/// Reads every occurrence of a singular element and keeps the last one.
fn last_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;
    Ok(values.into_iter().next_back())
}

/// Fields that mediainfo may report more than once per track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatedField {
    Width,
    Height,
    Format,
    Duration,
    BitRate,
    BitDepth,
    ScanType,
    FileSize,
    FrameRate,
    Channels,
    StreamSize,
    Interlacement,
    SamplingRate,
    WritingLibrary,
    OverallBitRate,
    OverallBitRateMode,
    FormatSettingsCabac,
    FormatSettingsReFrames,
}

impl Track {
    pub fn kind(&self) -> TrackKind {
        TrackKind::from_label(&self.track_type)
    }

    /// All reported values of a repeated field, in document order.
    pub fn values(&self, field: RepeatedField) -> &[String] {
        match field {
            RepeatedField::Width => &self.width,
            RepeatedField::Height => &self.height,
            RepeatedField::Format => &self.format,
            RepeatedField::Duration => &self.duration,
            RepeatedField::BitRate => &self.bit_rate,
            RepeatedField::BitDepth => &self.bit_depth,
            RepeatedField::ScanType => &self.scan_type,
            RepeatedField::FileSize => &self.file_size,
            RepeatedField::FrameRate => &self.frame_rate,
            RepeatedField::Channels => &self.channels,
            RepeatedField::StreamSize => &self.stream_size,
            RepeatedField::Interlacement => &self.interlacement,
            RepeatedField::SamplingRate => &self.sampling_rate,
            RepeatedField::WritingLibrary => &self.writing_library,
            RepeatedField::OverallBitRate => &self.overall_bit_rate,
            RepeatedField::OverallBitRateMode => &self.overall_bit_rate_mode,
            RepeatedField::FormatSettingsCabac => &self.format_settings_cabac,
            RepeatedField::FormatSettingsReFrames => &self.format_settings_reframes,
        }
    }

    /// Representative value of a repeated field, or `""` when not reported.
    pub fn select(&self, field: RepeatedField) -> String {
        Selection::for_field(field).pick(self.values(field))
    }
}

// ============================================================================
// SELECTION RULE
// ============================================================================

/// Which of a repeated field's values represents the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    First,
    Second,
}

impl Selection {
    /// Interlacement keeps its second reported value. Every other field keeps
    /// its first.
    pub fn for_field(field: RepeatedField) -> Self {
        match field {
            RepeatedField::Interlacement => Selection::Second,
            _ => Selection::First,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Selection::First => 0,
            Selection::Second => 1,
        }
    }

    pub fn pick(self, values: &[String]) -> String {
        values.get(self.index()).cloned().unwrap_or_default()
    }
}

/// Value of a single-valued field, or `""` when not reported.
pub(crate) fn single(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_selection_per_field() {
        assert_eq!(Selection::for_field(RepeatedField::Interlacement), Selection::Second);
        assert_eq!(Selection::for_field(RepeatedField::Format), Selection::First);
        assert_eq!(Selection::for_field(RepeatedField::Duration), Selection::First);
    }

    #[test]
    fn test_pick_out_of_range_is_empty() {
        assert_eq!(Selection::Second.pick(&strings(&["TFF"])), "");
        assert_eq!(Selection::First.pick(&[]), "");
        assert_eq!(Selection::Second.pick(&strings(&["Interlaced", "TFF"])), "TFF");
    }

    #[test]
    fn test_track_kind_labels() {
        assert_eq!(TrackKind::from_label("General"), TrackKind::General);
        assert_eq!(TrackKind::from_label("Menu"), TrackKind::Menu);
        assert_eq!(TrackKind::from_label("Text"), TrackKind::Other("Text".to_string()));
        // Labels are case sensitive, as mediainfo emits them.
        assert_eq!(TrackKind::from_label("video"), TrackKind::Other("video".to_string()));
    }

    #[test]
    fn test_parse_repeated_and_single_fields() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<MediaInfo>
  <media ref="/tmp/clip.mp4">
    <track type="Video">
      <Format>AVC</Format>
      <Format>Legacy</Format>
      <Format_profile>High@L4.1</Format_profile>
      <Width>1920</Width>
      <Width>1 920 pixels</Width>
      <Interlacement>Interlaced</Interlacement>
      <Interlacement>TFF</Interlacement>
    </track>
  </media>
</MediaInfo>"#;

        let report = parse_report(xml.as_bytes()).unwrap();
        let track = &report.tracks()[0];

        assert_eq!(track.kind(), TrackKind::Video);
        assert_eq!(track.format, strings(&["AVC", "Legacy"]));
        assert_eq!(track.format_profile.as_deref(), Some("High@L4.1"));
        assert_eq!(track.select(RepeatedField::Width), "1920");
        assert_eq!(track.select(RepeatedField::Interlacement), "TFF");
        assert!(track.duration.is_empty());
        assert_eq!(track.file_name, None);
    }

    #[test]
    fn test_parse_non_adjacent_repeats() {
        let xml = r#"<MediaInfo><media><track type="Audio">
            <Bit_rate>128000</Bit_rate>
            <Format>AAC</Format>
            <Bit_rate>128 kb/s</Bit_rate>
        </track></media></MediaInfo>"#;

        let report = parse_report(xml.as_bytes()).unwrap();
        assert_eq!(report.tracks()[0].bit_rate, strings(&["128000", "128 kb/s"]));
    }

    #[test]
    fn test_parse_legacy_file_element() {
        let xml = r#"<Mediainfo version="0.7.64"><File><track type="General"><Format>Matroska</Format></track></File></Mediainfo>"#;

        let report = parse_report(xml.as_bytes()).unwrap();
        assert_eq!(report.tracks().len(), 1);
        assert_eq!(report.tracks()[0].select(RepeatedField::Format), "Matroska");
    }

    #[test]
    fn test_repeated_singular_field_keeps_last() {
        let xml = r#"<MediaInfo><media><track type="Video">
            <Format_profile>Main@L4</Format_profile>
            <Chroma_subsampling>4:2:0</Chroma_subsampling>
            <Format_profile>High@L4.1</Format_profile>
            <Chroma_subsampling>4:2:0</Chroma_subsampling>
        </track><track type="General">
            <Writing_application>first</Writing_application>
            <Writing_application>second</Writing_application>
        </track></media></MediaInfo>"#;

        let report = parse_report(xml.as_bytes()).unwrap();
        assert_eq!(report.tracks()[0].format_profile.as_deref(), Some("High@L4.1"));
        assert_eq!(report.tracks()[1].writing_application.as_deref(), Some("second"));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let mut bytes = b"<MediaInfo><media><track type=\"General\"><File_name>caf".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"</File_name></track></media></MediaInfo>");

        let err = parse_report(&bytes).unwrap_err();
        assert!(matches!(
            err,
            crate::CoreError::MalformedReport(ReportError::Utf8(_))
        ));
    }

    #[test]
    fn test_parse_empty_media() {
        let report = parse_report(b"<MediaInfo><media></media></MediaInfo>").unwrap();
        assert!(report.tracks().is_empty());
    }
}
