//! Folds a parsed report into a [`MediaRecord`].
//!
//! Tracks are visited in report order. Each recognized track is mapped into a
//! fresh section which replaces any section of the same category mapped
//! earlier, so with several audio tracks the record describes the last one.
//! Unknown track types are skipped.

use crate::record::{Audio, General, MediaRecord, Menu, Video};
use crate::report::{RepeatedField as F, Report, Track, TrackKind, single};

/// Maps every track of `report` into the fixed record shape.
pub fn map_report(report: &Report) -> MediaRecord {
    let mut record = MediaRecord::default();

    for track in report.tracks() {
        match track.kind() {
            TrackKind::General => replace(&mut record.general, general_from(track), "General"),
            TrackKind::Video => replace(&mut record.video, video_from(track), "Video"),
            TrackKind::Audio => replace(&mut record.audio, audio_from(track), "Audio"),
            TrackKind::Menu => replace(&mut record.menu, menu_from(track), "Menu"),
            TrackKind::Other(label) => {
                log::trace!("Skipping track of unmapped type '{}'", label);
            }
        }
    }

    record
}

fn replace<T>(slot: &mut Option<T>, section: T, label: &str) {
    if slot.replace(section).is_some() {
        log::debug!("Multiple {} tracks reported; keeping the last one", label);
    }
}

pub fn general_from(track: &Track) -> General {
    General {
        format: track.select(F::Format),
        duration: track.select(F::Duration),
        file_size: track.select(F::FileSize),
        overall_bit_rate_mode: track.select(F::OverallBitRateMode),
        overall_bit_rate: track.select(F::OverallBitRate),
        complete_name: single(&track.complete_name),
        file_name: single(&track.file_name),
        file_extension: single(&track.file_extension),
        frame_rate: track.select(F::FrameRate),
        stream_size: track.select(F::StreamSize),
        writing_application: single(&track.writing_application),
    }
}

pub fn video_from(track: &Track) -> Video {
    Video {
        width: track.select(F::Width),
        height: track.select(F::Height),
        format: track.select(F::Format),
        bit_rate: track.select(F::BitRate),
        duration: track.select(F::Duration),
        format_info: single(&track.format_info),
        format_profile: single(&track.format_profile),
        format_settings_cabac: track.select(F::FormatSettingsCabac),
        format_settings_reframes: track.select(F::FormatSettingsReFrames),
        frame_rate: track.select(F::FrameRate),
        bit_depth: track.select(F::BitDepth),
        scan_type: track.select(F::ScanType),
        interlacement: track.select(F::Interlacement),
        writing_library: track.select(F::WritingLibrary),
    }
}

pub fn audio_from(track: &Track) -> Audio {
    Audio {
        format: track.select(F::Format),
        duration: track.select(F::Duration),
        bit_rate: track.select(F::BitRate),
        channels: track.select(F::Channels),
        frame_rate: track.select(F::FrameRate),
        format_info: single(&track.format_info),
        sampling_rate: track.select(F::SamplingRate),
        format_profile: single(&track.format_profile),
    }
}

pub fn menu_from(track: &Track) -> Menu {
    Menu {
        format: track.select(F::Format),
        duration: track.select(F::Duration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parse_report;

    fn map(xml: &str) -> MediaRecord {
        map_report(&parse_report(xml.as_bytes()).unwrap())
    }

    #[test]
    fn test_general_only_report() {
        let record = map(
            r#"<MediaInfo><media><track type="General">
                <Duration>120.5</Duration>
                <Format>MPEG-4</Format>
            </track></media></MediaInfo>"#,
        );

        let expected = General {
            format: "MPEG-4".to_string(),
            duration: "120.5".to_string(),
            ..Default::default()
        };
        assert_eq!(record.general, Some(expected));
        assert!(record.video.is_none());
        assert!(record.audio.is_none());
        assert!(record.menu.is_none());
    }

    #[test]
    fn test_interlacement_uses_second_value() {
        let record = map(
            r#"<MediaInfo><media><track type="Video">
                <Format>AVC</Format>
                <Format>Legacy</Format>
                <Interlacement>Interlaced</Interlacement>
                <Interlacement>TFF</Interlacement>
            </track></media></MediaInfo>"#,
        );

        let video = record.video.unwrap();
        assert_eq!(video.format, "AVC");
        assert_eq!(video.interlacement, "TFF");
    }

    #[test]
    fn test_single_interlacement_value_is_empty() {
        let record = map(
            r#"<MediaInfo><media><track type="Video">
                <Interlacement>PPF</Interlacement>
            </track></media></MediaInfo>"#,
        );
        assert_eq!(record.video.unwrap().interlacement, "");
    }

    #[test]
    fn test_last_audio_track_wins() {
        let record = map(
            r#"<MediaInfo><media>
                <track type="Audio"><Bit_rate>128000</Bit_rate><Format>AAC</Format></track>
                <track type="Audio"><Bit_rate>256000</Bit_rate></track>
            </media></MediaInfo>"#,
        );

        let audio = record.audio.unwrap();
        assert_eq!(audio.bit_rate, "256000");
        // The whole section is replaced, not merged.
        assert_eq!(audio.format, "");
    }

    #[test]
    fn test_unknown_track_types_ignored() {
        let record = map(
            r#"<MediaInfo><media>
                <track type="Text"><Format>UTF-8</Format></track>
                <track type="Menu"><Format>Timed Text</Format><Duration>90000</Duration></track>
            </media></MediaInfo>"#,
        );

        assert!(record.general.is_none());
        assert_eq!(
            record.menu,
            Some(Menu {
                format: "Timed Text".to_string(),
                duration: "90000".to_string(),
            })
        );
    }

    #[test]
    fn test_zero_tracks_yield_empty_record() {
        let record = map("<MediaInfo><media/></MediaInfo>");
        assert_eq!(record, MediaRecord::default());
    }

    #[test]
    fn test_audio_fields_copied() {
        let record = map(
            r#"<MediaInfo><media><track type="Audio">
                <Format>AAC</Format>
                <Format_Info>Advanced Audio Codec</Format_Info>
                <Format_profile>LC</Format_profile>
                <Duration>5000</Duration>
                <Duration>5s 0ms</Duration>
                <Channel_s_>2</Channel_s_>
                <Channel_s_>2 channels</Channel_s_>
                <Sampling_rate>48000</Sampling_rate>
                <Frame_rate>46.875</Frame_rate>
            </track></media></MediaInfo>"#,
        );

        let audio = record.audio.unwrap();
        assert_eq!(audio.format, "AAC");
        assert_eq!(audio.format_info, "Advanced Audio Codec");
        assert_eq!(audio.format_profile, "LC");
        assert_eq!(audio.duration, "5000");
        assert_eq!(audio.channels, "2");
        assert_eq!(audio.sampling_rate, "48000");
        assert_eq!(audio.frame_rate, "46.875");
        assert_eq!(audio.bit_rate, "");
    }
}
