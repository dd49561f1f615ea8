//! Core library for extracting normalized media metadata with mediainfo.
//!
//! This crate checks that the mediainfo binary is installed, runs it against a
//! file with XML output, and folds the reported tracks into a fixed
//! four-section [`MediaRecord`] (general, video, audio, menu).
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use medinfo_core::{Config, Extractor};
//!
//! let config = Config::with_binary("/usr/local/bin/mediainfo");
//! config.validate().unwrap();
//!
//! let extractor = Extractor::from_config(&config);
//! let record = extractor.extract("/path/to/movie.mkv").unwrap();
//!
//! if let Some(video) = &record.video {
//!     println!("{}x{} {}", video.width, video.height, video.format);
//! }
//! println!("{}", record.to_json().unwrap());
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod extract;
pub mod mapping;
pub mod record;
pub mod report;

// Re-exports for public API
pub use config::Config;
pub use error::{CoreError, CoreResult, ExecutionError, ReportError};
pub use external::{CommandExecutor, MediaInfoExecutor};
pub use extract::{Extractor, extract, is_available};
pub use mapping::map_report;
pub use record::{Audio, General, MediaRecord, Menu, Video};
pub use report::{Report, Selection, Track, TrackKind, parse_report};
