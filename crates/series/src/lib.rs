//! # w2dss-series
//!
//! Labeled containers for converted W2 time series and paired data.
//!
//! A series is named by a six-part [`DssPath`] (`/A/B/C/D/E/F/`) and carries
//! [`SeriesMetadata`] shared by every value. [`assemble`] validates parallel
//! timestamp and value sequences and keeps them in input order.
//!
//! ## Quick Start
//!
//! ```
//! use w2dss_series::{assemble, julian_day_differences, DataType, DssPath, SeriesMetadata};
//!
//! let path: DssPath = "/DeGray Reservoir/Branch 1/Flow//IR-MONTH/Example/".parse().unwrap();
//! let meta = SeriesMetadata::new("cms", DataType::from_label("PER-AVG"));
//! let series = assemble(vec![0, 720, 1440], vec![12.0, 13.5, 11.0], meta, path.clone()).unwrap();
//! assert_eq!(series.end_time(), 1440);
//!
//! let gaps = julian_day_differences(&[1.0, 1.5, 2.0], "Julian Day", "Days", &path).unwrap();
//! assert_eq!(gaps.curves()[0], vec![0.5, 0.5]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `path` | Six-part identifying path |
//! | `metadata` | Data type, interval and units |
//! | `container` | Time series container and `assemble` |
//! | `paired` | Paired-data container and Julian-day differences |
//! | `error` | Error types |

mod container;
mod error;
mod metadata;
mod paired;
mod path;

pub use container::{SeriesContainer, assemble};
pub use error::AssemblyError;
pub use metadata::{DataType, Interval, SeriesMetadata};
pub use paired::{PairedDataContainer, differences, julian_day_differences};
pub use path::DssPath;
