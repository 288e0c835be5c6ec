//! I/O operations for text point clouds
//!
//! This crate loads point clouds from plain text files (a header line
//! followed by `x y z` records) and writes them back in the same layout.
//! The loader reads through a [`LineSource`] and reports its outcome to a
//! [`DiagnosticSink`], so both the file system and the log output can be
//! swapped out.
//!
//! ```no_run
//! use cloudtxt_io::PointCloudLoader;
//!
//! let cloud = PointCloudLoader::new().load("scan.txt")?;
//! println!("{}", cloud);
//! # Ok::<(), cloudtxt_io::LoadError>(())
//! ```

pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod source;
pub mod writer;

pub use diagnostics::{CollectingSink, DiagnosticSink, Severity, TracingSink};
pub use error::*;
pub use loader::{parse_point_line, PointCloudLoader};
pub use source::{FsLineSource, LineSource, MemoryLineSource};
pub use writer::{PointCloudTxtWriter, TxtWriteOptions};

use cloudtxt_core::PointCloud3D;
use std::path::Path;

/// Load a text point cloud from disk, logging through `tracing`
pub fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud3D, LoadError> {
    PointCloudLoader::new().load(path)
}

/// Write a point cloud as text with the default header
pub fn write_point_cloud<P: AsRef<Path>>(cloud: &PointCloud3D, path: P) -> cloudtxt_core::Result<()> {
    PointCloudTxtWriter::write_point_cloud(cloud, path, &TxtWriteOptions::default())
}
