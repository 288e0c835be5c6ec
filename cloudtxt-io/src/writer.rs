//! Text point cloud writer
//!
//! Produces files in the layout [`PointCloudLoader`](crate::PointCloudLoader)
//! reads back: a header line, then `x y z` per point.

use cloudtxt_core::{PointCloud3D, Point3D, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write options for text point cloud files
#[derive(Debug, Clone)]
pub struct TxtWriteOptions {
    /// First line of the file. The loader ignores its content.
    pub header: String,
}

impl Default for TxtWriteOptions {
    fn default() -> Self {
        Self {
            header: "x y z".to_string(),
        }
    }
}

impl TxtWriteOptions {
    /// Options with a custom header line
    pub fn with_header(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

/// Text point cloud writer implementation
pub struct PointCloudTxtWriter;

impl PointCloudTxtWriter {
    /// Write a point cloud to a text file
    pub fn write_point_cloud<P: AsRef<Path>>(
        cloud: &PointCloud3D,
        path: P,
        options: &TxtWriteOptions,
    ) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(cloud, &mut writer, options)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a point cloud to any writer
    pub fn write_to<W: Write>(cloud: &PointCloud3D, writer: &mut W, options: &TxtWriteOptions) -> Result<()> {
        writeln!(writer, "{}", options.header.trim_end_matches(['\r', '\n']))?;
        for point in cloud {
            writeln!(writer, "{}", Self::format_point(point))?;
        }
        Ok(())
    }

    fn format_point(point: &Point3D) -> String {
        format!("{} {} {}", point.x, point.y, point.z)
    }
}
