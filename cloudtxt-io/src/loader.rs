//! Text point cloud loader
//!
//! Reads files laid out as one header line followed by one point per line,
//! each point being exactly three space separated numbers:
//!
//! ```text
//! x y z
//! 1 2 3
//! 4.5 6.25 -7
//! ```
//!
//! Loading is fail-fast. The first line with the wrong number of fields or
//! an unparseable number ends the load, and every outcome is reported once to
//! a [`DiagnosticSink`].

use crate::diagnostics::{DiagnosticSink, Severity, TracingSink};
use crate::error::LoadError;
use crate::source::{FsLineSource, LineSource};
use cloudtxt_core::{Point3D, PointCloud3D};
use std::path::Path;

const DELIMITER: char = ' ';

/// Loads point clouds through a [`LineSource`], reporting to a [`DiagnosticSink`]
#[derive(Debug, Clone, Default)]
pub struct PointCloudLoader<S = FsLineSource, D = TracingSink> {
    source: S,
    sink: D,
}

impl PointCloudLoader {
    /// Loader reading from disk and logging through `tracing`
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: LineSource, D: DiagnosticSink> PointCloudLoader<S, D> {
    /// Loader with an injected line source and diagnostic sink
    pub fn with_parts(source: S, sink: D) -> Self {
        Self { source, sink }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Load the point cloud stored at `path`
    ///
    /// The first line is skipped without being looked at. Every following
    /// line must hold three numbers. Exactly one diagnostic is emitted per
    /// call: the error on failure, or the point count on success.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<PointCloud3D, LoadError> {
        let path = path.as_ref();
        match self.read_points(path) {
            Ok(cloud) => {
                self.sink.emit(
                    Severity::Info,
                    &format!("Successfully read {} points from {}", cloud.len(), path.display()),
                );
                Ok(cloud)
            }
            Err(err) => {
                self.sink.emit(err.severity(), &err.to_string());
                Err(err)
            }
        }
    }

    fn read_points(&self, path: &Path) -> Result<PointCloud3D, LoadError> {
        if !self.source.exists(path) {
            return Err(LoadError::ResourceNotFound { path: path.to_path_buf() });
        }

        let mut lines = self
            .source
            .open_lines(path)
            .map_err(|source| LoadError::ResourceOpenFailed {
                path: path.to_path_buf(),
                source,
            })?;

        // Header, skipped whatever it holds
        lines.next();

        let mut points = Vec::new();
        for (index, line) in lines.enumerate() {
            let line = line.map_err(|source| LoadError::Read { line: index, source })?;
            points.push(parse_point_line(&line, index)?);
        }

        if points.is_empty() {
            return Err(LoadError::EmptyResult { path: path.to_path_buf() });
        }
        Ok(PointCloud3D::from_points(points))
    }
}

/// Parse one data line into a point
///
/// `index` is the 0-based data line number used in the returned error.
pub fn parse_point_line(line: &str, index: usize) -> Result<Point3D, LoadError> {
    let fields: Vec<&str> = line
        .split(DELIMITER)
        .filter(|field| !field.is_empty())
        .collect();

    let [x, y, z] = fields[..] else {
        return Err(LoadError::MalformedLine { line: index, fields: fields.len() });
    };

    let parse = |field: &str| {
        field
            .parse::<f32>()
            .map_err(|_| LoadError::InvalidNumber { line: index })
    };
    Ok(Point3D::new(parse(x)?, parse(y)?, parse(z)?))
}
