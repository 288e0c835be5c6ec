//! Line sources the loader reads from

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Something that can check for a resource and hand out its lines in order
pub trait LineSource {
    /// Iterator over the lines of an opened resource. Dropping it releases
    /// whatever handle backs the resource.
    type Lines: Iterator<Item = io::Result<String>>;

    /// Whether the resource at `path` exists
    fn exists(&self, path: &Path) -> bool;

    /// Open the resource at `path` as a sequence of lines
    fn open_lines(&self, path: &Path) -> io::Result<Self::Lines>;
}

/// Reads lines from files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLineSource;

impl LineSource for FsLineSource {
    type Lines = io::Lines<BufReader<File>>;

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn open_lines(&self, path: &Path) -> io::Result<Self::Lines> {
        let file = File::open(path)?;
        Ok(BufReader::new(file).lines())
    }
}

/// Serves lines from memory, keyed by path
#[derive(Debug, Default)]
pub struct MemoryLineSource {
    files: HashMap<PathBuf, Vec<String>>,
    opens: AtomicUsize,
}

impl MemoryLineSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `lines` as the content of `path`
    pub fn with_file<P, I, L>(mut self, path: P, lines: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.files
            .insert(path.into(), lines.into_iter().map(Into::into).collect());
        self
    }

    /// Number of times `open_lines` has been called
    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::Relaxed)
    }
}

impl LineSource for MemoryLineSource {
    type Lines = std::iter::Map<std::vec::IntoIter<String>, fn(String) -> io::Result<String>>;

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn open_lines(&self, path: &Path) -> io::Result<Self::Lines> {
        self.opens.fetch_add(1, Ordering::Relaxed);
        let lines = self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} is not registered", path.display()))
        })?;
        Ok(lines.into_iter().map(Ok as fn(String) -> io::Result<String>))
    }
}
