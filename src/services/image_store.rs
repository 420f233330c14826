use std::collections::HashMap;
use std::sync::Arc;

use pixelworks_core::Raster;

use crate::error::ProcessError;

/// Named images of one session.
///
/// Rasters are immutable and shared behind `Arc`, so handing one out never
/// copies pixels. Writing a name that already exists replaces the image.
#[derive(Debug, Clone, Default)]
pub struct ImageStore {
    images: HashMap<String, Arc<Raster>>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `raster` under `name`, replacing any previous image.
    pub fn put(&mut self, name: impl Into<String>, raster: Arc<Raster>) {
        self.images.insert(name.into(), raster);
    }

    /// Look up an image by name.
    pub fn get(&self, name: &str) -> Result<Arc<Raster>, ProcessError> {
        self.images
            .get(name)
            .cloned()
            .ok_or_else(|| ProcessError::ImageNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// All image names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.images.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
