//! Caching loader for part assets

use crate::io::error::{GeneratorError, Result, invalid_parameter};
use crate::model::template::AssetRef;
use image::RgbaImage;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Hit/miss counters for the asset cache
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheStats {
    /// Fetches answered from the cache
    pub hits: usize,
    /// Fetches that decoded from disk
    pub misses: usize,
}

/// Path of an asset relative to the library root
///
/// The library convention is `category/color/variant.png`, with the color
/// segment supplied per resolved part.
pub fn relative_path(asset: &AssetRef, color: &str) -> PathBuf {
    PathBuf::from(&asset.category)
        .join(color)
        .join(format!("{}.png", asset.variant))
}

/// Memoizing loader of decoded part assets
///
/// Each distinct `category/color/variant` path is decoded once and reused
/// for every later part that references it.
#[derive(Debug)]
pub struct AssetLibrary {
    root: PathBuf,
    cache: HashMap<PathBuf, RgbaImage>,
    /// Cache behavior counters
    pub stats: CacheStats,
}

impl AssetLibrary {
    /// Create a library rooted at the given asset directory
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            cache: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Fetch a decoded asset, loading it on first use
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::AssetLoad`] if the asset file is missing
    /// or cannot be decoded.
    pub fn fetch(&mut self, asset: &AssetRef, color: &str) -> Result<&RgbaImage> {
        let path = self.root.join(relative_path(asset, color));

        if self.cache.contains_key(&path) {
            self.stats.hits += 1;
        } else {
            let decoded = image::open(&path)
                .map_err(|source| GeneratorError::AssetLoad {
                    path: path.clone(),
                    source,
                })?
                .to_rgba8();
            self.cache.insert(path.clone(), decoded);
            self.stats.misses += 1;
        }

        self.cache
            .get(&path)
            .ok_or_else(|| invalid_parameter("asset", &path.display(), &"cache entry missing"))
    }

    /// Number of distinct assets decoded so far
    pub fn loaded_count(&self) -> usize {
        self.cache.len()
    }
}
