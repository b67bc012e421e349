//! Runtime configuration defaults

// Rendering settings
/// Default integer upscale factor applied to every part
pub const DEFAULT_SCALE: u32 = 4;

// Batch settings
/// Default number of unseeded bots when no seeds are given
pub const DEFAULT_COUNT: usize = 1;

// Filesystem conventions
/// Default asset library root
pub const DEFAULT_ASSET_DIR: &str = "botparts";
/// Default output directory for composited bots
pub const DEFAULT_OUTPUT_DIR: &str = "bots";
/// Extension of exported bot images
pub const OUTPUT_EXTENSION: &str = "png";
