//! Command-line interface and batch bot generation

use crate::catalog::palette::{RobotPalette, robot_palette};
use crate::io::configuration::{
    DEFAULT_ASSET_DIR, DEFAULT_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_SCALE, OUTPUT_EXTENSION,
};
use crate::io::error::Result;
use crate::io::image::export_bot_png;
use crate::io::progress::ProgressManager;
use crate::model::resolved::ResolvedPart;
use crate::render::assets::{AssetLibrary, relative_path};
use crate::render::compose::{RenderOptions, compose_bot};
use crate::resolve::resolve_bot;
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "botforge")]
#[command(
    author,
    version,
    about = "Generate composite robot avatars from seed strings"
)]
/// Command-line arguments for the bot generation tool
pub struct Cli {
    /// Seed strings; each seed reproduces the exact same bot every run
    #[arg(value_name = "SEED")]
    pub seeds: Vec<String>,

    /// Number of unseeded random bots when no seeds are given
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Output directory for composited bots
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub out: PathBuf,

    /// Asset library root (category/color/variant.png)
    #[arg(short, long, default_value = DEFAULT_ASSET_DIR)]
    pub assets: PathBuf,

    /// Integer upscale factor applied to every part
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Print each bot's resolved part manifest instead of rendering
    #[arg(short, long)]
    pub plan: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.plan
    }
}

/// One bot to generate: an optional seed and an output file name
struct BotJob {
    seed: Option<String>,
    file_name: String,
}

/// Orchestrates batch generation of bots with progress tracking
pub struct BotProcessor {
    cli: Cli,
    palette: RobotPalette,
    progress_manager: Option<ProgressManager>,
}

impl BotProcessor {
    /// Create a processor with the built-in palette
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in palette fails catalog validation.
    pub fn new(cli: Cli) -> Result<Self> {
        Ok(Self {
            cli,
            palette: robot_palette()?,
            progress_manager: None,
        })
    }

    /// Generate every requested bot
    ///
    /// # Errors
    ///
    /// Returns an error if resolution, asset loading, or export fails.
    pub fn process(&mut self) -> Result<()> {
        let jobs = self.collect_jobs();

        if jobs.is_empty() {
            return Ok(());
        }

        if self.cli.should_show_progress() {
            self.progress_manager = Some(ProgressManager::new(jobs.len()));
        }

        let mut assets = AssetLibrary::new(&self.cli.assets);
        let options = RenderOptions {
            scale: self.cli.scale,
        };

        for job in &jobs {
            if let Some(ref pm) = self.progress_manager {
                pm.start_bot(&job.file_name);
            }

            let bot = resolve_bot(
                &self.palette.catalog,
                self.palette.root,
                job.seed.as_deref(),
            )?;

            if self.cli.plan {
                Self::print_manifest(&job.file_name, &bot);
            } else {
                let canvas = compose_bot(&bot, &mut assets, &options)?;
                export_bot_png(&canvas, &self.cli.out.join(&job.file_name))?;
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_bot();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_jobs(&self) -> Vec<BotJob> {
        if self.cli.seeds.is_empty() {
            (0..self.cli.count)
                .map(|index| BotJob {
                    seed: None,
                    file_name: format!("bot_{index:03}.{OUTPUT_EXTENSION}"),
                })
                .collect()
        } else {
            // Distinct seeds can sanitize to the same stem; suffix the
            // repeats so no bot in the batch overwrites another.
            let mut seen: HashMap<String, usize> = HashMap::new();
            self.cli
                .seeds
                .iter()
                .map(|seed| {
                    let stem = sanitize_seed(seed);
                    let count = seen.entry(stem.clone()).or_insert(0);
                    *count += 1;
                    let file_name = if *count == 1 {
                        format!("{stem}.{OUTPUT_EXTENSION}")
                    } else {
                        format!("{stem}_{count}.{OUTPUT_EXTENSION}")
                    };
                    BotJob {
                        seed: Some(seed.clone()),
                        file_name,
                    }
                })
                .collect()
        }
    }

    // Allow print for the plan mode's user-facing manifest output
    #[allow(clippy::print_stdout)]
    fn print_manifest(label: &str, bot: &ResolvedPart) {
        println!("{label}:");
        let mut lines = Vec::new();
        collect_manifest(bot, 1, &mut lines);
        for line in lines {
            println!("{line}");
        }
    }
}

/// Turn a seed string into a safe output file stem
fn sanitize_seed(seed: &str) -> String {
    seed.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

fn collect_manifest(part: &ResolvedPart, depth: usize, lines: &mut Vec<String>) {
    if let Some(asset) = &part.asset {
        let flips = match (part.flip_x, part.flip_y) {
            (false, false) => "",
            (true, false) => " flipped-x",
            (false, true) => " flipped-y",
            (true, true) => " flipped-xy",
        };
        lines.push(format!(
            "{:indent$}{} ({}x{}{flips})",
            "",
            relative_path(asset, &part.color).display(),
            part.width,
            part.height,
            indent = depth * 2,
        ));
    }
    for (_, child) in &part.children {
        collect_manifest(child, depth + 1, lines);
    }
}
