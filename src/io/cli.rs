//! Command-line interface and render job orchestration

use crate::io::configuration::{
    DEFAULT_PALETTE, DEFAULT_RULE, DEFAULT_SEQUENCE, MAX_RANK, OUTPUT_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{render_grid, save_png};
use crate::io::palette::palette_by_name;
use crate::io::preview::ascii_preview;
use crate::io::progress::{ProgressManager, STAGES};
use crate::weave::grid::{WovenGrid, grid_size};
use crate::weave::iterative::weave_iterative;
use crate::weave::recursive::MemoizedWeaver;
use crate::weave::rules::RuleKind;
use crate::weave::sequence::sequence_by_name;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "loomtile")]
#[command(
    author,
    version,
    about = "Weave deterministic four-colour grid patterns into PNG images"
)]
/// Command-line arguments for the weave rendering tool
pub struct Cli {
    /// Fractal rank; the grid side length is 3^rank + 1
    #[arg(value_name = "RANK")]
    pub rank: u32,

    /// Crossing rule (knot, xor, mod3, smod3)
    #[arg(short, long, default_value = DEFAULT_RULE)]
    pub rule: String,

    /// Boundary sequence seeding the top row
    #[arg(long, default_value = DEFAULT_SEQUENCE)]
    pub warp_sequence: String,

    /// Boundary sequence seeding the left column
    #[arg(long, default_value = DEFAULT_SEQUENCE)]
    pub weft_sequence: String,

    /// Palette mapping threads to colours (primary, pleasant)
    #[arg(short, long, default_value = DEFAULT_PALETTE)]
    pub palette: String,

    /// Use the divide-and-conquer memoized construction
    #[arg(short, long)]
    pub memoized: bool,

    /// Print an ASCII preview of the grid
    #[arg(long)]
    pub preview: bool,

    /// Output file (default: rank_<rank>_<rule>.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Output path, derived from rank and rule when not given explicitly
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "rank_{}_{}.{OUTPUT_EXTENSION}",
                self.rank, self.rule
            ))
        })
    }
}

/// Orchestrates one weave-render-export run
pub struct RenderJob {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl RenderJob {
    /// Create a render job from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Weave the grid, optionally preview it, and export the PNG
    ///
    /// # Errors
    ///
    /// Returns an error for unknown rule/sequence/palette names, a rank
    /// beyond [`MAX_RANK`], a boundary thread outside the rule's colour
    /// domain, or an export failure.
    pub fn run(&mut self) -> Result<()> {
        let rule = RuleKind::from_name(&self.cli.rule)?;
        let warp = sequence_by_name(&self.cli.warp_sequence)?;
        let weft = sequence_by_name(&self.cli.weft_sequence)?;
        let palette = palette_by_name(&self.cli.palette)?;

        if self.cli.rank > MAX_RANK {
            return Err(invalid_parameter(
                "rank",
                &self.cli.rank,
                &format!("rank must be at most {MAX_RANK}"),
            ));
        }
        let size = grid_size(self.cli.rank)?;

        self.start_stage(0);
        let grid: WovenGrid = if self.cli.memoized {
            MemoizedWeaver::new(rule).weave(size, warp, weft)?
        } else {
            weave_iterative(rule, size, warp, weft)?
        };
        self.complete_stage();

        if self.cli.preview {
            // Allow print for user-requested preview output
            #[allow(clippy::print_stdout)]
            {
                println!("{}", ascii_preview(&grid));
            }
        }

        self.start_stage(1);
        let img = render_grid(&grid, &palette);
        self.complete_stage();

        self.start_stage(2);
        save_png(&img, &self.cli.output_path())?;
        self.complete_stage();

        if let Some(ref progress) = self.progress {
            progress.finish();
        }
        Ok(())
    }

    fn start_stage(&self, index: usize) {
        if let Some(ref progress) = self.progress
            && let Some(stage) = STAGES.get(index)
        {
            progress.start_stage(stage);
        }
    }

    fn complete_stage(&self) {
        if let Some(ref progress) = self.progress {
            progress.complete_stage();
        }
    }
}
