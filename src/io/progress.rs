//! Assembly progress display over grid blocks

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BLOCK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Blocks: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the grid blocks of one assembly pass
///
/// The assembler advances it once per block; creation and completion stay
/// with the caller so the engine itself never decides whether progress is
/// displayed.
pub struct BlockProgress {
    bar: ProgressBar,
}

impl BlockProgress {
    /// Create a bar sized to the number of grid blocks
    pub fn new(total_blocks: u64) -> Self {
        let bar = ProgressBar::new(total_blocks);
        bar.set_style(BLOCK_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Count one completed block
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Clear the bar once assembly is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
