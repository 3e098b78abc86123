use anyhow::{bail, Context, Result};
use std::io::Write;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::banner;
use crate::pause::Pause;
use crate::platform::PlatformInfo;

pub const DEFAULT_ITERATIONS: u32 = 10;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
pub const DONE_MESSAGE: &str = "  Done! Container finished successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    iterations: u32,
    interval: Duration,
}

impl RunSettings {
    pub fn new(iterations: u32, interval: Duration) -> Result<Self> {
        if iterations == 0 {
            bail!("iterations must be at least 1");
        }
        Ok(Self {
            iterations,
            interval,
        })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            interval: DEFAULT_INTERVAL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub iterations: u32,
    pub elapsed: Duration,
}

pub fn progress_line(i: u32, total: u32) -> String {
    format!("  [{}/{}] Container is alive... ", i, total)
}

/// Writes the banner, then one progress line per iteration with a pause after
/// each, then the completion message.
pub struct Runner<W, P> {
    out: W,
    pause: P,
    settings: RunSettings,
}

impl<W: Write, P: Pause> Runner<W, P> {
    pub fn new(out: W, pause: P, settings: RunSettings) -> Self {
        Self {
            out,
            pause,
            settings,
        }
    }

    pub async fn run(&mut self, platform: &PlatformInfo) -> Result<RunSummary> {
        let run_id = Uuid::new_v4();
        let start = Instant::now();
        info!(
            %run_id,
            iterations = self.settings.iterations,
            interval_ms = self.settings.interval.as_millis() as u64,
            "Starting liveness run"
        );

        for line in banner::render(platform) {
            writeln!(self.out, "{}", line).context("writing banner")?;
        }
        self.out.flush().context("flushing banner")?;

        let total = self.settings.iterations;
        for i in 1..=total {
            writeln!(self.out, "{}", progress_line(i, total))
                .context("writing progress line")?;
            self.out.flush().context("flushing progress line")?;
            debug!(%run_id, iteration = i, "Progress line written");

            self.pause.pause(self.settings.interval).await;
        }

        writeln!(self.out).context("writing completion message")?;
        writeln!(self.out, "{}", DONE_MESSAGE)
            .context("writing completion message")?;
        self.out.flush().context("flushing completion message")?;

        let elapsed = start.elapsed();
        info!(%run_id, ?elapsed, "Liveness run finished");

        Ok(RunSummary {
            run_id,
            iterations: total,
            elapsed,
        })
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
