pub mod banner;
pub mod pause;
pub mod platform;
pub mod runner;

pub use pause::{Pause, TokioPause};
pub use platform::PlatformInfo;
pub use runner::{RunSettings, RunSummary, Runner};
