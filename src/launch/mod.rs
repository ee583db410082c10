//! Launch dispatch - the file-type strategy registry and the launcher

mod launcher;
mod registry;

pub use launcher::{LaunchFailure, LaunchOutcome, Launcher};
pub use registry::{FileType, LaunchMethod, LaunchStrategy, resolve};
