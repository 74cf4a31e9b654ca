//! Per-tick animation state

mod auto_orbit;
mod color;
mod cycler;
mod toggle;

pub use auto_orbit::AutoOrbit;
pub use color::LightColorCycler;
pub use cycler::{Cycler, IntervalCycler};
pub use toggle::ToggleAnimator;
