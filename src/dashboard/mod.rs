//! Explainer dashboard
//!
//! The consumer side of the pricing engine, independent of any GUI toolkit:
//!
//! 1. **Controls**: slider values in display units (percent, days)
//! 2. **Plots**: price surface over spot × volatility, delta curve over spot
//! 3. **View**: headline price, Greek tiles and plot data for one refresh
//!
//! Configuration (slider ranges, grid resolution, validation policy) is read
//! from TOML via [`DashboardConfig`].
//!
//! ```rust
//! use bs_explainer::dashboard::{Controls, DashboardConfig, DashboardView};
//!
//! let view = DashboardView::compute(&Controls::default(), &DashboardConfig::default()).unwrap();
//! assert_eq!(view.headline(), "Call Price: $2.37");
//! ```

pub mod config;
pub mod controls;
pub mod plots;
pub mod view;

pub use config::*;
pub use controls::*;
pub use plots::*;
pub use view::*;
