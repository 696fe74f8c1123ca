//! # oxcvd - Color Vision Deficiency Simulation
//!
//! Simulates how an image appears to an observer with a color vision
//! deficiency (protanopia, deuteranopia, tritanopia and their anomalous
//! variants), through physiologically or empirically derived color models.
//!
//! ## Algorithms
//!
//! - **Viénot 1999**: one global projection matrix; the standard choice
//!   for full protanopia and deuteranopia
//! - **Brettel 1997**: piecewise projection over two half-planes; the
//!   reference algorithm, and the only valid one for tritanopia
//! - **Machado 2009**: empirically fitted severity-indexed matrices that
//!   model anomalous trichromacy directly
//! - **AutoSelect**: picks among the three per deficiency and severity
//!
//! ## Quick Start
//!
//! ```no_run
//! use oxcvd_core::{Deficiency, Simulator, SrgbImage};
//!
//! let image = SrgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0])?;
//! let simulator = Simulator::auto()?;
//! let simulated = simulator.simulate_srgb(&image, Deficiency::Protan, 1.0)?;
//! # Ok::<(), oxcvd_core::Error>(())
//! ```
//!
//! The pipeline is pure and deterministic: sRGB input is decoded to
//! linear RGB, transformed through the chosen model, and re-encoded.
//! Simulators and [`LmsModel`] values are immutable after construction
//! and safe to share across threads.

pub mod batch;
pub mod error;
pub mod geometry;
pub mod image;
pub mod math;
pub mod model;
pub mod simulate;
pub mod types;

pub use error::{Error, Result};
pub use geometry::{Line, Parallelepiped, SegmentIntersection, confusion_axis, confusion_segment};
pub use image::{LinearImage, SrgbImage};
pub use math::Matrix3x3;
pub use model::LmsModel;
pub use simulate::{AutoSelect, Brettel1997, Machado2009, Simulator, Vienot1999};
pub use types::Deficiency;

/// Version of oxcvd
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
