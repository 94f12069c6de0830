//! This crate extracts discrete detection picks from the continuous
//! cross-correlation traces produced by a matched-filter detector.
//!
//! A correlation trace takes the form of a Vec (or some other similar
//! container) of scalar statistics, one per sample. Typical usage of this
//! crate may look like:
//! ```rust
//! use trace_to_picks::find_peaks;
//!
//! let trace = vec![0.0, 0.0, 0.85, 0.1, 0.0, -0.6, 0.0];
//! let picks = find_peaks(&trace, 0.5, 2)?;    // Retains samples whose magnitude
//!                                             // reaches 0.5, keeping only the
//!                                             // strongest pick within any
//!                                             // 2-sample neighbourhood
//! assert_eq!(picks.len(), 2);
//! # Ok::<(), trace_to_picks::PickError>(())
//! ```
//!
//! Picks from several channels can be fed to the `pick-aggregator` crate to
//! fuse them into network-wide detections.

mod error;
pub mod peak_picking;

pub use error::{PickError, PickResult};
pub use peak_picking::{find_peaks, multi_find_peaks};
