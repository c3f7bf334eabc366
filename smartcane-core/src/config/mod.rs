//! Configuration types
//!
//! Every tunable is a build-time constant. The structs exist so the loop
//! controller and presenter can be constructed with shortened timings in
//! tests; firmware always uses the `DEFAULT` values.

pub mod thresholds;
pub mod timing;

pub use thresholds::*;
pub use timing::*;
