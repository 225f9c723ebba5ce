// SPDX-License-Identifier: MPL-2.0
pub mod bounds_reporter;

pub use bounds_reporter::{bounds_reporter, BoundsReporter};
