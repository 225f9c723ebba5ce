// SPDX-License-Identifier: MPL-2.0
//! Localisation of the picker's fixed labels and the demo's strings.
//!
//! Bundles are embedded at compile time from `assets/i18n/*.ftl`. The locale
//! is picked from the CLI flag, then the config file, then the OS, falling
//! back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
