// SPDX-License-Identifier: MIT
//
// lumen-color — color primitives for the lumen theme engine.
//
// Everything above this crate speaks hex strings (palette tables, user
// overrides, persisted records, contrast queries). This crate turns them
// into `Rgb` values exactly once, with strict validation, and provides the
// sRGB transfer function the WCAG luminance formula is built on.

pub mod color;

pub use color::{ColorError, Rgb, srgb_to_linear};
