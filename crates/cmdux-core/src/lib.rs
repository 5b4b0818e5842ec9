//! Layout core for the **cmdux** terminal component toolkit.
//!
//! `cmdux-core` owns every width decision made by cmdux components. It is
//! split into a few small, stateless layers:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`width`] | Column width of codepoints and strings, escape stripping, truncation |
//! | [`layout`] | Padding, word wrapping, glyph tiling, fixed frames |
//! | [`theme`] | Semantic [`Role`]s and [`Theme`] presets that decorate text |
//! | [`symbols`] | Border and status glyph sets |
//! | [`component`] | The [`Renderable`] contract every visual component implements |
//! | [`ansi`] / [`bridge`] | Parse decorated output back into ratatui text and draw it |
//! | [`testing`] | Headless assertions over rendered output |
//!
//! # Data flow
//!
//! 1. A component receives raw strings and a width budget.
//! 2. [`width::measure`] sizes them, ignoring escape codes.
//! 3. [`layout::wrap`] and [`layout::pad`] produce lines of exact width.
//! 4. The component interleaves border glyphs and [`Theme::paint`] decoration
//!    and joins the lines into its final string.
//!
//! Nothing is cached between calls, so independent components can render
//! from any thread.

pub mod ansi;
pub mod bridge;
pub mod component;
pub mod layout;
pub mod symbols;
pub mod testing;
pub mod theme;
pub mod width;

pub use bridge::Rendered;
pub use component::Renderable;
pub use layout::{
    center, frame, join_horizontal, join_vertical, pad, repeat, terminal_size, wrap, Alignment,
};
pub use symbols::{BorderSet, SymbolSet};
pub use theme::{paint_with, Role, Theme};
pub use width::{char_width, measure, strip_ansi, truncate, ELLIPSIS};
