//! Ready-made components for the **cmdux** terminal toolkit.
//!
//! Every visual component implements [`cmdux_core::Renderable`]: it turns its
//! configuration and a [`Theme`](cmdux_core::Theme) into a plain string with
//! embedded color codes. Components are configured with by-value `with_*`
//! builders and hold no terminal state.
//!
//! # Components
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`text_box`] | Bordered, titled, word-wrapped text box |
//! | [`table`] | Column-aligned table with auto-growing widths |
//! | [`menu`] | Option list with a highlighted selection |
//! | [`progress`] | Determinate progress bar |
//! | [`spinner`] | Animated spinner on a background task |
//! | [`effects`] | Typewriter, rain, wave, glitch, and other text animations |
//!
//! # Input
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`input`] | Prompts, confirmations, selections, and multi-field forms |

pub mod effects;
pub mod input;
pub mod menu;
pub mod progress;
pub mod spinner;
pub mod table;
pub mod text_box;

pub use effects::Effects;
pub use menu::Menu;
pub use progress::ProgressBar;
pub use spinner::{Spinner, SpinnerHandle, SpinnerStyle};
pub use table::Table;
pub use text_box::TextBox;
