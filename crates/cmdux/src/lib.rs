//! **cmdux** -- terminal UI components that render to plain strings.
//!
//! This is the umbrella crate that re-exports everything needed to build a
//! cmdux program from a single dependency:
//!
//! ```toml
//! [dependencies]
//! cmdux = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`cmdux_core`] are available at the crate root
//!   ([`Renderable`], [`Theme`], [`Role`], [`measure`], [`pad`], [`wrap`],
//!   etc.).
//! * The [`widgets`] module re-exports everything from [`cmdux_widgets`]
//!   (boxes, tables, menus, progress bars, spinners, effects, and input).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```no_run
//! use cmdux::widgets::{Table, TextBox};
//! use cmdux::{App, AppOptions};
//!
//! fn main() -> Result<(), cmdux::Error> {
//!     let mut app = App::new(AppOptions::default());
//!     app.render(&TextBox::new().with_title("Hello").with_content("Welcome to cmdux!"))?;
//!     app.render(
//!         &Table::new()
//!             .with_headers(["Name", "Role"])
//!             .with_row(["Alice", "Developer"]),
//!     )?;
//!     Ok(())
//! }
//! ```

mod app;

pub use app::*;
pub use cmdux_core::*;
pub mod widgets {
    pub use cmdux_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
