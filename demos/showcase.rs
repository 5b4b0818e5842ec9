//! # Showcase
//!
//! A tour of the cmdux components, rendered straight to the terminal:
//! - Boxes with titles, wide glyphs, and wrapped content
//! - A table with right-aligned numbers
//! - A menu with descriptions and a moving selection
//! - A progress bar and a spinner driven by tokio
//! - A few text effects
//!
//! Pass a theme name (`dark`, `light`, `cyberpunk`, `monochrome`) to switch
//! palettes. Set `CMDUX_LOG=path` to write debug logs to a file.
//!
//! Run with: `cargo run --example showcase -- cyberpunk`

use std::time::Duration;

use cmdux::crossterm::style::Color;
use cmdux::widgets::{Menu, ProgressBar, Spinner, SpinnerStyle, Table, TextBox};
use cmdux::{Alignment, App, AppOptions, Role, Theme};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("CMDUX_LOG") {
        cmdux::log_to_file(path)?;
    }

    let theme = std::env::args()
        .nth(1)
        .and_then(|name| Theme::by_name(&name))
        .unwrap_or_default();
    let mut app = App::new(AppOptions {
        theme,
        ..AppOptions::default()
    });

    app.println(&format!("cmdux {}", cmdux::version()), Some(Role::Accent1))?;
    app.println("", None)?;

    boxes(&mut app)?;
    table(&mut app)?;
    menu(&mut app)?;
    progress(&mut app).await?;
    spinner(&app).await?;
    effects(&mut app).await?;

    Ok(())
}

fn boxes(app: &mut App) -> Result<(), cmdux::Error> {
    app.render(&TextBox::new().with_title("Test").with_content("Short content"))?;
    app.render(
        &TextBox::new()
            .with_title("🚀 Launch")
            .with_content("Wide glyphs like 🚀 and 中文 take two columns, and borders line up."),
    )?;
    app.render(
        &TextBox::new()
            .with_title("Wrapped")
            .with_width(30)
            .with_content("Long lines wrap at word boundaries to fit the box width."),
    )?;
    app.println("", None)
}

fn table(app: &mut App) -> Result<(), cmdux::Error> {
    let table = Table::new()
        .with_headers(["Name", "Role", "Commits"])
        .with_row(["Alice", "Developer", "1204"])
        .with_row(["Bob", "Designer", "87"])
        .with_row(["王小明", "Maintainer", "342"])
        .with_alignments(vec![Alignment::Left, Alignment::Left, Alignment::Right]);
    app.render(&table)?;
    app.println("", None)
}

fn menu(app: &mut App) -> Result<(), cmdux::Error> {
    let mut menu = Menu::new().with_title("Main Menu").with_described_options([
        ("New Project", "Create a new project"),
        ("Open", "Open an existing project"),
        ("Settings", "Configure preferences"),
        ("Exit", "Quit the application"),
    ]);
    app.render(&menu)?;
    app.println("", None)?;

    menu.select_next();
    menu.select_next();
    app.render(&menu)?;
    app.println("", None)
}

async fn progress(app: &mut App) -> Result<(), cmdux::Error> {
    let theme = app.theme().clone();
    let mut bar = ProgressBar::new(30)
        .with_total(50)
        .with_prefix("Downloading")
        .with_gradient(
            Color::Rgb { r: 0, g: 120, b: 255 },
            Color::Rgb { r: 0, g: 220, b: 120 },
        );
    for i in 0..=50 {
        bar.update(i, app.writer(), &theme)?;
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    bar.complete("Download finished", app.writer(), &theme)?;
    Ok(())
}

async fn spinner(app: &App) -> Result<(), cmdux::Error> {
    let spinner = Spinner::new(SpinnerStyle::Dots);
    let handle = app.spinner(&spinner, "Resolving dependencies");
    tokio::time::sleep(Duration::from_millis(800)).await;
    handle.set_text("Compiling");
    tokio::time::sleep(Duration::from_millis(800)).await;
    handle.success("Build complete").await?;

    let handle = app.spinner(&Spinner::named("pulse"), "Checking mirrors");
    tokio::time::sleep(Duration::from_millis(600)).await;
    handle.warning("One mirror is slow").await?;
    Ok(())
}

async fn effects(app: &mut App) -> Result<(), cmdux::Error> {
    let mut fx = app.effects();
    fx.typewriter("Typed one character at a time.", Duration::from_millis(30)).await?;
    fx.rainbow("Every letter a different color")?;
    fx.glitch("SIGNAL LOST", Duration::from_millis(600)).await?;
    fx.pulse(
        "Pulsing",
        Duration::from_millis(900),
        &[Role::Accent1, Role::Accent2, Role::Accent3],
    )
    .await?;
    fx.loading_dots("Finishing up", Duration::from_millis(1200)).await?;
    Ok(())
}
