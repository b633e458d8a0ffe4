//! segdisp - render text as 16-segment display glyphs
//!
//! Every character gets its own display, placed left to right in a single
//! row and printed to stdout with ANSI colors.
//!
//! ```text
//! segdisp [--plain] [--] TEXT...
//! ```

use anyhow::{Context, Result};
use log::{debug, warn};

use segdisp::canvas::CanvasError;
use segdisp::config::Config;
use segdisp::{
    sanitize, supports_chars, CellCanvas, CellStyle, Display, DisplayOptions, Point, Rect,
    Surface,
};

/// Part of a larger surface handed to one display
struct Window<'a> {
    inner: &'a mut CellCanvas,
    area: Rect,
}

impl Surface for Window<'_> {
    fn area(&self) -> Rect {
        self.area
    }

    fn set_cell(&mut self, p: Point, ch: char, style: &CellStyle) -> Result<(), CanvasError> {
        if !self.area.contains(p) {
            return Err(CanvasError::OutOfBounds {
                point: p,
                area: self.area,
            });
        }
        self.inner.set_cell(p, ch, style)
    }
}

fn print_help() {
    println!("segdisp {}", env!("CARGO_PKG_VERSION"));
    println!("Render text as 16-segment display glyphs");
    println!();
    println!("USAGE:");
    println!("    segdisp [OPTIONS] [--] TEXT...");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help");
    println!("    -V, --version    Print version");
    println!("        --plain      Print without colors");
    println!("        --init-config  Print a config template");
    println!("        --           Treat the remaining arguments as text");
    println!();
    println!("CONFIG:");
    println!("    $SEGDISP_CONFIG or ~/.config/segdisp/config.toml");
}

/// Render every character of `text` into one row of displays
fn render(text: &str, config: &Config) -> Result<CellCanvas> {
    let layout = config.layout.sanitized();
    let count = text.chars().count().max(1) as i32;
    let slot = layout.cols + layout.spacing;
    let width = slot * count - layout.spacing;

    let mut canvas = CellCanvas::new(Rect::with_size(0, 0, width, layout.rows))
        .context("Failed to create output canvas")?;
    let mut display = Display::new(DisplayOptions::new().cell_style(config.appearance.cell_style()));

    for (i, c) in text.chars().enumerate() {
        let area = Rect::with_size(i as i32 * slot, 0, layout.cols, layout.rows);
        debug!("glyph {:?} at {}", c, area);

        display.clear(DisplayOptions::new());
        display.set_character(c)?;
        let mut window = Window {
            inner: &mut canvas,
            area,
        };
        display
            .draw(&mut window, DisplayOptions::new())
            .with_context(|| format!("Failed to draw {:?}", c))?;
    }
    Ok(canvas)
}

/// Command line flags and the text to render
#[derive(Debug, Default, PartialEq)]
struct Args {
    help: bool,
    version: bool,
    init_config: bool,
    plain: bool,
    /// Words of the text, joined by single spaces
    words: Vec<String>,
}

/// Split flags from text. Everything after `--` is text, and so is a lone `-`.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Args {
    let mut parsed = Args::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--" => {
                parsed.words.extend(args.by_ref());
                break;
            }
            "--help" | "-h" => parsed.help = true,
            "--version" | "-V" => parsed.version = true,
            "--init-config" => parsed.init_config = true,
            "--plain" => parsed.plain = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                warn!("Ignoring unknown option {:?} (use -- to render it)", flag);
            }
            _ => parsed.words.push(arg),
        }
    }
    parsed
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args(std::env::args().skip(1));

    // --help
    if args.help || args == Args::default() {
        print_help();
        return Ok(());
    }

    // --version
    if args.version {
        println!("segdisp {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // --init-config
    if args.init_config {
        print!("{}", Config::default().to_toml()?);
        return Ok(());
    }

    let text = args.words.join(" ");
    let (ok, unsupported) = supports_chars(&text);
    if !ok {
        warn!("Replacing unsupported characters with spaces: {:?}", unsupported);
    }
    let text = sanitize(&text);

    let config = Config::load();
    let canvas = render(&text, &config)?;
    if args.plain {
        print!("{}", canvas);
    } else {
        print!("{}", canvas.to_ansi());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_places_glyphs_side_by_side() {
        let config = Config::default();
        let canvas = render("18", &config).unwrap();
        let layout = &config.layout;
        assert_eq!(canvas.area().dx(), 2 * layout.cols + layout.spacing);

        // Spacing column stays blank
        for y in 0..layout.rows {
            let cell = canvas.cell(Point::new(layout.cols, y)).unwrap();
            assert_eq!(cell.ch, ' ');
        }
        assert!(canvas.to_string().chars().any(|c| c != ' ' && c != '\n'));
    }

    fn args(list: &[&str]) -> Args {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args_flags_and_text() {
        let parsed = args(&["--plain", "HELLO", "WORLD"]);
        assert!(parsed.plain);
        assert!(!parsed.help);
        assert_eq!(parsed.words, ["HELLO", "WORLD"]);
        assert!(args(&["-h"]).help);
        assert!(args(&["-V"]).version);
    }

    #[test]
    fn test_parse_args_separator_ends_flags() {
        let parsed = args(&["--plain", "--", "-h", "-V", "--plain"]);
        assert!(parsed.plain);
        assert!(!parsed.help && !parsed.version);
        assert_eq!(parsed.words, ["-h", "-V", "--plain"]);
    }

    #[test]
    fn test_parse_args_skips_unknown_flags() {
        let parsed = args(&["-x", "--bogus", "A", "-"]);
        assert_eq!(parsed.words, ["A", "-"]);
        assert_eq!(args(&["-x"]), Args::default());
    }

    #[test]
    fn test_window_rejects_outside_points() {
        let mut canvas = CellCanvas::new(Rect::new(0, 0, 4, 4)).unwrap();
        let mut window = Window {
            inner: &mut canvas,
            area: Rect::new(0, 0, 2, 2),
        };
        assert!(window.set_cell(Point::new(3, 0), 'x', &CellStyle::default()).is_err());
        assert!(window.set_cell(Point::new(1, 1), 'x', &CellStyle::default()).is_ok());
    }
}
