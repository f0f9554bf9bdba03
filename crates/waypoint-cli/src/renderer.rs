//! Terminal rendering of the markdown produced by the core display types
//!
//! Rich output goes through termimad. Plain output prints the markdown as is,
//! which keeps it stable for scripts and tests.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_COLOR: &str = "\x1b[34m";
const SUCCESS_COLOR: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match line_color(line) {
                // Headers keep their hash marks so the board columns stay visible
                Some(color) => println!("{color}{line}{RESET}"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

/// Lines printed in a fixed color instead of inline markdown styling.
fn line_color(line: &str) -> Option<&'static str> {
    if line.starts_with('#') {
        Some(HEADER_COLOR)
    } else if line.starts_with("Success:") {
        Some(SUCCESS_COLOR)
    } else {
        None
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Title\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_line_colors() {
        assert_eq!(line_color("## Completed (2)"), Some(HEADER_COLOR));
        assert_eq!(line_color("Success: valid"), Some(SUCCESS_COLOR));
        assert_eq!(line_color("- Status: ✓ Completed"), None);
    }
}
