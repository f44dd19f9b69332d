//! Display surfaces the completion label can be rendered on

use anyhow::{Context, Result};
use std::io::Write;

/// Something that can show a line of text to the user.
pub trait DisplaySurface {
    fn show_text(&mut self, text: &str) -> Result<()>;
}

/// Writes the text as a single line to a writer (stdout by default).
pub struct ConsoleSurface<W: Write> {
    out: W,
}

impl ConsoleSurface<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> DisplaySurface for ConsoleSurface<W> {
    fn show_text(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text).context("Failed to write label")?;
        self.out.flush().context("Failed to flush label")?;
        Ok(())
    }
}

impl<S: DisplaySurface + ?Sized> DisplaySurface for Box<S> {
    fn show_text(&mut self, text: &str) -> Result<()> {
        (**self).show_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_surface_writes_line() {
        let mut surface = ConsoleSurface::new(Vec::new());
        surface.show_text("Finish compilation").unwrap();
        assert_eq!(surface.get_ref(), b"Finish compilation\n");
    }
}
