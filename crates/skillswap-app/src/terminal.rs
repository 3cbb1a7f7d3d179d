use crate::config::RenderMode;
use anyhow::Result;
use skillswap_view::{html, render_json, text, PageView, Surface};
use std::io::Write;

/// Surface writing each frame to a stream in the configured format
pub struct TerminalSurface<W: Write> {
    mode: RenderMode,
    out: W,
    frames: usize,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(mode: RenderMode, out: W) -> Self {
        Self {
            mode,
            out,
            frames: 0,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn present(&mut self, frame: &PageView) -> Result<()> {
        self.frames += 1;
        let rendered = match self.mode {
            RenderMode::Text => text::render(frame),
            RenderMode::Html => format!(
                "<!-- frame {} -->\n{}\n",
                self.frames,
                html::render_page(frame)
            ),
            RenderMode::Json => format!("{}\n", render_json(frame)?),
        };
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
