use std::io::Write;

use crate::driver::ClockFace;
use crate::grid::GRID;

/// Something that can show a clock face: the LED panel window or a terminal.
pub trait PanelSink {
    fn show(&mut self, face: &ClockFace) -> anyhow::Result<()>;

    /// Blanks the output. Called before the process exits.
    fn clear(&mut self) -> anyhow::Result<()>;
}

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";
const LIT: &str = "\x1B[1;37m";
const UNLIT: &str = "\x1B[2;30m";
const RESET: &str = "\x1B[0m";

/// ANSI simulation of the panel for machines without one.
pub struct TerminalSink<W: Write> {
    out: W,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PanelSink for TerminalSink<W> {
    fn show(&mut self, face: &ClockFace) -> anyhow::Result<()> {
        let dots = face.dot_marks();
        let rule = "=".repeat(50);
        let out = &mut self.out;

        write!(out, "{CLEAR_SCREEN}")?;
        writeln!(out, "{rule}")?;
        writeln!(out, "  BÄRNER WORT-UHR  |  {:02}:{:02}", face.hour, face.minute)?;
        writeln!(out, "{rule}")?;
        writeln!(out)?;
        writeln!(out, "    {}                       {}", dots[0], dots[1])?;
        writeln!(out)?;

        for (row, letters) in GRID.iter().enumerate() {
            write!(out, "      ")?;
            for (col, letter) in letters.iter().enumerate() {
                let style = if face.is_lit((row, col)) { LIT } else { UNLIT };
                write!(out, "{style}{letter}{RESET} ")?;
            }
            writeln!(out)?;
        }

        writeln!(out)?;
        writeln!(out, "    {}                       {}", dots[3], dots[2])?;
        writeln!(out)?;
        writeln!(out, "  → {}", face.translation.phrase())?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        write!(self.out, "{RESET}{CLEAR_SCREEN}")?;
        self.out.flush()?;
        Ok(())
    }
}
