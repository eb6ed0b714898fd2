use std::io::Write;

use crate::{compute::Thermo, Result};

/// One diagnostics line: elapsed time, temperature, potential energy and
/// total energy, each fixed-point with six decimals in a 9-wide field.
pub fn format_line(time: f64, thermo: &Thermo) -> String {
    format!(
        "{:9.6} {:9.6} {:9.6} {:9.6}",
        time, thermo.temperature, thermo.potential, thermo.total
    )
}

/// Periodic diagnostics sink
pub struct Output<W: Write> {
    pub every: usize,
    writer: W,
}
impl<W: Write> Output<W> {
    pub fn new(every: usize, writer: W) -> Self {
        assert!(every > 0, "Output interval should be positive");
        Self { every, writer }
    }
    pub fn is_due(&self, step: usize) -> bool {
        step % self.every == 0
    }
    pub fn write(&mut self, time: f64, thermo: &Thermo) -> Result<()> {
        writeln!(self.writer, "{}", format_line(time, thermo))?;
        Ok(())
    }
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
    pub fn into_inner(self) -> W {
        self.writer
    }
}
