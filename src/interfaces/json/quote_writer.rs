use crate::domain::pricing::LoanQuote;
use crate::error::Result;
use std::io::Write;

/// Writes quotes as JSON lines, one object per application.
pub struct QuoteWriter<W: Write> {
    writer: W,
    scale: Option<u32>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scale: None,
        }
    }

    /// Rounds every fee line to `scale` decimal places on output.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn write_quote(&mut self, mut quote: LoanQuote) -> Result<()> {
        if let Some(scale) = self.scale {
            quote.fees = quote.fees.round_dp(scale);
        }
        serde_json::to_writer(&mut self.writer, &quote)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
