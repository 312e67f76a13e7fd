// Progress bar module
// Single-line, self-overwriting terminal progress with a pluggable sink

use std::io::{self, Write};

/// Renders a one-line progress bar that redraws itself in place
///
/// Every render overwrites the previous line with a carriage return and
/// flushes immediately so partial lines never interleave with other
/// output. Rendering exactly 1.0 also blanks the line so the finished bar
/// disappears instead of lingering at 100%. The output surface is any
/// `Write` sink, stdout by default.
pub struct ProgressBar {
    prefix: String,
    suffix: String,
    decimals: usize,
    length: usize,
    fill: char,
    empty: char,
    sink: Box<dyn Write>,
}

impl ProgressBar {
    /// Create a progress bar with the default geometry, writing to stdout
    pub fn new() -> Self {
        Self {
            prefix: "Progress".to_string(),
            suffix: String::new(),
            decimals: 0,
            length: 50,
            fill: '=',
            empty: ' ',
            sink: Box::new(io::stdout()),
        }
    }

    /// Set the label printed before the bar
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the label printed after the percentage
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the number of decimal places shown in the percentage
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the bar's visual length in characters
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Redirect rendering to an arbitrary sink instead of stdout
    pub fn with_sink(mut self, sink: Box<dyn Write>) -> Self {
        self.sink = sink;
        self
    }

    /// Render the bar for a progress fraction in [0, 1]
    ///
    /// Values outside the range are rejected without touching the sink and
    /// reported as `Ok(false)`. Accepted values draw the bar and return
    /// `Ok(true)`.
    pub fn render(&mut self, progress: f64) -> io::Result<bool> {
        if !(0.0..=1.0).contains(&progress) {
            return Ok(false);
        }

        let filled = (progress * self.length as f64).floor() as usize;
        let fill_run = self.fill.to_string().repeat(filled);
        let empty_run = self.empty.to_string().repeat(self.length - filled);
        let percent = format!("{:.*}", self.decimals, progress * 100.0);

        let mut line = format!("{} |{}{}| {}%", self.prefix, fill_run, empty_run, percent);
        if !self.suffix.is_empty() {
            line.push(' ');
            line.push_str(&self.suffix);
        }

        write!(self.sink, "\r{}", line)?;
        if progress == 1.0 {
            // Blank the finished bar with enough spaces to cover the
            // longest line this configuration can produce
            write!(self.sink, "\r{}\r", " ".repeat(self.max_line_len()))?;
        }
        self.sink.flush()?;
        Ok(true)
    }

    // Longest rendered line: prefix, " |", bar, "| ", widest percentage,
    // "%", and the suffix with its separating space when present
    fn max_line_len(&self) -> usize {
        let percent_width = if self.decimals > 0 { 4 + self.decimals } else { 3 };
        let suffix_width = if self.suffix.is_empty() { 0 } else { 1 + self.suffix.len() };
        self.prefix.len() + 2 + self.length + 2 + percent_width + 1 + suffix_width
    }
}
