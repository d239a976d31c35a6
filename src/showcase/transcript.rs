use std::fmt;

/// Ordered output lines accumulated by a single demonstration.
///
/// Demonstration bodies emit here instead of writing to a sink directly, so
/// they stay total functions and exact output can be asserted in tests.
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one rendered output line.
    pub fn emit(&mut self, line: impl fmt::Display) {
        self.lines.push(line.to_string());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
