use std::fmt;

use crate::showcase::transcript::Transcript;

/// A demonstration body: fills a transcript from its fixed inputs.
pub type DemoFn = fn(&mut Transcript);

#[derive(Clone)]
pub struct Demo {
    pub name: &'static str,
    pub summary: &'static str,
    pub run: DemoFn,
}

impl Demo {
    /// Runs the demonstration into a fresh transcript.
    pub fn transcript(&self) -> Transcript {
        let mut transcript = Transcript::new();
        (self.run)(&mut transcript);
        transcript
    }
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Demo({})", self.name)
    }
}

impl PartialEq for Demo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
