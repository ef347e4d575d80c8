//! Narration sinks for export progress

/// Receives the human-readable progress lines of a run.
pub trait Reporter {
    fn line(&mut self, message: &str);

    /// Emit a rendered document (dry runs). Defaults to a plain line.
    fn document(&mut self, content: &str) {
        self.line(content);
    }
}

/// Prints each line to standard output.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// Collects lines in memory.
#[derive(Debug, Default)]
pub struct BufferReporter {
    lines: Vec<String>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Reporter for BufferReporter {
    fn line(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
