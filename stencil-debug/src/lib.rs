use std::fmt::{Result, Write};

/// Anything that can dump a diagnostic view of itself
/// into a formatter.
pub trait DebugWriter {
    fn write(&mut self, output: &mut impl Write) -> Result;
}

pub struct Debug<O>(pub O);

impl<O: Write> Debug<O> {
    pub fn new(output: O) -> Self {
        Self(output)
    }

    pub fn heading(mut self, title: &str) -> Self {
        let _ = writeln!(&mut self.0, "=== {title} ===");
        self
    }

    pub fn debug(mut self, title: &str, mut item: impl DebugWriter) -> Self {
        let _ = writeln!(&mut self.0, "--- {title} ---");
        let _ = item.write(&mut self.0);
        self
    }

    pub fn sep(mut self) -> Self {
        let _ = writeln!(&mut self.0, "----------------");
        self
    }

    pub fn finish(self) -> O {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Lines(&'static [&'static str]);

    impl DebugWriter for Lines {
        fn write(&mut self, output: &mut impl Write) -> Result {
            for line in self.0 {
                writeln!(output, "{line}")?;
            }
            Ok(())
        }
    }

    #[test]
    fn debug_output() {
        let output = Debug::new(String::new())
            .heading("Debug")
            .debug("lines", Lines(&["a", "b"]))
            .finish();

        assert_eq!(output, "=== Debug ===\n--- lines ---\na\nb\n");
    }
}
