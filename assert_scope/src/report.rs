//! Console sink where a scope writes its diagnostic lines.
use std::{
    cell::RefCell,
    fmt,
    io::{self, Write},
    rc::Rc,
};

/// Destination of the scope's console lines: standard output unless replaced.
pub struct Output(Box<dyn Write>);

impl Output {
    pub fn new(writer: impl Write + 'static) -> Self {
        Self(Box::new(writer))
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Write errors are dropped: a broken console must not change the test outcome.
    pub(crate) fn line(&mut self, line: impl fmt::Display) {
        let _ = writeln!(self.0, "{line}");
        let _ = self.0.flush();
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Output")
    }
}

/// In memory writer that can be cloned and inspected after being handed to a scope.
#[doc(hidden)]
#[derive(Clone, Default, Debug)]
pub struct Capture(Rc<RefCell<Vec<u8>>>);

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToOwned::to_owned).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<Capture> for Output {
    fn from(capture: Capture) -> Self {
        Output::new(capture)
    }
}
