/// Receives recoverable problems found while interpreting input.
///
/// Fatal problems are not reported here; they are returned as errors and the
/// caller decides how to stop. Implementations choose the delivery: a log, a
/// console, or an in-memory list.
///
/// Any `FnMut(&str)` closure is a `Diagnostics` that receives every message
/// as text.
///
/// # Example
///
/// ```
/// use shoal_core::Diagnostics;
///
/// let mut seen = Vec::new();
/// let mut sink = |message: &str| seen.push(message.to_owned());
///
/// sink.label_unrecognized("foo", "run.cfg");
/// assert_eq!(seen, ["run.cfg: unrecognized input label 'foo'"]);
/// ```
pub trait Diagnostics {
    /// Reports a warning; processing continues.
    ///
    /// `message` is fully formatted and already names the source file.
    fn warning(&mut self, message: &str);

    /// Reports a label that no field recognizes.
    ///
    /// The default implementation forwards a formatted warning.
    fn label_unrecognized(&mut self, label: &str, source_file: &str) {
        self.warning(&format!(
            "{source_file}: unrecognized input label '{label}'"
        ));
    }
}

impl<F: FnMut(&str)> Diagnostics for F {
    fn warning(&mut self, message: &str) {
        self(message);
    }
}
