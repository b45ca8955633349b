use crate::domain::{AppError, ComparatorInvocation, ComparatorOutput};

/// Port for the external pixel-comparison program.
pub trait Comparator {
    /// Run the comparator to completion and capture its output.
    ///
    /// Blocks until the process exits. A non-zero exit is reported through
    /// [`ComparatorOutput::code`], not as an error.
    fn run(&self, invocation: &ComparatorInvocation) -> Result<ComparatorOutput, AppError>;
}
