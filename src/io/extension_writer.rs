use super::ResponseWriter;
use crate::aa::{Argument, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the answers to problems.
///
/// Extensions are written as the comma-separated list of their arguments between square brackets, like `[a,b,c]`.
/// Acceptance statuses are written `YES` or `NO`, and the absence of extension is written `NO`.
///
/// # Example
///
/// ```
/// # use dungsem::aa::{AAFramework, ArgumentSet};
/// # use dungsem::io::{ExtensionWriter, ResponseWriter};
/// let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// let ext = af.argument_set().iter().collect::<Vec<_>>();
/// let mut buffer: Vec<u8> = Vec::new();
/// ExtensionWriter::default().write_single_extension(&mut buffer, &ext).unwrap();
/// assert_eq!("[a,b]\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct ExtensionWriter;

impl<T> ResponseWriter<T> for ExtensionWriter
where
    T: LabelType,
{
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()> {
        let context = "while writing an extension";
        write!(writer, "[").context(context)?;
        let mut first = true;
        extension.iter().try_for_each(|arg| {
            if first {
                first = false;
                write!(writer, "{}", arg).context(context)
            } else {
                write!(writer, ",{}", arg).context(context)
            }
        })?;
        writeln!(writer, "]").context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::{AAFramework, ArgumentSet};

    #[test]
    fn test_write_responses() {
        let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a"]));
        let mut buffer: Vec<u8> = Vec::new();
        let writer = ExtensionWriter;
        ResponseWriter::<&str>::write_no_extension(&writer, &mut buffer).unwrap();
        writer.write_single_extension(&mut buffer, &[] as &[&Argument<&str>]).unwrap();
        writer
            .write_single_extension(&mut buffer, &af.argument_set().iter().collect::<Vec<_>>())
            .unwrap();
        ResponseWriter::<&str>::write_acceptance_status(&writer, &mut buffer, true).unwrap();
        ResponseWriter::<&str>::write_acceptance_status(&writer, &mut buffer, false).unwrap();
        assert_eq!("NO\n[]\n[a]\nYES\nNO\n", String::from_utf8(buffer).unwrap());
    }
}
