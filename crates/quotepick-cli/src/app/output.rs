use super::config::OutputFormat;
use super::error::CliError;
use quotepick::{PickResult, RandSource, RandomPicker, WriteSink};
use std::io::Write;

/// Where picks end up: the display half of the trigger.
///
/// Text output forwards the picked item to a [`WriteSink`]. JSON output needs
/// the index as well, so it serializes the whole [`PickResult`].
#[derive(Debug)]
pub enum Output<W: Write> {
    Text(WriteSink<W>),
    Json(W),
}

impl<W: Write> Output<W> {
    pub fn new(format: OutputFormat, writer: W) -> Self {
        match format {
            OutputFormat::Text => Self::Text(WriteSink::new(writer)),
            OutputFormat::Json => Self::Json(writer),
        }
    }

    /// Makes one pick and writes it out.
    pub fn emit<'a, R>(
        &mut self,
        picker: &RandomPicker<'a, String, R>,
    ) -> Result<PickResult<'a, String>, CliError>
    where
        R: RandSource,
    {
        match self {
            Self::Text(sink) => Ok(picker.pick_into(sink)?),
            Self::Json(writer) => {
                let result = picker.pick()?;
                serde_json::to_writer(&mut *writer, &result)?;
                writeln!(writer)?;
                writer.flush()?;
                Ok(result)
            }
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        match self {
            Self::Text(sink) => sink.into_inner(),
            Self::Json(writer) => writer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quotepick::SequenceRandom;

    fn items() -> Vec<String> {
        ["a", "b", "c"].map(String::from).to_vec()
    }

    #[test]
    fn text_prints_item_lines() {
        let items = items();
        let picker = RandomPicker::new(&items, SequenceRandom::new([0.0, 0.5]));
        let mut out = Output::new(OutputFormat::Text, Vec::new());
        out.emit(&picker).unwrap();
        out.emit(&picker).unwrap();
        assert_eq!(String::from_utf8(out.into_inner()).unwrap(), "a\nb\n");
    }

    #[test]
    fn json_prints_item_and_index() {
        let items = items();
        let picker = RandomPicker::new(&items, SequenceRandom::constant(1.0));
        let mut out = Output::new(OutputFormat::Json, Vec::new());
        let result = out.emit(&picker).unwrap();
        assert_eq!(result.index, 2);
        assert_eq!(
            String::from_utf8(out.into_inner()).unwrap(),
            "{\"item\":\"c\",\"index\":2}\n"
        );
    }

    #[test]
    fn empty_list_surfaces_error_and_writes_nothing() {
        let items: Vec<String> = Vec::new();
        let picker = RandomPicker::new(&items, SequenceRandom::constant(0.5));
        for format in [OutputFormat::Text, OutputFormat::Json] {
            let mut out = Output::new(format, Vec::new());
            let err = out.emit(&picker).unwrap_err();
            assert!(matches!(err, CliError::EmptyItems));
            assert!(out.into_inner().is_empty());
        }
    }
}
