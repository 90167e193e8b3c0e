use std::io::Read;

use crate::error::Result;

/// Read the whole stream as UTF-8 source text, blocking until end of input.
pub fn read_source<R: Read>(mut reader: R) -> Result<String> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_everything_until_eof() {
        let input: &[u8] = b"let a = 1;\nlet b = 2;\n";
        assert_eq!(read_source(input).unwrap(), "let a = 1;\nlet b = 2;\n");
    }

    #[test]
    fn empty_stream_is_empty_source() {
        assert_eq!(read_source(std::io::empty()).unwrap(), "");
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let input: &[u8] = &[0xff, 0xfe];
        assert!(matches!(read_source(input), Err(crate::Error::Io(_))));
    }
}
