use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[arg(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.input) {
            None => Box::new(BufReader::new(std::io::stdin().lock())),
            Some(p) => {
                log::debug!("reading {p}");
                Box::new(BufReader::new(File::open(p)?))
            }
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[arg(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => {
                log::debug!("writing {p}");
                Box::new(BufWriter::new(File::create(p)?))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Feed the input to `f` in chunks of up to `chunk_size` lines.
///
/// Line endings are stripped; the chunk's first line number (1-based)
/// is passed along for error messages.
pub fn for_each_line_chunk<F>(
    reader: &mut dyn BufRead,
    chunk_size: usize,
    mut f: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnMut(usize, &[String]) -> Result<(), Box<dyn std::error::Error>>,
{
    let chunk_size = chunk_size.max(1);
    let mut chunk: Vec<String> = Vec::with_capacity(chunk_size);
    let mut first_line = 1;

    for line in reader.lines() {
        chunk.push(line?);
        if chunk.len() == chunk_size {
            f(first_line, &chunk)?;
            first_line += chunk.len();
            chunk.clear();
        }
    }
    if !chunk.is_empty() {
        f(first_line, &chunk)?;
    }
    Ok(())
}

/// Write `values` on one line, separated by single spaces.
pub fn write_joined<I, V>(
    writer: &mut dyn Write,
    values: I,
) -> std::io::Result<()>
where
    I: IntoIterator<Item = V>,
    V: std::fmt::Display,
{
    for (idx, value) in values.into_iter().enumerate() {
        if idx > 0 {
            write!(writer, " ")?;
        }
        write!(writer, "{value}")?;
    }
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_squash() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(squash_standard_io(&Some("a.txt".to_string())), Some("a.txt"));
    }

    #[test]
    fn test_line_chunks() {
        let mut reader = Cursor::new("a\nb\r\nc\nd\ne");
        let mut seen: Vec<(usize, Vec<String>)> = Vec::new();
        for_each_line_chunk(&mut reader, 2, |first, lines| {
            seen.push((first, lines.to_vec()));
            Ok(())
        })
        .unwrap();

        assert_eq!(
            seen,
            vec![
                (1, vec!["a".to_string(), "b".to_string()]),
                (3, vec!["c".to_string(), "d".to_string()]),
                (5, vec!["e".to_string()]),
            ]
        );
    }

    #[test]
    fn test_write_joined() {
        let mut buf: Vec<u8> = Vec::new();
        write_joined(&mut buf, [1, 2, 3]).unwrap();
        write_joined(&mut buf, Vec::<u32>::new()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1 2 3\n\n");
    }
}
