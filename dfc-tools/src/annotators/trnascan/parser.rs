//! Reader for tRNAscan-SE brief (`-b`) tabular output

use dfc_bio::Location;
use dfc_core::{DfcError, DfcResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Columns per line: name, tRNA #, begin, end, type, anticodon,
/// intron begin, intron end, score
pub const FIELD_COUNT: usize = 9;

/// One predicted tRNA as reported by tRNAscan-SE.
///
/// Coordinates are in reading direction, so `start > end` on the reverse
/// strand. Columns the records do not use are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct TrnaHit {
    pub sequence: String,
    pub number: String,
    pub start: u64,
    pub end: u64,
    pub amino_acid: String,
    pub anticodon: String,
    pub intron_begin: String,
    pub intron_end: String,
    pub score: String,
}

impl TrnaHit {
    pub fn location(&self) -> Location {
        Location::from_span(self.start, self.end)
    }
}

/// Parse one output line.
///
/// The sequence name is stripped of surrounding whitespace; tRNAscan-SE
/// pads it to a fixed width.
pub fn parse_line(line: &str) -> Result<TrnaHit, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} tab-separated fields, found {}",
            FIELD_COUNT,
            fields.len()
        ));
    }

    Ok(TrnaHit {
        sequence: fields[0].trim().to_string(),
        number: fields[1].to_string(),
        start: parse_coordinate("start", fields[2])?,
        end: parse_coordinate("end", fields[3])?,
        amino_acid: fields[4].to_string(),
        anticodon: fields[5].to_string(),
        intron_begin: fields[6].to_string(),
        intron_end: fields[7].to_string(),
        score: fields[8].to_string(),
    })
}

fn parse_coordinate(name: &str, value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("invalid {} coordinate {:?}", name, value))
}

/// Iterator over the hits in one output file.
///
/// Yields an error for the first malformed line; callers are expected to
/// stop there. Reading the file again means calling [`read_hits`] again.
pub struct TrnaHitReader<R: BufRead> {
    reader: R,
    path: PathBuf,
    line_number: usize,
}

impl<R: BufRead> TrnaHitReader<R> {
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            line_number: 0,
        }
    }

    // Lines must be valid UTF-8; sequence names are used as map keys
    fn next_line(&mut self) -> Option<DfcResult<String>> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                Some(String::from_utf8(buf).map_err(|_| {
                    DfcError::parse_at(&self.path, self.line_number, "invalid UTF-8")
                }))
            }
            Err(e) => Some(Err(DfcError::Io(e))),
        }
    }
}

impl<R: BufRead> Iterator for TrnaHitReader<R> {
    type Item = DfcResult<TrnaHit>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.next_line()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        Some(parse_line(&line).map_err(|msg| DfcError::parse_at(&self.path, self.line_number, msg)))
    }
}

/// Open a tRNAscan-SE output file for reading
pub fn read_hits<P: AsRef<Path>>(path: P) -> DfcResult<TrnaHitReader<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DfcError::from_open(e, path))?;
    Ok(TrnaHitReader::new(BufReader::new(file), path))
}
