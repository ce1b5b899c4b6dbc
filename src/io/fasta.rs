use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use ahash::AHashMap;
use flate2::read::MultiGzDecoder;

use crate::error::{NucleoError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

/// Open a FASTA file for reading, handles gzipped files automatically
pub fn open_fasta<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Stream FASTA records from a reader.
///
/// Headers are the whole line after `>`; sequence lines are right-trimmed
/// and joined. Blank lines are ignored.
pub fn stream_fasta_records<R: BufRead>(reader: R) -> FastaRecords<R> {
    FastaRecords {
        lines: reader.lines(),
        line_no: 0,
        pending_header: None,
        done: false,
    }
}

/// Iterator adaptor to handle streaming FASTA parsing
pub struct FastaRecords<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
    pending_header: Option<String>,
    done: bool,
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut header = self.pending_header.take();
        let mut sequence = String::new();

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    return header.map(|header| Ok(FastaRecord { header, sequence }));
                }
            };
            self.line_no += 1;

            if let Some(rest) = line.strip_prefix('>') {
                let next_header = rest.trim_end().to_string();
                match header {
                    Some(header) => {
                        self.pending_header = Some(next_header);
                        return Some(Ok(FastaRecord { header, sequence }));
                    }
                    None => header = Some(next_header),
                }
            } else {
                let trimmed = line.trim_end();
                if trimmed.is_empty() {
                    continue;
                }
                if header.is_none() {
                    self.done = true;
                    return Some(Err(NucleoError::FastaFormat {
                        line: self.line_no,
                        message: "sequence data before the first header".into(),
                    }));
                }
                sequence.push_str(trimmed);
            }
        }
    }
}

/// Read every record of a FASTA file, in file order.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>> {
    stream_fasta_records(open_fasta(path)?).collect()
}

/// Read a multi-FASTA file into a header → sequence map.
///
/// A header that occurs twice keeps only its last record.
pub fn fasta_to_map<P: AsRef<Path>>(path: P) -> Result<AHashMap<String, String>> {
    let mut map = AHashMap::new();
    for record in stream_fasta_records(open_fasta(path)?) {
        let record = record?;
        map.insert(record.header, record.sequence);
    }
    Ok(map)
}

/// Iterate over the right-trimmed non-header lines of a FASTA file.
pub fn read_sequence_lines<P: AsRef<Path>>(path: P) -> Result<impl Iterator<Item = Result<String>>> {
    let reader = open_fasta(path)?;
    Ok(reader.lines().filter_map(|line| match line {
        Ok(line) if line.starts_with('>') => None,
        Ok(line) => Some(Ok(line.trim_end().to_string())),
        Err(e) => Some(Err(e.into())),
    }))
}
