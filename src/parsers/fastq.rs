use crate::collection::{ReadCollection, ReadKind};
use crate::error::{LoadError, Result};

/// Offset between a quality character and its Phred score (Sanger /
/// Phred+33 encoding, ASCII 33-126 covering scores 0-93).
const PHRED_OFFSET: u8 = 33;

/// Parses FASTQ text into a read collection.
///
/// Records are fixed blocks of four lines: `@name`, bases, a separator line
/// whose content is ignored, and the quality string. An empty line at a
/// block start ends the scan; a block truncated mid-record is a
/// [`LoadError::MalformedRecord`] rather than a silent misread of whatever
/// follows. A quality string whose length disagrees with its sequence is
/// rejected as [`LoadError::LengthMismatch`].
pub fn parse(text: &str) -> Result<ReadCollection> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut collection = ReadCollection::new(ReadKind::Fastq);
    let mut i = 0;

    while i < lines.len() {
        let header = lines[i];
        if header.is_empty() {
            break;
        }
        let sequence = line_at(&lines, i + 1)?.trim();
        let quality = line_at(&lines, i + 3)?.trim();

        if sequence.len() != quality.len() {
            return Err(LoadError::LengthMismatch {
                record: collection.len() + 1,
                sequence_len: sequence.len(),
                quality_len: quality.len(),
            });
        }

        let name = header.strip_prefix('@').unwrap_or(header);
        collection.names.push(name.trim_end_matches('\r').to_string());
        collection.sequences.push(sequence.to_string());
        collection
            .qualities
            .push(quality.bytes().map(|b| b.saturating_sub(PHRED_OFFSET)).collect());

        i += 4;
    }

    Ok(collection)
}

fn line_at<'a>(lines: &[&'a str], index: usize) -> Result<&'a str> {
    lines
        .get(index)
        .copied()
        .ok_or(LoadError::MalformedRecord { line: index + 1 })
}
