use crate::collection::{ReadCollection, ReadKind};

/// Parses FASTA text into a read collection.
///
/// A record is a `>` header line followed by sequence lines wrapped at
/// arbitrary column width; wrapped lines are trimmed and concatenated.
/// FASTA carries no quality data, so every record gets a zero-filled
/// quality vector of the same length as its sequence.
///
/// A blank line stops the scan for the remainder of the file, not just the
/// current record. Multi-record files with embedded blank lines are
/// silently truncated at the first one. Kept for compatibility with
/// existing inputs; `truncates_on_blank_line` locks the behavior in.
pub fn parse(text: &str) -> ReadCollection {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut collection = ReadCollection::new(ReadKind::Fasta);
    let mut i = 0;

    while i < lines.len() {
        if lines[i].is_empty() {
            break;
        }

        // A body with no preceding header gets an empty name so the three
        // vectors stay parallel.
        let name = match lines[i].strip_prefix('>') {
            Some(rest) => {
                i += 1;
                rest.trim_end_matches('\r').to_string()
            }
            None => String::new(),
        };
        collection.names.push(name);

        let mut sequence = String::new();
        while i < lines.len() && !lines[i].is_empty() && !lines[i].starts_with('>') {
            sequence.push_str(lines[i].trim());
            i += 1;
        }
        collection.qualities.push(vec![0; sequence.len()]);
        collection.sequences.push(sequence);
    }

    collection
}
