mod iupac;

pub use iupac::expand_iupac;

/// Strips newlines, carriage returns and spaces from a sequence and
/// uppercases the rest.
pub fn sanitize(sequence: &str) -> String {
    sequence
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | ' '))
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Reverses a sequence and swaps each base with its Watson-Crick pair.
///
/// The swap is a single disjoint lookup per character, so `A`/`T` and
/// `C`/`G` can never cross-contaminate the way chained text substitutions
/// would. Lowercase bases are accepted; complemented output is always
/// uppercase. Characters outside ACGT pass through unchanged.
pub fn reverse_complement(sequence: &str) -> String {
    sequence
        .chars()
        .rev()
        .map(|c| match c {
            'A' | 'a' => 'T',
            'T' | 't' => 'A',
            'C' | 'c' => 'G',
            'G' | 'g' => 'C',
            other => other,
        })
        .collect()
}
