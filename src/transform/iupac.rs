use crate::error::{LoadError, Result};

/// Concrete bases denoted by one IUPAC ambiguity code, in the fixed order
/// expansions are emitted in. Lowercase codes are accepted.
fn alternatives(code: char) -> Option<&'static [char]> {
    let bases: &'static [char] = match code.to_ascii_uppercase() {
        'A' => &['A'],
        'C' => &['C'],
        'G' => &['G'],
        'T' => &['T'],
        'R' => &['A', 'G'],
        'Y' => &['C', 'T'],
        'S' => &['G', 'C'],
        'W' => &['A', 'T'],
        'K' => &['G', 'T'],
        'M' => &['A', 'C'],
        'B' => &['C', 'G', 'T'],
        'D' => &['A', 'G', 'T'],
        'H' => &['A', 'C', 'T'],
        'V' => &['A', 'C', 'G'],
        'N' => &['A', 'C', 'G', 'T'],
        _ => return None,
    };
    Some(bases)
}

/// Expands every IUPAC ambiguity code in `sequence` into the cartesian
/// product of its concrete base assignments.
///
/// Expansion runs left to right with each position's alternatives in table
/// order, so the output order is stable: `expand_iupac("RY")` yields
/// `["AC", "AT", "GC", "GT"]`. Every output has the same length as the
/// input and the count is the product of the per-position alternative
/// counts. A character outside the IUPAC alphabet is an
/// [`LoadError::InvalidSymbol`] error.
pub fn expand_iupac(sequence: &str) -> Result<Vec<String>> {
    let mut expanded = vec![String::with_capacity(sequence.len())];

    for code in sequence.chars() {
        let bases = alternatives(code).ok_or(LoadError::InvalidSymbol(code))?;
        expanded = expanded
            .iter()
            .flat_map(|prefix| {
                bases.iter().map(move |base| {
                    let mut next = String::with_capacity(sequence.len());
                    next.push_str(prefix);
                    next.push(*base);
                    next
                })
            })
            .collect();
    }

    Ok(expanded)
}
