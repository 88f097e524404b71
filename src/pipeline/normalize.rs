//! Text cleanup applied to every field pulled out of a spreadsheet cell.

/// Collapses every run of whitespace to a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn collapse_whitespace_opt(text: Option<&str>) -> Option<String> {
    text.map(collapse_whitespace)
}

/// Word-boundary title casing: the first letter after any non-letter is
/// uppercased, every following letter lowercased. Apostrophes and hyphens
/// count as boundaries, so "O'BRIEN-SMITH" becomes "O'Brien-Smith".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}

/// Title-cases an address and appends the city/state suffix when the text
/// does not already mention Minneapolis. Empty and absent addresses pass
/// through untouched.
pub fn canonicalize_address(address: Option<&str>) -> Option<String> {
    let address = address?;
    if address.is_empty() {
        return Some(String::new());
    }
    let cased = title_case(address);
    if cased.to_lowercase().contains("minneapolis") {
        Some(cased)
    } else {
        Some(format!("{}, Minneapolis, MN", cased))
    }
}
