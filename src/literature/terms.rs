//! Search-term expansion for a drug query.

/// Clinical contexts appended to the drug name when expanding a query.
const THERAPEUTIC_CONTEXTS: &[&str] = &[
    "efficacy",
    "safety",
    "pharmacokinetics",
    "adverse events",
    "drug interactions",
    "dose-response",
];

/// Expand a drug name into the term set shared by every search stream.
///
/// The first entry is always the normalized (trimmed, lowercased) drug name;
/// it seeds the deterministic record generators.
pub fn generate_search_terms(drug: &str) -> Vec<String> {
    let base = drug.trim().to_lowercase();
    let display = capitalize(&base);

    let mut terms = vec![base.clone(), display.clone()];
    terms.extend(
        THERAPEUTIC_CONTEXTS
            .iter()
            .map(|context| format!("{base} {context}")),
    );
    terms.push(format!("{display} clinical trial"));
    terms.push(format!("{base} systematic review"));
    terms.push(format!("{base} meta-analysis"));

    // base == display when the name starts with a non-letter
    terms.dedup();
    terms
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The normalized drug name backing a term set.
pub fn primary_term(terms: &[String]) -> &str {
    terms.first().map(String::as_str).unwrap_or("")
}
