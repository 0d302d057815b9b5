//! pt-BR text and date normalizers.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Prepositions and articles kept lower-case inside titles.
const LOWERCASE_WORDS: &[&str] = &[
    "da", "das", "de", "do", "dos", "e", "em", "na", "nas", "no", "nos", "para", "por", "com",
    "sem",
];

/// Month abbreviations, January first.
const MONTHS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

static RE_INSTITUTIONAL_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"I:\s*([^;]+)").unwrap());

/// Render controlled-vocabulary text (`CIÊNCIA_DA_COMPUTAÇÃO`) as a title
/// (`Ciência da Computação`).
///
/// Underscores become spaces. Words are runs of letters and digits, so
/// text after `/` or `-` is capitalized too. Every word is capitalized
/// except the lower-case exceptions, and the first letter is always
/// upper-case. Works on code points, so accented capitals fold correctly.
/// Accents missing from the input are not restored.
pub fn title_case(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text
        .nfc()
        .map(|c| if c == '_' { ' ' } else { c })
        .collect::<String>()
        .to_lowercase();

    let mut titled = String::with_capacity(lowered.len());
    let mut word = String::new();
    for c in lowered.chars() {
        if c.is_alphanumeric() || is_combining_mark(c) {
            word.push(c);
        } else {
            push_word(&mut titled, &word);
            word.clear();
            titled.push(c);
        }
    }
    push_word(&mut titled, &word);

    capitalize(&titled)
}

fn push_word(out: &mut String, word: &str) {
    if LOWERCASE_WORDS.contains(&word) {
        out.push_str(word);
    } else {
        out.push_str(&capitalize(word));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decode a Lattes date field.
///
/// `DDMMYYYY` becomes `"DD Mon YYYY"`; empty input, bare years and any
/// other shape are returned unchanged.
pub fn format_date(date: &str) -> String {
    if date.len() != 8 || !date.is_ascii() {
        return date.to_string();
    }

    let (day, rest) = date.split_at(2);
    let (month, year) = rest.split_at(2);
    let month_name = month
        .parse::<usize>()
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|i| MONTHS.get(i).copied())
        .unwrap_or(month);

    format!("{day} {month_name} {year}")
}

/// Pick the institutional address out of `"I: addr1; R: addr2"`.
///
/// Returns the raw field when no `I:` tag is present.
pub fn extract_email(field: &str) -> String {
    RE_INSTITUTIONAL_EMAIL
        .captures(field)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| field.to_string())
}

/// End year for display: empty means the entry is still ongoing.
pub fn display_year(year: &str) -> &str {
    if year.is_empty() { "atual" } else { year }
}
