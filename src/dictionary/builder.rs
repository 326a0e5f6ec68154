pub struct DictionaryBuilder;

impl DictionaryBuilder {
    /// Expands raw wordlist text into candidate paths, in source order.
    ///
    /// Blank lines and `#` comments are dropped. Each remaining word is kept
    /// as-is and, when it has no extension of its own, followed by one
    /// `word.ext` variant per entry in `extensions`.
    pub fn build(dictionary: &str, extensions: &[String]) -> Vec<String> {
        let mut candidates = Vec::new();

        for line in dictionary.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }

            candidates.push(word.to_string());

            if !extensions.is_empty() && !has_extension(word) {
                for ext in extensions {
                    candidates.push(format!("{}.{}", word, ext));
                }
            }
        }

        candidates
    }
}

/// True when `word` ends in `.<token>` with a word-character token and the
/// dot is not the first character.
pub fn has_extension(word: &str) -> bool {
    match word.rfind('.') {
        Some(0) | None => false,
        Some(idx) => {
            let suffix = &word[idx + 1..];
            !suffix.is_empty() && suffix.chars().all(|c| c.is_alphanumeric() || c == '_')
        }
    }
}

/// Splits a `--ext` value like `"html, .txt,,php"` into `["html", "txt", "php"]`.
pub fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|ext| ext.trim().trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}
