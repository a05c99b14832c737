/// Lowercase with Turkish dotted/dotless I rules.
pub fn turkish_lowercase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            _ => out.extend(c.to_lowercase()),
        }
    }
    out
}

/// First `max_chars` characters of `s`, and whether anything was cut.
pub fn truncate_chars(s: &str, max_chars: usize) -> (String, bool) {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => (s[..idx].to_string(), true),
        None => (s.to_string(), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turkish_lowercase() {
        assert_eq!(turkish_lowercase("İŞE İADE"), "işe iade");
        assert_eq!(turkish_lowercase("KIDEM"), "kıdem");
        assert_eq!(turkish_lowercase("Çek"), "çek");
    }

    #[test]
    fn test_truncate_multibyte() {
        let (head, cut) = truncate_chars("Ödenmeyen ücret", 4);
        assert_eq!(head, "Öden");
        assert!(cut);

        let (head, cut) = truncate_chars("kısa", 10);
        assert_eq!(head, "kısa");
        assert!(!cut);
    }
}
