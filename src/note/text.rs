use crate::jikan::{AltTitle, Named};

const SUMMARY_MAX_CHARS: usize = 300;
const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// "Last, First" -> "First Last". Names without a comma pass through.
pub(crate) fn reverse_author(name: &str) -> String {
    match name.split_once(',') {
        Some((last, first)) => format!("{} {}", first.trim(), last.trim()),
        None => name.to_string(),
    }
}

pub(crate) fn fix_authors(authors: &[Named]) -> String {
    authors
        .iter()
        .map(|a| reverse_author(a.name.as_deref().unwrap_or_default()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn join_names(items: &[Named]) -> String {
    if items.is_empty() {
        return "N/A".to_string();
    }
    items
        .iter()
        .map(|i| i.name.as_deref().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn yaml_name_list(items: &[Named]) -> String {
    if items.is_empty() {
        return "N/A".to_string();
    }
    items
        .iter()
        .map(|i| format!("\n  - \"{}\"", i.name.as_deref().unwrap_or_default()))
        .collect()
}

pub(crate) fn yaml_title_list(items: &[AltTitle]) -> String {
    if items.is_empty() {
        return "N/A".to_string();
    }
    items
        .iter()
        .map(|i| {
            format!(
                "\n - \"{}: {}\"",
                i.kind.as_deref().unwrap_or_default(),
                i.title.as_deref().unwrap_or_default()
            )
        })
        .collect()
}

/// Clean a synopsis into a single quoted YAML scalar: strip quotes and
/// parentheses, collapse whitespace, truncate, then quote.
pub(crate) fn reformat_summary(input: Option<&str>) -> String {
    let Some(raw) = input.filter(|s| !s.is_empty()) else {
        return "\"N/A\"".to_string();
    };

    let cleaned: String = raw.chars().filter(|c| !matches!(c, '"' | '(' | ')')).collect();
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    let shortened = if cleaned.chars().count() > SUMMARY_MAX_CHARS {
        let mut s: String = cleaned.chars().take(SUMMARY_MAX_CHARS).collect();
        s.push('…');
        s
    } else {
        cleaned
    };

    // Any double quote that survives the strip above must not break the
    // surrounding quoted scalar.
    let escaped = shortened.replace('"', "'");
    format!("\"{escaped}\"")
}

pub(crate) fn quote_yaml(input: Option<&str>) -> String {
    match input.filter(|s| !s.is_empty()) {
        Some(s) => format!("\"{}\"", s.replace('"', "\\\"")),
        None => "\"N/A\"".to_string(),
    }
}

pub(crate) fn sanitize_filename(input: Option<&str>) -> String {
    match input.filter(|s| !s.is_empty()) {
        Some(s) => s.chars().filter(|c| !ILLEGAL_FILENAME_CHARS.contains(c)).collect(),
        None => "Untitled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(names: &[&str]) -> Vec<Named> {
        names
            .iter()
            .map(|n| Named {
                name: Some(n.to_string()),
                ..Named::default()
            })
            .collect()
    }

    #[test]
    fn reverses_last_comma_first_author_names() {
        assert_eq!(reverse_author("Yamada, Taro"), "Taro Yamada");
        assert_eq!(reverse_author("Oda,Eiichiro"), "Eiichiro Oda");
        assert_eq!(reverse_author("CLAMP"), "CLAMP");
    }

    #[test]
    fn joins_reversed_authors_with_commas() {
        let authors = named(&["Yamada, Taro", "Suzuki, Hanako"]);
        assert_eq!(fix_authors(&authors), "Taro Yamada, Hanako Suzuki");
        assert_eq!(fix_authors(&[]), "");
    }

    #[test]
    fn joins_names_with_na_fallback() {
        assert_eq!(join_names(&[]), "N/A");
        assert_eq!(join_names(&named(&["X"])), "X");
        assert_eq!(join_names(&named(&["A", "B"])), "A, B");
    }

    #[test]
    fn renders_yaml_name_list() {
        assert_eq!(yaml_name_list(&[]), "N/A");
        assert_eq!(yaml_name_list(&named(&["Action"])), "\n  - \"Action\"");
        assert_eq!(
            yaml_name_list(&named(&["Action", "Adventure"])),
            "\n  - \"Action\"\n  - \"Adventure\""
        );
    }

    #[test]
    fn renders_yaml_title_list_with_type_prefix() {
        assert_eq!(yaml_title_list(&[]), "N/A");
        let titles = vec![
            AltTitle {
                kind: Some("Default".to_string()),
                title: Some("Naruto".to_string()),
            },
            AltTitle {
                kind: Some("Japanese".to_string()),
                title: Some("ナルト".to_string()),
            },
        ];
        assert_eq!(
            yaml_title_list(&titles),
            "\n - \"Default: Naruto\"\n - \"Japanese: ナルト\""
        );
    }

    #[test]
    fn summary_strips_quotes_and_parens_before_quoting() {
        assert_eq!(
            reformat_summary(Some("He said \"hi\" (loudly)   ok")),
            "\"He said hi loudly ok\""
        );
    }

    #[test]
    fn summary_collapses_whitespace_and_trims() {
        assert_eq!(
            reformat_summary(Some("  a\n\n b\t c  ")),
            "\"a b c\""
        );
    }

    #[test]
    fn summary_truncates_past_300_chars_with_ellipsis() {
        let long = "a".repeat(400);
        let out = reformat_summary(Some(&long));
        let expected = format!("\"{}…\"", "a".repeat(300));
        assert_eq!(out, expected);
    }

    #[test]
    fn summary_missing_or_empty_is_quoted_na() {
        assert_eq!(reformat_summary(None), "\"N/A\"");
        assert_eq!(reformat_summary(Some("")), "\"N/A\"");
    }

    #[test]
    fn quotes_yaml_scalars_and_escapes_embedded_quotes() {
        assert_eq!(quote_yaml(Some("plain")), "\"plain\"");
        assert_eq!(quote_yaml(Some("say \"hi\"")), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_yaml(None), "\"N/A\"");
        assert_eq!(quote_yaml(Some("")), "\"N/A\"");
    }

    #[test]
    fn strips_illegal_filename_characters_only() {
        assert_eq!(
            sanitize_filename(Some("a\\b/c:d*e?f\"g<h>i|j")),
            "abcdefghij"
        );
        assert_eq!(
            sanitize_filename(Some("Naruto (1999)")),
            "Naruto (1999)"
        );
        assert_eq!(sanitize_filename(None), "Untitled");
        assert_eq!(sanitize_filename(Some("")), "Untitled");
    }
}
