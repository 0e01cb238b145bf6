//! Case matching for substitutions.

/// Shape `replacement` after the case of `original`.
///
/// - `original` entirely uppercase: uppercase the replacement.
/// - first character uppercase: uppercase the first character of the
///   replacement and lowercase the rest.
/// - `original` entirely lowercase: lowercase the replacement.
/// - anything else: the replacement as given.
pub fn match_case(original: &str, replacement: &str) -> String {
    let Some(first) = original.chars().next() else {
        return replacement.to_string();
    };
    if replacement.is_empty() {
        return String::new();
    }

    if original == original.to_uppercase() {
        return replacement.to_uppercase();
    }
    if first.is_uppercase() {
        let mut chars = replacement.chars();
        let mut out: String = chars.next().into_iter().flat_map(char::to_uppercase).collect();
        out.push_str(&chars.as_str().to_lowercase());
        return out;
    }
    if original == original.to_lowercase() {
        return replacement.to_lowercase();
    }
    replacement.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_original() {
        assert_eq!(match_case("LAUNCH", "start"), "START");
    }

    #[test]
    fn title_case_original() {
        assert_eq!(match_case("Launch", "start"), "Start");
        assert_eq!(match_case("Launch", "sTART now"), "Start now");
    }

    #[test]
    fn lowercase_original() {
        assert_eq!(match_case("launch", "Start"), "start");
    }

    #[test]
    fn mixed_case_keeps_replacement() {
        assert_eq!(match_case("iPhone", "Device"), "Device");
    }

    #[test]
    fn non_ascii() {
        assert_eq!(match_case("Élan", "énergie"), "Énergie");
        assert_eq!(match_case("straße", "WEG"), "weg");
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(match_case("", "help"), "help");
        assert_eq!(match_case("Assist", ""), "");
    }
}
