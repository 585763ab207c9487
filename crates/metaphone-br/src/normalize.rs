//! Accent folding
//!
//! Replaces accented Latin letters with their unaccented base letter before
//! phonetic encoding. `ç`/`Ç` expand to `ss` so the cedilla reads as the
//! sibilant it is. Folded letters are always lowercase; the rule engine
//! matches case-insensitively, so case is irrelevant downstream.

/// Replacement for a single character, if it has one
#[inline]
fn replacement(c: char) -> Option<&'static str> {
    let folded = match c {
        'ç' | 'Ç' => "ss",
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => "a",
        'é' | 'è' | 'ê' | 'ẽ' | 'ë' | 'É' | 'È' | 'Ê' | 'Ẽ' | 'Ë' => "e",
        'í' | 'ì' | 'î' | 'ĩ' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ĩ' | 'Ï' => "i",
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => "o",
        'ú' | 'ù' | 'û' | 'ũ' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ũ' | 'Ü' => "u",
        'ý' | 'ỳ' | 'ỹ' | 'ŷ' | 'ÿ' | 'Ý' | 'Ỳ' | 'Ỹ' | 'Ŷ' | 'Ÿ' => "y",
        'ñ' | 'Ñ' => "n",
        _ => return None,
    };
    Some(folded)
}

/// Fold accented characters to their base letters.
///
/// Total and idempotent: every replacement is plain ASCII, which is never
/// replaced again.
pub fn fold_accents(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    for c in s.chars() {
        match replacement(c) {
            Some(folded) => out.push_str(folded),
            None => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii_untouched() {
        assert_eq!(fold_accents("Metaphone"), "Metaphone");
        assert_eq!(fold_accents(""), "");
    }

    #[test]
    fn test_vowels_fold_to_lowercase() {
        assert_eq!(fold_accents("olá"), "ola");
        assert_eq!(fold_accents("JOÃO"), "JOaO");
        assert_eq!(fold_accents("ÊÍÔÜ"), "eiou");
    }

    #[test]
    fn test_cedilla_expands() {
        assert_eq!(fold_accents("caça"), "cassa");
        assert_eq!(fold_accents("GONÇALVES"), "GONssALVES");
    }

    #[test]
    fn test_tilde_n_and_y() {
        assert_eq!(fold_accents("Muñoz"), "Munoz");
        assert_eq!(fold_accents("NÑ"), "Nn");
        assert_eq!(fold_accents("ÿŷ"), "yy");
    }

    #[test]
    fn test_idempotent() {
        let once = fold_accents("Conceição Araújo");
        assert_eq!(fold_accents(&once), once);
    }
}
