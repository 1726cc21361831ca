// src/core/normalize.rs

const CYRILLIC_TO_LATIN: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "jo"),
    ('ж', "j"),
    ('з', "z"),
    ('и', "i"),
    ('й', "j"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('є', "je"),
    ('і', "i"),
    ('ї', "ji"),
    ('ґ', "g"),
];

fn title_case(latin: &str) -> String {
    let mut chars = latin.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Latin spelling of a single Cyrillic letter, or `None` if the table has no entry.
///
/// Capital letters map to the title-cased spelling (`Щ` becomes `Sch`).
#[must_use]
pub fn transliterate_char(symbol: char) -> Option<String> {
    if let Some((_, latin)) = CYRILLIC_TO_LATIN.iter().find(|(cyr, _)| *cyr == symbol) {
        return Some((*latin).to_owned());
    }
    CYRILLIC_TO_LATIN
        .iter()
        .find(|(cyr, _)| cyr.to_uppercase().eq(std::iter::once(symbol)))
        .map(|(_, latin)| title_case(latin))
}

/// Transliterates Cyrillic letters and replaces anything that is not
/// alphanumeric with `_`.
#[must_use]
pub fn normalize(stem: &str) -> String {
    let mut transliterated = String::with_capacity(stem.len());
    for symbol in stem.chars() {
        match transliterate_char(symbol) {
            Some(latin) => transliterated.push_str(&latin),
            None => transliterated.push(symbol),
        }
    }

    transliterated
        .chars()
        .map(|symbol| if symbol.is_alphanumeric() { symbol } else { '_' })
        .collect()
}
