//! Table alias → entity class name inflection.

/// Words whose singular form does not follow the suffix rules.
///
/// Also matched as the last word of a name (`BlogPeople`).
const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("oxen", "ox"),
    ("criteria", "criterion"),
    ("analyses", "analysis"),
    ("leaves", "leaf"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("quizzes", "quiz"),
    ("indices", "index"),
    ("vertices", "vertex"),
    ("matrices", "matrix"),
];

/// Words that are the same in singular and plural.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "media",
    "news",
    "series",
    "species",
    "sheep",
    "fish",
    "deer",
    "equipment",
    "information",
    "metadata",
];

/// Entity class name for a table alias: camel-cased, then singularized.
///
/// ```rust,ignore
/// assert_eq!(entity_name("blog_posts"), "BlogPost");
/// assert_eq!(entity_name("Categories"), "Category");
/// assert_eq!(entity_name("UserACLs"), "UserACL");
/// ```
pub fn entity_name(alias: &str) -> String {
    singularize(&camelize(alias))
}

/// Upper-case the first letter of every `_`, `-` or whitespace separated
/// word and join them. The rest of each word is kept as is, so
/// `blog_posts` → `BlogPosts` and `UserACLs` stays `UserACLs`.
pub fn camelize(name: &str) -> String {
    name.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Singularize the last word of a CamelCase or lowercase name.
///
/// Words start at a lower → upper case boundary, so a trailing acronym
/// (`UserACLs`) is one word.
pub fn singularize(name: &str) -> String {
    let mut split = 0;
    let mut prev: Option<char> = None;
    for (i, c) in name.char_indices() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            split = i;
        }
        prev = Some(c);
    }
    let (head, word) = name.split_at(split);
    format!("{head}{}", singularize_word(word))
}

/// Byte offset of `suffix` in `word` when it is the whole word or starts at
/// an upper-case letter.
fn word_suffix(word: &str, lower: &str, suffix: &str) -> Option<usize> {
    if !lower.ends_with(suffix) {
        return None;
    }
    let at = word.len() - suffix.len();
    if at == 0 || word[at..].starts_with(|c: char| c.is_ascii_uppercase()) {
        Some(at)
    } else {
        None
    }
}

fn singularize_word(word: &str) -> String {
    if !word.is_ascii() {
        return word.to_string();
    }
    let lower = word.to_lowercase();
    if UNCOUNTABLE
        .iter()
        .any(|u| word_suffix(word, &lower, u).is_some())
    {
        return word.to_string();
    }
    if let Some((at, singular)) = IRREGULAR
        .iter()
        .find_map(|(plural, singular)| word_suffix(word, &lower, plural).map(|at| (at, singular)))
    {
        return format!("{}{}", &word[..at], match_case(&word[at..], singular));
    }

    if lower.ends_with("ies") && lower.len() > 3 {
        return format!("{}y", &word[..word.len() - 3]);
    }

    let stem_len = if lower.ends_with("sses")
        || lower.ends_with("shes")
        || lower.ends_with("ches")
        || lower.ends_with("xes")
        || lower.ends_with("zzes")
        || lower.ends_with("tuses")
    {
        word.len() - 2
    } else if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        word.len()
    } else if lower.ends_with('s') && lower.len() > 1 {
        word.len() - 1
    } else {
        word.len()
    };
    word[..stem_len].to_string()
}

fn match_case(original: &str, replacement: &str) -> String {
    let mut chars = replacement.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(rep)) if first.is_uppercase() => {
            rep.to_uppercase().collect::<String>() + chars.as_str()
        }
        _ => replacement.to_string(),
    }
}

/// Whether `name` can be used as a PHP class name.
pub fn is_class_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
