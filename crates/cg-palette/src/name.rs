/// Convert a snake_case name into a PascalCase identifier.
///
/// Only the first character of each word is upper-cased, the rest is kept as it is. Empty words
/// produced by leading, trailing or doubled underscores contribute nothing, so `a__b` and `a_b`
/// both become `AB`.
pub fn pascal_case(name: &str) -> String {
    name.split('_').map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
