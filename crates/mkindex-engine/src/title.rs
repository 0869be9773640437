use std::path::Path;

/// Turn a directory name into a page title.
///
/// Splits on every non-letter character (digits included), capitalises each
/// run of letters and joins the runs with single spaces: `my-notes_2024` becomes
/// `My Notes`. Returns an empty string when the name holds no letters.
pub fn derive_title(name: &str) -> String {
    name.split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title for a category directory, taken from its base name.
///
/// Paths without a usable base name (`.`, `notes/..`) are canonicalized first.
pub fn directory_title(dir: &Path) -> String {
    let name = dir.file_name().map(|n| n.to_string_lossy().into_owned()).or_else(|| {
        dir.canonicalize()
            .ok()
            .and_then(|path| path.file_name().map(|n| n.to_string_lossy().into_owned()))
    });
    name.map(|name| derive_title(&name)).unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
