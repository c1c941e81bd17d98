use std::collections::HashSet;

/// Derive an identifier base from an icon file name.
///
/// The result contains only `[a-z0-9-]` with single interior hyphens
/// (e.g. "user-profile" from "User Profile_.svg"). An empty string means the
/// name had nothing usable in it and the file should be skipped.
pub fn sanitize(filename: &str) -> String {
    let stem = filename.strip_suffix(".svg").unwrap_or(filename);

    let mut result = String::with_capacity(stem.len());
    let mut pending_hyphen = false;

    for c in stem.chars() {
        if c.is_whitespace() || matches!(c, '-' | '.' | '_') {
            pending_hyphen = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_hyphen && !result.is_empty() {
                result.push('-');
            }
            pending_hyphen = false;
            result.push(c.to_ascii_lowercase());
        }
        // anything else is dropped without breaking the current word
    }

    result
}

/// "user-profile" -> "UserProfile"
pub fn to_pascal_case(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// "user-profile" -> "userProfile"
pub fn to_camel_case(name: &str) -> String {
    let pascal = to_pascal_case(name);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Component identifiers may not start with a digit, so "123" becomes "icon-123".
pub fn ensure_leading_letter(name: &str) -> String {
    if name
        .chars()
        .next()
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false)
    {
        format!("icon-{}", name)
    } else {
        name.to_string()
    }
}

/// Tracks the registry keys handed out during one run.
#[derive(Debug, Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `name`, or the first free "name-2", "name-3", ... variant.
    ///
    /// Uniqueness is checked on the camelCase form since that is the lookup
    /// key; "a-1b" and "a1b" would otherwise both become `a1b`.
    pub fn claim(&mut self, name: &str) -> String {
        let mut candidate = name.to_string();
        let mut suffix = 2;
        while self.taken.contains(&to_camel_case(&candidate)) {
            candidate = format!("{}-{}", name, suffix);
            suffix += 1;
        }
        self.taken.insert(to_camel_case(&candidate));
        candidate
    }
}
