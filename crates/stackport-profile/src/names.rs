//! Name validity rules for the naming system.
//!
//! A fully-qualified name is `name.namespace` or `subdomain.name.namespace`,
//! at most 37 bytes long. Labels use lowercase ASCII letters, digits, `_`
//! and `-`; the leftmost label may also use `+`.

/// Maximum length of a fully-qualified name, in bytes.
pub const MAX_NAME_LENGTH: usize = 37;

/// Whether `name` is a valid fully-qualified name.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_NAME_LENGTH {
        return false;
    }
    let labels: Vec<&str> = name.split('.').collect();
    if !(2..=3).contains(&labels.len()) {
        return false;
    }
    labels.iter().enumerate().all(|(index, label)| {
        !label.is_empty()
            && label
                .bytes()
                .all(|byte| is_label_byte(byte) || (index == 0 && byte == b'+'))
    })
}

/// Whether `suffix` names a subdomain namespace (it has more than one label).
#[must_use]
pub fn is_subdomain_suffix(suffix: &str) -> bool {
    suffix.split('.').count() > 1
}

/// Lower-case `raw` and drop every character outside `[a-z0-9_]`.
#[must_use]
pub fn normalize_username(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect()
}

const fn is_label_byte(byte: u8) -> bool {
    byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'_' || byte == b'-'
}
