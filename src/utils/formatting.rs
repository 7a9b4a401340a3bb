//! Small text helpers shared by the views.

/// Join labels with `, `, or `--` when there is nothing to show.
pub fn join_or_dash<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return "--".to_string();
    }
    items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
}

/// Split a comma-separated availability string into trimmed labels.
/// Empty parts and repeats are dropped; first occurrence order is kept.
pub fn split_labels(input: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if !out.iter().any(|seen| seen.eq_ignore_ascii_case(part)) {
            out.push(part.to_string());
        }
    }
    out
}

/// Trim an optional text field the way `add` trims required ones.
pub fn trimmed(value: &Option<String>) -> Option<String> {
    value.as_deref().map(|s| s.trim().to_string())
}

/// Member initials for the compact dashboard list (`AB`).
pub fn initials<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter_map(|n| n.trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Short form of a UUID for tables (first 8 characters).
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_is_split_and_deduplicated() {
        assert_eq!(
            split_labels("Sundays, Wednesdays,, sundays ,Fridays"),
            vec!["Sundays", "Wednesdays", "Fridays"]
        );
        assert!(split_labels("  ,  ").is_empty());
    }

    #[test]
    fn optional_fields_are_trimmed() {
        assert_eq!(trimmed(&Some("  Lead  ".to_string())), Some("Lead".to_string()));
        assert_eq!(trimmed(&None), None);
    }

    #[test]
    fn initials_and_dash() {
        assert_eq!(initials(["alice", "Bob"]), "AB");
        assert_eq!(join_or_dash::<&str>(&[][..]), "--");
        assert_eq!(join_or_dash(&["a", "b"][..]), "a, b");
    }
}
