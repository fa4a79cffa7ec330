pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// Render one error per line, indented under a heading.
pub(crate) fn bullet_list<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter()
        .map(|item| format!("  * {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
