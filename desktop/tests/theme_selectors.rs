//! The desktop build inlines `ui/assets/theme/main.css`; a truncated file or
//! a renamed class only shows up at runtime, so guard the selectors the
//! shared components rely on.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    ".card {",
    ".visually-hidden",
    ".button {",
    ".button--primary",
    // Upload
    ".upload-dropzone",
    ".upload-progress__track",
    ".upload-progress__bar",
    ".processing",
    ".spinner",
    // Results
    ".results__header",
    ".stat-card__value",
    ".tabs__tab--active",
    ".chart__bar",
    ".requirement-group__list",
    ".entity-list__item",
    ".clause-card--invalid",
    ".export__meta--error",
    ".tone--high",
    ".tone--medium",
    ".tone--low",
    ".tone--neutral",
    // Dashboard
    ".activity-list__item",
    ".quick-actions",
    // Shell
    ".notice--success",
    ".notice--error",
    ".notice__close",
    ".crash-panel__detail",
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|selector| !THEME_CSS.contains(*selector))
        .collect();
    assert!(missing.is_empty(), "theme is missing selectors: {missing:?}");
}

#[test]
fn theme_is_not_truncated() {
    let non_ws = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(non_ws > 4_000, "theme has only {non_ws} non-whitespace chars");
}
