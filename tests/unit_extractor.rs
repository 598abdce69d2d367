// tests/unit_extractor.rs
use safelist_core::extract::extract_classes;

fn has(content: &str, class: &str) -> bool {
    extract_classes(content).contains(class)
}

#[test]
fn test_double_quoted_attribute() {
    let classes = extract_classes(r#"<div class="a b c"></div>"#);
    assert_eq!(classes.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn test_single_quoted_attribute() {
    assert!(has("<div class='flex gap-2'>", "gap-2"));
}

#[test]
fn test_whitespace_around_equals() {
    assert!(has(r#"<div class = "mx-auto">"#, "mx-auto"));
    assert!(has("<div class=\n\t'mx-auto'>", "mx-auto"));
}

#[test]
fn test_interpolation_stripped() {
    let classes = extract_classes(r#"<div class="{{ dynamic }} real-class">"#);
    assert!(classes.contains("real-class"));
    assert!(!classes.iter().any(|c| c.contains("dynamic")));
    assert_eq!(classes.len(), 1);
}

#[test]
fn test_control_span_stripped() {
    let html = r#"<li class="px-2 {% if active %}bg-blue-500{% endif %}">"#;
    let classes = extract_classes(html);
    assert!(classes.contains("px-2"));
    assert!(classes.contains("bg-blue-500"));
    assert!(!classes.contains("active"));
    assert!(!classes.contains("endif"));
}

#[test]
fn test_operators_and_keywords_never_emitted() {
    // `raw` is what survives when a template emits control words unstripped.
    let html = r#"<a class="{% if x != 1 %} a {% else %} b {% endif %}">"#;
    let raw = r#"<a class="if x != 1 == y < z > w else endif">"#;
    for content in [html, raw] {
        let classes = extract_classes(content);
        for noise in ["!=", "==", "<", ">", "if", "else", "endif"] {
            assert!(!classes.contains(noise), "{noise} leaked from {content}");
        }
    }
}

#[test]
fn test_class_list_calls() {
    let js = r#"
        el.classList.add('foo');
        el.classList.remove("bar");
        el.classList.toggle('baz qux');
    "#;
    let classes = extract_classes(js);
    for c in ["foo", "bar", "baz", "qux"] {
        assert!(classes.contains(c), "missing {c}");
    }
}

#[test]
fn test_class_list_other_methods_ignored() {
    assert!(!has("el.classList.contains('open')", "open"));
    assert!(!has("el.classList.replace('a', 'b')", "a"));
}

#[test]
fn test_duplicates_collapse_across_contexts() {
    let content = r#"<div class="hidden hidden"></div><script>el.classList.add("hidden")</script>"#;
    assert_eq!(extract_classes(content).len(), 1);
}

#[test]
fn test_no_classes() {
    assert!(extract_classes("<p>plain text</p>").is_empty());
    assert!(extract_classes("").is_empty());
}

#[test]
fn test_tailwind_variants_preserved() {
    let classes = extract_classes(r#"<span class="hover:text-white !important -translate-x-1/2 w-1/2">"#);
    for c in ["hover:text-white", "!important", "-translate-x-1/2", "w-1/2"] {
        assert!(classes.contains(c), "missing {c}");
    }
}
