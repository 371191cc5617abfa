//! DOM traversal helpers over `scraper` element references.

use scraper::ElementRef;

/// Up to `limit` nearest ancestor elements, nearest first.
pub fn nearest_ancestors(element: ElementRef<'_>, limit: usize) -> Vec<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .take(limit)
        .collect()
}

/// The element itself followed by every descendant element, in document order.
pub fn subtree_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.descendants().filter_map(ElementRef::wrap)
}

/// Trimmed, non-empty text nodes that are direct children of `element`.
pub fn own_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
}

/// All descendant text joined with single spaces.
pub fn joined_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `class` attribute contains `needle` as a substring (CSS `[class*=needle]`).
pub fn class_attr_contains(element: ElementRef<'_>, needle: &str) -> bool {
    element
        .value()
        .attr("class")
        .map(|class| class.contains(needle))
        .unwrap_or(false)
}

/// Class list contains exactly `name` (CSS `.name`).
pub fn has_class(element: ElementRef<'_>, name: &str) -> bool {
    element.value().classes().any(|class| class == name)
}

/// Lower-case tag name.
pub fn tag_name<'a>(element: &ElementRef<'a>) -> &'a str {
    element.value().name()
}
