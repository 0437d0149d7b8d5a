use std::cmp::Ordering;

use reqwest::Url;
use scraper::{ElementRef, Selector};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn clean_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn inner_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<Vec<_>>().join(" "))
}

pub fn first_text(element: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    element.select(selector).next().and_then(|node| {
        let cleaned = inner_text(node);
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    })
}

pub fn first_attr(element: &ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::to_string)
}

/// Nearest ancestor (the element itself included) matching the selector.
pub fn closest<'a>(element: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    if selector.matches(element) {
        return Some(*element);
    }
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|candidate| selector.matches(candidate))
}

pub fn absolute_url(base: &Url, href: Option<&str>) -> Option<String> {
    let href = href?.trim();
    if href.is_empty() {
        return None;
    }
    base.join(href).ok().map(Into::into)
}

/// Last non-empty path segment of an href, resolved against the site origin.
/// This segment is the stable identifier for clubs and teams.
pub fn extract_last_path_segment(href: Option<&str>, base: &Url) -> Option<String> {
    let href = href?.trim();
    if href.is_empty() {
        return None;
    }
    let url = base.join(href).ok()?;
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
}

/// German dictionary ordering (DIN 5007-1): umlauts sort with their base
/// letter and ß with ss, case-insensitively. Ties fall back to the raw
/// strings so the ordering stays total.
pub fn german_collate(first: &str, second: &str) -> Ordering {
    german_sort_key(first)
        .cmp(&german_sort_key(second))
        .then_with(|| first.cmp(second))
}

fn german_sort_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .replace('ß', "ss")
}
