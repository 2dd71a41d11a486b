//! HTML utility functions for querying a parsed document tree.
//!
//! Queries are a small typed subset of CSS selectors: a tag name plus an
//! optional class or attribute-presence marker (`p.en`, `span[data-simplified]`).

use scraper::{ElementRef, Html};

/// Extra condition an element must satisfy besides its tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'q> {
    /// Tag name alone decides.
    Any,
    /// Element must carry this class.
    Class(&'q str),
    /// Element must carry this attribute, whatever its value.
    Attribute(&'q str),
}

/// A tag-plus-marker element query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'q> {
    pub tag: &'q str,
    pub marker: Marker<'q>,
}

impl<'q> Query<'q> {
    /// Match elements by tag name only (`small`).
    pub const fn tag(tag: &'q str) -> Self {
        Self {
            tag,
            marker: Marker::Any,
        }
    }

    /// Match elements by tag and class (`strong.pinyin`).
    pub const fn with_class(tag: &'q str, class: &'q str) -> Self {
        Self {
            tag,
            marker: Marker::Class(class),
        }
    }

    /// Match elements by tag and attribute presence (`span[data-simplified]`).
    pub const fn with_attribute(tag: &'q str, attribute: &'q str) -> Self {
        Self {
            tag,
            marker: Marker::Attribute(attribute),
        }
    }

    /// Check if an element satisfies this query.
    ///
    /// # Examples
    /// ```
    /// use scraper::Html;
    /// use hsk_converter::html::{find_all, Query};
    ///
    /// let doc = Html::parse_fragment(r#"<p class="en id">hello</p>"#);
    /// let p = find_all(&doc, &Query::tag("p"))[0];
    ///
    /// assert!(Query::with_class("p", "en").matches(p));
    /// assert!(!Query::with_class("p", "zh").matches(p));
    /// assert!(!Query::tag("span").matches(p));
    /// ```
    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        let value = element.value();
        if value.name() != self.tag {
            return false;
        }

        match self.marker {
            Marker::Any => true,
            Marker::Class(class) => value.classes().any(|c| c == class),
            Marker::Attribute(attribute) => value.attr(attribute).is_some(),
        }
    }

    /// Find the first descendant of `scope` matching this query.
    ///
    /// The scope element itself is never a candidate.
    ///
    /// # Returns
    /// First match in document order, or `None` if nothing matches
    pub fn find_first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        scope
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|element| self.matches(*element))
    }
}

/// Find every element in the document matching `query`, in document order.
///
/// Nested matches are included.
pub fn find_all<'a>(document: &'a Html, query: &Query<'_>) -> Vec<ElementRef<'a>> {
    document
        .tree
        .root()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| query.matches(*element))
        .collect()
}

/// Get the text content of an element and all its descendants, trimmed.
///
/// # Returns
/// Trimmed text content, or empty string if no text
pub fn get_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Get the text of the first descendant of `scope` matching `query`.
///
/// # Returns
/// Trimmed text of the match, or empty string if nothing matches
pub fn select_text(scope: ElementRef<'_>, query: &Query<'_>) -> String {
    query.find_first(scope).map(get_text).unwrap_or_default()
}

/// Get an attribute value from an element.
pub fn get_attribute<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_element<'a>(doc: &'a Html, tag: &str) -> ElementRef<'a> {
        find_all(doc, &Query::tag(tag))
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_matches_attribute_presence() {
        let doc = Html::parse_fragment(r#"<span data-simplified>你</span><span>x</span>"#);
        let spans = find_all(&doc, &Query::tag("span"));
        assert_eq!(spans.len(), 2);

        let query = Query::with_attribute("span", "data-simplified");
        assert!(query.matches(spans[0]));
        assert!(!query.matches(spans[1]));
    }

    #[test]
    fn test_matches_attribute_with_empty_value() {
        let doc = Html::parse_fragment(r#"<li data-chapter="">a</li>"#);
        let li = first_element(&doc, "li");
        assert!(Query::with_attribute("li", "data-chapter").matches(li));
    }

    #[test]
    fn test_matches_class_among_many() {
        let doc = Html::parse_fragment(r#"<div class="modal hsk-dialog open">x</div>"#);
        let div = first_element(&doc, "div");
        assert!(Query::with_class("div", "hsk-dialog").matches(div));
        assert!(!Query::with_class("div", "hsk").matches(div));
    }

    #[test]
    fn test_find_first_skips_scope() {
        let doc = Html::parse_fragment(r#"<div class="a"><div class="a" id="inner">x</div></div>"#);
        let outer = first_element(&doc, "div");

        let found = Query::with_class("div", "a").find_first(outer).unwrap();
        assert_eq!(get_attribute(found, "id"), Some("inner"));
    }

    #[test]
    fn test_find_first_searches_deep_descendants() {
        let doc = Html::parse_fragment(
            r#"<div id="scope"><section><article><small>7</small></article></section><small>8</small></div>"#,
        );
        let scope = first_element(&doc, "div");

        assert_eq!(select_text(scope, &Query::tag("small")), "7");
        assert_eq!(select_text(scope, &Query::tag("em")), "");
    }

    #[test]
    fn test_find_all_document_order_with_nesting() {
        let doc = Html::parse_document(
            r#"<ul><li data-chapter="1">a<ul><li data-chapter="2">b</li></ul></li><li>c</li><li data-chapter="3">d</li></ul>"#,
        );
        let chapters: Vec<_> = find_all(&doc, &Query::with_attribute("li", "data-chapter"))
            .into_iter()
            .filter_map(|li| get_attribute(li, "data-chapter"))
            .collect();
        assert_eq!(chapters, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_get_text_concatenates_descendants() {
        let doc = Html::parse_fragment("<p>  Hello <b>world</b>!  </p>");
        let p = first_element(&doc, "p");
        assert_eq!(get_text(p), "Hello world!");
    }

    #[test]
    fn test_get_attribute() {
        let doc = Html::parse_fragment(r#"<li data-chapter="12">x</li>"#);
        let li = first_element(&doc, "li");

        assert_eq!(get_attribute(li, "data-chapter"), Some("12"));
        assert_eq!(get_attribute(li, "missing"), None);
    }
}
