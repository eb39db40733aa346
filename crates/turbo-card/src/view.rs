//! View tree produced by card renderers.
//!
//! A `ViewNode` is plain data: it can be inspected, serialized as JSON, or
//! written out as an HTML fragment with `to_html`.

use std::fmt::Write;

use serde::Serialize;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// A node in the view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewNode {
    Element(Element),
    Text { text: String },
}

/// A named value: an attribute or an inline style declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub name: &'static str,
    pub value: String,
}

impl Property {
    fn new(name: &'static str, value: String) -> Self {
        Self { name, value }
    }
}

fn lookup<'a>(props: &'a [Property], name: &str) -> Option<&'a str> {
    props
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.value.as_str())
}

/// An element with attributes, inline styles, and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<Property>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<Property>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ViewNode>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Later values replace earlier ones.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|p| p.name == name) {
            Some(slot) => slot.value = value,
            None => self.attrs.push(Property::new(name, value)),
        }
        self
    }

    /// Set the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Add an inline style declaration.
    pub fn style(mut self, property: &'static str, value: impl ToString) -> Self {
        self.styles.push(Property::new(property, value.to_string()));
        self
    }

    /// Append a child node.
    pub fn child(mut self, node: impl Into<ViewNode>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child only when present.
    pub fn child_opt(self, node: Option<impl Into<ViewNode>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::text(text))
    }

    /// Get an attribute value.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        lookup(&self.attrs, name)
    }

    /// Get an inline style value.
    pub fn style_value(&self, property: &str) -> Option<&str> {
        lookup(&self.styles, property)
    }

    /// Check whether the element carries a class.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);

        for attr in &self.attrs {
            let _ = write!(out, r#" {}="{}""#, attr.name, escape_attr(&attr.value));
        }

        if !self.styles.is_empty() {
            let declarations: Vec<String> = self
                .styles
                .iter()
                .map(|p| format!("{}: {}", p.name, p.value))
                .collect();
            let _ = write!(out, r#" style="{}""#, escape_attr(&declarations.join("; ")));
        }

        out.push('>');

        if self.is_void() {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        ViewNode::Element(element)
    }
}

impl ViewNode {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text { text: text.into() }
    }

    /// The node as an element, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ViewNode::Element(e) => Some(e),
            ViewNode::Text { .. } => None,
        }
    }

    /// Depth-first search for the first element with a class.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        let element = self.as_element()?;
        if element.has_class(class) {
            return Some(element);
        }
        element
            .children
            .iter()
            .find_map(|child| child.find_by_class(class))
    }

    /// All elements with a class, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let ViewNode::Element(element) = self {
            if element.has_class(class) {
                found.push(element);
            }
            for child in &element.children {
                child.collect_by_class(class, found);
            }
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            ViewNode::Text { text } => text.clone(),
            ViewNode::Element(element) => element.text_content(),
        }
    }

    /// Serialize to an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            ViewNode::Text { text } => out.push_str(&escape_text(text)),
            ViewNode::Element(element) => element.write_html(out),
        }
    }
}

impl Element {
    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        self.children.iter().map(ViewNode::text_content).collect()
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_to_html() {
        let node: ViewNode = Element::new("p")
            .class("note")
            .style("color", "red")
            .style("font-weight", 500)
            .text("Hello")
            .into();

        assert_eq!(
            node.to_html(),
            r#"<p class="note" style="color: red; font-weight: 500">Hello</p>"#
        );
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let node: ViewNode = Element::new("img").attr("alt", "").attr("src", "/a.jpg").into();
        assert_eq!(node.to_html(), r#"<img alt="" src="/a.jpg">"#);
    }

    #[test]
    fn test_escaping() {
        let node: ViewNode = Element::new("a")
            .attr("href", r#"/shoe/"x"&y"#)
            .text("<b>Tom & Jerry</b>")
            .into();

        assert_eq!(
            node.to_html(),
            r#"<a href="/shoe/&quot;x&quot;&amp;y">&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;</a>"#
        );
    }

    #[test]
    fn test_attr_replaces_existing_value() {
        let element = Element::new("div").class("a").class("b");
        assert_eq!(element.attrs.len(), 1);
        assert_eq!(element.attr_value("class"), Some("b"));
    }

    #[test]
    fn test_find_by_class_and_text_content() {
        let node: ViewNode = Element::new("div")
            .child(Element::new("span").class("first item").text("one"))
            .child(Element::new("span").class("item").text("two"))
            .child_opt(None::<Element>)
            .into();

        assert_eq!(node.find_by_class("first").map(|e| e.tag), Some("span"));
        assert_eq!(node.find_all_by_class("item").len(), 2);
        assert!(node.find_by_class("missing").is_none());
        assert_eq!(node.text_content(), "onetwo");
    }

    #[test]
    fn test_serializes_as_tagged_json() {
        let node: ViewNode = Element::new("h3").text("Name").into();
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["kind"], "element");
        assert_eq!(json["tag"], "h3");
        assert_eq!(json["children"][0]["kind"], "text");
        assert_eq!(json["children"][0]["text"], "Name");
        assert!(json.get("attrs").is_none());
    }

    #[test]
    fn test_json_attrs_and_styles_are_named_objects() {
        let node: ViewNode = Element::new("span")
            .class("price")
            .style("color", "red")
            .into();
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json["attrs"],
            serde_json::json!([{ "name": "class", "value": "price" }])
        );
        assert_eq!(
            json["styles"],
            serde_json::json!([{ "name": "color", "value": "red" }])
        );
    }
}
