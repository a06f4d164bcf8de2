//! In-memory presentation tree.
//! The page skeleton and every generated fragment are parsed into this tree;
//! the renderer and the UI controllers only ever fill, replace or restyle
//! nodes inside it, then the whole document is serialized back to HTML.

mod parse;
mod selector;

pub use parse::parse_fragment;
pub use selector::Selector;

use crate::error::{Error, Result};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose text children are written unescaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    // ── Attributes ─────────────────────────────────────

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    // ── Class list ─────────────────────────────────────

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let mut list: Vec<&str> = self.classes().collect();
        list.push(class);
        let joined = list.join(" ");
        self.set_attr("class", &joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let joined = self
            .classes()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("class", &joined);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    // ── Inline style ───────────────────────────────────

    fn style_decls(&self) -> Vec<(String, String)> {
        self.attr("style")
            .unwrap_or("")
            .split(';')
            .filter_map(|decl| {
                let (prop, value) = decl.split_once(':')?;
                let prop = prop.trim();
                if prop.is_empty() {
                    return None;
                }
                Some((prop.to_string(), value.trim().to_string()))
            })
            .collect()
    }

    pub fn style(&self, prop: &str) -> Option<String> {
        self.style_decls()
            .into_iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v)
    }

    pub fn set_style(&mut self, prop: &str, value: &str) {
        let mut decls = self.style_decls();
        match decls.iter_mut().find(|(p, _)| p == prop) {
            Some((_, v)) => *v = value.to_string(),
            None => decls.push((prop.to_string(), value.to_string())),
        }
        let css = decls
            .iter()
            .map(|(p, v)| format!("{}: {};", p, v))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr("style", &css);
    }

    // ── Content ────────────────────────────────────────

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    pub fn set_text_content(&mut self, text: &str) {
        self.children = vec![Node::Text(text.to_string())];
    }

    pub fn set_inner_html(&mut self, markup: &str) -> Result<()> {
        self.children = parse_fragment(markup)?;
        Ok(())
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            write_node(child, &mut out, RAW_TEXT_ELEMENTS.contains(&self.tag.as_str()));
        }
        out
    }

    pub fn append_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    // ── Queries (descendants only, document order) ─────

    pub fn query_selector(&self, selector: &str) -> Option<&Element> {
        self.query_selector_all(selector).into_iter().next()
    }

    pub fn query_selector_all(&self, selector: &str) -> Vec<&Element> {
        let sel = Selector::parse(selector);
        let mut out = Vec::new();
        self.collect_matches(&sel, 0, &mut out);
        out
    }

    pub fn query_selector_mut(&mut self, selector: &str) -> Option<&mut Element> {
        let sel = Selector::parse(selector);
        self.find_mut(&sel, 0)
    }

    /// Apply `f` to every descendant matching `selector`, in document order.
    pub fn for_each_match_mut(&mut self, selector: &str, mut f: impl FnMut(&mut Element)) {
        let sel = Selector::parse(selector);
        self.visit_mut(&sel, 0, &mut f);
    }

    /// First descendant whose `id` attribute equals `id` exactly.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        for child in self.element_children() {
            if child.id() == Some(id) {
                return Some(child);
            }
            if let Some(found) = child.find_by_id(id) {
                return Some(found);
            }
        }
        None
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        for child in self.children.iter_mut() {
            let Node::Element(el) = child else { continue };
            if el.id() == Some(id) {
                return Some(el);
            }
            if let Some(found) = el.find_by_id_mut(id) {
                return Some(found);
            }
        }
        None
    }

    fn collect_matches<'a>(&'a self, sel: &Selector, state: usize, out: &mut Vec<&'a Element>) {
        for child in self.element_children() {
            if sel.matches(child, state) {
                out.push(child);
            }
            child.collect_matches(sel, sel.advance(child, state), out);
        }
    }

    fn find_mut(&mut self, sel: &Selector, state: usize) -> Option<&mut Element> {
        for child in self.children.iter_mut() {
            let Node::Element(el) = child else { continue };
            if sel.matches(el, state) {
                return Some(el);
            }
            let next = sel.advance(el, state);
            if let Some(found) = el.find_mut(sel, next) {
                return Some(found);
            }
        }
        None
    }

    fn visit_mut(&mut self, sel: &Selector, state: usize, f: &mut dyn FnMut(&mut Element)) {
        for child in self.children.iter_mut() {
            let Node::Element(el) = child else { continue };
            let next = sel.advance(el, state);
            if sel.matches(el, state) {
                f(el);
            }
            el.visit_mut(sel, next, f);
        }
    }
}

/// A parsed page. The synthetic `#document` element holds the top-level
/// nodes so `html` itself is reachable by queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn parse(markup: &str) -> Result<Self> {
        let mut root = Element::new("#document");
        // whitespace around <html> is not content
        root.children = parse_fragment(markup)?
            .into_iter()
            .filter(|n| !matches!(n, Node::Text(t) if t.trim().is_empty()))
            .collect();
        Ok(Document { root })
    }

    pub fn query_selector(&self, selector: &str) -> Option<&Element> {
        self.root.query_selector(selector)
    }

    pub fn query_selector_all(&self, selector: &str) -> Vec<&Element> {
        self.root.query_selector_all(selector)
    }

    pub fn query_selector_mut(&mut self, selector: &str) -> Option<&mut Element> {
        self.root.query_selector_mut(selector)
    }

    pub fn for_each_match_mut(&mut self, selector: &str, f: impl FnMut(&mut Element)) {
        self.root.for_each_match_mut(selector, f)
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.query_selector(selector).is_some()
    }

    /// Like `query_selector_mut`, but a missing node is an error.
    pub fn require_mut(&mut self, selector: &str) -> Result<&mut Element> {
        self.root
            .query_selector_mut(selector)
            .ok_or_else(|| Error::MissingAnchor(selector.to_string()))
    }

    pub fn body_mut(&mut self) -> Result<&mut Element> {
        self.require_mut("body")
    }

    pub fn title(&self) -> String {
        self.query_selector("title")
            .map(|t| t.text_content())
            .unwrap_or_default()
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.require_mut("head title")?.set_text_content(title);
        Ok(())
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.root.inner_html())
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(&e.children, out),
        }
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

fn write_node(node: &Node, out: &mut String, raw: bool) {
    match node {
        Node::Text(t) if raw => out.push_str(t),
        Node::Text(t) => out.push_str(&escape_text(t)),
        Node::Element(e) => write_element(e, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (k, v) in &el.attrs {
        out.push(' ');
        out.push_str(k);
        if !v.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape_attr(v));
            out.push('"');
        }
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }
    out.push_str(&el.inner_html());
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head><title>old</title></head><body>
<nav><ul class="nav-links" id="nav-menu"><li><button class="nav-link active" data-section="home">Home</button></li></ul></nav>
<div class="footer-bottom"><p>copy</p></div>
</body></html>"#;

    #[test]
    fn test_query_by_descendant_selector() {
        let doc = Document::parse(PAGE).unwrap();
        let p = doc.query_selector(".footer-bottom p").unwrap();
        assert_eq!(p.text_content(), "copy");
        assert!(doc.query_selector("nav p").is_none());
    }

    #[test]
    fn test_title_round_trip() {
        let mut doc = Document::parse(PAGE).unwrap();
        doc.set_title("Jane Doe").unwrap();
        assert_eq!(doc.title(), "Jane Doe");
    }

    #[test]
    fn test_require_mut_reports_missing_anchor() {
        let mut doc = Document::parse(PAGE).unwrap();
        match doc.require_mut(".logo") {
            Err(Error::MissingAnchor(sel)) => assert_eq!(sel, ".logo"),
            other => panic!("unexpected: {:?}", other.map(|e| e.tag.clone())),
        }
    }

    #[test]
    fn test_class_list_operations() {
        let mut el = Element::new("div");
        el.add_class("nav-links");
        assert!(el.toggle_class("show"));
        assert_eq!(el.attr("class"), Some("nav-links show"));
        assert!(!el.toggle_class("show"));
        assert!(!el.has_class("show"));
        el.add_class("nav-links");
        assert_eq!(el.classes().count(), 1);
    }

    #[test]
    fn test_set_style_replaces_existing_property() {
        let mut el = Element::new("div");
        el.set_attr("style", "background: red; color: blue;");
        el.set_style("background", "var(--accent)");
        el.set_style("display", "none");
        assert_eq!(el.style("background").as_deref(), Some("var(--accent)"));
        assert_eq!(el.style("color").as_deref(), Some("blue"));
        assert_eq!(el.style("display").as_deref(), Some("none"));
    }

    #[test]
    fn test_for_each_match_mut_visits_all() {
        let mut doc = Document::parse(PAGE).unwrap();
        let mut seen = 0;
        doc.for_each_match_mut(".nav-link", |link| {
            link.remove_class("active");
            seen += 1;
        });
        assert_eq!(seen, 1);
        assert!(doc.query_selector(".nav-link.active").is_none());
    }

    #[test]
    fn test_serializes_void_and_escapes() {
        let mut div = Element::new("div");
        div.set_inner_html(r#"<input type="email" required/><p>a &amp; b</p>"#)
            .unwrap();
        assert_eq!(
            div.inner_html(),
            r#"<input type="email" required><p>a &amp; b</p>"#
        );
    }

    #[test]
    fn test_id_lookup_is_literal() {
        let mut doc = Document::parse(
            r#"<main><section id="my.work"><p>a</p></section><section id="work">b</section></main>"#,
        )
        .unwrap();
        assert_eq!(doc.get_element_by_id("my.work").unwrap().text_content(), "a");
        assert!(doc.get_element_by_id("my").is_none());
        doc.get_element_by_id_mut("my.work").unwrap().add_class("active");
        assert!(doc.get_element_by_id("my.work").unwrap().has_class("active"));
    }

    #[test]
    fn test_output_parses_back() {
        let mut doc = Document::parse(
            r#"<html><head><meta charset="UTF-8"/><link rel="stylesheet" href="/s.css"/><title>x</title></head><body><p class="a">&lt;b&gt; &amp; "c"</p><input type="email" required=""/></body></html>"#,
        )
        .unwrap();
        doc.require_mut("p").unwrap().set_attr("title", "say \"hi\" & <bye>");
        let reparsed = Document::parse(&doc.to_html()).unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_to_html_has_doctype() {
        let doc = Document::parse("<html><body></body></html>").unwrap();
        assert_eq!(doc.to_html(), "<!DOCTYPE html>\n<html><body></body></html>");
    }
}
