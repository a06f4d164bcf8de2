use super::Element;

/// One simple selector: optional tag plus any number of `#id` / `.class` parts.
#[derive(Debug, Clone, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(token: &str) -> Self {
        let mut compound = Compound::default();
        let mut rest = token;

        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        if tag_end > 0 {
            compound.tag = Some(rest[..tag_end].to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while let Some(marker) = rest.chars().next() {
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = body[..end].to_string();
            match marker {
                '#' => compound.id = Some(name),
                _ => compound.classes.push(name),
            }
            rest = &body[end..];
        }
        compound
    }

    fn matches(&self, el: &Element) -> bool {
        if let Some(ref tag) = self.tag {
            if el.tag != *tag {
                return false;
            }
        }
        if let Some(ref id) = self.id {
            if el.id() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| el.has_class(c))
    }
}

/// A descendant-combinator chain such as `.footer-bottom p` or `#nav-menu li`.
///
/// Matching walks the tree top-down, carrying how many leading compounds have
/// already been satisfied by ancestors.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Self {
        Selector {
            parts: input.split_whitespace().map(Compound::parse).collect(),
        }
    }

    /// True when `el` is a match given `state` ancestors already matched.
    pub(crate) fn matches(&self, el: &Element, state: usize) -> bool {
        match self.parts.len() {
            0 => false,
            n => state == n - 1 && self.parts[n - 1].matches(el),
        }
    }

    /// State to hand to `el`'s children.
    pub(crate) fn advance(&self, el: &Element, state: usize) -> usize {
        if state + 1 < self.parts.len() && self.parts[state].matches(el) {
            state + 1
        } else {
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str, attrs: &[(&str, &str)]) -> Element {
        let mut e = Element::new(tag);
        for (k, v) in attrs {
            e.set_attr(k, v);
        }
        e
    }

    #[test]
    fn test_compound_parts() {
        let sel = Selector::parse("button.nav-link.active");
        let mut button = el("button", &[("class", "nav-link active")]);
        assert!(sel.matches(&button, 0));
        button.remove_class("active");
        assert!(!sel.matches(&button, 0));
    }

    #[test]
    fn test_id_selector() {
        let sel = Selector::parse("#nav-menu");
        assert!(sel.matches(&el("ul", &[("id", "nav-menu")]), 0));
        assert!(!sel.matches(&el("ul", &[("id", "nav")]), 0));
    }

    #[test]
    fn test_descendant_needs_ancestor_state() {
        let sel = Selector::parse(".footer-bottom p");
        let footer = el("div", &[("class", "footer-bottom")]);
        let p = el("p", &[]);
        assert!(!sel.matches(&p, 0));
        let state = sel.advance(&footer, 0);
        assert!(sel.matches(&p, state));
    }

    #[test]
    fn test_empty_selector_matches_nothing() {
        assert!(!Selector::parse("  ").matches(&el("div", &[]), 0));
    }
}
