use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use super::{Element, Node, VOID_ELEMENTS};
use crate::error::{Error, Result};

/// Entity names resolved in text and attribute values: the five XML ones
/// plus the HTML names used by the templates.
fn html_entity(name: &str) -> Option<&'static str> {
    match name {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "apos" => Some("'"),
        "nbsp" => Some("\u{a0}"),
        "copy" => Some("©"),
        "reg" => Some("®"),
        "trade" => Some("™"),
        "mdash" => Some("—"),
        "ndash" => Some("–"),
        "hellip" => Some("…"),
        "middot" => Some("·"),
        "larr" => Some("←"),
        "rarr" => Some("→"),
        _ => None,
    }
}

fn start_element(e: &BytesStart<'_>) -> Result<Element> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).to_ascii_lowercase();
    let mut el = Element::new(&tag);
    for attr in e.html_attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_ascii_lowercase();
        let value = attr.unescape_value_with(html_entity)?;
        el.set_attr(&key, &value);
    }
    Ok(el)
}

fn push_node(stack: &mut [Element], top: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => top.push(node),
    }
}

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Parse a markup fragment into a node list, the way `innerHTML` assignment
/// does. Void elements may be written `<meta>` or `<meta/>`; every other
/// element needs a matching end tag.
pub fn parse_fragment(markup: &str) -> Result<Vec<Node>> {
    let mut reader = Reader::from_str(markup);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;

    let mut stack: Vec<Element> = Vec::new();
    let mut top: Vec<Node> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let el = start_element(e)?;
                if is_void(&el.tag) {
                    push_node(&mut stack, &mut top, Node::Element(el));
                } else {
                    stack.push(el);
                }
            }
            Event::Empty(ref e) => {
                let el = start_element(e)?;
                push_node(&mut stack, &mut top, Node::Element(el));
            }
            Event::End(ref e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_ascii_lowercase();
                // `</br>` and friends close nothing
                if is_void(&name) {
                    continue;
                }
                let el = stack
                    .pop()
                    .ok_or_else(|| Error::Markup(format!("closing </{}> without opening tag", name)))?;
                if el.tag != name {
                    return Err(Error::Markup(format!(
                        "expected </{}>, found </{}>",
                        el.tag, name
                    )));
                }
                push_node(&mut stack, &mut top, Node::Element(el));
            }
            Event::Text(ref t) => {
                let text = t.unescape_with(html_entity)?;
                if !text.is_empty() {
                    push_node(&mut stack, &mut top, Node::Text(text.into_owned()));
                }
            }
            Event::CData(c) => {
                let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                push_node(&mut stack, &mut top, Node::Text(text));
            }
            Event::Eof => break,
            // Comments, doctype, declarations and PIs carry no content.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::Markup(format!("unclosed <{}>", open.tag)));
    }
    Ok(top)
}
