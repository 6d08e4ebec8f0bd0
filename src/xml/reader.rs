use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::core::{Child, Node, SepaError};

fn parse_error(e: impl std::fmt::Display) -> SepaError {
    SepaError::Xml(format!("parse error: {e}"))
}

fn open_node(e: &BytesStart<'_>) -> Result<Node, SepaError> {
    let qname = e.name();
    let name = std::str::from_utf8(qname.as_ref()).map_err(parse_error)?;
    let mut node = Node::new(name);
    for attr in e.attributes() {
        let attr = attr.map_err(parse_error)?;
        let key = std::str::from_utf8(attr.key.as_ref()).map_err(parse_error)?;
        let value = attr.unescape_value().map_err(parse_error)?;
        node.attributes.push((key.to_string(), value.into_owned()));
    }
    Ok(node)
}

/// Hang a finished element under the innermost open one, or make it the root.
fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) -> Result<(), SepaError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Child::Element(node)),
        None if root.is_none() => *root = Some(node),
        None => {
            return Err(SepaError::Xml(format!(
                "second root element <{}>",
                node.name
            )));
        }
    }
    Ok(())
}

/// Drop the whitespace-only text that sits between child elements.
/// Text of a leaf is kept exactly as read.
fn drop_indentation(node: &mut Node) {
    if node.children.iter().any(|c| matches!(c, Child::Element(_))) {
        node.children.retain(|c| !matches!(c, Child::Text(t) if t.trim().is_empty()));
    }
}

fn push_text(stack: &mut [Node], text: String) -> Result<(), SepaError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Child::Text(text));
            Ok(())
        }
        None => Err(SepaError::Xml("text outside the root element".into())),
    }
}

pub(crate) fn read_document(xml: &str) -> Result<Node, SepaError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Node> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => stack.push(open_node(e)?),
            Ok(Event::Empty(ref e)) => {
                let node = open_node(e)?;
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Text(ref e)) => {
                let text = e.unescape().map_err(parse_error)?;
                if stack.is_empty() && text.trim().is_empty() {
                    continue;
                }
                if !text.is_empty() {
                    push_text(&mut stack, text.into_owned())?;
                }
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8(e.into_inner().into_owned()).map_err(parse_error)?;
                push_text(&mut stack, text)?;
            }
            Ok(Event::End(_)) => {
                let mut node = stack
                    .pop()
                    .ok_or_else(|| SepaError::Xml("unexpected closing tag".into()))?;
                drop_indentation(&mut node);
                attach(&mut stack, &mut root, node)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(e)),
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SepaError::Xml(format!("unclosed element <{}>", open.name)));
    }
    root.ok_or_else(|| SepaError::Xml("document has no root element".into()))
}
