//! Minimal element tree over a parsed feed.
//!
//! Only the pieces the extractor needs are kept: element names, child order,
//! and text (CDATA sections are folded into text). Attributes, comments and
//! processing instructions are dropped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::ParseError;

/// Deepest element nesting accepted. Job feeds are a handful of levels deep;
/// anything past this is rejected before the tree is built.
const MAX_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    fn from_start(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            children: Vec::new(),
        }
    }

    /// Concatenated text of all descendants, like the DOM's `textContent`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self.children.iter()];
        while let Some(children) = stack.last_mut() {
            match children.next() {
                Some(XmlNode::Text(text)) => out.push_str(text),
                Some(XmlNode::Element(element)) => stack.push(element.children.iter()),
                None => {
                    stack.pop();
                }
            }
        }
        out
    }

    /// Descendant elements (not including `self`) in document order.
    pub fn descendants(&self) -> impl Iterator<Item = &XmlElement> {
        let mut stack: Vec<&XmlElement> = self.child_elements().rev().collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.child_elements().rev());
            Some(next)
        })
    }

    pub fn first_descendant(&self, name: &str) -> Option<&XmlElement> {
        self.descendants().find(|element| element.name == name)
    }

    fn child_elements(&self) -> impl DoubleEndedIterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }
}

/// A well-formed feed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDocument {
    root: XmlElement,
}

impl FeedDocument {
    pub fn parse(xml: &str) -> Result<Self, ParseError> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            let position = reader.buffer_position() as u64;
            let event = reader
                .read_event()
                .map_err(|err| ParseError::new(err.to_string(), position))?;
            match event {
                Event::Start(start) => {
                    if root.is_some() {
                        return Err(ParseError::new("multiple root elements", position));
                    }
                    if stack.len() >= MAX_DEPTH {
                        return Err(ParseError::new(
                            format!("elements nested deeper than {MAX_DEPTH}"),
                            position,
                        ));
                    }
                    stack.push(XmlElement::from_start(&start));
                }
                Event::Empty(start) => {
                    let element = XmlElement::from_start(&start);
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(element)),
                        None if root.is_none() => root = Some(element),
                        None => return Err(ParseError::new("multiple root elements", position)),
                    }
                }
                Event::End(_) => {
                    let Some(element) = stack.pop() else {
                        return Err(ParseError::new("unexpected closing tag", position));
                    };
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(XmlNode::Element(element)),
                        None => root = Some(element),
                    }
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|err| ParseError::new(err.to_string(), position))?;
                    push_text(&mut stack, &text, position)?;
                }
                Event::CData(data) => {
                    let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    push_text(&mut stack, &text, position)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(ParseError::new(
                format!("unclosed element <{}>", open.name),
                reader.buffer_position() as u64,
            ));
        }
        root.map(|root| Self { root })
            .ok_or_else(|| ParseError::new("document has no root element", 0))
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Every element named `name`, root included, in document order.
    pub fn elements_by_tag<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        std::iter::once(&self.root)
            .chain(self.root.descendants())
            .filter(move |element| element.name == name)
    }
}

fn push_text(stack: &mut [XmlElement], text: &str, position: u64) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(XmlNode::Text(text.to_string()));
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ParseError::new("text outside the root element", position)),
    }
}
