// ox-webdav/src/xml.rs
//! Namespace-aware XML tree for WebDAV multi-status bodies.
//!
//! The tree keeps every child node in document order so that "first child"
//! questions can be answered the way a DOM would: text nodes, elements and
//! everything else (comments, CDATA sections, processing instructions).

use crate::error::{Result, WebDavError};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// Structural WebDAV elements (`multistatus`, `response`, `prop`, ...)
pub const DAV_NS: &str = "DAV:";

/// Open-Xchange data fields
pub const OX_NS: &str = "http://www.open-xchange.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Comment, CDATA section or processing instruction
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub namespace: Option<String>,
    pub local_name: String,
    pub children: Vec<Node>,
}

impl Element {
    fn open(namespace: ResolveResult<'_>, local_name: &[u8]) -> Result<Self> {
        let namespace = match namespace {
            ResolveResult::Bound(Namespace(uri)) => Some(utf8(uri)?.to_string()),
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(WebDavError::Malformed(format!(
                    "undeclared namespace prefix '{}'",
                    String::from_utf8_lossy(&prefix)
                )))
            }
        };

        Ok(Self {
            namespace,
            local_name: utf8(local_name)?.to_string(),
            children: Vec::new(),
        })
    }

    /// True if this element has the given namespace URI and local name
    pub fn is(&self, namespace: &str, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(namespace) && self.local_name == local_name
    }

    /// Direct element children, skipping text and other nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Every element below this one, in document order
    pub fn descendants(&self) -> Descendants<'_> {
        let mut stack: Vec<&Element> = self.child_elements().collect();
        stack.reverse();
        Descendants { stack }
    }

    /// First descendant with the given namespace and local name
    pub fn find(&self, namespace: &str, local_name: &str) -> Option<&Element> {
        self.descendants().find(|e| e.is(namespace, local_name))
    }

    /// Text of the first child node if it is a text node, empty otherwise
    pub fn text(&self) -> &str {
        match self.children.first() {
            Some(Node::Text(text)) => text,
            _ => "",
        }
    }
}

/// Pre-order iterator returned by [`Element::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(element.child_elements());
        self.stack[start..].reverse();
        Some(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn parse(input: &[u8]) -> Result<Self> {
        let mut reader = NsReader::from_reader(input);
        let mut buf = Vec::new();
        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let done = {
                let (namespace, event) = reader.read_resolved_event_into(&mut buf)?;
                match event {
                    Event::Start(start) => {
                        open.push(Element::open(namespace, start.local_name().as_ref())?);
                        false
                    }
                    Event::Empty(start) => {
                        let element = Element::open(namespace, start.local_name().as_ref())?;
                        attach(&mut open, &mut root, element)?;
                        false
                    }
                    Event::End(_) => {
                        let element = open.pop().ok_or_else(|| {
                            WebDavError::Malformed("closing tag without opening tag".to_string())
                        })?;
                        attach(&mut open, &mut root, element)?;
                        false
                    }
                    Event::Text(text) => {
                        if let Some(parent) = open.last_mut() {
                            parent.children.push(Node::Text(text.unescape()?.into_owned()));
                        }
                        false
                    }
                    Event::CData(_) | Event::Comment(_) | Event::PI(_) => {
                        if let Some(parent) = open.last_mut() {
                            parent.children.push(Node::Other);
                        }
                        false
                    }
                    Event::Decl(_) | Event::DocType(_) => false,
                    Event::Eof => true,
                }
            };
            buf.clear();

            if done {
                break;
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(WebDavError::Malformed(format!(
                "unexpected end of document inside <{}>",
                unclosed.local_name
            )));
        }

        let root = root.ok_or_else(|| WebDavError::Malformed("empty document".to_string()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All elements with the given name, root included, in document order
    pub fn elements_by_name<'a>(
        &'a self,
        namespace: &'a str,
        local_name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        std::iter::once(&self.root)
            .chain(self.root.descendants())
            .filter(move |e| e.is(namespace, local_name))
    }
}

fn attach(open: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }

    if root.is_some() {
        return Err(WebDavError::Malformed(
            "more than one root element".to_string(),
        ));
    }
    *root = Some(element);
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| WebDavError::Malformed(e.to_string()))
}
