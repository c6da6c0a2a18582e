//! RDF/XML parser that emits to GraphSink.
//!
//! The parser streams `quick-xml` events through a stack of open elements.
//! RDF/XML is "striped": whether an element is a node or a property is
//! decided by the element that encloses it, so each open element records
//! which of the two it is along with its namespace, base and language scope.
//!
//! Supported:
//! - optional `rdf:RDF` document element
//! - `rdf:Description` and typed node elements (`rdf:type` from the element name)
//! - `rdf:about`, `rdf:ID` and `rdf:nodeID` subjects
//! - property elements with `rdf:resource`, `rdf:nodeID`, `rdf:datatype`, `xml:lang`
//! - `rdf:parseType` of `Resource`, `Literal` and `Collection`
//! - nested node elements, property attributes, `rdf:li`, `xml:base`

use std::collections::HashMap;
use std::rc::Rc;

use fluree_graph_ir::{iri, Datatype, GraphSink, Literal, TermId};
use fluree_vocab::rdf;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

use crate::error::{RdfXmlError, Result};

/// Attribute names read as RDF syntax attributes, qualified or not.
const SYNTAX_ATTRIBUTES: &[&str] = &["about", "ID", "nodeID", "resource", "datatype", "parseType"];

/// Namespace, base and language in effect for one element.
#[derive(Clone, Debug, Default)]
struct Scope {
    namespaces: Rc<HashMap<String, String>>,
    base: Option<String>,
    lang: Option<String>,
}

/// RDF attributes of one element, still unresolved.
#[derive(Debug, Default)]
struct Attributes {
    about: Option<String>,
    id: Option<String>,
    node_id: Option<String>,
    resource: Option<String>,
    datatype: Option<String>,
    parse_type: Option<String>,
    /// (predicate IRI, value)
    properties: Vec<(String, String)>,
}

impl Attributes {
    fn set(&mut self, name: &str, value: String) {
        let slot = match name {
            "about" => &mut self.about,
            "ID" => &mut self.id,
            "nodeID" => &mut self.node_id,
            "resource" => &mut self.resource,
            "datatype" => &mut self.datatype,
            _ => &mut self.parse_type,
        };
        *slot = Some(value);
    }
}

#[derive(Debug)]
enum Frame {
    /// `rdf:RDF`
    Root,
    /// Node element, or the implicit node of `parseType="Resource"`
    Node { subject: TermId, next_li: u32 },
    /// Property element waiting for text or a nested node element
    Property {
        subject: TermId,
        predicate: TermId,
        datatype: Option<String>,
        text: String,
        object: Option<TermId>,
    },
    /// `parseType="Literal"`: inner markup is captured verbatim
    XmlLiteral {
        subject: TermId,
        predicate: TermId,
        start: usize,
        depth: usize,
    },
    /// `parseType="Collection"`
    Collection {
        subject: TermId,
        predicate: TermId,
        items: Vec<TermId>,
    },
}

#[derive(Debug)]
struct Open {
    name: String,
    scope: Scope,
    frame: Frame,
}

/// What the next element start means, given the innermost open element
enum Context {
    Document,
    Nodes,
    Properties,
    Object,
}

struct Parser<'a, S> {
    input: &'a str,
    reader: Reader<&'a [u8]>,
    stack: Vec<Open>,
    /// Set once the document element has been opened
    seen_root: bool,
    base: Option<String>,
    sink: &'a mut S,
}

impl<'a, S: GraphSink> Parser<'a, S> {
    fn parse(mut self) -> Result<()> {
        loop {
            let before = self.reader.buffer_position() as usize;
            match self.reader.read_event()? {
                Event::Start(e) => self.start_element(&e, false)?,
                Event::Empty(e) => self.start_element(&e, true)?,
                Event::End(e) => {
                    let after = self.reader.buffer_position() as usize;
                    let name = utf8(e.name().as_ref(), after)?.to_string();
                    self.end_element(&name, after)?;
                }
                Event::Text(e) => {
                    let text = e.unescape().map_err(quick_xml::Error::from)?;
                    self.text(&text, before)?;
                }
                Event::CData(e) => {
                    let text = String::from_utf8_lossy(&e).into_owned();
                    self.text(&text, before)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        match self.stack.last() {
            Some(open) => Err(syntax(
                self.input.len(),
                format!("unclosed element <{}>", open.name),
            )),
            None if !self.seen_root => {
                Err(syntax(self.input.len(), "document has no root element"))
            }
            None => Ok(()),
        }
    }

    fn start_element(&mut self, e: &BytesStart<'_>, empty: bool) -> Result<()> {
        let position = self.reader.buffer_position() as usize;

        let context = match self.stack.last_mut() {
            Some(Open {
                frame: Frame::XmlLiteral { depth, .. },
                ..
            }) => {
                if !empty {
                    *depth += 1;
                }
                return Ok(());
            }
            None if self.seen_root => {
                return Err(syntax(position, "more than one document element"));
            }
            None => {
                self.seen_root = true;
                Context::Document
            }
            Some(Open {
                frame: Frame::Root, ..
            }) => Context::Nodes,
            Some(Open {
                frame: Frame::Node { .. },
                ..
            }) => Context::Properties,
            Some(Open {
                frame: Frame::Property { .. } | Frame::Collection { .. },
                ..
            }) => Context::Object,
        };

        let name = utf8(e.name().as_ref(), position)?.to_string();
        let (scope, attrs) = self.read_attributes(e, position)?;
        let element = expand_name(&scope, &name, position)?;

        let frame = match context {
            Context::Document if element == rdf::RDF => Frame::Root,
            Context::Document | Context::Nodes => {
                let subject = self.node_element(&element, &scope, &attrs, position)?;
                Frame::Node {
                    subject,
                    next_li: 1,
                }
            }
            Context::Object => {
                let subject = self.node_element(&element, &scope, &attrs, position)?;
                self.attach_node(subject, position)?;
                Frame::Node {
                    subject,
                    next_li: 1,
                }
            }
            Context::Properties => self.property_element(&element, &scope, attrs, position)?,
        };

        self.stack.push(Open {
            name: name.clone(),
            scope,
            frame,
        });
        if empty {
            self.end_element(&name, position)?;
        }
        Ok(())
    }

    /// Apply namespace declarations, `xml:*` attributes and collect RDF attributes.
    fn read_attributes(&mut self, e: &BytesStart<'_>, position: usize) -> Result<(Scope, Attributes)> {
        let mut scope = self
            .stack
            .last()
            .map(|open| open.scope.clone())
            .unwrap_or_else(|| Scope {
                base: self.base.clone(),
                ..Scope::default()
            });
        let document_element = self.stack.is_empty();

        let mut remaining = Vec::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = utf8(attr.key.as_ref(), position)?.to_string();
            let value = attr
                .unescape_value()
                .map_err(quick_xml::Error::from)?
                .into_owned();
            let declared = match key.strip_prefix("xmlns") {
                Some("") => Some(""),
                Some(rest) => rest.strip_prefix(':'),
                None => None,
            };
            match declared {
                Some(prefix) => {
                    trace!(prefix, namespace = %value, "xmlns");
                    if !prefix.is_empty() {
                        self.sink.on_prefix(prefix, &value);
                    }
                    Rc::make_mut(&mut scope.namespaces).insert(prefix.to_string(), value);
                }
                None => remaining.push((key, value)),
            }
        }

        let mut attrs = Attributes::default();
        for (key, value) in remaining {
            match key.split_once(':') {
                Some(("xml", "lang")) => scope.lang = (!value.is_empty()).then_some(value),
                Some(("xml", "base")) => {
                    let base = resolve(&scope, &value)?;
                    trace!(base = %base, "xml:base");
                    if document_element {
                        self.sink.on_base(&base);
                    }
                    scope.base = Some(base);
                }
                Some(("xml", _)) => {}
                Some((prefix, local)) => {
                    let namespace = scope
                        .namespaces
                        .get(prefix)
                        .ok_or_else(|| RdfXmlError::UndefinedPrefix(prefix.to_string()))?;
                    if namespace == rdf::NS && SYNTAX_ATTRIBUTES.contains(&local) {
                        attrs.set(local, value);
                    } else {
                        attrs.properties.push((format!("{namespace}{local}"), value));
                    }
                }
                None if SYNTAX_ATTRIBUTES.contains(&key.as_str()) => attrs.set(&key, value),
                None => trace!(attribute = %key, "ignoring unqualified attribute"),
            }
        }
        Ok((scope, attrs))
    }

    fn node_element(
        &mut self,
        element: &str,
        scope: &Scope,
        attrs: &Attributes,
        position: usize,
    ) -> Result<TermId> {
        if element == rdf::RDF || element == rdf::LI {
            return Err(syntax(position, format!("<{element}> cannot be a node element")));
        }

        let subject = match (&attrs.about, &attrs.id, &attrs.node_id) {
            (Some(about), None, None) => {
                let iri = resolve(scope, about)?;
                self.sink.term_iri(&iri)
            }
            (None, Some(id), None) => {
                let iri = resolve(scope, &format!("#{id}"))?;
                self.sink.term_iri(&iri)
            }
            (None, None, Some(label)) => self.sink.term_blank(Some(label)),
            (None, None, None) => self.sink.term_blank(None),
            _ => {
                return Err(syntax(
                    position,
                    "rdf:about, rdf:ID and rdf:nodeID are mutually exclusive",
                ))
            }
        };

        if element != rdf::DESCRIPTION {
            let predicate = self.sink.term_iri(rdf::TYPE);
            let class = self.sink.term_iri(element);
            self.sink.emit_triple(subject, predicate, class)?;
        }
        self.property_attributes(subject, scope, &attrs.properties)?;
        Ok(subject)
    }

    fn property_element(
        &mut self,
        element: &str,
        scope: &Scope,
        attrs: Attributes,
        position: usize,
    ) -> Result<Frame> {
        let (subject, predicate_iri) = match self.stack.last_mut() {
            Some(Open {
                frame: Frame::Node { subject, next_li },
                ..
            }) => {
                let iri = if element == rdf::LI {
                    let n = *next_li;
                    *next_li += 1;
                    format!("{}{}", rdf::MEMBER_PREFIX, n)
                } else {
                    element.to_string()
                };
                (*subject, iri)
            }
            _ => return Err(syntax(position, "property element outside a node element")),
        };
        if predicate_iri == rdf::DESCRIPTION || predicate_iri == rdf::RDF {
            return Err(syntax(
                position,
                format!("<{predicate_iri}> cannot be a property element"),
            ));
        }
        let predicate = self.sink.term_iri(&predicate_iri);

        match attrs.parse_type.as_deref() {
            Some("Resource") => {
                let node = self.sink.term_blank(None);
                self.sink.emit_triple(subject, predicate, node)?;
                return Ok(Frame::Node {
                    subject: node,
                    next_li: 1,
                });
            }
            Some("Collection") => {
                return Ok(Frame::Collection {
                    subject,
                    predicate,
                    items: Vec::new(),
                })
            }
            Some(_) => {
                return Ok(Frame::XmlLiteral {
                    subject,
                    predicate,
                    start: position,
                    depth: 0,
                })
            }
            None => {}
        }

        let object = match (&attrs.resource, &attrs.node_id) {
            (Some(resource), None) => {
                let iri = resolve(scope, resource)?;
                Some(self.sink.term_iri(&iri))
            }
            (None, Some(label)) => Some(self.sink.term_blank(Some(label))),
            (None, None) if !attrs.properties.is_empty() => Some(self.sink.term_blank(None)),
            (None, None) => None,
            (Some(_), Some(_)) => {
                return Err(syntax(
                    position,
                    "rdf:resource and rdf:nodeID are mutually exclusive",
                ))
            }
        };
        if let Some(object) = object {
            self.sink.emit_triple(subject, predicate, object)?;
            self.property_attributes(object, scope, &attrs.properties)?;
        }

        let datatype = attrs
            .datatype
            .as_deref()
            .map(|dt| resolve(scope, dt))
            .transpose()?;
        Ok(Frame::Property {
            subject,
            predicate,
            datatype,
            text: String::new(),
            object,
        })
    }

    fn property_attributes(
        &mut self,
        subject: TermId,
        scope: &Scope,
        properties: &[(String, String)],
    ) -> Result<()> {
        for (predicate_iri, value) in properties {
            let predicate = self.sink.term_iri(predicate_iri);
            let object = if predicate_iri == rdf::TYPE {
                let iri = resolve(scope, value)?;
                self.sink.term_iri(&iri)
            } else {
                let literal = Literal::new(value, None, scope.lang.as_deref())?;
                self.sink.term_literal(literal)
            };
            self.sink.emit_triple(subject, predicate, object)?;
        }
        Ok(())
    }

    /// Link a nested node element to the property or collection enclosing it.
    fn attach_node(&mut self, node: TermId, position: usize) -> Result<()> {
        match self.stack.last_mut().map(|open| &mut open.frame) {
            Some(Frame::Property {
                subject,
                predicate,
                text,
                object,
                ..
            }) => {
                if object.is_some() {
                    return Err(syntax(position, "property element has more than one object"));
                }
                if !text.trim().is_empty() {
                    return Err(syntax(position, "property element mixes text and a node element"));
                }
                *object = Some(node);
                let (subject, predicate) = (*subject, *predicate);
                self.sink.emit_triple(subject, predicate, node)?;
            }
            Some(Frame::Collection { items, .. }) => items.push(node),
            _ => {}
        }
        Ok(())
    }

    fn end_element(&mut self, name: &str, position: usize) -> Result<()> {
        if let Some(Open {
            frame: Frame::XmlLiteral { depth, .. },
            ..
        }) = self.stack.last_mut()
        {
            if *depth > 0 {
                *depth -= 1;
                return Ok(());
            }
        }

        let open = self
            .stack
            .pop()
            .ok_or_else(|| syntax(position, format!("unexpected end tag </{name}>")))?;
        if open.name != name {
            return Err(syntax(
                position,
                format!("expected </{}>, found </{}>", open.name, name),
            ));
        }

        match open.frame {
            Frame::Property {
                subject,
                predicate,
                datatype,
                text,
                object: None,
            } => {
                let literal = match datatype {
                    Some(dt) => Literal::typed(text, Datatype::from_iri(dt)),
                    None => Literal::new(text, None, open.scope.lang.as_deref())?,
                };
                let object = self.sink.term_literal(literal);
                self.sink.emit_triple(subject, predicate, object)?;
            }
            Frame::XmlLiteral {
                subject,
                predicate,
                start,
                ..
            } => {
                // `position` is past the end tag; the markup stops at its `</`
                let end = self
                    .input
                    .get(start..position)
                    .and_then(|inner| inner.rfind("</"))
                    .map_or(start, |offset| start + offset);
                let markup = self
                    .input
                    .get(start..end)
                    .ok_or_else(|| syntax(position, "XML literal out of bounds"))?;
                let object = self
                    .sink
                    .term_literal(Literal::typed(markup, Datatype::rdf_xml_literal()));
                self.sink.emit_triple(subject, predicate, object)?;
            }
            Frame::Collection {
                subject,
                predicate,
                items,
            } => {
                let head = self.collection(&items)?;
                self.sink.emit_triple(subject, predicate, head)?;
            }
            Frame::Root | Frame::Node { .. } | Frame::Property { .. } => {}
        }
        Ok(())
    }

    /// Build an `rdf:first`/`rdf:rest` list and return its head.
    fn collection(&mut self, items: &[TermId]) -> Result<TermId> {
        let nil = self.sink.term_iri(rdf::NIL);
        if items.is_empty() {
            return Ok(nil);
        }
        let first = self.sink.term_iri(rdf::FIRST);
        let rest = self.sink.term_iri(rdf::REST);
        let cells: Vec<TermId> = items.iter().map(|_| self.sink.term_blank(None)).collect();
        for (i, (&cell, &item)) in cells.iter().zip(items).enumerate() {
            self.sink.emit_triple(cell, first, item)?;
            let next = cells.get(i + 1).copied().unwrap_or(nil);
            self.sink.emit_triple(cell, rest, next)?;
        }
        Ok(cells[0])
    }

    fn text(&mut self, text: &str, position: usize) -> Result<()> {
        match self.stack.last_mut().map(|open| &mut open.frame) {
            Some(Frame::Property {
                object: None,
                text: buffer,
                ..
            }) => buffer.push_str(text),
            Some(Frame::XmlLiteral { .. }) => {}
            _ if text.trim().is_empty() => {}
            _ => {
                return Err(syntax(
                    position,
                    format!("unexpected text {:?}", text.trim()),
                ))
            }
        }
        Ok(())
    }
}

fn syntax(position: usize, message: impl Into<String>) -> RdfXmlError {
    RdfXmlError::Syntax {
        position,
        message: message.into(),
    }
}

fn utf8(bytes: &[u8], position: usize) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|_| syntax(position, "name is not valid UTF-8"))
}

/// Expand an element QName against the namespaces in scope.
fn expand_name(scope: &Scope, qname: &str, position: usize) -> Result<String> {
    let (prefix, local) = qname.split_once(':').unwrap_or(("", qname));
    match scope.namespaces.get(prefix) {
        Some(namespace) => Ok(format!("{namespace}{local}")),
        None if prefix.is_empty() => Err(syntax(
            position,
            format!("element <{qname}> is not in a namespace"),
        )),
        None => Err(RdfXmlError::UndefinedPrefix(prefix.to_string())),
    }
}

fn resolve(scope: &Scope, reference: &str) -> Result<String> {
    if iri::is_absolute(reference) {
        return Ok(reference.to_string());
    }
    scope
        .base
        .as_deref()
        .and_then(|base| iri::resolve(base, reference))
        .ok_or_else(|| {
            RdfXmlError::IriResolution(format!(
                "cannot resolve <{reference}> without an absolute base"
            ))
        })
}

/// Parse an RDF/XML document into GraphSink events.
///
/// `base` is the document location; relative `rdf:about`, `rdf:resource`
/// and `rdf:ID` values resolve against it unless `xml:base` overrides it.
pub fn parse_rdfxml<S: GraphSink>(input: &str, sink: &mut S, base: Option<&str>) -> Result<()> {
    Parser {
        input,
        reader: Reader::from_str(input),
        stack: Vec::new(),
        seen_root: false,
        base: base.map(str::to_string),
        sink,
    }
    .parse()
}
