use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

use crate::core::{Child, Node, SepaError};

use super::XmlOptions;

fn xml_io(e: std::io::Error) -> SepaError {
    SepaError::Xml(format!("write error: {e}"))
}

pub(crate) struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    pub(crate) fn new(options: &XmlOptions) -> Result<Self, SepaError> {
        let buf = Cursor::new(Vec::new());
        let mut writer = match options.indent {
            Some(width) => Writer::new_with_indent(buf, b' ', width),
            None => Writer::new(buf),
        };
        if options.declaration {
            writer
                .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
                .map_err(xml_io)?;
        }
        Ok(Self { writer })
    }

    pub(crate) fn into_string(self) -> Result<String, SepaError> {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| SepaError::Xml(format!("UTF-8 error: {e}")))
    }

    /// Write `node` and everything below it.
    pub(crate) fn node(&mut self, node: &Node) -> Result<&mut Self, SepaError> {
        let mut start = BytesStart::new(node.name.as_str());
        for (key, value) in &node.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if node.children.is_empty() {
            self.writer
                .write_event(Event::Empty(start))
                .map_err(xml_io)?;
            return Ok(self);
        }

        self.writer
            .write_event(Event::Start(start))
            .map_err(xml_io)?;
        for child in &node.children {
            match child {
                Child::Element(element) => {
                    self.node(element)?;
                }
                Child::Text(text) => {
                    self.writer
                        .write_event(Event::Text(BytesText::new(text)))
                        .map_err(xml_io)?;
                }
            }
        }
        self.writer
            .write_event(Event::End(BytesEnd::new(node.name.as_str())))
            .map_err(xml_io)?;
        Ok(self)
    }
}
