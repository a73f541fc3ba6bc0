//! TS ドキュメントのシリアライザ

use std::io;

use quick_xml::Writer;
use quick_xml::events::{
    BytesDecl,
    BytesEnd,
    BytesStart,
    BytesText,
    Event,
};

use super::document::{
    Catalog,
    Context,
    Message,
};

/// Serialize a catalog to TS XML, mirroring Qt Linguist layout.
pub(super) fn to_xml(catalog: &Catalog) -> Result<String, io::Error> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::new("TS")))?;

    let mut root = BytesStart::new("TS");
    if let Some(version) = &catalog.version {
        root.push_attribute(("version", version.as_str()));
    }
    if let Some(language) = &catalog.language {
        root.push_attribute(("language", language.as_str()));
    }
    if let Some(source_language) = &catalog.source_language {
        root.push_attribute(("sourcelanguage", source_language.as_str()));
    }
    writer.write_event(Event::Start(root))?;

    for context in &catalog.contexts {
        write_context(&mut writer, context)?;
    }

    writer.write_event(Event::End(BytesEnd::new("TS")))?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_context(writer: &mut Writer<Vec<u8>>, context: &Context) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("context")))?;
    write_text_element(writer, "name", &context.name)?;
    for message in &context.messages {
        write_message(writer, message)?;
    }
    writer.write_event(Event::End(BytesEnd::new("context")))
}

fn write_message(writer: &mut Writer<Vec<u8>>, message: &Message) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new("message")))?;

    for location in &message.locations {
        let mut element = BytesStart::new("location");
        if !location.filename.is_empty() {
            element.push_attribute(("filename", location.filename.as_str()));
        }
        if let Some(line) = location.line {
            let line = line.to_string();
            element.push_attribute(("line", line.as_str()));
        }
        writer.write_event(Event::Empty(element))?;
    }

    write_text_element(writer, "source", &message.source)?;

    if let Some(translation) = &message.translation {
        let mut element = BytesStart::new("translation");
        if let Some(status) = message.status.as_attr() {
            element.push_attribute(("type", status));
        }
        // Empty elements survive the round trip as empty text; a Start/End
        // pair would pick up the writer's indentation as content.
        if translation.is_empty() {
            writer.write_event(Event::Empty(element))?;
        } else {
            writer.write_event(Event::Start(element))?;
            writer.write_event(Event::Text(BytesText::new(translation)))?;
            writer.write_event(Event::End(BytesEnd::new("translation")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("message")))
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return writer.write_event(Event::Empty(BytesStart::new(tag)));
    }
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))
}
