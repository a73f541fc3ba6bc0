//! TS ドキュメントのパーサ
//!
//! 壊れたカタログは全体を拒否する（部分的な読み込みは行わない）

use quick_xml::Reader;
use quick_xml::events::{
    BytesStart,
    BytesText,
    Event,
};

use crate::types::{
    SourceReference,
    TranslationStatus,
};

use super::document::{
    Catalog,
    Context,
    Message,
};
use super::error::LoadError;

/// Parse a TS document from its XML text.
pub(super) fn parse(content: &str) -> Result<Catalog, LoadError> {
    let mut reader = Reader::from_str(content);
    let catalog = loop {
        match reader.read_event()? {
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => {}
            Event::Text(text) => ensure_blank(&text, "#document")?,
            Event::Start(element) => {
                if element.name().as_ref() == b"TS" {
                    break parse_ts(&mut reader, &element)?;
                }
                return Err(LoadError::UnexpectedRoot(name_of(&element)));
            }
            Event::Empty(element) => return Err(LoadError::UnexpectedRoot(name_of(&element))),
            Event::Eof => return Err(LoadError::UnexpectedEof("TS".to_string())),
            _ => return Err(stray_data("#document")),
        }
    };

    // Content after the root element still rejects the whole document.
    loop {
        match reader.read_event()? {
            Event::Eof => return Ok(catalog),
            Event::Comment(_) | Event::PI(_) => {}
            Event::Text(text) => ensure_blank(&text, "#document")?,
            Event::Start(element) | Event::Empty(element) => {
                return Err(unexpected(&element, "#document"));
            }
            _ => return Err(stray_data("#document")),
        }
    }
}

fn parse_ts(reader: &mut Reader<&[u8]>, root: &BytesStart<'_>) -> Result<Catalog, LoadError> {
    let mut catalog = Catalog {
        version: attr_value(root, b"version")?,
        language: attr_value(root, b"language")?,
        source_language: attr_value(root, b"sourcelanguage")?,
        contexts: Vec::new(),
    };

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.name().as_ref() {
                b"context" => catalog.contexts.push(parse_context(reader)?),
                _ => return Err(unexpected(&element, "TS")),
            },
            Event::Empty(element) => return Err(unexpected(&element, "TS")),
            // The reader validates end-tag nesting, so this is `</TS>`.
            Event::End(_) => return Ok(catalog),
            Event::Text(text) => ensure_blank(&text, "TS")?,
            Event::Comment(_) => {}
            Event::Eof => return Err(LoadError::UnexpectedEof("TS".to_string())),
            _ => return Err(stray_data("TS")),
        }
    }
}

fn parse_context(reader: &mut Reader<&[u8]>) -> Result<Context, LoadError> {
    let mut name: Option<String> = None;
    let mut messages = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.name().as_ref() {
                b"name" => name = Some(read_text(reader, "name")?),
                b"message" => messages.push(parse_message(reader, name.as_deref())?),
                _ => return Err(unexpected(&element, "context")),
            },
            Event::Empty(element) => match element.name().as_ref() {
                b"name" => name = Some(String::new()),
                _ => return Err(unexpected(&element, "context")),
            },
            Event::End(_) => {
                let name = name.filter(|n| !n.is_empty()).ok_or(LoadError::MissingContextName)?;
                return Ok(Context { name, messages });
            }
            Event::Text(text) => ensure_blank(&text, "context")?,
            Event::Comment(_) => {}
            Event::Eof => return Err(LoadError::UnexpectedEof("context".to_string())),
            _ => return Err(stray_data("context")),
        }
    }
}

fn parse_message(
    reader: &mut Reader<&[u8]>,
    context_name: Option<&str>,
) -> Result<Message, LoadError> {
    let mut source: Option<String> = None;
    let mut translation: Option<String> = None;
    let mut status_attr: Option<String> = None;
    let mut locations = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) => match element.name().as_ref() {
                b"source" => source = Some(read_text(reader, "source")?),
                b"translation" => {
                    status_attr = attr_value(&element, b"type")?;
                    translation = Some(read_text(reader, "translation")?);
                }
                b"location" => {
                    locations.push(read_location(&element)?);
                    expect_end(reader, "location")?;
                }
                _ => return Err(unexpected(&element, "message")),
            },
            Event::Empty(element) => match element.name().as_ref() {
                b"source" => source = Some(String::new()),
                b"translation" => {
                    status_attr = attr_value(&element, b"type")?;
                    translation = Some(String::new());
                }
                b"location" => locations.push(read_location(&element)?),
                _ => return Err(unexpected(&element, "message")),
            },
            Event::End(_) => {
                let source = source.ok_or_else(|| {
                    LoadError::MissingSource(context_name.unwrap_or("?").to_string())
                })?;
                let status = derive_status(status_attr.as_deref(), translation.as_deref())?;
                return Ok(Message { source, translation, status, locations });
            }
            Event::Text(text) => ensure_blank(&text, "message")?,
            Event::Comment(_) => {}
            Event::Eof => return Err(LoadError::UnexpectedEof("message".to_string())),
            _ => return Err(stray_data("message")),
        }
    }
}

/// Resolve the tri-state status of a message.
///
/// An explicit `type` attribute wins. Without one, a missing or empty
/// translation is unfinished; Qt never displays empty translations.
fn derive_status(
    attr: Option<&str>,
    translation: Option<&str>,
) -> Result<TranslationStatus, LoadError> {
    match attr {
        Some("unfinished") => Ok(TranslationStatus::Unfinished),
        Some("obsolete") => Ok(TranslationStatus::Obsolete),
        Some(other) => Err(LoadError::UnknownStatus(other.to_string())),
        None => Ok(match translation {
            Some(text) if !text.is_empty() => TranslationStatus::Finished,
            _ => TranslationStatus::Unfinished,
        }),
    }
}

fn read_location(element: &BytesStart<'_>) -> Result<SourceReference, LoadError> {
    let filename = attr_value(element, b"filename")?.unwrap_or_default();
    let line = match attr_value(element, b"line")? {
        Some(raw) => Some(raw.parse::<u32>().map_err(|_| LoadError::InvalidLine(raw))?),
        None => None,
    };
    Ok(SourceReference { filename, line })
}

/// Collect character data until the enclosing element closes.
///
/// Text is taken verbatim; trailing spaces and embedded newlines in source
/// strings are significant.
fn read_text(reader: &mut Reader<&[u8]>, parent: &str) -> Result<String, LoadError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(chunk) => text.push_str(&chunk.unescape()?),
            Event::CData(chunk) => text.push_str(&String::from_utf8_lossy(&chunk.into_inner())),
            Event::End(_) => return Ok(text),
            Event::Start(element) | Event::Empty(element) => {
                return Err(unexpected(&element, parent));
            }
            Event::Comment(_) => {}
            Event::Eof => return Err(LoadError::UnexpectedEof(parent.to_string())),
            _ => return Err(stray_data(parent)),
        }
    }
}

/// Consume the closing tag of an element that carries no content.
fn expect_end(reader: &mut Reader<&[u8]>, parent: &str) -> Result<(), LoadError> {
    loop {
        match reader.read_event()? {
            Event::End(_) => return Ok(()),
            Event::Text(text) => ensure_blank(&text, parent)?,
            Event::Comment(_) => {}
            Event::Start(element) | Event::Empty(element) => {
                return Err(unexpected(&element, parent));
            }
            Event::Eof => return Err(LoadError::UnexpectedEof(parent.to_string())),
            _ => return Err(stray_data(parent)),
        }
    }
}

fn attr_value(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, LoadError> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn name_of(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

fn unexpected(element: &BytesStart<'_>, parent: &str) -> LoadError {
    LoadError::UnexpectedElement { element: name_of(element), parent: parent.to_string() }
}

fn stray_data(parent: &str) -> LoadError {
    LoadError::UnexpectedElement { element: "#data".to_string(), parent: parent.to_string() }
}

/// Whitespace between structural elements is layout, anything else is not.
fn ensure_blank(text: &BytesText<'_>, parent: &str) -> Result<(), LoadError> {
    if text.unescape()?.trim().is_empty() {
        Ok(())
    } else {
        Err(LoadError::UnexpectedElement {
            element: "#text".to_string(),
            parent: parent.to_string(),
        })
    }
}
