mod decoders;
mod navigation;

use crate::{Document, HeapArena, Mode, ParseError, Parser, ParserOptions};

/// Parses `source` with the given mode into a fresh heap-backed document.
pub(crate) fn parse(source: &str, mode: Mode) -> Result<Document<HeapArena>, ParseError> {
    let mut doc = Document::new(HeapArena::new());
    Parser::new(ParserOptions {
        mode,
        ..ParserOptions::default()
    })
    .parse(&mut doc, source)?;
    Ok(doc)
}

pub(crate) fn parse_strict(source: &str) -> Result<Document<HeapArena>, ParseError> {
    parse(source, Mode::Strict)
}

pub(crate) fn parse_lenient(source: &str) -> Result<Document<HeapArena>, ParseError> {
    parse(source, Mode::Lenient)
}
