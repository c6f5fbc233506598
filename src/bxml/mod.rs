//! BXML document generation.
//!
//! A document is an ordered list of verbs inside a `<Response>` envelope:
//!
//! ```
//! use bandwidth::bxml::{Forward, Pause, Response};
//!
//! let xml = Response::new()
//!     .with(Forward {
//!         from: Some("+18005551212".into()),
//!         to: Some("+18885551212".into()),
//!         ..Default::default()
//!     })
//!     .with(Pause { duration: Some(12) })
//!     .to_xml()?;
//!
//! assert_eq!(
//!     xml,
//!     r#"<?xml version="1.0" encoding="UTF-8"?><Response><Forward from="+18005551212" to="+18885551212"></Forward><Pause duration="12"></Pause></Response>"#
//! );
//! # Ok::<(), bandwidth::error::BandwidthError>(())
//! ```

mod verbs;

pub use verbs::*;

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::{BandwidthError, Result};

const ROOT: &str = "Response";

/// An ordered BXML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    verbs: Vec<Verb>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a verb, builder style.
    pub fn with(mut self, verb: impl Into<Verb>) -> Self {
        self.verbs.push(verb.into());
        self
    }

    pub fn push(&mut self, verb: impl Into<Verb>) {
        self.verbs.push(verb.into());
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Stream the document into `sink`. See [`write`].
    pub fn write_to<W: Write>(&self, sink: W) -> Result<()> {
        write(sink, &self.verbs)
    }

    pub fn to_xml(&self) -> Result<String> {
        to_string(&self.verbs)
    }
}

impl FromIterator<Verb> for Response {
    fn from_iter<I: IntoIterator<Item = Verb>>(iter: I) -> Self {
        Self {
            verbs: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Verb>> for Response {
    fn from(verbs: Vec<Verb>) -> Self {
        Self { verbs }
    }
}

/// Write the XML declaration, the `<Response>` envelope and one element per
/// verb, in order, directly to `sink`.
///
/// Nothing is buffered: if the sink fails part way, the error is returned
/// immediately and whatever was already written stays written. Callers must
/// discard a partially written document.
pub fn write<W: Write>(sink: W, verbs: &[Verb]) -> Result<()> {
    let mut writer = Writer::new(sink);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(markup_error)?;
    writer
        .write_event(Event::Start(BytesStart::new(ROOT)))
        .map_err(markup_error)?;

    for verb in verbs {
        let mut element = BytesStart::new(verb.name());
        for (name, value) in verb.attributes() {
            element.push_attribute((name, value.as_str()));
        }
        writer.write_event(Event::Start(element)).map_err(markup_error)?;
        writer
            .write_event(Event::End(BytesEnd::new(verb.name())))
            .map_err(markup_error)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(ROOT)))
        .map_err(markup_error)?;
    Ok(())
}

/// Render a complete document into a string.
pub fn to_string(verbs: &[Verb]) -> Result<String> {
    let mut buffer = Vec::new();
    write(&mut buffer, verbs)?;
    String::from_utf8(buffer).map_err(markup_error)
}

fn markup_error(err: impl std::fmt::Display) -> BandwidthError {
    BandwidthError::Markup(err.to_string())
}
