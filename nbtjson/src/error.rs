//! Contains the Error and Result type used by the encoder.
use std::fmt::Display;

use crate::Tag;

type Source = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Various errors that can occur while turning a document into NBT.
///
/// Every error aborts the whole encode. Any bytes already handed to the
/// writer are not meaningful on their own and should be discarded.
#[derive(Debug)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
    source: Option<Source>,
}

/// The stage or field an [`Error`] was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input was not valid JSON or YAML.
    Decode,

    /// The document was not an object holding an `nbt` array.
    DocumentShape,

    /// A tag was not an object, or a field that must be an array was not one.
    Structure,

    /// `tagType` or `tagListType` was missing or not an integer.
    TypeField,

    /// A tag's `name` was missing or not a string.
    NameField,

    /// The `value` did not have the right shape for the given tag type.
    PayloadType(Tag),

    /// A tag type outside of the known kinds, or End where a payload was
    /// expected.
    UnknownTagType(i64),

    /// Compounds and lists nested deeper than the configured limit.
    DepthExceeded(usize),

    /// A string, array or list too long for its length prefix.
    LengthOverflow,

    /// The underlying writer failed.
    SinkWrite,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Prefix the message with where in the document the error happened. The
    /// kind is unchanged.
    pub(crate) fn context(mut self, ctx: impl Display) -> Self {
        self.msg = format!("{}: {}", ctx, self.msg);
        self
    }

    fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind,
            source: None,
        }
    }

    fn with_source(mut self, source: impl Into<Source>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub(crate) fn json_syntax(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::Decode, format!("invalid json: {}", e)).with_source(e)
    }

    pub(crate) fn yaml_syntax(e: serde_yaml::Error) -> Self {
        Self::new(ErrorKind::Decode, format!("invalid yaml: {}", e)).with_source(e)
    }

    pub(crate) fn document_shape(found: &str) -> Self {
        Self::new(
            ErrorKind::DocumentShape,
            format!("expected object with an `nbt` array, found {}", found),
        )
    }

    pub(crate) fn not_an_object(found: &str) -> Self {
        Self::new(
            ErrorKind::Structure,
            format!("tag is not an object, found {}", found),
        )
    }

    pub(crate) fn not_an_array(field: &str, found: &str) -> Self {
        Self::new(
            ErrorKind::Structure,
            format!("`{}` is not an array, found {}", field, found),
        )
    }

    pub(crate) fn type_field(field: &str) -> Self {
        Self::new(
            ErrorKind::TypeField,
            format!("`{}` missing or not an integer", field),
        )
    }

    pub(crate) fn name_field() -> Self {
        Self::new(ErrorKind::NameField, "`name` missing or not a string")
    }

    pub(crate) fn payload_type(tag: Tag, expected: &str) -> Self {
        Self::new(
            ErrorKind::PayloadType(tag),
            format!("{} value is not {}", tag, expected),
        )
    }

    pub(crate) fn list_element_mismatch(declared: Tag, found: Tag) -> Self {
        Self::new(
            ErrorKind::PayloadType(declared),
            format!("list of {} contains a {} element", declared, found),
        )
    }

    pub(crate) fn unknown_tag_type(tag_type: i64) -> Self {
        Self::new(
            ErrorKind::UnknownTagType(tag_type),
            format!("tag type {} is not recognized", tag_type),
        )
    }

    pub(crate) fn depth_exceeded(max: usize) -> Self {
        Self::new(
            ErrorKind::DepthExceeded(max),
            format!("nesting deeper than {} compounds and lists", max),
        )
    }

    pub(crate) fn length_overflow(what: &str, len: usize) -> Self {
        Self::new(
            ErrorKind::LengthOverflow,
            format!("{} of length {} does not fit its length prefix", what, len),
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::SinkWrite, format!("io error: {}", e)).with_source(e)
    }
}
