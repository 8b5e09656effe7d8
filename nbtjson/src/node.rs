use crate::Tag;

/// A named tag, as it appears at the top level of a document or inside a
/// compound. List elements are bare [`Payload`]s instead.
#[derive(Debug, Clone, PartialEq)]
pub struct TagNode {
    pub name: String,
    pub payload: Payload,
}

impl TagNode {
    pub fn new(name: impl Into<String>, payload: Payload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// The kind of tag, taken from the payload.
    pub fn tag(&self) -> Tag {
        self.payload.tag()
    }
}

/// The value of a tag. Each variant carries exactly what its binary layout
/// needs, so the writer never has to check shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Vec<TagNode>),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

impl Payload {
    pub fn tag(&self) -> Tag {
        match self {
            Payload::Byte(_) => Tag::Byte,
            Payload::Short(_) => Tag::Short,
            Payload::Int(_) => Tag::Int,
            Payload::Long(_) => Tag::Long,
            Payload::Float(_) => Tag::Float,
            Payload::Double(_) => Tag::Double,
            Payload::ByteArray(_) => Tag::ByteArray,
            Payload::String(_) => Tag::String,
            Payload::List(_) => Tag::List,
            Payload::Compound(_) => Tag::Compound,
            Payload::IntArray(_) => Tag::IntArray,
            Payload::LongArray(_) => Tag::LongArray,
        }
    }
}

/// A homogeneous list. Elements are written payload-only, so the element
/// type alone tells a reader how to decode them.
///
/// An empty list may declare any element type byte, including [`Tag::End`] or
/// a byte that names no tag at all. A list with items always declares the
/// kind of those items.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    element: u8,
    items: Vec<Payload>,
}

impl List {
    pub fn new(element: Tag, items: Vec<Payload>) -> Self {
        Self {
            element: element.into(),
            items,
        }
    }

    pub fn empty(element: Tag) -> Self {
        Self::new(element, Vec::new())
    }

    /// An empty list with a raw element type byte.
    pub fn empty_of_type(element: u8) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// The declared element kind, or `None` if the type byte names no tag.
    pub fn element(&self) -> Option<Tag> {
        Tag::try_from(self.element).ok()
    }

    /// The element type byte as it is written.
    pub fn element_byte(&self) -> u8 {
        self.element
    }

    pub fn items(&self) -> &[Payload] {
        &self.items
    }
}
