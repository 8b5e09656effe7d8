//! Reading tagged JSON and YAML documents into [`TagNode`]s.
//!
//! A document is an object with an `nbt` array. Each entry is a tag object:
//!
//! * `tagType`: the tag kind as a number, 0 to 12.
//! * `name`: the tag name as a string.
//! * `value`: the payload, depending on `tagType`:
//!     * 1 to 4: an integer, wrapped to the width of the tag.
//!     * 5, 6: a number. A Double with anything else becomes NaN.
//!     * 7: an array of integers.
//!     * 11, 12: an array of numbers. Fractions are truncated toward zero.
//!     * 8: a string.
//!     * 9: an object `{ "tagListType": n, "list": [...] }`. The list holds
//!       bare values of the `tagListType` kind, and may be `null` or left out
//!       for an empty list. An empty list may declare any type byte.
//!     * 10: an array of tag objects.
//!
//! Tags with a `tagType` of 0 are skipped wherever a full tag is expected.
//!
//! Numbers are read by serde_json, which keeps integers as exact 64 bit
//! values rather than going through `f64`.

use log::debug;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::{ser, EncodeOpts, List, Payload, Tag, TagNode};

/// Bits of the NaN written for a Double whose value is not a number. This is
/// the quiet NaN with the lowest payload bit set, not `f64::NAN`.
pub const DOUBLE_FALLBACK_BITS: u64 = 0x7FF8_0000_0000_0001;

/// Convert a tagged JSON document to NBT.
pub fn json_to_nbt(input: &[u8], opts: &EncodeOpts) -> Result<Vec<u8>> {
    let doc = parse_json(input)?;
    json_value_to_nbt(&doc, opts)
}

/// Convert a tagged YAML document to NBT. The YAML is first reduced to the
/// same JSON value [`json_to_nbt`] would see.
pub fn yaml_to_nbt(input: &[u8], opts: &EncodeOpts) -> Result<Vec<u8>> {
    let doc = parse_yaml(input)?;
    json_value_to_nbt(&doc, opts)
}

/// Convert an already decoded document to NBT.
pub fn json_value_to_nbt(doc: &Value, opts: &EncodeOpts) -> Result<Vec<u8>> {
    let nodes = document_nodes(doc, opts)?;
    let out = ser::to_bytes(&nodes, opts)?;
    debug!("encoded {} tags into {} bytes", nodes.len(), out.len());
    Ok(out)
}

/// Decode JSON text, keeping integers exact.
pub fn parse_json(input: &[u8]) -> Result<Value> {
    serde_json::from_slice(input).map_err(Error::json_syntax)
}

/// Decode YAML text into a JSON value.
pub fn parse_yaml(input: &[u8]) -> Result<Value> {
    serde_yaml::from_slice(input).map_err(Error::yaml_syntax)
}

/// Read the tags of the `nbt` array of a document. Tags with a `tagType` of 0
/// are left out.
pub fn document_nodes(doc: &Value, opts: &EncodeOpts) -> Result<Vec<TagNode>> {
    let tags = doc
        .as_object()
        .and_then(|obj| obj.get("nbt"))
        .and_then(Value::as_array)
        .ok_or_else(|| Error::document_shape(describe(doc)))?;

    Lowerer::new(opts).tags(tags)
}

/// Read a single tag object. Returns `None` for a `tagType` of 0.
pub fn lower_tag(tag: &Value, opts: &EncodeOpts) -> Result<Option<TagNode>> {
    Lowerer::new(opts).tag(tag)
}

/// Read a bare payload of the given kind, as found in a list.
pub fn lower_payload(tag: Tag, value: &Value, opts: &EncodeOpts) -> Result<Payload> {
    Lowerer::new(opts).payload(tag, Some(value))
}

struct Lowerer {
    max_depth: usize,
    depth: usize,
}

impl Lowerer {
    fn new(opts: &EncodeOpts) -> Self {
        Self {
            max_depth: opts.max_depth,
            depth: 0,
        }
    }

    fn tags(&mut self, tags: &[Value]) -> Result<Vec<TagNode>> {
        let mut nodes = Vec::with_capacity(tags.len());
        for (i, tag) in tags.iter().enumerate() {
            if let Some(node) = self.tag(tag).map_err(|e| e.context(format!("tag {}", i)))? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    fn tag(&mut self, tag: &Value) -> Result<Option<TagNode>> {
        let obj = tag
            .as_object()
            .ok_or_else(|| Error::not_an_object(describe(tag)))?;

        let tag_type = integer(obj.get("tagType")).ok_or_else(|| Error::type_field("tagType"))?;
        if tag_type == 0 {
            return Ok(None);
        }

        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(Error::name_field)?;

        let kind = Tag::try_from(tag_type).map_err(|_| Error::unknown_tag_type(tag_type))?;
        let payload = self
            .payload(kind, obj.get("value"))
            .map_err(|e| e.context(format!("{} {:?}", kind, name)))?;

        Ok(Some(TagNode::new(name, payload)))
    }

    fn payload(&mut self, tag: Tag, value: Option<&Value>) -> Result<Payload> {
        let not_integer = || Error::payload_type(tag, "an integer");

        Ok(match tag {
            Tag::End => return Err(Error::unknown_tag_type(0)),
            Tag::Byte => Payload::Byte(integer(value).ok_or_else(not_integer)? as i8),
            Tag::Short => Payload::Short(integer(value).ok_or_else(not_integer)? as i16),
            Tag::Int => Payload::Int(integer(value).ok_or_else(not_integer)? as i32),
            Tag::Long => Payload::Long(integer(value).ok_or_else(not_integer)?),
            Tag::Float => Payload::Float(
                value
                    .and_then(Value::as_f64)
                    .ok_or_else(|| Error::payload_type(tag, "a number"))? as f32,
            ),
            // Double is lenient where Float is not: anything that is not a
            // number is written as NaN.
            Tag::Double => Payload::Double(
                value
                    .and_then(Value::as_f64)
                    .unwrap_or_else(|| f64::from_bits(DOUBLE_FALLBACK_BITS)),
            ),
            Tag::ByteArray => Payload::ByteArray(elements(tag, value, "integers", |v| {
                integer(Some(v)).map(|i| i as i8)
            })?),
            Tag::String => Payload::String(
                value
                    .and_then(Value::as_str)
                    .ok_or_else(|| Error::payload_type(tag, "a string"))?
                    .to_owned(),
            ),
            Tag::List => {
                let obj = value
                    .and_then(Value::as_object)
                    .ok_or_else(|| Error::payload_type(tag, "an object"))?;
                Payload::List(self.nested(|l| l.list(obj))?)
            }
            Tag::Compound => {
                let children = array(value)?;
                Payload::Compound(self.nested(|l| l.tags(children))?)
            }
            Tag::IntArray => Payload::IntArray(elements(tag, value, "numbers", |v| {
                truncated(v).map(|i| i as i32)
            })?),
            Tag::LongArray => Payload::LongArray(elements(tag, value, "numbers", truncated)?),
        })
    }

    fn list(&mut self, obj: &Map<String, Value>) -> Result<List> {
        let element_type =
            integer(obj.get("tagListType")).ok_or_else(|| Error::type_field("tagListType"))?;
        let values: &[Value] = match obj.get("list") {
            None | Some(Value::Null) => &[],
            Some(Value::Array(values)) => values,
            Some(other) => return Err(Error::not_an_array("list", describe(other))),
        };

        // No element is ever read with the type of an empty list, so any byte
        // goes. It is still never truncated.
        if values.is_empty() {
            let byte =
                u8::try_from(element_type).map_err(|_| Error::unknown_tag_type(element_type))?;
            return Ok(List::empty_of_type(byte));
        }

        let element =
            Tag::try_from(element_type).map_err(|_| Error::unknown_tag_type(element_type))?;

        let mut items = Vec::with_capacity(values.len());
        for (i, v) in values.iter().enumerate() {
            let item = self
                .payload(element, Some(v))
                .map_err(|e| e.context(format!("element {}", i)))?;
            items.push(item);
        }

        Ok(List::new(element, items))
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.max_depth {
            return Err(Error::depth_exceeded(self.max_depth));
        }
        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }
}

/// Integers are taken as i64, with u64 values above `i64::MAX` reinterpreted
/// as two's complement. Numbers with a fraction or exponent are not integers.
fn integer(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value
        .as_i64()
        .or_else(|| value.as_u64().map(|u| u as i64))
}

fn array(value: Option<&Value>) -> Result<&Vec<Value>> {
    match value {
        Some(Value::Array(values)) => Ok(values),
        Some(other) => Err(Error::not_an_array("value", describe(other))),
        None => Err(Error::not_an_array("value", "nothing")),
    }
}

/// Any number, with integers kept exact and other numbers truncated toward
/// zero. Numbers beyond the range of i64 saturate.
fn truncated(value: &Value) -> Option<i64> {
    integer(Some(value)).or_else(|| value.as_f64().map(|f| f as i64))
}

fn elements<T>(
    tag: Tag,
    value: Option<&Value>,
    made_of: &str,
    read: impl Fn(&Value) -> Option<T>,
) -> Result<Vec<T>> {
    array(value)?
        .iter()
        .enumerate()
        .map(|(i, v)| {
            read(v).ok_or_else(|| {
                Error::payload_type(tag, &format!("made of {}", made_of))
                    .context(format!("element {}", i))
            })
        })
        .collect()
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
