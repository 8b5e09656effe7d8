use crate::{to_bytes, Encoder, EncodeOpts, ErrorKind, List, Payload, Tag, TagNode};

use super::builder::Builder;

#[test]
fn fixed_widths_regardless_of_magnitude() {
    let widths = [
        (Payload::Byte(0), 1),
        (Payload::Short(0), 2),
        (Payload::Int(0), 4),
        (Payload::Long(0), 8),
        (Payload::Float(0.0), 4),
        (Payload::Double(0.0), 8),
        (Payload::Byte(i8::MIN), 1),
        (Payload::Short(i16::MIN), 2),
        (Payload::Int(i32::MAX), 4),
        (Payload::Long(i64::MIN), 8),
        (Payload::Float(f32::MAX), 4),
        (Payload::Double(f64::INFINITY), 8),
    ];

    for (payload, width) in widths {
        let mut out = Vec::new();
        Encoder::new(&mut out, EncodeOpts::new())
            .write_payload(&payload)
            .unwrap();
        assert_eq!(out.len(), width, "{:?}", payload);
    }
}

#[test]
fn typed_tree() {
    let nodes = [TagNode::new(
        "",
        Payload::Compound(vec![
            TagNode::new("DataVersion", Payload::Int(3465)),
            TagNode::new("Name", Payload::String("world".to_owned())),
            TagNode::new(
                "Pos",
                Payload::List(List::new(
                    Tag::Double,
                    vec![Payload::Double(0.5), Payload::Double(-1.0)],
                )),
            ),
            TagNode::new("Heights", Payload::LongArray(vec![1, 2])),
            TagNode::new("Biomes", Payload::ByteArray(vec![-1, 0])),
        ]),
    )];

    let expected = Builder::new()
        .start_compound("")
        .int("DataVersion", 3465)
        .string("Name", "world")
        .start_list("Pos", Tag::Double, 2)
        .double_payload(0.5)
        .double_payload(-1.0)
        .long_array("Heights", &[1, 2])
        .byte_array("Biomes", &[-1, 0])
        .end_compound()
        .build();

    assert_eq!(to_bytes(&nodes, &EncodeOpts::new()).unwrap(), expected);
}

#[test]
fn typed_tree_little_endian() {
    let nodes = [TagNode::new(
        "r",
        Payload::Compound(vec![
            TagNode::new("i", Payload::IntArray(vec![1, -1])),
            TagNode::new("l", Payload::List(List::empty(Tag::End))),
        ]),
    )];

    let expected = Builder::little()
        .start_compound("r")
        .int_array("i", &[1, -1])
        .start_list("l", Tag::End, 0)
        .end_compound()
        .build();

    assert_eq!(to_bytes(&nodes, &EncodeOpts::bedrock()).unwrap(), expected);
}

#[test]
fn heterogeneous_list_rejected() {
    let nodes = [TagNode::new(
        "l",
        Payload::List(List::new(
            Tag::Int,
            vec![Payload::Int(1), Payload::String("2".to_owned())],
        )),
    )];

    let err = to_bytes(&nodes, &EncodeOpts::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PayloadType(Tag::Int));
    assert!(err.to_string().contains("element 1"), "{}", err);
}

#[test]
fn encoder_depth_limit() {
    let mut payload = Payload::Compound(vec![]);
    for _ in 0..3 {
        payload = Payload::Compound(vec![TagNode::new("c", payload)]);
    }
    let nodes = [TagNode::new("", payload)];

    assert!(to_bytes(&nodes, &EncodeOpts::new().max_depth(4)).is_ok());
    assert_eq!(
        to_bytes(&nodes, &EncodeOpts::new().max_depth(3))
            .unwrap_err()
            .kind(),
        ErrorKind::DepthExceeded(3)
    );
}

#[test]
fn encoder_streams_tags_one_at_a_time() {
    let mut encoder = Encoder::new(Vec::new(), EncodeOpts::new());
    encoder
        .write_tag(&TagNode::new("a", Payload::Byte(1)))
        .unwrap();
    encoder
        .write_tag(&TagNode::new("b", Payload::Short(2)))
        .unwrap();

    let expected = Builder::new().byte("a", 1).short("b", 2).build();
    assert_eq!(encoder.into_inner(), expected);
}

#[test]
fn tag_of_payload() {
    let node = TagNode::new("x", Payload::List(List::empty(Tag::Byte)));
    assert_eq!(node.tag(), Tag::List);
    assert_eq!(Payload::LongArray(vec![]).tag(), Tag::LongArray);
}

#[test]
fn empty_list_with_raw_type_byte() {
    let list = List::empty_of_type(42);
    assert_eq!(list.element(), None);
    assert_eq!(list.element_byte(), 42);
    assert_eq!(List::empty_of_type(10), List::empty(Tag::Compound));

    let bs = to_bytes(
        &[TagNode::new("l", Payload::List(list))],
        &EncodeOpts::new(),
    )
    .unwrap();

    let expected = Builder::new()
        .tag(Tag::List)
        .name("l")
        .raw_bytes(&[42, 0, 0, 0, 0])
        .build();
    assert_eq!(bs, expected);
}
