use crate::{EncodeOpts, Tag};

mod ser;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as i64), Ok(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn tag_type_numbers_are_not_truncated() {
    assert!(Tag::try_from(-1i64).is_err());
    assert!(Tag::try_from(266i64).is_err());
    assert!(Tag::try_from(i64::MAX).is_err());
}

#[test]
fn opts_from_config() {
    let opts: EncodeOpts = serde_yaml::from_str("byte_order: little\nmax_depth: 8\n").unwrap();
    assert_eq!(opts, EncodeOpts::bedrock().max_depth(8));

    let opts: EncodeOpts = serde_json::from_str(r#"{"max_depth": 3}"#).unwrap();
    assert_eq!(opts, EncodeOpts::new().max_depth(3));

    let opts: EncodeOpts = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, EncodeOpts::new());

    assert!(serde_json::from_str::<EncodeOpts>(r#"{"byte_order": "middle"}"#).is_err());
    assert!(serde_json::from_str::<EncodeOpts>(r#"{"order": "big"}"#).is_err());
}

#[test]
fn opts_to_config() {
    let json = serde_json::to_value(EncodeOpts::bedrock()).unwrap();
    assert_eq!(json["byte_order"], "little");
    assert_eq!(json["max_depth"], EncodeOpts::DEFAULT_MAX_DEPTH);
}
