use ordered_base64::{
    decode, decode_no_pad, decode_uint, decode_uint_no_pad, encode, encode_no_pad, encode_uint, encode_uint_no_pad, DecodeError, Endianness,
    PADDED, UNPADDED,
};
use proptest::prelude::*;
use regex::Regex;

const STRING_CASES: [&str; 6] = [
    "test",
    "test string",
    "a longer sentence.",
    r"1234567890-=qwertyuiop[]\asdfghjkl;'zxcvbnm,./",
    "6akCZrAL9jcdzLw85Rq0",
    "p8G5ZHz2tyOwNxcuyMCO\nHj0fGWegp8nnYWkgS6uc\nS41pxEOI0HkaHqwFvnsg\nmPvpwv2zd4cTJAHfBZNa",
];

fn large_input() -> Vec<u8> {
    (0..8192u32).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8).collect()
}

#[test]
fn encode_and_decode() {
    for case in STRING_CASES {
        assert_eq!(decode(encode(case)), Ok(case.as_bytes().to_vec()), "{}", case);
        assert_eq!(decode_no_pad(encode_no_pad(case)), Ok(case.as_bytes().to_vec()), "{}", case);
    }
}

#[test]
fn encode_and_decode_edges() {
    assert_eq!(encode(b""), "");
    assert_eq!(encode_no_pad(b""), "");
    assert_eq!(decode(""), Ok(vec![]));
    assert_eq!(decode_no_pad(""), Ok(vec![]));
    for byte in 0..=u8::MAX {
        assert_eq!(decode(encode([byte])), Ok(vec![byte]));
        assert_eq!(decode_no_pad(encode_no_pad([byte])), Ok(vec![byte]));
    }
    let input = large_input();
    assert_eq!(encode(&input).len(), 10924);
    assert_eq!(encode_no_pad(&input).len(), 10923);
    assert_eq!(decode(encode(&input)), Ok(input.clone()));
    assert_eq!(decode_no_pad(encode_no_pad(&input)), Ok(input));
}

#[test]
fn encode_and_decode_uint() {
    for endianness in [Endianness::Big, Endianness::Little] {
        for value in [0, 1, 2, 42, 1234567890, u64::MAX] {
            assert_eq!(decode_uint(encode_uint(value, endianness), endianness), Ok(value));
            assert_eq!(decode_uint_no_pad(encode_uint_no_pad(value, endianness), endianness), Ok(value));
        }
    }
}

#[test]
fn decode_errors() {
    assert!(matches!(decode("Oa!j"), Err(DecodeError::InvalidCharacter { character: b'!', index: 2 })));
    assert!(matches!(decode_no_pad("Oa j"), Err(DecodeError::InvalidCharacter { character: b' ', index: 2 })));
    assert_eq!(decode("Oaw"), Err(DecodeError::InvalidLength { length: 3 }));
    assert_eq!(decode("OaxjN"), Err(DecodeError::InvalidLength { length: 5 }));
    assert_eq!(decode_no_pad("OaxjN"), Err(DecodeError::InvalidLength { length: 5 }));
    assert_eq!(decode_uint("Oaxj", Endianness::Big), Err(DecodeError::InvalidLength { length: 4 }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_use() {
    let input = large_input();
    let tasks: Vec<_> = (0..32)
        .map(|task| {
            let input = input[task * 100..].to_vec();
            tokio::spawn(async move {
                let codec = if task % 2 == 0 { &PADDED } else { &UNPADDED };
                codec.decode(codec.encode(&input)) == Ok(input)
            })
        })
        .collect();
    for task in tasks {
        assert!(task.await.unwrap());
    }
}

proptest! {
    #[test]
    fn round_trip(input in prop::collection::vec(any::<u8>(), 0..2048)) {
        prop_assert_eq!(decode(encode(&input)), Ok(input.clone()));
        prop_assert_eq!(decode_no_pad(encode_no_pad(&input)), Ok(input));
    }

    #[test]
    fn round_trip_uint(value in any::<u64>()) {
        for endianness in [Endianness::Big, Endianness::Little] {
            prop_assert_eq!(decode_uint(encode_uint(value, endianness), endianness), Ok(value));
            prop_assert_eq!(decode_uint_no_pad(encode_uint_no_pad(value, endianness), endianness), Ok(value));
        }
    }

    #[test]
    fn output_is_url_safe(input in prop::collection::vec(any::<u8>(), 0..256)) {
        let padded = Regex::new(r"^[-0-9A-Z_a-z]*={0,2}$").unwrap();
        let unpadded = Regex::new(r"^[-0-9A-Z_a-z]*$").unwrap();
        let encoded = encode(&input);
        prop_assert!(padded.is_match(&encoded));
        prop_assert_eq!(encoded.len() % 4, 0);
        let encoded = encode_no_pad(&input);
        prop_assert!(unpadded.is_match(&encoded));
        prop_assert_eq!(encoded.len(), (input.len() * 8 + 5) / 6);
    }
}
