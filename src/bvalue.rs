use bytes::Bytes;
use std::collections::HashMap;

/// A decoded bencode value.
///
/// Bencode has four data types: integers, byte strings, lists, and
/// dictionaries. Byte strings are raw bytes and not guaranteed to be valid
/// UTF-8. Dictionary keys are always byte strings; the decoder does not
/// validate key ordering, and a repeated key keeps its last value.
#[derive(Debug, Clone, PartialEq)]
pub enum BValue {
    Integer(i64),
    ByteString(Bytes),
    List(Vec<BValue>),
    Dict(HashMap<Bytes, BValue>),
}

impl BValue {
    /// Returns the value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            BValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a byte string, if it is one.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            BValue::ByteString(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the value as a UTF-8 string, if it is a byte string holding
    /// valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BValue::ByteString(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    /// Returns the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[BValue]> {
        match self {
            BValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Returns the value as a dictionary, if it is one.
    pub fn as_dict(&self) -> Option<&HashMap<Bytes, BValue>> {
        match self {
            BValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Looks up a key if this value is a dictionary.
    pub fn get(&self, key: &[u8]) -> Option<&BValue> {
        self.as_dict()?.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        let int = BValue::Integer(42);
        assert_eq!(int.as_integer(), Some(42));
        assert_eq!(int.as_str(), None);

        let string = BValue::ByteString(Bytes::from_static(b"hello"));
        assert_eq!(string.as_str(), Some("hello"));
        assert_eq!(string.as_bytes(), Some(&Bytes::from_static(b"hello")));
        assert_eq!(string.as_integer(), None);

        let list = BValue::List(vec![BValue::Integer(1), BValue::Integer(2)]);
        assert_eq!(list.as_list().map(|l| l.len()), Some(2));
        assert_eq!(list.as_dict(), None);
    }

    #[test]
    fn test_non_utf8_bytestring_has_no_str_view() {
        let raw = BValue::ByteString(Bytes::from_static(&[0xff, 0xfe]));
        assert_eq!(raw.as_str(), None);
        assert!(raw.as_bytes().is_some());
    }

    #[test]
    fn test_dict_get() {
        let mut map = HashMap::new();
        map.insert(Bytes::from_static(b"foo"), BValue::Integer(7));
        let dict = BValue::Dict(map);

        assert_eq!(dict.get(b"foo"), Some(&BValue::Integer(7)));
        assert_eq!(dict.get(b"missing"), None);
        assert_eq!(BValue::Integer(0).get(b"foo"), None);
    }
}
