use std::collections::HashMap;
use std::io::BufRead;

use bytes::Bytes;
use log::trace;

use crate::bvalue::BValue;
use crate::error::BencodeError;
use crate::source::ByteSource;

// Containers nested deeper than this are rejected instead of recursing
// further down the call stack.
const MAX_DEPTH: usize = 64;

/// Reads the next bencode value of any kind.
///
/// Dispatches on the next byte without consuming it: `i` starts an integer,
/// `l` a list, `d` a dictionary, and anything else is taken for the length
/// prefix of a string. Consumes exactly one value's bytes and leaves the
/// source positioned immediately after it.
pub fn read_value<R: BufRead>(src: &mut ByteSource<R>) -> Result<BValue, BencodeError> {
    trace!("reading value");
    value_at(src, 0)
}

/// Reads an integer of the form `i<digits>e`, e.g. `i90e` is 90.
pub fn read_integer<R: BufRead>(src: &mut ByteSource<R>) -> Result<i64, BencodeError> {
    trace!("reading integer");
    integer(src)
}

/// Reads a byte string of the form `<length>:<bytes>`, e.g. `4:wiki`.
pub fn read_string<R: BufRead>(src: &mut ByteSource<R>) -> Result<Bytes, BencodeError> {
    trace!("reading string");
    string(src)
}

/// Reads a list of the form `l<values>e`. Elements may be of any kind,
/// dictionaries included.
pub fn read_list<R: BufRead>(src: &mut ByteSource<R>) -> Result<Vec<BValue>, BencodeError> {
    trace!("reading list");
    list_at(src, 0)
}

/// Reads a dictionary of the form `d<key><value>...e`. Keys are byte
/// strings; values may be of any kind.
pub fn read_dict<R: BufRead>(
    src: &mut ByteSource<R>,
) -> Result<HashMap<Bytes, BValue>, BencodeError> {
    trace!("reading dictionary");
    dict_at(src, 0)
}

fn value_at<R: BufRead>(src: &mut ByteSource<R>, depth: usize) -> Result<BValue, BencodeError> {
    if depth > MAX_DEPTH {
        return Err(BencodeError::NestingTooDeep);
    }

    match src.peek_one()? {
        b'i' => integer(src).map(BValue::Integer),
        b'l' => list_at(src, depth).map(BValue::List),
        b'd' => dict_at(src, depth).map(BValue::Dict),
        _ => string(src).map(BValue::ByteString),
    }
}

fn integer<R: BufRead>(src: &mut ByteSource<R>) -> Result<i64, BencodeError> {
    match src.read_byte() {
        Ok(b'i') => {}
        Ok(_) | Err(BencodeError::UnexpectedEnd) => return Err(BencodeError::InvalidInteger),
        Err(e) => return Err(e),
    }

    // A stream that ends before the closing marker is a malformed integer
    // here, not a bare end-of-input.
    let digits = match src.read_until(b'e') {
        Ok(digits) => digits,
        Err(BencodeError::UnexpectedEnd) => return Err(BencodeError::InvalidInteger),
        Err(e) => return Err(e),
    };

    std::str::from_utf8(&digits)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or(BencodeError::InvalidInteger)
}

fn string<R: BufRead>(src: &mut ByteSource<R>) -> Result<Bytes, BencodeError> {
    // An incomplete length prefix is a malformed string even when the
    // underlying condition is end-of-input.
    let prefix = match src.read_until(b':') {
        Ok(prefix) => prefix,
        Err(BencodeError::UnexpectedEnd) => return Err(BencodeError::InvalidString),
        Err(e) => return Err(e),
    };

    let length = std::str::from_utf8(&prefix)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or(BencodeError::InvalidString)?;

    // A truncated payload, unlike a truncated prefix, stays an end-of-input
    // error. Callers depend on the distinction.
    src.read_exact(length).map(Bytes::from)
}

fn list_at<R: BufRead>(
    src: &mut ByteSource<R>,
    depth: usize,
) -> Result<Vec<BValue>, BencodeError> {
    match src.read_byte() {
        Ok(b'l') => {}
        Ok(_) | Err(BencodeError::UnexpectedEnd) => return Err(BencodeError::InvalidList),
        Err(e) => return Err(e),
    }

    let mut items = Vec::new();
    loop {
        if src.peek_one()? == b'e' {
            src.read_byte()?;
            return Ok(items);
        }

        items.push(value_at(src, depth + 1)?);
    }
}

fn dict_at<R: BufRead>(
    src: &mut ByteSource<R>,
    depth: usize,
) -> Result<HashMap<Bytes, BValue>, BencodeError> {
    match src.read_byte() {
        Ok(b'd') => {}
        Ok(_) | Err(BencodeError::UnexpectedEnd) => return Err(BencodeError::InvalidDict),
        Err(e) => return Err(e),
    }

    let mut entries = HashMap::new();
    loop {
        if src.peek_one()? == b'e' {
            src.read_byte()?;
            return Ok(entries);
        }

        // Keys must be byte strings; anything else fails inside the string
        // reader when its length prefix does not parse.
        let key = string(src)?;
        let value = value_at(src, depth + 1)?;
        entries.insert(key, value);
    }
}
