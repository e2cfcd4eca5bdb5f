//! Lightweight scanning over XML text.
//!
//! SpreadsheetML parts are flat and regular, so cell and string data is
//! located with `memchr` searches instead of a full event parser. These
//! helpers find elements by local name and read attribute values out of a
//! start tag. Values are returned raw; callers unescape them.

use memchr::memmem;

/// One element found by [`next_element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    /// Offset of the opening `<` in the scanned text
    pub start: usize,
    /// The start tag, from `<` through `>`
    pub start_tag: &'a str,
    /// Content between start and end tag, `None` for `<x/>`
    pub inner: Option<&'a str>,
    /// Offset just past the element
    pub end: usize,
}

impl<'a> Element<'a> {
    /// Attribute value from the start tag.
    #[inline]
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        attribute(self.start_tag, name)
    }

    /// Content, treating a self-closing element as empty.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.inner.unwrap_or("")
    }
}

/// Find the next `<name ...>` element at or after `from`.
///
/// Elements with the same name must not nest. A start tag without a
/// matching end tag ends the scan.
pub fn next_element<'a>(xml: &'a str, name: &str, from: usize) -> Option<Element<'a>> {
    let bytes = xml.as_bytes();
    let open = format!("<{}", name);
    let close = format!("</{}>", name);
    let mut pos = from;

    loop {
        let start = pos + memmem::find(bytes.get(pos..)?, open.as_bytes())?;
        let after_name = start + open.len();
        match bytes.get(after_name) {
            Some(b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n') => {},
            // Longer name with the same prefix, e.g. `<cols` when looking for `<c`
            Some(_) => {
                pos = after_name;
                continue;
            },
            None => return None,
        }

        let gt = after_name + memchr::memchr(b'>', &bytes[after_name..])?;
        let start_tag = &xml[start..=gt];

        if bytes[gt - 1] == b'/' {
            return Some(Element {
                start,
                start_tag,
                inner: None,
                end: gt + 1,
            });
        }

        let content_start = gt + 1;
        let content_len = memmem::find(&bytes[content_start..], close.as_bytes())?;
        return Some(Element {
            start,
            start_tag,
            inner: Some(&xml[content_start..content_start + content_len]),
            end: content_start + content_len + close.len(),
        });
    }
}

/// Iterate over every `<name>` element in `xml`.
pub fn elements<'a, 'n>(xml: &'a str, name: &'n str) -> impl Iterator<Item = Element<'a>> + 'n
where
    'a: 'n,
{
    let mut pos = 0;
    std::iter::from_fn(move || {
        let element = next_element(xml, name, pos)?;
        pos = element.end;
        Some(element)
    })
}

/// Raw value of attribute `name` in a start tag.
///
/// The attribute name must be preceded by whitespace, so `r` does not match
/// inside `xr:uid`. Either quote style is accepted.
pub fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let bytes = tag.as_bytes();
    for found in memmem::find_iter(bytes, name.as_bytes()) {
        if found == 0 || !bytes[found - 1].is_ascii_whitespace() {
            continue;
        }
        let mut i = found + name.len();
        while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
            i += 1;
        }
        if bytes.get(i) != Some(&b'=') {
            continue;
        }
        i += 1;
        while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
            i += 1;
        }
        let quote = match bytes.get(i) {
            Some(&q @ (b'"' | b'\'')) => q,
            _ => continue,
        };
        let value_start = i + 1;
        let len = memchr::memchr(quote, &bytes[value_start..])?;
        return Some(&tag[value_start..value_start + len]);
    }
    None
}
