//! XML parsing modules for Excel files.
//!
//! This module contains specialized parsers for the XML parts of an Excel
//! workbook (.xlsx) that questions are read from, plus the text-run helper
//! shared by string tables and inline strings.

pub mod workbook_parser;
pub mod worksheet_parser;

use crate::common::xml::{elements, unescape_xml};

/// Namespace prefix (with colon) the part uses for `root`, e.g. `x:` for
/// `<x:worksheet>`. Most producers use the default namespace and get `""`.
pub(crate) fn namespace_prefix<'a>(xml: &'a str, root: &str) -> &'a str {
    for lt in memchr::memchr_iter(b'<', xml.as_bytes()) {
        let rest = &xml[lt + 1..];
        let name_len = rest
            .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        let prefix_len = name.rfind(':').map_or(0, |colon| colon + 1);
        if &name[prefix_len..] == root {
            return &rest[..prefix_len];
        }
    }
    ""
}

/// Plain text of a rich-text container (`<si>` or `<is>`).
///
/// The `<t>` runs are concatenated in order and unescaped. Phonetic runs
/// (`<rPh>`) carry reading hints, not cell text, and are left out.
pub fn text_runs(xml: &str, prefix: &str) -> String {
    let phonetic: Vec<(usize, usize)> = elements(xml, &format!("{}rPh", prefix))
        .map(|e| (e.start, e.end))
        .collect();

    let mut text = String::new();
    for run in elements(xml, &format!("{}t", prefix)) {
        if phonetic.iter().any(|&(start, end)| run.start > start && run.start < end) {
            continue;
        }
        text.push_str(&unescape_xml(run.text()));
    }
    text
}
