//! Editing the slide list of `ppt/presentation.xml`.
//!
//! Slides are listed in `<p:sldIdLst>` as `<p:sldId id=".." r:id=".."/>`
//! entries; the `r:id` names the presentation relationship to the slide part.
//! The document is edited as text so everything else in it is kept as is.

use memchr::memmem;
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::common::{Error, Result};

/// Smallest slide id PowerPoint accepts.
pub const MIN_SLIDE_ID: u32 = 256;

/// Elements that precede `<p:sldIdLst>` in a presentation, in schema order.
const PRECEDING_LISTS: [&str; 3] = [
    "</p:handoutMasterIdLst>",
    "</p:notesMasterIdLst>",
    "</p:sldMasterIdLst>",
];

/// Ids of the slides listed in the presentation, in show order.
pub fn slide_ids(xml: &str) -> Result<Vec<u32>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut ids = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"sldId" {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"id"
                            && let Ok(id) = atoi_simd::parse::<u32>(&attr.value)
                        {
                            ids.push(id);
                        }
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(format!("presentation.xml: {}", e))),
            _ => {},
        }
    }

    Ok(ids)
}

/// Id for the next slide: one past the largest id in use, at least 256.
pub fn next_slide_id(xml: &str) -> Result<u32> {
    let max = slide_ids(xml)?.into_iter().max();
    Ok(max.map_or(MIN_SLIDE_ID, |id| id.saturating_add(1).max(MIN_SLIDE_ID)))
}

/// Append a slide to the end of the slide list.
///
/// A missing `<p:sldIdLst>` is created after the master lists that precede
/// it. The document must use the `p:` and `r:` prefixes PowerPoint writes.
pub fn append_slide_id(xml: &str, id: u32, r_id: &str) -> Result<String> {
    let entry = format!(r#"<p:sldId id="{}" r:id="{}"/>"#, id, r_id);
    let bytes = xml.as_bytes();

    if let Some(close) = memmem::find(bytes, b"</p:sldIdLst>") {
        return Ok(splice(xml, close, close, &entry));
    }

    if let Some(empty) = memmem::find(bytes, b"<p:sldIdLst/>") {
        let list = format!("<p:sldIdLst>{}</p:sldIdLst>", entry);
        return Ok(splice(xml, empty, empty + "<p:sldIdLst/>".len(), &list));
    }

    let list = format!("<p:sldIdLst>{}</p:sldIdLst>", entry);
    for preceding in PRECEDING_LISTS {
        if let Some(pos) = memmem::find(bytes, preceding.as_bytes()) {
            let at = pos + preceding.len();
            return Ok(splice(xml, at, at, &list));
        }
    }

    Err(Error::InvalidFormat(
        "presentation.xml has neither a slide list nor a slide master list".to_string(),
    ))
}

fn splice(xml: &str, start: usize, end: usize, insert: &str) -> String {
    let mut out = String::with_capacity(xml.len() + insert.len());
    out.push_str(&xml[..start]);
    out.push_str(insert);
    out.push_str(&xml[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: &str = r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#;

    #[test]
    fn test_next_id_without_slides() {
        let xml = format!(
            r#"{}<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#,
            HEAD
        );
        assert_eq!(next_slide_id(&xml).unwrap(), MIN_SLIDE_ID);
    }

    #[test]
    fn test_append_to_existing_list() {
        let xml = format!(
            r#"{}<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:sldIdLst><p:sldId id="256" r:id="rId2"/><p:sldId id="260" r:id="rId3"/></p:sldIdLst></p:presentation>"#,
            HEAD
        );
        assert_eq!(next_slide_id(&xml).unwrap(), 261);

        let updated = append_slide_id(&xml, 261, "rId7").unwrap();
        assert!(updated.contains(
            r#"<p:sldId id="260" r:id="rId3"/><p:sldId id="261" r:id="rId7"/></p:sldIdLst>"#
        ));
        assert_eq!(slide_ids(&updated).unwrap(), [256, 260, 261]);
    }

    #[test]
    fn test_append_creates_list_after_masters() {
        let xml = format!(
            r#"{}<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst><p:notesMasterIdLst><p:notesMasterId r:id="rId4"/></p:notesMasterIdLst><p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#,
            HEAD
        );
        let updated = append_slide_id(&xml, 256, "rId5").unwrap();
        assert!(updated.contains(
            r#"</p:notesMasterIdLst><p:sldIdLst><p:sldId id="256" r:id="rId5"/></p:sldIdLst><p:sldSz"#
        ));
    }

    #[test]
    fn test_append_fills_empty_list() {
        let xml = format!(
            r#"{}<p:sldMasterIdLst/><p:sldIdLst/></p:presentation>"#,
            HEAD
        );
        let updated = append_slide_id(&xml, 256, "rId2").unwrap();
        assert_eq!(slide_ids(&updated).unwrap(), [256]);
    }

    #[test]
    fn test_append_without_anchor_fails() {
        let xml = format!("{}</p:presentation>", HEAD);
        assert!(matches!(
            append_slide_id(&xml, 256, "rId2"),
            Err(Error::InvalidFormat(_))
        ));
    }
}
