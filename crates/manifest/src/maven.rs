use anyhow::{Context, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Extract the project version from Maven POM content using quick-xml.
///
/// Without a property name this returns the text of the first `<version>`
/// element sitting directly under the document root, so `<parent><version>`
/// and dependency versions are skipped. With a property name it returns the
/// text of the first element whose local name equals the property, wherever
/// it occurs (Maven `<properties>` blocks).
///
/// # Errors
/// Returns error if the XML is malformed or the requested element is absent.
pub fn version_from_maven(content: &str, property: Option<&str>) -> Result<String> {
    match property {
        Some(name) => element_text(content, name.as_bytes())?
            .with_context(|| format!("No <{name}> element found in POM")),
        None => top_level_version(content)?.context("No <version> element found in POM"),
    }
}

/// Text of the first `<version>` element that is a direct child of the root
fn top_level_version(content: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut in_version = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                depth += 1;
                in_version = depth == 2 && e.local_name().as_ref() == b"version";
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
                in_version = false;
            }
            Ok(Event::Text(e)) => {
                if in_version {
                    let text = e.xml_content()?;
                    return Ok(Some(text.trim().to_string()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(anyhow::anyhow!("XML parsing error: {e}")),
        }
        buf.clear();
    }
    Ok(None)
}

/// Text of the first element whose local name matches, at any depth
fn element_text(content: &str, name: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_str(content);
    let mut buf = Vec::new();
    let mut in_target = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                in_target = e.local_name().as_ref() == name;
            }
            Ok(Event::End(_)) => {
                in_target = false;
            }
            Ok(Event::Text(e)) => {
                if in_target {
                    let text = e.xml_content()?;
                    return Ok(Some(text.trim().to_string()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(anyhow::anyhow!("XML parsing error: {e}")),
        }
        buf.clear();
    }
    Ok(None)
}
