//! PRTG XML document rendering and emission
//!
//! Serializes a [`Report`] into the XML shape PRTG's EXE/Script Advanced
//! sensor expects: a `<prtg>` root holding either one `<result>` block per
//! channel or the `<error>`/`<text>` marker. The document always goes to
//! standard output (that is the wire PRTG reads); a configured output file
//! receives the same bytes.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use log::{debug, warn};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::logging::DiagnosticLog;

use super::{Channel, Report};

/// Renders the report as the complete PRTG XML document
///
/// Rendering is pure: the same report always yields byte-identical XML.
pub fn render(report: &Report) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("prtg")))?;

    match report {
        Report::Measurements(channels) => {
            for channel in channels {
                write_channel(&mut writer, channel)?;
            }
        }
        Report::Failure => {
            write_text_element(&mut writer, "error", "1")?;
            write_text_element(&mut writer, "text", "error")?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("prtg")))?;

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// Writes one `<result>` block for a channel
fn write_channel<W: std::io::Write>(writer: &mut Writer<W>, channel: &Channel) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("result")))?;
    write_text_element(writer, "channel", channel.name)?;
    write_text_element(writer, "customunit", channel.unit)?;
    write_text_element(writer, "float", flag(channel.is_float))?;
    write_text_element(writer, "value", &channel.value)?;
    write_text_element(writer, "showchart", flag(channel.show_chart))?;
    write_text_element(writer, "showtable", flag(channel.show_table))?;
    writer.write_event(Event::End(BytesEnd::new("result")))?;
    Ok(())
}

/// Writes `<tag>text</tag>` on one line
fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Emits the rendered document to standard output and the optional file
///
/// Standard output is what the monitoring platform consumes, so it always
/// happens first. A file write failure is recorded but does not fail the
/// run: the document has already reached the platform at that point.
pub fn emit(document: &str, output_path: Option<&Path>, diag: &DiagnosticLog) {
    println!("{document}");

    if let Some(path) = output_path {
        match fs::write(path, format!("{document}\n")) {
            Ok(()) => {
                debug!("mirrored sensor document to {}", path.display());
                diag.record(&format!("wrote sensor document to {}", path.display()));
            }
            Err(err) => {
                warn!("failed to write {}: {err}", path.display());
                diag.record(&format!("failed to write {}: {err}", path.display()));
            }
        }
    }
}
