// Reading model graphs from disk and writing GraphWalker documents
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use crate::graph::GraphWalkerDocument;
use crate::schema::ModelGraphDocument;
use crate::Result;

pub fn read_document<P: AsRef<Path>>(path: P) -> Result<ModelGraphDocument> {
    let file = File::open(path.as_ref())?;
    from_reader(BufReader::new(file))
}

pub fn from_reader<R: Read>(reader: R) -> Result<ModelGraphDocument> {
    Ok(serde_json::from_reader(reader)?)
}

pub fn from_str(raw: &str) -> Result<ModelGraphDocument> {
    Ok(serde_json::from_str(raw)?)
}

/// Serialize `doc`, two-space indented when `pretty` is set
pub fn write_document<W: Write>(writer: W, doc: &GraphWalkerDocument, pretty: bool) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    write_json(&mut writer, doc, pretty)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

pub fn to_string(doc: &GraphWalkerDocument, pretty: bool) -> Result<String> {
    let raw = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(raw)
}

fn write_json<W: Write, T: Serialize>(writer: W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}
