//! Serialization of flattened records into the `RegisterUsage` document.
//!
//! Layout is one record per line:
//!
//! ```text
//! {"RegisterUsage": [
//! {"gav": {"g": "org1", "a": "a", "v": "1.0"}, "DevelopmentDependency": false, "resolved": true},
//! {"gav": {"g": "org1", "a": "c", "v": "3.0"}, "DevelopmentDependency": false, "resolved": true, "parent_gav": {"g": "org1", "a": "a", "v": "1.0"}}
//! ]
//! }
//! ```

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use ivyscan_core::coordinate::ModuleCoordinate;
use ivyscan_core::usage::{Gav, UsageEntry};

use crate::flatten::FlatRecord;

/// Compact JSON with a space after every `:` and `,`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

/// Document entry for `record`. The parent is dropped when it is the root.
pub fn usage_entry(record: &FlatRecord, root: &ModuleCoordinate) -> UsageEntry {
    UsageEntry {
        gav: Gav::from(&record.coordinate),
        development_dependency: record.is_dev,
        resolved: record.resolved,
        parent_gav: record
            .parent
            .as_ref()
            .filter(|parent| *parent != root)
            .map(Gav::from),
    }
}

/// Write the full document for `records` to `out`.
pub fn write_manifest<W>(out: &mut W, records: &[FlatRecord], root: &ModuleCoordinate) -> io::Result<()>
where
    W: ?Sized + Write,
{
    out.write_all(b"{\"RegisterUsage\": [\n")?;
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.write_all(b",\n")?;
        }
        let mut ser = Serializer::with_formatter(&mut *out, SpacedFormatter);
        usage_entry(record, root).serialize(&mut ser)?;
    }
    if !records.is_empty() {
        out.write_all(b"\n")?;
    }
    out.write_all(b"]\n}\n")
}

/// Render the document into a string.
pub fn render_manifest(records: &[FlatRecord], root: &ModuleCoordinate) -> io::Result<String> {
    let mut buf = Vec::new();
    write_manifest(&mut buf, records, root)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
