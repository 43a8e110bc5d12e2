//! GFF3 export of annotation records

use crate::feature::{Feature, FeatureMap};
use dfc_core::DfcError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const GFF3_HEADER: &str = "##gff-version 3";

/// Write features to a GFF3 file, one line per record.
///
/// `source` fills the second column (usually the tool name).
pub fn write_gff3<P: AsRef<Path>>(
    path: P,
    features: &FeatureMap,
    source: &str,
) -> Result<(), DfcError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_gff3_to_writer(&mut writer, features, source)?;
    writer.flush()?;
    Ok(())
}

pub fn write_gff3_to_writer<W: Write>(
    writer: &mut W,
    features: &FeatureMap,
    source: &str,
) -> Result<(), DfcError> {
    writeln!(writer, "{}", GFF3_HEADER)?;
    for records in features.values() {
        for feature in records {
            writeln!(writer, "{}", gff3_line(feature, source))?;
        }
    }
    Ok(())
}

/// Render one record as a tab-separated GFF3 line (no trailing newline)
pub fn gff3_line(feature: &Feature, source: &str) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t.\t{}\t.\t{}",
        escape(&feature.seq_id),
        escape(source),
        feature.feature_type,
        feature.location.left,
        feature.location.right,
        feature.location.strand,
        attributes(feature)
    )
}

fn attributes(feature: &Feature) -> String {
    let mut attrs = vec![format!("ID={}", escape(&feature.id))];
    for (key, value) in &feature.annotations {
        attrs.push(format!("{}={}", escape(key), escape(value)));
    }
    for (key, values) in &feature.qualifiers {
        let joined: Vec<String> = values.iter().map(|v| escape(v)).collect();
        attrs.push(format!("{}={}", escape(key), joined.join(",")));
    }
    attrs.join(";")
}

// Percent-encode characters reserved in GFF3 columns and attribute values
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ';' | '=' | '&' | ',' | '%' | '\t' | '\n' | '\r' => {
                out.push_str(&format!("%{:02X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}
