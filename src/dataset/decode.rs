use rayon::prelude::*;

use crate::{
    dataset::points::{PointAttributeSet, PointCloud, PointRecord},
    foundation::{
        core::Vec3,
        error::{CloudError, CloudResult},
    },
};

/// Bytes per point record in the binary body.
pub const STRIDE: usize = 23;

const END_HEADER: &[u8] = b"end_header";
// `end_header` plus a single line terminator.
const END_HEADER_LEN: usize = 11;
const HEADER_SCAN_LIMIT: usize = 2000;
const LITTLE_ENDIAN_FORMAT: &str = "binary_little_endian";
const PARALLEL_MIN_RECORDS: usize = 16 * 1024;

/// What the ASCII header declares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlyHeader {
    /// Declared `element vertex` count.
    pub vertex_count: usize,
    /// Format token of the `format` line; always `binary_little_endian` once parsed.
    pub format: String,
    /// Byte offset of the first record.
    pub body_offset: usize,
}

/// Parse and validate the header at the start of `bytes`.
///
/// Only the first `format` line counts; the declaration must name
/// `binary_little_endian` exactly.
pub fn parse_header(bytes: &[u8]) -> CloudResult<PlyHeader> {
    let scan = &bytes[..bytes.len().min(HEADER_SCAN_LIMIT)];
    let marker = scan
        .windows(END_HEADER.len())
        .position(|w| w == END_HEADER)
        .ok_or(CloudError::MalformedHeader)?;

    let text = String::from_utf8_lossy(&scan[..marker]);

    let vertex_count = text
        .lines()
        .find_map(parse_vertex_line)
        .ok_or(CloudError::MissingVertexCount)?;

    let declared = text.lines().find_map(|line| {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some("format"), Some(f)) => Some(f.to_string()),
            _ => None,
        }
    });
    let format = match declared {
        Some(f) if f == LITTLE_ENDIAN_FORMAT => f,
        Some(other) => return Err(CloudError::unsupported_format(other)),
        None => return Err(CloudError::unsupported_format("<none>")),
    };

    Ok(PlyHeader {
        vertex_count,
        format,
        body_offset: marker + END_HEADER_LEN,
    })
}

fn parse_vertex_line(line: &str) -> Option<usize> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some("element"), Some("vertex"), Some(n)) => n.parse().ok(),
        _ => None,
    }
}

/// Decode a binary little-endian point buffer into a centered [`PointCloud`].
///
/// Records that do not fit completely in the buffer are dropped; the cloud then
/// holds `min(declared, body_len / STRIDE)` points.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_binary_ply(bytes: &[u8]) -> CloudResult<PointCloud> {
    let header = parse_header(bytes)?;
    let body = bytes.get(header.body_offset..).unwrap_or_default();

    let available = body.len() / STRIDE;
    let count = header.vertex_count.min(available);
    if count < header.vertex_count {
        tracing::warn!(
            declared = header.vertex_count,
            decoded = count,
            "binary body is short; dropping incomplete records"
        );
    }

    let records = &body[..count * STRIDE];
    let attributes: PointAttributeSet = if count >= PARALLEL_MIN_RECORDS {
        records
            .par_chunks_exact(STRIDE)
            .map(read_record)
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    } else {
        records.chunks_exact(STRIDE).map(read_record).collect()
    };

    tracing::debug!(points = attributes.len(), "decoded point records");
    Ok(PointCloud::from_attributes(attributes))
}

fn read_record(rec: &[u8]) -> PointRecord {
    PointRecord {
        position: Vec3::new(f32_at(rec, 0), f32_at(rec, 4), f32_at(rec, 8)),
        color: Vec3::new(
            f32::from(rec[12]) / 255.0,
            f32::from(rec[13]) / 255.0,
            f32::from(rec[14]) / 255.0,
        ),
        group_id: i32_at(rec, 15),
        part_id: i32_at(rec, 19),
    }
}

fn le4(rec: &[u8], offset: usize) -> [u8; 4] {
    let mut b = [0u8; 4];
    b.copy_from_slice(&rec[offset..offset + 4]);
    b
}

fn f32_at(rec: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes(le4(rec, offset))
}

fn i32_at(rec: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(le4(rec, offset))
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/decode.rs"]
mod tests;
