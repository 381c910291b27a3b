use crate::{
    dataset::{decode::STRIDE, points::PointAttributeSet},
    foundation::core::Vec3,
};

/// Write `points` in the binary little-endian layout read by
/// [`decode_binary_ply`](crate::decode_binary_ply).
///
/// Colors are quantized to `u8` with rounding.
pub fn encode_binary_ply(points: &PointAttributeSet) -> Vec<u8> {
    let header = header_for(points.len());
    let mut out = Vec::with_capacity(header.len() + points.len() * STRIDE);
    out.extend_from_slice(header.as_bytes());
    for rec in points.records() {
        write_record(&mut out, rec.position, rec.color, rec.group_id, rec.part_id);
    }
    out
}

fn header_for(count: usize) -> String {
    format!(
        "ply\n\
         format binary_little_endian 1.0\n\
         element vertex {count}\n\
         property float x\n\
         property float y\n\
         property float z\n\
         property uchar red\n\
         property uchar green\n\
         property uchar blue\n\
         property int group_id\n\
         property int part_id\n\
         end_header\n"
    )
}

fn write_record(out: &mut Vec<u8>, position: Vec3, color: Vec3, group_id: i32, part_id: i32) {
    for v in position.to_array() {
        out.extend_from_slice(&v.to_le_bytes());
    }
    for c in color.to_array() {
        out.push(quantize_unit(c));
    }
    out.extend_from_slice(&group_id.to_le_bytes());
    out.extend_from_slice(&part_id.to_le_bytes());
}

fn quantize_unit(c: f32) -> u8 {
    if c.is_nan() {
        return 0;
    }
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/encode.rs"]
mod tests;
