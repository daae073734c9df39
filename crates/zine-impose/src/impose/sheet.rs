//! Sheet rendering for zine imposition
//!
//! Each output sheet holds two slots side by side: the planned left and
//! right page of one sheet face. Blank slots leave their half untouched.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::marks::generate_fold_guide;
use crate::plan::SheetFaces;
use crate::render::{create_page_xobject, get_page_dimensions};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Render one output sheet to the output document.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_sheet(
    output: &mut Document,
    source: &Document,
    source_page_ids: &[ObjectId],
    faces: SheetFaces,
    sheet_width_pt: f32,
    sheet_height_pt: f32,
    parent_pages_id: ObjectId,
    draw_fold_guide: bool,
    scaling_mode: ScalingMode,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(sheet_width_pt),
            Object::Real(sheet_height_pt),
        ]),
    );

    let half_width = sheet_width_pt / 2.0;

    let mut content_ops = Vec::new();
    let mut xobjects = Dictionary::new();
    let mut xobject_cache: HashMap<ObjectId, ObjectId> = HashMap::new();

    // Left half at x = 0, right half at x = W/2
    let halves = [(faces.left, 0.0_f32), (faces.right, half_width)];

    for (pos, (slot, half_x)) in halves.into_iter().enumerate() {
        let Some(source_idx) = slot else {
            log::debug!("slot {}: blank", pos);
            continue;
        };
        if source_idx >= source_page_ids.len() {
            continue;
        }

        let source_page_id = source_page_ids[source_idx];
        let (src_width, src_height) =
            get_page_dimensions(source, source_page_id).unwrap_or(DEFAULT_PAGE_DIMENSIONS);

        let scale = calculate_scale(
            src_width,
            src_height,
            half_width,
            sheet_height_pt,
            scaling_mode,
        );
        let scaled_width = src_width * scale;
        let scaled_height = src_height * scale;

        // Center the scaled page within its half-sheet
        let x_pos = half_x + (half_width - scaled_width) / 2.0;
        let y_pos = (sheet_height_pt - scaled_height) / 2.0;

        let xobject_name = format!("P{}", pos);
        let xobject_id = create_page_xobject(output, source, source_page_id, &mut xobject_cache)?;
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

        content_ops.push(format!(
            "q {} 0 0 {} {} {} cm /{} Do Q\n",
            scale, scale, x_pos, y_pos, xobject_name
        ));
        log::debug!("slot {}: source page {}", pos, source_idx + 1);
    }

    if draw_fold_guide {
        content_ops.push(generate_fold_guide(sheet_width_pt, sheet_height_pt));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Scale factor for a source page placed into a half-sheet target
fn calculate_scale(src_w: f32, src_h: f32, target_w: f32, target_h: f32, mode: ScalingMode) -> f32 {
    match mode {
        ScalingMode::Fit => {
            let scale_w = target_w / src_w;
            let scale_h = target_h / src_h;
            scale_w.min(scale_h)
        }
        ScalingMode::Fill => {
            let scale_w = target_w / src_w;
            let scale_h = target_h / src_h;
            scale_w.max(scale_h)
        }
        ScalingMode::None => 1.0,
        ScalingMode::Stretch => {
            // Width scaling only (aspect ratio ignored)
            target_w / src_w
        }
    }
}
