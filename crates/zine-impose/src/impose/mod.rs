//! Zine imposition - reordering pages onto fold-ready sheets
//!
//! This module orchestrates the imposition process:
//! 1. Plan the saddle-fold page order
//! 2. Render each planned slot pair onto one landscape output sheet
//! 3. Draw the fold guide on the first sheet

mod io;
mod sheet;

pub use io::{load_pdf, save_pdf};

use crate::constants::mm_to_pt;
use crate::options::ImpositionOptions;
use crate::plan::ImpositionPlan;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};

/// Main imposition function
pub async fn impose(document: &Document, options: &ImpositionOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_sync(&document, &options)).await?
}

fn impose_sync(document: &Document, options: &ImpositionOptions) -> Result<Document> {
    let pages = document.get_pages();
    let page_ids: Vec<ObjectId> = pages.values().copied().collect();

    // Fails on an empty document before any rendering decisions are made
    let plan = ImpositionPlan::build(page_ids.len(), options.fill_position)?;
    log::debug!(
        "planned {} output sheets for {} source pages ({} filler)",
        plan.sheet_count(),
        plan.source_pages(),
        plan.filler_pages()
    );

    let (sheet_width_pt, sheet_height_pt) = sheet_dimensions_pt(options);

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();

    for (sheet_idx, faces) in plan.sheets().enumerate() {
        let page_id = sheet::render_sheet(
            &mut output,
            document,
            &page_ids,
            faces,
            sheet_width_pt,
            sheet_height_pt,
            pages_tree_id,
            options.fold_guide && sheet_idx == 0,
            options.scaling_mode,
        )?;
        page_refs.push(Object::Reference(page_id));
    }

    finalize_document(&mut output, pages_tree_id, page_refs);
    Ok(output)
}

/// Output sheet dimensions in points
fn sheet_dimensions_pt(options: &ImpositionOptions) -> (f32, f32) {
    let (width_mm, height_mm) = options
        .output_paper_size
        .dimensions_with_orientation(options.output_orientation);
    (mm_to_pt(width_mm), mm_to_pt(height_mm))
}

/// Create pages tree and catalog, finalize document structure
fn finalize_document(output: &mut Document, pages_tree_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
