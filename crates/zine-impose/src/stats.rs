use crate::options::ImpositionOptions;
use crate::plan::ImpositionPlan;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for the imposition without rendering anything
pub fn calculate_statistics(
    document: &Document,
    options: &ImpositionOptions,
) -> Result<ImpositionStatistics> {
    let source_pages = document.get_pages().len();
    let plan = ImpositionPlan::build(source_pages, options.fill_position)?;

    Ok(ImpositionStatistics {
        source_pages,
        padded_pages: plan.padded_pages(),
        filler_pages: plan.filler_pages(),
        output_sheets: plan.sheet_count(),
    })
}
