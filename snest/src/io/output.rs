use serde::Serialize;

use sheet_nest::cut_path::CutPath;
use sheet_nest::entities::{NestingResult, SheetSize};
use sheet_nest::io::ext_repr::ExtNestingLayout;

use crate::config::SnestConfig;
use crate::io::ext_repr::ExtJob;

#[derive(Serialize, Clone)]
pub struct SnestOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    pub solution: ExtSolution,
    pub config: SnestConfig,
}

/// Summary of a nesting run, without the rendered SVG
#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExtSolution {
    pub sheet: SheetSize,
    pub parts_per_sheet: usize,
    pub sheets_required: usize,
    pub utilization: f32,
    pub waste_area: f32,
    pub layout: ExtNestingLayout,
    pub cut_path: ExtCutPathSummary,
    /// Seconds since the runner started
    pub run_time_sec: f32,
}

#[derive(Serialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ExtCutPathSummary {
    pub total_cut_length: f32,
    pub total_move_length: f32,
    pub estimated_time_seconds: f32,
    pub pierce_count: usize,
}

impl ExtSolution {
    pub fn new(result: &NestingResult, cut_path: &CutPath, run_time_sec: f32) -> Self {
        Self {
            sheet: result.sheet,
            parts_per_sheet: result.parts_per_sheet,
            sheets_required: result.sheets_required,
            utilization: result.utilization,
            waste_area: result.waste_area,
            layout: result.layout_json.clone(),
            cut_path: ExtCutPathSummary {
                total_cut_length: cut_path.total_cut_length,
                total_move_length: cut_path.total_move_length,
                estimated_time_seconds: cut_path.estimated_time_seconds,
                pierce_count: cut_path.pierce_count,
            },
            run_time_sec,
        }
    }
}
