use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use thousands::Separable;

use crate::cut_path::{CutPath, CutSegment, SegmentKind};
use crate::entities::{PlacedPart, SheetSize};
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::Point;
use crate::util::{MachineConfig, assertions};

/// Derives a tool-path from a finished layout with a nearest-neighbour heuristic.
///
/// Every sheet is processed separately, starting from the machine home position (the origin).
/// From the current position the closest uncut part (measured to its lower-left corner) is
/// visited next and its outline is cut counter-clockwise, ending where it started.
#[derive(Debug, Clone, Copy)]
pub struct CutPathOptimizer {
    /// Feed rate while cutting, in mm/min
    pub cut_rate: f32,
    /// Feed rate of rapid moves, in mm/min
    pub rapid_rate: f32,
}

impl CutPathOptimizer {
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            cut_rate: config.cut_rate_mm_min,
            rapid_rate: config.rapid_rate_mm_min,
        }
    }

    pub fn optimize_path(&self, layout: &[PlacedPart], sheet: &SheetSize) -> CutPath {
        debug_assert!(assertions::layout_is_valid(layout, sheet));

        let mut path = CutPath::default();
        let per_sheet = layout.iter().into_group_map_by(|pp| pp.sheet_index);

        for sheet_index in per_sheet.keys().copied().sorted() {
            let mut uncut = per_sheet[&sheet_index].clone();
            //a sheet change is a reload, the head returns home
            let mut pen = Point::ORIGIN;

            while let Some((next_idx, distance)) = uncut
                .iter()
                .map(|pp| pen.distance_to(&pp.position()))
                .enumerate()
                .min_by_key(|(_, d)| OrderedFloat(*d))
            {
                let pp = uncut.remove(next_idx);

                path.push(SegmentKind::Move, sheet_index, pen, pp.position(), distance);
                for (from, to) in pp.rect().corners().into_iter().circular_tuple_windows() {
                    path.push(SegmentKind::Cut, sheet_index, from, to, from.distance_to(&to));
                }
                path.pierce_count += 1;
                pen = pp.position();
            }
        }

        path.estimated_time_seconds = (minutes(path.total_cut_length, self.cut_rate)
            + minutes(path.total_move_length, self.rapid_rate))
            * 60.0;

        debug!(
            "[CUT] path over {} parts: cut {} mm, rapid {} mm, est. {:.1}s",
            path.pierce_count,
            (path.total_cut_length.round() as u64).separate_with_commas(),
            (path.total_move_length.round() as u64).separate_with_commas(),
            path.estimated_time_seconds
        );

        path
    }
}

impl CutPath {
    fn push(&mut self, kind: SegmentKind, sheet_index: usize, from: Point, to: Point, length: f32) {
        match kind {
            SegmentKind::Move => self.total_move_length += length,
            SegmentKind::Cut => self.total_cut_length += length,
        }
        self.segments.push(CutSegment {
            kind,
            sheet_index,
            from,
            to,
            length,
        });
    }
}

/// Time needed to travel `length` at `rate` mm/min. A non-positive rate contributes nothing.
fn minutes(length: f32, rate: f32) -> f32 {
    match rate > 0.0 {
        true => length / rate,
        false => 0.0,
    }
}
