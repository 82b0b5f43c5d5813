use itertools::Itertools;

use crate::entities::{PlacedPart, SheetSize, sheet_stats};
use crate::io::ext_repr::{ExtNestingLayout, ExtPlacedPart, ExtPosition, ExtSheetLayout, ExtSize};

/// Exports a layout to its external representation.
/// Every consumed sheet gets an entry, even when no part ended up on it.
pub fn export_layout(
    layout: &[PlacedPart],
    sheet: &SheetSize,
    sheets_required: usize,
) -> ExtNestingLayout {
    let mut parts_per_sheet = layout.iter().into_group_map_by(|pp| pp.sheet_index);
    let stats = sheet_stats(layout, sheet);

    let sheets = (0..sheets_required)
        .map(|sheet_index| {
            let parts = parts_per_sheet
                .remove(&sheet_index)
                .unwrap_or_default()
                .into_iter()
                .map(export_placed_part)
                .collect_vec();
            let utilization = stats.get(sheet_index).map_or(0.0, |s| s.utilization);

            ExtSheetLayout {
                sheet_index,
                sheet_size: *sheet,
                part_count: parts.len(),
                utilization,
                parts,
            }
        })
        .collect();

    ExtNestingLayout {
        total_sheets: sheets_required,
        sheets,
    }
}

pub fn export_placed_part(pp: &PlacedPart) -> ExtPlacedPart {
    ExtPlacedPart {
        part_id: pp.part_id.clone(),
        position: ExtPosition { x: pp.x, y: pp.y },
        size: ExtSize {
            width: pp.width,
            height: pp.height,
        },
        rotation: pp.rotation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Rotation;

    #[test]
    fn parts_are_grouped_per_sheet() {
        let sheet = SheetSize::new(100.0, 100.0);
        let placed = |id: &str, sheet_index: usize, x: f32| PlacedPart {
            part_id: id.into(),
            part_index: 0,
            sheet_index,
            x,
            y: 0.0,
            rotation: Rotation::Deg90,
            width: 20.0,
            height: 50.0,
        };
        let layout = vec![placed("a", 0, 0.0), placed("b", 1, 0.0), placed("c", 0, 20.0)];
        let ext = export_layout(&layout, &sheet, 2);

        assert_eq!(ext.total_sheets, 2);
        assert_eq!(ext.sheets[0].part_count, 2);
        assert_eq!(ext.sheets[1].part_count, 1);
        assert_eq!(
            ext.sheets[0].parts.iter().map(|p| p.part_id.as_str()).collect_vec(),
            vec!["a", "c"]
        );
        assert!((ext.sheets[0].utilization - 20.0).abs() < 1e-4);
    }

    #[test]
    fn serialized_shape() {
        let sheet = SheetSize::new(1000.0, 2000.0);
        let layout = vec![PlacedPart {
            part_id: "bracket".into(),
            part_index: 0,
            sheet_index: 0,
            x: 10.0,
            y: 20.0,
            rotation: Rotation::Deg90,
            width: 50.0,
            height: 100.0,
        }];
        let json = serde_json::to_value(export_layout(&layout, &sheet, 1)).unwrap();

        assert_eq!(json["totalSheets"], 1);
        let sheet_json = &json["sheets"][0];
        assert_eq!(sheet_json["sheetIndex"], 0);
        assert_eq!(sheet_json["sheetSize"]["width"], 1000.0);
        assert_eq!(sheet_json["partCount"], 1);
        let part_json = &sheet_json["parts"][0];
        assert_eq!(part_json["partId"], "bracket");
        assert_eq!(part_json["position"], serde_json::json!({"x": 10.0, "y": 20.0}));
        assert_eq!(part_json["size"]["height"], 100.0);
        assert_eq!(part_json["rotation"], 90);
    }
}
