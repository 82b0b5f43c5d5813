use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{PlacedPart, Rotation, SheetSize, sheet_stats};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Vertical gap between two consecutive sheets, as a fraction of the sheet length
const SHEET_GAP_FRACTION: f32 = 0.1;

/// Draws all consumed sheets stacked on top of each other, each in its own `<g id="sheet_{i}">`.
pub fn layout_to_svg(
    layout: &[PlacedPart],
    sheet: &SheetSize,
    sheets_required: usize,
    options: &SvgDrawOptions,
) -> Document {
    let theme = &options.theme;
    let sheet_bbox = sheet.bbox();
    let gap = sheet.length * SHEET_GAP_FRACTION;
    let n_sheets = sheets_required.max(1);

    let total_height = n_sheets as f32 * sheet.length + (n_sheets - 1) as f32 * gap;
    let margin = 0.05 * f32::max(sheet.width, sheet.length);
    let vbox_svg = (
        -margin,
        -margin,
        sheet.width + 2.0 * margin,
        total_height + 2.0 * margin,
    );

    let stroke_width =
        f32::min(sheet.width, sheet.length) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f32::min(sheet.width, sheet.length) * 0.025;

    let stats = sheet_stats(layout, sheet);
    let mut parts_per_sheet = layout.iter().into_group_map_by(|pp| pp.sheet_index);

    let mut document = Document::new()
        .set("viewBox", vbox_svg)
        .set("xmlns:xlink", "http://www.w3.org/1999/xlink");

    for sheet_index in 0..sheets_required {
        let y_offset = sheet_index as f32 * (sheet.length + gap);
        let utilization = stats.get(sheet_index).map_or(0.0, |s| s.utilization);
        let parts = parts_per_sheet.remove(&sheet_index).unwrap_or_default();

        //draw the sheet itself
        let mut sheet_group = Group::new()
            .set("id", format!("sheet_{sheet_index}"))
            .set("transform", format!("translate(0 {y_offset})"))
            .add(
                svg_util::data_to_path(
                    svg_util::aa_rect_data(sheet_bbox),
                    &[
                        ("fill", &*format!("{}", theme.sheet_fill)),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                    ],
                )
                .add(Title::new(format!(
                    "sheet {}, {} x {}, parts: {}, utilization: {:.3}%",
                    sheet_index,
                    sheet.width,
                    sheet.length,
                    parts.len(),
                    utilization
                ))),
            );

        //draw the parts
        for pp in parts {
            let fill = match pp.rotation {
                Rotation::Deg0 => theme.part_fill,
                Rotation::Deg90 => theme.rotated_part_fill,
            };
            let stroke = svg_util::change_brightness(fill, 0.5);
            let title = Title::new(format!(
                "part, id: {}, pos: ({:.3}, {:.3}), size: {:.3} x {:.3}, rotation: {}",
                pp.part_id,
                pp.x,
                pp.y,
                pp.width,
                pp.height,
                pp.rotation.degrees()
            ));
            sheet_group = sheet_group.add(
                svg_util::data_to_path(
                    svg_util::aa_rect_data(pp.rect()),
                    &[
                        ("fill", &*format!("{}", fill)),
                        ("stroke-width", &*format!("{}", stroke_width)),
                        ("stroke", &*format!("{}", stroke)),
                        ("fill-opacity", "0.8"),
                    ],
                )
                .add(title),
            );

            if options.draw_labels {
                let center = pp.rect().centroid();
                let label_size = f32::min(font_size, 0.25 * f32::min(pp.width, pp.height));
                sheet_group = sheet_group.add(
                    Text::new(pp.part_id.clone())
                        .set("x", center.x())
                        .set("y", center.y())
                        .set("font-size", label_size)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "middle")
                        .set("fill", format!("{}", theme.label_fill)),
                );
            }
        }

        //print some information above the top left of the sheet
        let label = Text::new(format!(
            "sheet: {} | width: {:.3} | length: {:.3} | utilization: {:.3}%",
            sheet_index, sheet.width, sheet.length, utilization
        ))
        .set("x", 0.0)
        .set("y", -0.5 * font_size)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("font-weight", "500");

        document = document.add(sheet_group.add(label));
    }

    document
}
