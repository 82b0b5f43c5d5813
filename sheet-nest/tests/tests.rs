#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use sheet_nest::entities::{Part, Rotation, SheetSize};
    use sheet_nest::packing::{PackingAlgorithm, PackingEngine, PackingOptions};
    use sheet_nest::sheet_selection::STANDARD_SHEETS;
    use sheet_nest::util::{FreeRectPolicy, GeneticConfig, MachineConfig, assertions};
    use sheet_nest::{NestOptions, Nester, NestingError};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn small_genetic() -> GeneticConfig {
        GeneticConfig {
            population_size: 12,
            generations: 8,
            ..GeneticConfig::default()
        }
    }

    fn engine() -> PackingEngine {
        PackingEngine::new(MachineConfig::default(), small_genetic())
    }

    fn mixed_parts() -> Vec<Part> {
        vec![
            Part::new("panel", 410.0, 290.0, 5),
            Part::new("strip", 60.0, 480.0, 9),
            Part::new("tab", 75.0, 45.0, 23),
            Part::new("plate", 250.0, 250.0, 4).with_rotatable(false),
        ]
    }

    #[test_case(PackingAlgorithm::MaxRects; "maxrects")]
    #[test_case(PackingAlgorithm::Guillotine; "guillotine")]
    #[test_case(PackingAlgorithm::Genetic; "genetic")]
    fn layouts_are_feasible(algorithm: PackingAlgorithm) {
        init_logger();
        let sheet = SheetSize::new(1000.0, 1000.0);
        let parts = mixed_parts();
        let options = PackingOptions {
            allow_rotation: true,
            algorithm,
        };
        let result = engine()
            .optimize(&parts, &sheet, &options, &mut SmallRng::seed_from_u64(0))
            .unwrap();

        assert!(assertions::layout_is_valid(&result.layout, &sheet));
        assert!(assertions::all_units_placed(&result.layout, &parts));
        assert!((0.0..=100.0).contains(&result.utilization));
        assert!(result.waste_area >= 0.0);

        //sheet indices are contiguous from 0
        let used = result.layout.iter().map(|pp| pp.sheet_index).collect::<Vec<_>>();
        assert!((0..result.sheets_required).all(|i| used.contains(&i)));

        //non-rotatable parts are never turned
        assert!(
            result
                .layout
                .iter()
                .filter(|pp| pp.part_id == "plate")
                .all(|pp| pp.rotation == Rotation::Deg0)
        );

        //summary is consistent with the layout
        let placed_area = result.placed_area();
        let consumed = result.sheets_required as f32 * sheet.area();
        assert!(approx_eq!(f32, result.waste_area, consumed - placed_area, epsilon = 1.0));
        assert!(approx_eq!(
            f32,
            result.utilization,
            placed_area / consumed * 100.0,
            epsilon = 1e-3
        ));
    }

    #[test_case(PackingAlgorithm::MaxRects; "maxrects")]
    #[test_case(PackingAlgorithm::Guillotine; "guillotine")]
    #[test_case(PackingAlgorithm::Genetic; "genetic")]
    fn rotation_disabled(algorithm: PackingAlgorithm) {
        let sheet = SheetSize::new(1000.0, 1000.0);
        let parts = mixed_parts();
        let options = PackingOptions {
            allow_rotation: false,
            algorithm,
        };
        let result = engine()
            .optimize(&parts, &sheet, &options, &mut SmallRng::seed_from_u64(1))
            .unwrap();
        assert!(result.layout.iter().all(|pp| pp.rotation == Rotation::Deg0));
        assert!(assertions::layout_is_valid(&result.layout, &sheet));
    }

    #[test_case(PackingAlgorithm::MaxRects, 100.0, 50.0, 37; "maxrects 100x50")]
    #[test_case(PackingAlgorithm::MaxRects, 70.0, 30.0, 100; "maxrects 70x30")]
    #[test_case(PackingAlgorithm::Guillotine, 100.0, 50.0, 37; "guillotine 100x50")]
    #[test_case(PackingAlgorithm::Guillotine, 70.0, 30.0, 100; "guillotine 70x30")]
    fn sheet_count_lower_bound(algorithm: PackingAlgorithm, w: f32, h: f32, quantity: usize) {
        let sheet = SheetSize::new(300.0, 200.0);
        let parts = vec![Part::new("p", w, h, quantity)];
        let options = PackingOptions {
            allow_rotation: false,
            algorithm,
        };
        let result = engine()
            .optimize(&parts, &sheet, &options, &mut SmallRng::seed_from_u64(0))
            .unwrap();

        let per_sheet = (sheet.width / w).floor() as usize * (sheet.length / h).floor() as usize;
        assert!(result.sheets_required >= quantity.div_ceil(per_sheet));
        assert_eq!(result.total_units(), quantity);
    }

    #[test_case(PackingAlgorithm::MaxRects; "maxrects")]
    #[test_case(PackingAlgorithm::Guillotine; "guillotine")]
    #[test_case(PackingAlgorithm::Genetic; "genetic")]
    fn placements_stay_within_sheet_edges(algorithm: PackingAlgorithm) {
        //two of these are a hair wider than the sheet
        let sheet = SheetSize::new(100.0, 100.0);
        let parts = vec![Part::new("sliver", 50.0005, 10.0, 2)];
        let options = PackingOptions {
            allow_rotation: false,
            algorithm,
        };
        let result = engine()
            .optimize(&parts, &sheet, &options, &mut SmallRng::seed_from_u64(0))
            .unwrap();

        assert_eq!(result.layout.len(), 2);
        for pp in &result.layout {
            assert!(pp.x + pp.width <= sheet.width, "{pp:?} exceeds the sheet width");
            assert!(pp.y + pp.height <= sheet.length, "{pp:?} exceeds the sheet length");
        }
        assert!(result.layout.iter().all(|pp| pp.x == 0.0));
        assert!(assertions::layout_is_valid(&result.layout, &sheet));
    }

    #[test]
    fn single_part_on_selected_sheet() {
        init_logger();
        let nester = Nester::default();
        let parts = vec![Part::new("bracket", 100.0, 50.0, 1)];
        let result = nester.nest(&parts, &NestOptions::default()).unwrap();

        assert_eq!(result.layout.len(), 1);
        let pp = &result.layout[0];
        assert_eq!((pp.sheet_index, pp.x, pp.y), (0, 0.0, 0.0));
        assert_eq!(pp.rotation, Rotation::Deg0);
        assert_eq!(result.sheets_required, 1);
        assert_eq!(result.parts_per_sheet, 1);
        assert!(STANDARD_SHEETS.contains(&result.sheet));
    }

    #[test_case(1; "one")]
    #[test_case(2; "two")]
    #[test_case(5; "five")]
    fn oversized_part_nests_on_custom_sheet(quantity: usize) {
        let nester = Nester::default();
        let parts = vec![Part::new("floor", 1300.0, 1300.0, quantity)];
        let result = nester.nest(&parts, &NestOptions::default()).unwrap();

        assert!(result.sheet.width >= 2600.0);
        assert!(result.sheet.length >= 1300.0 * quantity.div_ceil(2) as f32);
        assert_eq!(result.sheets_required, 1);
        assert!(assertions::layout_is_valid(&result.layout, &result.sheet));
    }

    #[test]
    fn genetic_is_reproducible() {
        let sheet = SheetSize::new(800.0, 600.0);
        let parts = mixed_parts();
        let options = PackingOptions {
            allow_rotation: true,
            algorithm: PackingAlgorithm::Genetic,
        };
        let run = |seed: u64| {
            engine()
                .optimize(&parts, &sheet, &options, &mut SmallRng::seed_from_u64(seed))
                .unwrap()
                .layout
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn nest_options_seed_is_reproducible() {
        let nester = Nester::new(MachineConfig::default(), small_genetic());
        let options = NestOptions {
            algorithm: PackingAlgorithm::Genetic,
            seed: Some(9),
            ..NestOptions::default()
        };
        let a = nester.nest(&mixed_parts(), &options).unwrap();
        let b = nester.nest(&mixed_parts(), &options).unwrap();
        assert_eq!(a.layout, b.layout);
        assert_eq!(a.layout_svg, b.layout_svg);
    }

    #[test]
    fn cut_path_of_single_part() {
        let nester = Nester::default();
        let parts = vec![Part::new("square", 20.0, 20.0, 1)];
        let options = NestOptions {
            sheet_size: Some(SheetSize::new(200.0, 200.0)),
            ..NestOptions::default()
        };
        let mut result = nester.nest(&parts, &options).unwrap();
        //shift the only part to (50, 50)
        result.layout[0].x = 50.0;
        result.layout[0].y = 50.0;

        let path = nester.cut_path(&result);
        assert!(approx_eq!(f32, path.total_move_length, f32::hypot(50.0, 50.0), epsilon = 1e-3));
        assert!(approx_eq!(f32, path.total_cut_length, 80.0, epsilon = 1e-3));
    }

    #[test_case(40.0, 40.0, 30; "squares")]
    #[test_case(70.0, 20.0, 25; "strips")]
    fn split_never_uses_more_sheets_than_drop(w: f32, h: f32, quantity: usize) {
        let sheet = SheetSize::new(200.0, 200.0);
        let parts = vec![Part::new("p", w, h, quantity)];
        let options = PackingOptions::default();
        let sheets_with = |policy: FreeRectPolicy| {
            let config = MachineConfig {
                free_rect_policy: policy,
                ..MachineConfig::default()
            };
            PackingEngine::new(config, GeneticConfig::default())
                .optimize(&parts, &sheet, &options, &mut SmallRng::seed_from_u64(0))
                .unwrap()
                .sheets_required
        };
        let split = sheets_with(FreeRectPolicy::Split);
        let drop = sheets_with(FreeRectPolicy::DropOverlapping);
        assert!(split <= drop);
        assert_eq!(drop, quantity);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let engine = engine();
        let sheet = SheetSize::new(100.0, 100.0);
        let options = PackingOptions::default();
        let mut rng = SmallRng::seed_from_u64(0);

        let zero_width = vec![Part::new("z", 0.0, 10.0, 1)];
        assert!(matches!(
            engine.optimize(&zero_width, &sheet, &options, &mut rng),
            Err(NestingError::InvalidGeometry { .. })
        ));

        let ok = vec![Part::new("ok", 10.0, 10.0, 1)];
        assert!(matches!(
            engine.optimize(&ok, &SheetSize::new(0.0, 100.0), &options, &mut rng),
            Err(NestingError::InvalidSheet { .. })
        ));

        let too_big = vec![Part::new("big", 150.0, 20.0, 1)];
        assert!(matches!(
            engine.optimize(&too_big, &sheet, &options, &mut rng),
            Err(NestingError::PartDoesNotFit { .. })
        ));

        //fits only when turned, which is not allowed
        let tall = vec![Part::new("tall", 20.0, 150.0, 1).with_rotatable(false)];
        let long_sheet = SheetSize::new(200.0, 100.0);
        assert!(matches!(
            engine.optimize(&tall, &long_sheet, &options, &mut rng),
            Err(NestingError::PartDoesNotFit { .. })
        ));
    }

    #[test]
    fn empty_job_yields_empty_result() {
        let result = engine()
            .optimize(
                &[],
                &SheetSize::new(100.0, 100.0),
                &PackingOptions::default(),
                &mut SmallRng::seed_from_u64(0),
            )
            .unwrap();
        assert_eq!(result.sheets_required, 0);
        assert_eq!(result.utilization, 0.0);
        assert_eq!(result.layout_json.total_sheets, 0);
    }

    #[test]
    fn result_json_shape() {
        let nester = Nester::default();
        let parts = vec![Part::new("bracket", 100.0, 50.0, 3)];
        let result = nester.nest(&parts, &NestOptions::default()).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["sheetsRequired"], 1);
        assert_eq!(json["partsPerSheet"], 3);
        assert_eq!(json["layoutJson"]["sheets"][0]["partCount"], 3);
        assert!(json["layoutSvg"].as_str().unwrap().contains("sheet_0"));
    }
}
