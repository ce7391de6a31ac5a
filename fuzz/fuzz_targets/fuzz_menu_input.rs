#![no_main]

use libfuzzer_sys::fuzz_target;

use piemenu::domain::value_objects::{Point, Size};
use piemenu::infrastructure::scripted::FixedMetrics;
use piemenu::{build_tree, layout, parse_records, PieShape};

fuzz_target!(|data: &[u8]| {
    // Arbitrary menu input: parse, build and lay out without panicking
    let Ok(records) = parse_records(data) else {
        return;
    };
    let Ok(mut tree) = build_tree(records) else {
        return;
    };
    layout(
        &mut tree,
        &PieShape::new(24, 1),
        &FixedMetrics::default(),
        Size::new(80, 48),
        Point::new(40, 24),
    );
});
