#![no_main]

use libfuzzer_sys::fuzz_target;
use outline_annotator::{resolve_split, Curve, Point};

fn decode_points(data: &[u8]) -> Vec<Point> {
    data.chunks_exact(4)
        .map(|c| {
            let x = i16::from_le_bytes([c[0], c[1]]) as f64 / 256.0;
            let y = i16::from_le_bytes([c[2], c[3]]) as f64 / 256.0;
            Point::new(x, y)
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    // Fester Eltern-Ring, die Geste kommt aus dem Fuzzer
    let parent = Curve::from_xy(&[
        (-50.0, -50.0),
        (50.0, -50.0),
        (50.0, 50.0),
        (-50.0, 50.0),
        (-50.0, -50.0),
    ]);
    let gesture = decode_points(data);
    if let Ok(child) = resolve_split(&parent, &gesture) {
        assert!(child.is_closed(), "Kind-Region muss geschlossen sein");
        assert_eq!(parent.len(), 5, "Eltern-Ring darf sich nicht ändern");
    }
});
