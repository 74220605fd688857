#![no_main]

use libfuzzer_sys::fuzz_target;
use outline_annotator::{resolve_loop, Point};

// Je 4 Bytes ergeben einen Punkt im Bereich -128..128
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
    let gesture = decode_points(data);
    if let Ok(ring) = resolve_loop(&gesture) {
        assert!(ring.is_closed(), "akzeptierter Umriss muss geschlossen sein");
    }
});
