use snapper::{Measurement, ScrollDirection, SnapOptions, SnapStops};

fn main() {
    // A wide carousel: 300px visible, 1000px of content.
    let m = Measurement::new(300.0, 1000.0);
    let stops = SnapStops::compute(&m, &SnapOptions::default());
    println!("mode={:?} stops={:?}", stops.mode(), stops.as_slice());

    let current = stops.nearest(650.0);
    println!("nearest(650)={current} at {}", stops.offset_of(current));

    if let Some(next) = stops.step_from(650.0, ScrollDirection::Forward) {
        println!("next stop: index={next} offset={}", stops.offset_of(next));
    }
    println!(
        "forward from the end: {:?}",
        stops.step_from(stops.last(), ScrollDirection::Forward)
    );
}
