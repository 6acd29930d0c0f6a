// Example: a phone-sized viewport that shows about one card at a time.
use snapper::{CardRect, Measurement, SnapOptions, SnapStops};

fn main() {
    let card = 300.0;
    let gap = 10.0;
    let cards = (0..4).map(|i| CardRect::new(i as f64 * (card + gap), card));
    let m = Measurement::new(320.0, 4.0 * (card + gap)).with_cards(cards);

    let opts = SnapOptions::default();
    println!("mode={:?} max_scroll={}", opts.mode_for(&m), m.max_scroll());

    let stops = SnapStops::compute(&m, &opts);
    for (i, off) in stops.iter().enumerate() {
        println!("dot {} -> {off}", i + 1);
    }
}
