// Example: a platform layer driving a carousel (scroll events, settle ticks, prev/next clicks).
use snapper_adapter::{
    Carousel, CarouselOptions, Controls, Indicator, IndicatorStrip, Measurement, ScrollBehavior,
    ScrollDirection, ScrollTrack, aria_current,
};

struct Track {
    visible: f64,
    content: f64,
    offset: f64,
}

impl ScrollTrack for Track {
    fn measure(&self) -> Measurement {
        Measurement::new(self.visible, self.content)
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        println!("  scroll_to({offset}, {behavior:?})");
        self.offset = offset;
    }
}

#[derive(Default)]
struct Dots {
    count: usize,
}

impl IndicatorStrip for Dots {
    fn rebuild(&mut self, indicators: &[Indicator]) {
        self.count = indicators.len();
        let labels: Vec<&str> = indicators.iter().map(|i| i.label.as_str()).collect();
        println!("  dots: {labels:?}");
    }

    fn mark_current(&mut self, current: usize) {
        let states: Vec<&str> = (0..self.count).map(|i| aria_current(i, current)).collect();
        println!("  aria-current: {states:?}");
    }
}

fn main() {
    let track = Track {
        visible: 300.0,
        content: 1000.0,
        offset: 0.0,
    };
    println!("mount");
    let Some(mut carousel) = Carousel::try_mount(
        Some(track),
        Some(Dots::default()),
        Controls::both(),
        CarouselOptions::default(),
    ) else {
        return;
    };

    println!("next, next");
    carousel.on_navigate(ScrollDirection::Forward);
    carousel.on_navigate(ScrollDirection::Forward);

    // The browser emits scroll events while the smooth scroll runs.
    for now_ms in (0..=160).step_by(16) {
        carousel.on_scroll(now_ms);
        carousel.tick(now_ms);
    }
    println!("settle");
    let mut now_ms = 160;
    while !carousel.tick(now_ms) {
        now_ms += 16;
    }
    println!("settled at t={now_ms}ms active={}", carousel.active_index());

    println!("resize to 500px");
    carousel.track_mut().visible = 500.0;
    carousel.on_resize();
}
