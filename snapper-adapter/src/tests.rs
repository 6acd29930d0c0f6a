use crate::*;

use alloc::string::String;
use alloc::vec::Vec;

#[derive(Clone, Debug, Default)]
struct FakeTrack {
    measurement: Measurement,
    offset: f64,
    requests: Vec<(f64, ScrollBehavior)>,
}

impl FakeTrack {
    fn new(visible: f64, content: f64) -> Self {
        Self {
            measurement: Measurement::new(visible, content),
            ..Self::default()
        }
    }
}

impl ScrollTrack for FakeTrack {
    fn measure(&self) -> Measurement {
        self.measurement.clone()
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        self.requests.push((offset, behavior));
        // Smooth scrolling lands on the target eventually.
        self.offset = offset;
    }
}

#[derive(Clone, Debug, Default)]
struct FakeDots {
    labels: Vec<String>,
    aria: Vec<&'static str>,
    rebuilds: usize,
}

impl IndicatorStrip for FakeDots {
    fn rebuild(&mut self, indicators: &[Indicator]) {
        self.labels = indicators.iter().map(|i| i.label.clone()).collect();
        self.aria = alloc::vec!["false"; indicators.len()];
        self.rebuilds += 1;
    }

    fn mark_current(&mut self, current: usize) {
        for (i, a) in self.aria.iter_mut().enumerate() {
            *a = aria_current(i, current);
        }
    }
}

fn mounted(visible: f64, content: f64) -> Carousel<FakeTrack, FakeDots> {
    Carousel::mount(
        Some(FakeTrack::new(visible, content)),
        Some(FakeDots::default()),
        Controls::both(),
        CarouselOptions::default(),
    )
    .unwrap()
}

#[test]
fn debounce_is_last_write_wins() {
    let mut d = Debounce::new(180);
    assert!(!d.poll(1_000));

    d.schedule(0);
    d.schedule(100);
    assert!(!d.poll(179));
    assert!(!d.poll(279));
    assert!(d.poll(280));
    assert!(!d.poll(400), "fires once per schedule");

    d.schedule(500);
    d.cancel();
    assert!(!d.poll(10_000));
}

#[test]
fn controller_settle_fires_after_quiet_period() {
    let mut c = Controller::default();
    c.rebuild(&Measurement::new(300.0, 1000.0));

    for now_ms in [0u64, 50, 100, 150] {
        c.on_scroll(now_ms);
        assert!(!c.tick(now_ms));
    }
    assert!(c.is_settling());
    assert!(!c.tick(329));
    assert!(c.tick(330));
    assert!(!c.is_settling());
    assert!(!c.tick(1_000));
}

#[test]
fn controller_sync_active_reports_changes_only() {
    let mut c = Controller::default();
    c.rebuild(&Measurement::new(300.0, 1000.0));
    assert_eq!(c.sync_active(10.0), None);
    assert_eq!(c.sync_active(640.0), Some(2));
    assert_eq!(c.sync_active(600.0), None);
    assert_eq!(c.active_index(), 2);
}

#[test]
fn controller_rebuild_clamps_active_and_reports_count_change() {
    let mut c = Controller::default();
    assert!(c.rebuild(&Measurement::new(300.0, 1000.0)));
    c.sync_active(700.0);
    assert_eq!(c.active_index(), 3);

    assert!(!c.rebuild(&Measurement::new(300.0, 1000.0)));
    assert!(c.rebuild(&Measurement::new(500.0, 1000.0)));
    assert_eq!(c.stops().as_slice(), &[0.0, 500.0]);
    assert_eq!(c.active_index(), 1);
}

#[test]
fn controller_advance_steps_and_clamps() {
    let mut c = Controller::default();
    let m = Measurement::new(300.0, 1000.0);
    assert_eq!(c.advance(ScrollDirection::Forward, &m, 0.0), Some(300.0));
    assert_eq!(c.advance(ScrollDirection::Forward, &m, 610.0), Some(700.0));
    assert_eq!(c.advance(ScrollDirection::Forward, &m, 700.0), None);
    assert_eq!(c.advance(ScrollDirection::Backward, &m, 0.0), None);
    assert_eq!(c.advance(ScrollDirection::Backward, &m, 290.0), Some(0.0));
}

#[test]
fn controller_go_to_clamps_index() {
    let mut c = Controller::default();
    c.rebuild(&Measurement::new(300.0, 1000.0));
    assert_eq!(c.go_to(2), 600.0);
    assert_eq!(c.go_to(42), 700.0);
}

#[test]
fn controller_respects_custom_settle_delay() {
    let mut c = Controller::new(CarouselOptions::new().with_settle_delay_ms(50));
    c.on_scroll(0);
    assert!(!c.tick(49));
    assert!(c.tick(50));

    c.set_options(CarouselOptions::default());
    c.on_scroll(100);
    assert!(!c.tick(279));
    assert!(c.tick(280));
}

#[test]
fn mount_renders_one_indicator_per_stop() {
    let carousel = mounted(300.0, 1000.0);
    let dots = carousel.indicators();
    assert_eq!(
        dots.labels,
        ["Go to slide 1", "Go to slide 2", "Go to slide 3", "Go to slide 4"]
    );
    assert_eq!(dots.aria, ["true", "false", "false", "false"]);
    assert_eq!(dots.rebuilds, 1);
}

#[test]
fn mount_without_required_parts_is_a_noop() {
    let err = Carousel::<FakeTrack, FakeDots>::mount(
        None,
        Some(FakeDots::default()),
        Controls::both(),
        CarouselOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err, MountError::MissingTrack);

    let err = Carousel::<FakeTrack, FakeDots>::mount(
        Some(FakeTrack::new(300.0, 1000.0)),
        None,
        Controls::both(),
        CarouselOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err, MountError::MissingIndicators);

    assert!(
        Carousel::<FakeTrack, FakeDots>::try_mount(
            None,
            None,
            Controls::none(),
            CarouselOptions::default()
        )
        .is_none()
    );
}

#[test]
fn nothing_to_scroll_renders_single_indicator() {
    let carousel = mounted(300.0, 280.0);
    assert_eq!(carousel.stops().as_slice(), &[0.0]);
    assert_eq!(carousel.indicators().labels, ["Go to slide 1"]);
    assert_eq!(carousel.indicators().aria, ["true"]);
}

#[test]
fn navigate_next_and_prev_scroll_smoothly() {
    let mut carousel = mounted(300.0, 1000.0);

    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), Some(300.0));
    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), Some(600.0));
    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), Some(700.0));
    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), None);
    assert_eq!(carousel.on_navigate(ScrollDirection::Backward), Some(600.0));

    let requests = &carousel.track().requests;
    assert_eq!(requests.len(), 4);
    assert!(requests.iter().all(|(_, b)| *b == ScrollBehavior::Smooth));
}

#[test]
fn navigate_prev_from_first_stop_is_a_noop() {
    let mut carousel = mounted(300.0, 1000.0);
    assert_eq!(carousel.on_navigate(ScrollDirection::Backward), None);
    assert!(carousel.track().requests.is_empty());
}

#[test]
fn navigate_without_control_is_ignored() {
    let mut carousel = Carousel::mount(
        Some(FakeTrack::new(300.0, 1000.0)),
        Some(FakeDots::default()),
        Controls {
            prev: true,
            next: false,
        },
        CarouselOptions::default(),
    )
    .unwrap();
    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), None);
    assert!(carousel.track().requests.is_empty());
}

#[test]
fn navigate_uses_fresh_layout() {
    let mut carousel = mounted(300.0, 1000.0);
    carousel.track_mut().measurement = Measurement::new(500.0, 1000.0);

    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), Some(500.0));
    assert_eq!(carousel.indicators().labels.len(), 2);
    assert_eq!(carousel.indicators().rebuilds, 2);
}

#[test]
fn indicator_activation_uses_fresh_layout() {
    let mut carousel = mounted(300.0, 1000.0);
    carousel.track_mut().measurement = Measurement::new(500.0, 1000.0);

    assert_eq!(carousel.on_indicator_activated(1), 500.0);
    assert_eq!(carousel.indicators().labels.len(), 2);
    assert_eq!(carousel.indicators().rebuilds, 2);
    assert_eq!(carousel.track().requests, [(500.0, ScrollBehavior::Smooth)]);
}

#[test]
fn short_overflow_end_is_reachable() {
    let mut carousel = mounted(300.0, 306.0);
    assert_eq!(carousel.stops().as_slice(), &[0.0, 6.0]);
    assert_eq!(carousel.indicators().labels.len(), 2);
    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), Some(6.0));
    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), None);
}

#[test]
fn indicator_activation_scrolls_to_stop() {
    let mut carousel = mounted(300.0, 1000.0);
    assert_eq!(carousel.on_indicator_activated(2), 600.0);
    assert_eq!(carousel.on_indicator_activated(9), 700.0);
    assert_eq!(
        carousel.track().requests,
        [(600.0, ScrollBehavior::Smooth), (700.0, ScrollBehavior::Smooth)]
    );
}

#[test]
fn scroll_settle_marks_nearest_indicator() {
    let mut carousel = mounted(300.0, 1000.0);

    carousel.track_mut().offset = 320.0;
    carousel.on_scroll(0);
    carousel.track_mut().offset = 590.0;
    carousel.on_scroll(40);

    assert!(!carousel.tick(100));
    assert_eq!(carousel.indicators().aria, ["true", "false", "false", "false"]);

    assert!(carousel.tick(220));
    assert_eq!(carousel.active_index(), 2);
    assert_eq!(carousel.indicators().aria, ["false", "false", "true", "false"]);
    assert!(!carousel.tick(500));
}

#[test]
fn resize_rebuilds_indicators_and_keeps_current_marking() {
    let mut carousel = mounted(300.0, 1000.0);
    carousel.track_mut().offset = 700.0;
    carousel.on_scroll_settled();
    assert_eq!(carousel.active_index(), 3);

    carousel.track_mut().measurement = Measurement::new(600.0, 1000.0);
    carousel.track_mut().offset = 400.0;
    carousel.on_resize();

    assert_eq!(carousel.stops().as_slice(), &[0.0, 400.0]);
    assert_eq!(carousel.indicators().aria, ["false", "true"]);
    assert_eq!(carousel.indicators().rebuilds, 2);
}

#[test]
fn per_card_carousel_uses_card_offsets() {
    let cards = [0.0, 310.0, 620.0, 625.0].map(|left| CardRect::new(left, 300.0));
    let mut track = FakeTrack::new(300.0, 925.0);
    track.measurement = track.measurement.with_cards(cards);

    let mut carousel = Carousel::mount(
        Some(track),
        Some(FakeDots::default()),
        Controls::both(),
        CarouselOptions::default(),
    )
    .unwrap();
    assert_eq!(carousel.stops().mode(), SnapMode::PerCard);
    assert_eq!(carousel.stops().as_slice(), &[0.0, 310.0, 620.0]);

    carousel.on_load();
    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), Some(310.0));
    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), Some(620.0));
    assert_eq!(carousel.on_navigate(ScrollDirection::Forward), None);
}

fn gallery() -> Lightbox<&'static str> {
    Lightbox::new([
        GalleryItem::new("/img/a.jpg", "Alpha"),
        GalleryItem::new("/img/b.jpg", "Beta"),
        GalleryItem::new("/img/c.jpg", ""),
    ])
    .unwrap()
}

#[test]
fn lightbox_requires_items() {
    assert!(Lightbox::<()>::new([]).is_none());
    assert_eq!(
        Lightbox::<()>::mount(Vec::new()).unwrap_err(),
        MountError::EmptyGallery
    );
}

#[test]
fn lightbox_open_renders_item_and_locks_scroll() {
    let mut lb = gallery();
    assert!(lb.view().is_none());
    assert!(lb.open(7, Some("thumb-7")).is_none());
    assert!(!lb.is_open());

    let view = lb.open(1, Some("thumb-1")).unwrap();
    assert_eq!(view.src, "/img/b.jpg");
    assert_eq!(view.caption(), "Beta");
    assert!(!view.prev_disabled);
    assert!(!view.next_disabled);
    assert!(lb.body_scroll_locked());

    assert_eq!(lb.close(), Some("thumb-1"));
    assert!(!lb.body_scroll_locked());
    assert_eq!(lb.close(), None);
}

#[test]
fn lightbox_prev_next_stop_at_bounds() {
    let mut lb = gallery();
    let view = lb.open(0, None).unwrap();
    assert!(view.prev_disabled);

    assert!(!lb.prev());
    assert!(lb.next());
    assert!(lb.next());
    assert!(!lb.next());
    let view = lb.view().unwrap();
    assert_eq!(view.index, 2);
    assert_eq!(view.alt, "");
    assert!(view.next_disabled);
}

#[test]
fn lightbox_prev_next_do_nothing_while_closed() {
    let mut lb = gallery();
    assert!(!lb.next());
    assert!(!lb.prev());
    assert_eq!(lb.current_index(), 0);

    lb.open(1, None);
    lb.close();
    assert!(!lb.next());
    assert!(!lb.prev());
    assert_eq!(lb.current_index(), 1);
    assert!(lb.view().is_none());
}

#[test]
fn lightbox_keys_only_apply_while_open() {
    let mut lb = gallery();
    assert_eq!(lb.on_key(LightboxKey::ArrowRight), KeyOutcome::Ignored);
    assert_eq!(lb.current_index(), 0);

    lb.open(0, Some("thumb-0"));
    assert_eq!(lb.on_key(LightboxKey::ArrowLeft), KeyOutcome::Ignored);
    assert_eq!(lb.on_key(LightboxKey::ArrowRight), KeyOutcome::Moved(1));
    assert_eq!(lb.on_key(LightboxKey::Other), KeyOutcome::Ignored);
    assert_eq!(lb.on_key(LightboxKey::ArrowLeft), KeyOutcome::Moved(0));
    assert_eq!(lb.on_key(LightboxKey::Escape), KeyOutcome::Closed(Some("thumb-0")));
    assert!(!lb.is_open());
    assert_eq!(lb.on_key(LightboxKey::Escape), KeyOutcome::Ignored);
}
