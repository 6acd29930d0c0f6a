// Example: keyboard navigation through a lightbox gallery.
use snapper_adapter::{GalleryItem, KeyOutcome, Lightbox, LightboxKey};

fn main() {
    let items = ["sunrise", "harbour", "night market"]
        .into_iter()
        .map(|name| GalleryItem::new(format!("/img/{name}.jpg"), name));
    let Some(mut lightbox) = Lightbox::<&str>::new(items) else {
        return;
    };

    if let Some(view) = lightbox.open(0, Some("thumb-0")) {
        println!("open {} ({})", view.src, view.caption());
    }

    for key in [
        LightboxKey::ArrowRight,
        LightboxKey::ArrowRight,
        LightboxKey::ArrowRight,
        LightboxKey::ArrowLeft,
        LightboxKey::Escape,
    ] {
        match lightbox.on_key(key) {
            KeyOutcome::Moved(i) => {
                let view = lightbox.view();
                println!("{key:?} -> {i} {:?}", view.map(|v| v.src));
            }
            KeyOutcome::Closed(focus) => println!("{key:?} -> closed, refocus {focus:?}"),
            KeyOutcome::Ignored => println!("{key:?} -> ignored"),
        }
    }
}
