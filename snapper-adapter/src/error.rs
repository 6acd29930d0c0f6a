/// Why a widget could not attach to its markup.
///
/// Widgets never surface this to users: [`crate::Carousel::try_mount`] and
/// [`crate::Lightbox::new`] turn it into a silent no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("carousel scroll track is missing")]
    MissingTrack,
    #[error("carousel indicator container is missing")]
    MissingIndicators,
    #[error("gallery has no items")]
    EmptyGallery,
}
