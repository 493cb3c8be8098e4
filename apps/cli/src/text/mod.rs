//! Client-side text post-processing: the logic Pathio applies to
//! backend-supplied strings before anything reaches the screen.

pub mod augment;
pub mod format;
pub mod normalize;
