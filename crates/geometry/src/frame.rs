//! Reference frames.
//!
//! A frame is a zero-sized tag type. Every multivector carries its frame in
//! its type, so combining multivectors expressed in different frames does not
//! compile.

use std::fmt;
use std::hash::Hash;

/// Reference frame tag.
pub trait Frame: fmt::Debug + Default + Copy + Ord + Hash + Send + Sync + 'static {
    /// Name of the frame, used on the wire.
    const NAME: &'static str;
    /// Whether the frame is inertial.
    const IS_INERTIAL: bool;
}

/// Declares a frame tag type.
///
/// ```
/// geometry::frame!(
///     /// Frame rotating with the surface of the earth.
///     pub Surface,
///     inertial = false
/// );
///
/// use geometry::Frame;
/// assert_eq!("Surface", Surface::NAME);
/// assert!(!Surface::IS_INERTIAL);
/// ```
#[macro_export]
macro_rules! frame {
    ($(#[$attr:meta])* $vis:vis $name:ident, inertial = $inertial:expr $(,)?) => {
        $(#[$attr])*
        #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name;

        impl $crate::Frame for $name {
            const NAME: &'static str = stringify!($name);
            const IS_INERTIAL: bool = $inertial;
        }
    };
}

/// Fails to compile unless `F` is inertial. Call this from operations that
/// are only meaningful in inertial frames.
///
/// ```
/// geometry::frame!(Sky, inertial = true);
/// geometry::require_inertial::<Sky>();
/// ```
///
/// ```compile_fail
/// geometry::frame!(Ground, inertial = false);
/// geometry::require_inertial::<Ground>();
/// ```
pub const fn require_inertial<F: Frame>() {
    const { assert!(F::IS_INERTIAL, "operation requires an inertial frame") };
}
