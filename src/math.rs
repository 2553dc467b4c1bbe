#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("Either std or libm must be used for math operations");

use core::f64::consts::{PI, TAU};

macro_rules! libm_or_std {
    ( $( $fname:ident $( : $arity:tt )? ),* $(,)? ) => {
        $(
            libm_or_std!(@make fn $fname $( : $arity )?);
        )*
    };

    (@make fn $fname:ident) => {
        #[inline]
        pub fn $fname(x: f64) -> f64 {
            #[cfg(feature = "std")]
            { x.$fname() }
            #[cfg(all(feature = "libm", not(feature = "std")))]
            { libm::$fname(x) }
        }
    };

    (@make fn $fname:ident : 2) => {
        #[inline]
        pub fn $fname(x: f64, y: f64) -> f64 {
            #[cfg(feature = "std")]
            { x.$fname(y) }
            #[cfg(all(feature = "libm", not(feature = "std")))]
            { libm::$fname(x, y) }
        }
    };
}

libm_or_std!(
    sin,
    cos,
    tan,
    atan,
    sqrt,
    floor,
    atan2: 2,
    hypot: 2,
    copysign: 2,
);

/// Wraps an angle into the half-open range (-pi, pi].
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle - TAU * floor((angle + PI) / TAU);

    // floor() puts us in [-pi, pi); fold the lower edge over
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
