// ITERATOR MACROS
// ================================================================================================
//
// Components of vectors and rows of matrices are independent, so operations over them are run on
// rayon's thread pool when the `concurrent` feature is enabled. The macros below pick a parallel
// or sequential iterator at the call site; `rayon::prelude::*` must be in scope for the parallel
// variant.

/// Returns either a regular or a parallel iterator over the elements of `$e`.
#[macro_export]
macro_rules! iter {
    ($e:expr) => {{
        #[cfg(feature = "concurrent")]
        let result = $e.par_iter();

        #[cfg(not(feature = "concurrent"))]
        let result = $e.iter();

        result
    }};
}

/// Returns either a regular or a parallel mutable iterator over the elements of `$e`.
#[macro_export]
macro_rules! iter_mut {
    ($e:expr) => {{
        #[cfg(feature = "concurrent")]
        let result = $e.par_iter_mut();

        #[cfg(not(feature = "concurrent"))]
        let result = $e.iter_mut();

        result
    }};
}
