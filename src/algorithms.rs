pub mod convex_hull;
pub mod heap_sort;
pub mod selection;

#[doc(inline)]
pub use convex_hull::graham_scan::convex_hull;

#[doc(inline)]
pub use convex_hull::{Algorithm, HullSolver};
