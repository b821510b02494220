//! Base trait for slice state.

/// Marker trait for state slices.
///
/// States should be:
/// - Values (Clone to snapshot)
/// - Comparable (PartialEq for detecting changes)
/// - Created once with a fixed initial shape (Default)
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}
