/// Capacity hint used by every `new()` constructor.
pub const DEFAULT_CAP: usize = 16;

/// Element separator of the diagnostic rendering.
pub(crate) const DISPLAY_SEPARATOR: &str = ", ";
