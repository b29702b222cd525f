/// WebGL vendor and renderer pairs grouped by platform family.
pub mod gpu;
/// Installed font families grouped by platform family.
pub mod fonts;
