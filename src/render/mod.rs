/// Axial projection and the sampling loop.
pub mod axial;
/// Target surfaces.
pub mod surface;
