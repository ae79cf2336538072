pub mod indices;
pub mod pipeline;
pub mod radiance;
pub mod stats;
pub mod thermal;

/// Guard added to denominators and logarithm arguments so an exact zero
/// cannot occur there; small enough to leave normal magnitudes unperturbed.
pub const EPS: f32 = 1e-10;
