//! Request surface and the constraint resolver.
//!
//! ## Key Types
//!
//! - `SliderValue`: explicit count or the random sentinel
//! - `GeneratorRequest`: everything one generation call is parameterized by
//! - `RequirementSpec` / `RequirementKey`: normalized positive constraints
//! - `resolve`: sliders in, filtered pool and ordered requirements out

pub mod request;
pub mod resolver;
pub mod slider;

pub use request::{ArchetypeSliders, GeneratorRequest, RaritySliders};
pub use resolver::{resolve, RequirementKey, RequirementSpec, ResolvedConstraints};
pub use slider::SliderValue;
