//! Domain models for the nephrology statistics report.

mod demograficos;
mod envelope;
mod estadisticas;
mod estados;
mod laboratorios;
mod report;
mod sources;

pub use demograficos::*;
pub use envelope::*;
pub use estadisticas::*;
pub use estados::*;
pub use laboratorios::*;
pub use report::*;
pub use sources::*;
