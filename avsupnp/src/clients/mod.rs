//! Client registry and quirks engine (spec modules 4.A and 4.B): who is
//! talking to the MediaServer, and what does that client need done
//! differently.

pub mod profile;
pub mod quirks;
pub mod registry;

pub use profile::{ClientProfile, MatchType, QuirkFlags};
pub use quirks::ClientQuirks;
pub use registry::{ClientObservation, ClientRegistry, CLIENT_REGISTRY};
