mod constructor;
mod driver;
mod race;
mod results;

pub use constructor::{Constructor, ConstructorStandings};
pub use driver::{Driver, DriverStandings};
pub use race::{Calendar, Race};
pub use results::{QualifyingResult, QualifyingResults, RaceResult, RaceResults};
