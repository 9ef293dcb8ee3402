pub mod buffer;
pub mod candidate;
pub mod geometry;
pub mod point;
pub mod run;

pub use buffer::PixelBuffer;
pub use candidate::{Candidate, CandidateKind, CandidateSet, MatchPair, PairGroup};
pub use geometry::{GeometryTrait, NotchLengths, WidthBounds};
pub use point::Coordinate;
pub use run::{Run, RunIndex};
