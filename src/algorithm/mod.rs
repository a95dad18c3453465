/// Neighbour solidity and prism tip predicates
pub mod classification;
/// Grid completion and whole-set resolution
pub mod completion;
/// Per-tile segment resolution
pub mod resolution;
/// Canonical segment rule tables and their rotations
pub mod rules;
/// Segment identifiers, mesh groups and visibility sets
pub mod segments;
