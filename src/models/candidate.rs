use super::run::Run;

/// Edge signature a column was recognised by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    /// One run of exactly the full edge height
    FullLine,
    /// Two runs matching the notch segment lengths
    NotchLine,
}

/// A column that looks like a vertical piece edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Column index
    pub column: usize,
    /// Signature that qualified the column
    pub kind: CandidateKind,
    /// The run(s) that produced the signature
    pub runs: Vec<Run>,
}

impl Candidate {
    /// Absolute column distance to another candidate
    pub fn distance(&self, other: &Candidate) -> usize {
        self.column.abs_diff(other.column)
    }
}

/// Candidates split by kind, each list in ascending column order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    /// Full-line columns
    pub full: Vec<Candidate>,
    /// Notch-line columns
    pub notch: Vec<Candidate>,
}

impl CandidateSet {
    /// True when no column qualified at all
    pub fn is_empty(&self) -> bool {
        self.full.is_empty() && self.notch.is_empty()
    }

    /// Total candidates of both kinds
    pub fn len(&self) -> usize {
        self.full.len() + self.notch.len()
    }
}

/// Enumeration group a pair was produced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairGroup {
    /// Full line paired with a notch line
    FullNotch,
    /// Two full lines
    FullFull,
    /// Two notch lines
    NotchNotch,
}

/// Two candidate edges a plausible piece width apart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPair {
    /// Anchor candidate; its column is reported as the offset
    pub first: Candidate,
    /// Partner candidate
    pub second: Candidate,
    /// Group the pair was enumerated in
    pub group: PairGroup,
}

impl MatchPair {
    /// Column distance between the two edges
    pub fn distance(&self) -> usize {
        self.first.distance(&self.second)
    }

    /// The smaller of the two columns
    pub fn left_column(&self) -> usize {
        self.first.column.min(self.second.column)
    }
}
