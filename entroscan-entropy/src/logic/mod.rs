// entroscan-entropy/src/logic/mod.rs
//! Belnap's four-valued truth domain and its operators.
//!
//! Verdicts distinguish "no information" and "contradictory information"
//! from classical true/false, so a file whose evidence is weak or exhausted
//! is never forced into a binary answer. The conjunction and disjunction
//! tables below are NOT the plain bilattice meet/join: the unresolved
//! corners carry deliberate conservative defaults (False for conjunction,
//! True for disjunction) and `Neither ∧ Both = Neither` while
//! `Neither ∨ Both = Both`. The tables are encoded directly so those
//! corners cannot drift.

use core::fmt;
use core::ops::{BitAnd, BitOr, Not};

/// One of the four Belnap truth values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FourValued {
    /// Definitely false (benign).
    False,
    /// Definitely true (suspicious).
    True,
    /// Neither true nor false: no information.
    Neither,
    /// Both true and false: contradictory information.
    Both,
}

use FourValued::{Both, False, Neither, True};

/// Conjunction table, indexed `[lhs][rhs]` in declaration order
/// (False, True, Neither, Both). False is absorbing; information
/// deficiency dominates when Neither meets Both.
const CONJUNCTION: [[FourValued; 4]; 4] = [
    [False, False, False, False],
    [False, True, Neither, Both],
    [False, Neither, Neither, Neither],
    [False, Both, Neither, Both],
];

/// Disjunction table, dual to conjunction: True is absorbing and excess
/// information dominates, so Neither joined with Both yields Both.
const DISJUNCTION: [[FourValued; 4]; 4] = [
    [False, True, Neither, Both],
    [True, True, True, True],
    [Neither, True, Neither, Both],
    [Both, True, Both, Both],
];

impl FourValued {
    const ALL: [FourValued; 4] = [False, True, Neither, Both];

    /// All four values, in declaration order. Handy for exhaustive checks.
    pub fn values() -> [FourValued; 4] {
        Self::ALL
    }

    fn index(self) -> usize {
        match self {
            False => 0,
            True => 1,
            Neither => 2,
            Both => 3,
        }
    }

    /// Belnap negation: swaps True and False; Neither and Both are
    /// self-dual fixed points.
    pub fn negate(self) -> FourValued {
        match self {
            True => False,
            False => True,
            other => other,
        }
    }

    /// Belnap conjunction ("and") via the explicit truth table.
    pub fn meet(self, other: FourValued) -> FourValued {
        CONJUNCTION[self.index()][other.index()]
    }

    /// Belnap disjunction ("or") via the explicit truth table.
    pub fn join(self, other: FourValued) -> FourValued {
        DISJUNCTION[self.index()][other.index()]
    }

    /// Bare value name, without the report annotations.
    pub fn as_str(self) -> &'static str {
        match self {
            False => "False",
            True => "True",
            Neither => "Neither",
            Both => "Both",
        }
    }
}

impl fmt::Display for FourValued {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            False => "False",
            True => "True",
            Neither => "Neither (No Info)",
            Both => "Both (Contradictory)",
        };
        f.write_str(text)
    }
}

impl Not for FourValued {
    type Output = FourValued;

    fn not(self) -> FourValued {
        self.negate()
    }
}

impl BitAnd for FourValued {
    type Output = FourValued;

    fn bitand(self, rhs: FourValued) -> FourValued {
        self.meet(rhs)
    }
}

impl BitOr for FourValued {
    type Output = FourValued;

    fn bitor(self, rhs: FourValued) -> FourValued {
        self.join(rhs)
    }
}
