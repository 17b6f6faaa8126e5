//! Severity classification for a file's violations.
//!
//! An ordered ladder of tiers; the first tier whose predicate holds wins.

use crate::report::{Severity, Violation, ViolationKind};

/// Above this many violations a file without blocking kinds is MEDIUM.
pub const MEDIUM_THRESHOLD: usize = 5;

struct Tier {
    severity: Severity,
    applies: fn(&[Violation]) -> bool,
}

fn has_kind(violations: &[Violation], kinds: &[ViolationKind]) -> bool {
    violations.iter().any(|v| kinds.contains(&v.kind))
}

const LADDER: &[Tier] = &[
    Tier {
        severity: Severity::Critical,
        applies: |v| {
            has_kind(
                v,
                &[
                    ViolationKind::Spacing,
                    ViolationKind::Color,
                    ViolationKind::System,
                ],
            )
        },
    },
    Tier {
        severity: Severity::High,
        applies: |v| has_kind(v, &[ViolationKind::Typography, ViolationKind::Shadow]),
    },
    Tier {
        severity: Severity::Medium,
        applies: |v| v.len() > MEDIUM_THRESHOLD,
    },
];

/// Classify a file by the violations found in it.
#[must_use]
pub fn classify(violations: &[Violation]) -> Severity {
    LADDER
        .iter()
        .find(|tier| (tier.applies)(violations))
        .map_or(Severity::Low, |tier| tier.severity)
}
