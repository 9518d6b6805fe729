//! Extra-column tags and their canonical labels.
//! ------------------------------------------------
//! The label table and the per-tag policy below are externally visible output:
//! clients compare EXPLAIN text verbatim, so labels, spacing and bracketing
//! must not change.

use serde::Deserialize;

/// One discrete behaviour note that can appear in the Extra column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraTag {
    /// Sentinel; never attached to a row.
    None,
    UsingTemporary,
    UsingFilesort,
    UsingIndexCondition,
    Using,
    RangeCheckedForEachRecord,
    UsingWhereWithPushedCondition,
    UsingWhere,
    NotExists,
    UsingMrr,
    UsingIndex,
    FullScanOnNullKey,
    SkipOpenTable,
    OpenFrmOnly,
    OpenFullTable,
    ScannedDatabases,
    UsingIndexForGroupBy,
    Distinct,
    LooseScan,
    StartTemporary,
    EndTemporary,
    FirstMatch,
    Materialize,
    StartMaterialize,
    EndMaterialize,
    Scan,
    UsingJoinBuffer,
    ConstRowNotFound,
    UniqueRowNotFound,
    ImpossibleOnCondition,
    PushedJoin,
}

/// How a tag's associated text is attached to its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtraPolicy {
    pub space_before_data: bool,
    pub bracket_data: bool,
}

impl ExtraPolicy {
    const PLAIN: ExtraPolicy = ExtraPolicy { space_before_data: true, bracket_data: false };
    const BRACKETED: ExtraPolicy = ExtraPolicy { space_before_data: true, bracket_data: true };
}

impl ExtraTag {
    /// Every tag that may be attached to a row, in historical order.
    pub const ALL: [ExtraTag; 30] = [
        ExtraTag::UsingTemporary,
        ExtraTag::UsingFilesort,
        ExtraTag::UsingIndexCondition,
        ExtraTag::Using,
        ExtraTag::RangeCheckedForEachRecord,
        ExtraTag::UsingWhereWithPushedCondition,
        ExtraTag::UsingWhere,
        ExtraTag::NotExists,
        ExtraTag::UsingMrr,
        ExtraTag::UsingIndex,
        ExtraTag::FullScanOnNullKey,
        ExtraTag::SkipOpenTable,
        ExtraTag::OpenFrmOnly,
        ExtraTag::OpenFullTable,
        ExtraTag::ScannedDatabases,
        ExtraTag::UsingIndexForGroupBy,
        ExtraTag::Distinct,
        ExtraTag::LooseScan,
        ExtraTag::StartTemporary,
        ExtraTag::EndTemporary,
        ExtraTag::FirstMatch,
        ExtraTag::Materialize,
        ExtraTag::StartMaterialize,
        ExtraTag::EndMaterialize,
        ExtraTag::Scan,
        ExtraTag::UsingJoinBuffer,
        ExtraTag::ConstRowNotFound,
        ExtraTag::UniqueRowNotFound,
        ExtraTag::ImpossibleOnCondition,
        ExtraTag::PushedJoin,
    ];

    /// Canonical label printed at the head of this tag's Extra fragment.
    ///
    /// Panics on [`ExtraTag::None`]: the sentinel must never reach the output.
    pub const fn label(self) -> &'static str {
        match self {
            ExtraTag::None => panic!("ExtraTag::None has no Extra label"),
            ExtraTag::UsingTemporary => "Using temporary",
            ExtraTag::UsingFilesort => "Using filesort",
            ExtraTag::UsingIndexCondition => "Using index condition",
            ExtraTag::Using => "Using",
            ExtraTag::RangeCheckedForEachRecord => "Range checked for each record",
            ExtraTag::UsingWhereWithPushedCondition => "Using where with pushed condition",
            ExtraTag::UsingWhere => "Using where",
            ExtraTag::NotExists => "Not exists",
            ExtraTag::UsingMrr => "Using MRR",
            ExtraTag::UsingIndex => "Using index",
            ExtraTag::FullScanOnNullKey => "Full scan on NULL key",
            ExtraTag::SkipOpenTable => "Skip_open_table",
            ExtraTag::OpenFrmOnly => "Open_frm_only",
            ExtraTag::OpenFullTable => "Open_full_table",
            ExtraTag::ScannedDatabases => "Scanned",
            ExtraTag::UsingIndexForGroupBy => "Using index for group-by",
            ExtraTag::Distinct => "Distinct",
            ExtraTag::LooseScan => "LooseScan",
            ExtraTag::StartTemporary => "Start temporary",
            ExtraTag::EndTemporary => "End temporary",
            ExtraTag::FirstMatch => "FirstMatch",
            ExtraTag::Materialize => "Materialize",
            ExtraTag::StartMaterialize => "Start materialize",
            ExtraTag::EndMaterialize => "End materialize",
            ExtraTag::Scan => "Scan",
            ExtraTag::UsingJoinBuffer => "Using join buffer",
            ExtraTag::ConstRowNotFound => "const row not found",
            ExtraTag::UniqueRowNotFound => "unique row not found",
            ExtraTag::ImpossibleOnCondition => "Impossible ON condition",
            ExtraTag::PushedJoin => "",
        }
    }

    /// Spacing and bracketing for associated text. Both exception lists are
    /// literal compatibility lists and do not follow a common rule.
    pub const fn policy(self) -> ExtraPolicy {
        match self {
            // FirstMatch(t1)
            ExtraTag::FirstMatch => ExtraPolicy { space_before_data: false, bracket_data: true },
            ExtraTag::PushedJoin => ExtraPolicy { space_before_data: false, bracket_data: false },
            ExtraTag::RangeCheckedForEachRecord
            | ExtraTag::UsingIndexForGroupBy
            | ExtraTag::UsingJoinBuffer => ExtraPolicy::BRACKETED,
            _ => ExtraPolicy::PLAIN,
        }
    }

    /// Position in the historical tag numbering (`None` is 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`ExtraTag::index`]; `None` for out-of-range values and for the sentinel.
    pub fn from_index(i: usize) -> Option<ExtraTag> {
        i.checked_sub(1).and_then(|j| Self::ALL.get(j).copied())
    }
}
