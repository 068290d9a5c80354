// SPDX-License-Identifier: MIT OR Apache-2.0

//! A resource-level candidate: a value plus the condition set it applies
//! under (§3 `Candidate`).

use crate::condition_set::ConditionSet;
use ctxres_core::JsonValue;

/// How a matched candidate's value folds into an accumulated result
/// (§4.J): `augment` deep-merges, `replace` overwrites wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMethod {
    #[default]
    Augment,
    Replace,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub condition_set: ConditionSet,
    pub value: JsonValue,
    pub is_partial: bool,
    pub merge_method: MergeMethod,
}

impl Candidate {
    pub fn new(condition_set: ConditionSet, value: JsonValue) -> Self {
        Self { condition_set, value, is_partial: false, merge_method: MergeMethod::default() }
    }

    pub fn partial(mut self) -> Self {
        self.is_partial = true;
        self
    }

    pub fn with_merge_method(mut self, method: MergeMethod) -> Self {
        self.merge_method = method;
        self
    }
}
