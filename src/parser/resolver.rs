// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::cmp::Ordering;

use log::trace;
use strum::IntoEnumIterator;

use super::{
    enums::{MatchScore, TieBreak},
    scorer::{ScoredCandidate, score},
};
use crate::callingcode::CountryCallingCode;

/// The winning calling code for a digit string and what is left of the
/// string once its prefix is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub code: &'a CountryCallingCode,
    pub local_number: &'a str,
}

/// Infers the calling code of `digits` among `candidates`.
///
/// Equally scored candidates are resolved with [`TieBreak::LastInOrder`],
/// so the outcome depends on the iteration order of `candidates`.
/// Returns `None` when no candidate matches, including for empty input.
pub fn resolve<'a, I>(digits: &'a str, candidates: I) -> Option<Resolution<'a>>
where
    I: IntoIterator<Item = &'a CountryCallingCode>,
{
    resolve_with(digits, candidates, TieBreak::LastInOrder)
}

/// Same as [`resolve`] with an explicit tie-break rule.
pub fn resolve_with<'a, I>(
    digits: &'a str,
    candidates: I,
    tie_break: TieBreak,
) -> Option<Resolution<'a>>
where
    I: IntoIterator<Item = &'a CountryCallingCode>,
{
    let mut best: Option<ScoredCandidate<'a>> = None;
    for code in candidates {
        let candidate = score(code, digits);
        if candidate.score == MatchScore::NoMatch {
            continue;
        }
        let replace = match &best {
            None => true,
            Some(current) => match candidate.score.cmp(&current.score) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => match tie_break {
                    TieBreak::LastInOrder => true,
                    TieBreak::LongestPrefix => {
                        candidate.matched_prefix_len >= current.matched_prefix_len
                    }
                },
            },
        };
        if replace {
            best = Some(candidate);
        }
    }

    let best = best?;
    trace!(
        "Resolved '{}' to {} with score {:?}",
        digits, best.code, best.score
    );
    Some(Resolution {
        code: best.code,
        local_number: best.local_number.unwrap_or_default(),
    })
}

/// Every matching candidate, strongest score first. Within one score the
/// candidates keep their iteration order, so the last entry of the first
/// group is what [`resolve`] picks.
pub fn rank<'a, I>(digits: &'a str, candidates: I) -> Vec<ScoredCandidate<'a>>
where
    I: IntoIterator<Item = &'a CountryCallingCode>,
{
    let scored: Vec<_> = candidates
        .into_iter()
        .map(|code| score(code, digits))
        .filter(|candidate| candidate.score != MatchScore::NoMatch)
        .collect();

    MatchScore::iter()
        .rev()
        .flat_map(|level| {
            scored
                .iter()
                .filter(move |candidate| candidate.score == level)
                .copied()
        })
        .collect()
}
