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

use strum::EnumIter;

/// How well a digit string matches one calling code.
///
/// Ordered from weakest to strongest: an area code match is always preferred
/// over a bare calling code match.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchScore {
    /// The digits do not start with the code's prefix.
    NoMatch = 0,
    /// The digits start with the calling code of a code without area codes.
    CountryCode = 1,
    /// The digits start with the calling code followed by one of its area codes.
    AreaCode = 2,
}

impl MatchScore {
    pub fn value(self) -> u8 {
        self as u8
    }
}

/// Rule used when several codes reach the same best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieBreak {
    /// The candidate met last in iteration order wins. Order dependent, but
    /// this is what existing callers rely on.
    #[default]
    LastInOrder,
    /// The candidate with the longest matched prefix wins; equal lengths fall
    /// back to [`TieBreak::LastInOrder`].
    LongestPrefix,
}
