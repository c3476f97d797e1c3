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

use log::trace;

use super::enums::MatchScore;
use crate::callingcode::CountryCallingCode;

/// Result of scoring one calling code against a digit string.
/// Lives only as long as the scored input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCandidate<'a> {
    pub code: &'a CountryCallingCode,
    pub score: MatchScore,
    /// The input with the matched prefix removed, `None` when nothing matched.
    pub local_number: Option<&'a str>,
    /// Length of the prefix that produced the score.
    pub matched_prefix_len: usize,
}

impl<'a> ScoredCandidate<'a> {
    fn no_match(code: &'a CountryCallingCode) -> Self {
        Self { code, score: MatchScore::NoMatch, local_number: None, matched_prefix_len: 0 }
    }

    fn matched(
        code: &'a CountryCallingCode,
        score: MatchScore,
        local_number: &'a str,
        matched_prefix_len: usize,
    ) -> Self {
        Self { code, score, local_number: Some(local_number), matched_prefix_len }
    }
}

/// Scores `digits` against a single calling code.
///
/// Codes without area codes match on the calling code alone. Codes with
/// area codes only match when one of them follows the calling code; the
/// area codes are tried in their stored order and the first hit wins, even
/// if a later one would match a longer prefix. When the input ends right
/// after the area code, the area code itself is kept as local number.
pub fn score<'a>(code: &'a CountryCallingCode, digits: &'a str) -> ScoredCandidate<'a> {
    if digits.is_empty() {
        return ScoredCandidate::no_match(code);
    }

    let mut code_buf = itoa::Buffer::new();
    let country_prefix = code_buf.format(code.numeric_code());
    let Some(after_country) = digits.strip_prefix(country_prefix) else {
        return ScoredCandidate::no_match(code);
    };

    if code.area_codes().is_empty() {
        return ScoredCandidate::matched(
            code,
            MatchScore::CountryCode,
            after_country,
            country_prefix.len(),
        );
    }

    let mut area_buf = itoa::Buffer::new();
    for &area_code in code.area_codes() {
        let area_prefix = area_buf.format(area_code);
        if let Some(local_number) = after_country.strip_prefix(area_prefix) {
            trace!("{} matched area code {} in '{}'", code, area_code, digits);
            let local_number = if local_number.is_empty() {
                after_country
            } else {
                local_number
            };
            return ScoredCandidate::matched(
                code,
                MatchScore::AreaCode,
                local_number,
                country_prefix.len() + area_prefix.len(),
            );
        }
    }
    ScoredCandidate::no_match(code)
}

#[cfg(test)]
mod tests {
    use super::score;
    use crate::{callingcode::CountryCallingCode, parser::MatchScore};

    fn code(numeric_code: i32, iso2: &str, area_codes: &[u32]) -> CountryCallingCode {
        CountryCallingCode::new(numeric_code, iso2, area_codes).unwrap()
    }

    #[test]
    fn empty_input_never_matches() {
        let oman = code(968, "OM", &[]);
        let scored = score(&oman, "");
        assert_eq!(MatchScore::NoMatch, scored.score);
        assert_eq!(None, scored.local_number);
    }

    #[test]
    fn country_only_match_strips_calling_code() {
        let oman = code(968, "OM", &[]);
        for local in ["912345", "1", ""] {
            let digits = format!("968{local}");
            let scored = score(&oman, &digits);
            assert_eq!(MatchScore::CountryCode, scored.score);
            assert_eq!(1, scored.score.value());
            assert_eq!(Some(local), scored.local_number);
            assert_eq!(3, scored.matched_prefix_len);
        }
        assert_eq!(MatchScore::NoMatch, score(&oman, "96912345").score);
        assert_eq!(MatchScore::NoMatch, score(&oman, "96").score);
    }

    #[test]
    fn area_code_match() {
        let samoa = code(1, "AS", &[684]);
        let scored = score(&samoa, "1684123");
        assert_eq!(MatchScore::AreaCode, scored.score);
        assert_eq!(2, scored.score.value());
        assert_eq!(Some("123"), scored.local_number);
        assert_eq!(4, scored.matched_prefix_len);

        // calling code alone is not enough once area codes exist
        assert_eq!(MatchScore::NoMatch, score(&samoa, "1123").score);
        assert_eq!(MatchScore::NoMatch, score(&samoa, "1").score);
    }

    #[test]
    fn exact_area_prefix_keeps_area_code_as_local_number() {
        let samoa = code(1, "AS", &[684]);
        let scored = score(&samoa, "1684");
        assert_eq!(MatchScore::AreaCode, scored.score);
        assert_eq!(Some("684"), scored.local_number);
    }

    #[test]
    fn first_listed_area_code_wins() {
        // "6" and "67" both match "7671234", the earlier entry decides
        let kazakhstan = code(7, "KZ", &[6, 67]);
        let scored = score(&kazakhstan, "7671234");
        assert_eq!(Some("71234"), scored.local_number);
        assert_eq!(2, scored.matched_prefix_len);

        let reversed = code(7, "KZ", &[67, 6]);
        let scored = score(&reversed, "7671234");
        assert_eq!(Some("1234"), scored.local_number);
        assert_eq!(3, scored.matched_prefix_len);
    }

    #[test]
    fn non_digit_input_simply_fails_to_match() {
        let uk = code(44, "GB", &[]);
        assert_eq!(MatchScore::NoMatch, score(&uk, "+44 20 7946 0000").score);
        assert_eq!(MatchScore::NoMatch, score(&uk, "abc").score);
    }
}
