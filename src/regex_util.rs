// Copyright (C) 2009 The Libphonenumber Authors
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

use regex::{Captures, Match, Regex};

/// Anchored match helpers over compiled patterns. The `regex` crate has no
/// RE2-style full-match or consume entry points, so these adapters check
/// match spans instead.
pub trait RegexMatchExt {
    /// True when the pattern matches the whole of `s`.
    fn full_match(&self, s: &str) -> bool;

    /// The first match, only when it starts at the beginning of `s`.
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;

    /// Captures of the first match, only when it starts at the beginning.
    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>>;

    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }
}

impl RegexMatchExt for Regex {
    fn full_match(&self, s: &str) -> bool {
        self.find(s)
            .map_or(false, |matched| matched.start() == 0 && matched.end() == s.len())
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        self.find(s).filter(|matched| matched.start() == 0)
    }

    fn captures_start<'a>(&self, s: &'a str) -> Option<Captures<'a>> {
        self.captures(s)
            .filter(|captures| captures.get(0).map_or(false, |m| m.start() == 0))
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::RegexMatchExt;

    #[test]
    fn full_match_requires_the_whole_string() {
        let regex = Regex::new(r"\d{3}").unwrap();
        assert!(regex.full_match("123"));
        assert!(!regex.full_match("1234"));
        assert!(!regex.full_match("a123"));
    }

    #[test]
    fn find_start_rejects_mid_string_matches() {
        let regex = Regex::new(r"\d+").unwrap();
        assert_eq!(regex.find_start("12ab").map(|m| m.as_str()), Some("12"));
        assert!(regex.find_start("ab12").is_none());
    }

    #[test]
    fn captures_start_exposes_groups() {
        let regex = Regex::new(r"0(?:(11|343)15)?").unwrap();
        let captures = regex.captures_start("034315777").unwrap();
        assert_eq!(captures.get(0).unwrap().as_str(), "034315");
        assert_eq!(captures.get(1).unwrap().as_str(), "343");
    }
}
