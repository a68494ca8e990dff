// Copyright 2026 the railprep authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub mod bookmarks;
pub mod oneliner;
pub mod profile;
pub mod quiz;
pub mod remind;
pub mod stats;

use crate::error::Fallible;

pub(crate) fn read_line() -> Fallible<String> {
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Ask a yes/no question, defaulting to no.
pub(crate) fn confirm(prompt: &str) -> Fallible<bool> {
    println!("{prompt} [y/N]");
    let input = read_line()?;
    Ok(input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes"))
}
