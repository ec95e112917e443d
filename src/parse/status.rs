// gitrun: async git command runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `git status --porcelain` (v1 and v2) parsing.
//!
//! ```text
//! v1:  ## main...origin/main [ahead 1, behind 2]
//!      XY path            XY from -> to
//! v2:  # branch.oid / branch.head / branch.upstream / branch.ab +A -B
//!      1 XY sub mH mI mW hH hI path
//!      2 XY sub mH mI mW hH hI Rscore path<TAB>orig
//!      u XY sub m1 m2 m3 mW h1 h2 h3 path
//!      ? path
//! ```

use serde::Serialize;

use super::{ParseResponse, leading_number};
use crate::error::ParseError;

/// Per-file two-letter status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStatus {
    pub path: String,
    /// Index (staged) status, `' '` when unchanged.
    pub index: char,
    /// Working tree status, `' '` when unchanged.
    pub working_dir: char,
}

/// A rename or copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRename {
    pub from: String,
    pub to: String,
    /// Similarity percentage (porcelain v2 only).
    pub score: Option<u8>,
}

/// Working tree status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusResult {
    pub not_added: Vec<String>,
    pub conflicted: Vec<String>,
    pub created: Vec<String>,
    pub deleted: Vec<String>,
    pub modified: Vec<String>,
    pub renamed: Vec<StatusRename>,
    pub staged: Vec<String>,
    pub files: Vec<FileStatus>,
    pub ahead: u32,
    pub behind: u32,
    pub current: Option<String>,
    pub tracking: Option<String>,
    pub detached: bool,
}

impl StatusResult {
    /// Returns true if there are no changed, staged, or untracked files.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }

    fn record(
        &mut self,
        index: char,
        working_dir: char,
        path: String,
        rename: Option<StatusRename>,
    ) {
        let code = [index, working_dir];
        let unmerged = matches!(
            code,
            ['D' | 'A' | 'U', 'U'] | ['U', 'D' | 'A'] | ['D', 'D'] | ['A', 'A']
        );
        if unmerged {
            self.conflicted.push(path.clone());
        } else if code == ['?', '?'] {
            self.not_added.push(path.clone());
        } else {
            if index == 'A' {
                self.created.push(path.clone());
            }
            if index == 'D' || working_dir == 'D' {
                self.deleted.push(path.clone());
            }
            if index == 'M' || working_dir == 'M' {
                self.modified.push(path.clone());
            }
            if !matches!(index, ' ' | '?' | '!') {
                self.staged.push(path.clone());
            }
        }
        if let Some(rename) = rename {
            self.renamed.push(rename);
        }
        self.files.push(FileStatus {
            path,
            index,
            working_dir,
        });
    }

    fn parse_v1_branch(&mut self, header: &str) {
        if let Some(branch) = header
            .strip_prefix("No commits yet on ")
            .or_else(|| header.strip_prefix("Initial commit on "))
        {
            self.current = Some(branch.trim().to_string());
            return;
        }
        if header.starts_with("HEAD (no branch)") {
            self.detached = true;
            return;
        }

        let (refs, counts) = match header.split_once(" [") {
            Some((refs, counts)) => (refs, counts.trim_end_matches(']')),
            None => (header, ""),
        };
        match refs.split_once("...") {
            Some((current, tracking)) => {
                self.current = Some(current.to_string());
                self.tracking = Some(tracking.to_string());
            }
            None => self.current = Some(refs.trim().to_string()),
        }
        for part in counts.split(", ") {
            if let Some(n) = part.strip_prefix("ahead ") {
                self.ahead = n.trim().parse().unwrap_or(0);
            } else if let Some(n) = part.strip_prefix("behind ") {
                self.behind = n.trim().parse().unwrap_or(0);
            }
        }
    }

    fn parse_v1_entry(&mut self, line: &str) {
        let mut code = line.chars();
        let (Some(index), Some(working_dir)) = (code.next(), code.next()) else {
            return;
        };
        let path = &line[3..];
        if matches!(index, 'R' | 'C')
            && let Some((from, to)) = path.split_once(" -> ")
        {
            let (from, to) = (unquote(from), unquote(to));
            let rename = StatusRename {
                from,
                to: to.clone(),
                score: None,
            };
            self.record(index, working_dir, to, Some(rename));
        } else {
            self.record(index, working_dir, unquote(path), None);
        }
    }

    fn parse_v2_header(&mut self, header: &str) {
        let Some((key, value)) = header.split_once(' ') else {
            return;
        };
        match key {
            "branch.head" if value == "(detached)" => {
                self.detached = true;
                self.current = None;
            }
            "branch.head" => self.current = Some(value.to_string()),
            "branch.upstream" => self.tracking = Some(value.to_string()),
            "branch.ab" => {
                for part in value.split_whitespace() {
                    if let Some(n) = part.strip_prefix('+') {
                        self.ahead = n.parse().unwrap_or(0);
                    } else if let Some(n) = part.strip_prefix('-') {
                        self.behind = n.parse().unwrap_or(0);
                    }
                }
            }
            _ => {}
        }
    }

    fn parse_v2_entry(&mut self, kind: char, line: &str) {
        match kind {
            '?' => self.record('?', '?', unquote(&line[2..]), None),
            '1' => {
                let fields: Vec<&str> = line.splitn(9, ' ').collect();
                if let [_, xy, .., path] = fields.as_slice()
                    && fields.len() == 9
                    && let Some((index, working_dir)) = v2_code(xy)
                {
                    self.record(index, working_dir, unquote(path), None);
                }
            }
            '2' => {
                let fields: Vec<&str> = line.splitn(10, ' ').collect();
                if let [_, xy, _, _, _, _, _, _, score, paths] = fields.as_slice()
                    && let Some((index, working_dir)) = v2_code(xy)
                    && let Some((to, from)) = paths.split_once('\t')
                {
                    let to = unquote(to);
                    let rename = StatusRename {
                        from: unquote(from),
                        to: to.clone(),
                        score: leading_number(score.get(1..).unwrap_or_default())
                            .and_then(|n| u8::try_from(n).ok()),
                    };
                    self.record(index, working_dir, to, Some(rename));
                }
            }
            'u' => {
                let fields: Vec<&str> = line.splitn(11, ' ').collect();
                if let [_, xy, .., path] = fields.as_slice()
                    && fields.len() == 11
                    && let Some((index, working_dir)) = v2_code(xy)
                {
                    self.record(index, working_dir, unquote(path), None);
                }
            }
            // '!' (ignored files) and anything unknown
            _ => {}
        }
    }
}

/// Converts a v2 `XY` field (`.` = unchanged) into status chars.
fn v2_code(xy: &str) -> Option<(char, char)> {
    let mut chars = xy.chars();
    let normalize = |c: char| if c == '.' { ' ' } else { c };
    match (chars.next(), chars.next(), chars.next()) {
        (Some(x), Some(y), None) => Some((normalize(x), normalize(y))),
        _ => None,
    }
}

/// Undoes git's C-style quoting of unusual paths (`"a\tb"`, `"\303\244"`).
fn unquote(path: &str) -> String {
    let Some(inner) = path.strip_prefix('"').and_then(|p| p.strip_suffix('"')) else {
        return path.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut iter = inner.bytes().peekable();
    while let Some(b) = iter.next() {
        if b != b'\\' {
            bytes.push(b);
            continue;
        }
        match iter.next() {
            Some(b'n') => bytes.push(b'\n'),
            Some(b't') => bytes.push(b'\t'),
            Some(b'a') => bytes.push(0x07),
            Some(b'b') => bytes.push(0x08),
            Some(b'f') => bytes.push(0x0c),
            Some(b'r') => bytes.push(b'\r'),
            Some(b'v') => bytes.push(0x0b),
            Some(d @ b'0'..=b'7') => {
                let mut value = u32::from(d - b'0');
                for _ in 0..2 {
                    match iter.peek() {
                        Some(&o @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(o - b'0');
                            iter.next();
                        }
                        _ => break,
                    }
                }
                bytes.push(u8::try_from(value).unwrap_or(b'?'));
            }
            Some(other) => bytes.push(other),
            None => bytes.push(b'\\'),
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

impl ParseResponse for StatusResult {
    fn parse(text: &str) -> Result<Self, ParseError> {
        let mut status = Self::default();
        for line in text.lines() {
            let bytes = line.as_bytes();
            if let Some(header) = line.strip_prefix("## ") {
                status.parse_v1_branch(header);
            } else if let Some(header) = line.strip_prefix("# ") {
                status.parse_v2_header(header);
            } else if bytes.len() >= 3
                && bytes[1] == b' '
                && matches!(bytes[0], b'1' | b'2' | b'u' | b'?' | b'!')
            {
                status.parse_v2_entry(char::from(bytes[0]), line);
            } else if bytes.len() >= 4 && bytes[2] == b' ' && line.is_char_boundary(3) {
                status.parse_v1_entry(line);
            }
        }
        Ok(status)
    }

    fn empty() -> Self {
        Self::default()
    }
}
