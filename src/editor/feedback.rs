// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedbackKind {
    Info,
    Error,
}

/// A message for the user about the outcome of an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FeedbackMessage {
    pub(crate) kind: FeedbackKind,
    pub(crate) text: String,
}

impl FeedbackMessage {
    pub(crate) fn info(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Info,
            text: text.into(),
        }
    }

    pub(crate) fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FeedbackKind::Error,
            text: text.into(),
        }
    }
}

impl fmt::Display for FeedbackMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FeedbackKind::Info => write!(f, "{}", self.text),
            FeedbackKind::Error => write!(f, "error: {}", self.text),
        }
    }
}
