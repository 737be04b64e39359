// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error types for interval data operations

use std::fmt;

/// ErrorKind is all kinds of Error of interval data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An argument is malformed: a bad bin specification, mismatched lengths,
    /// non-monotonic x-values or a container with a different key domain.
    InvalidArgument,
    /// A builder is not in a state that permits the operation.
    IllegalState,
    /// An index, or the index derived from a value, is outside its dimension.
    IndexOutOfRange,
    /// A mutating operation was called on an immutable value.
    UnsupportedOperation,
    /// A caller supplied loader failed to compute a value.
    ComputeFailed,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::IllegalState => "IllegalState",
            ErrorKind::IndexOutOfRange => "IndexOutOfRange",
            ErrorKind::UnsupportedOperation => "UnsupportedOperation",
            ErrorKind::ComputeFailed => "ComputeFailed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned by all interval data functions.
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Vec::default(),
            source: None,
        }
    }

    /// Add more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Set source for error.
    ///
    /// # Panics
    ///
    /// Panics if the source has been set.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::error::Error as _;
    /// use interval_data::error::{Error, ErrorKind};
    ///
    /// let mut error = Error::new(ErrorKind::ComputeFailed, "loader failed");
    /// assert!(error.source().is_none());
    /// error = error.set_source(std::io::Error::new(std::io::ErrorKind::Other, "IO error"));
    /// assert!(error.source().is_some());
    /// ```
    pub fn set_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        assert!(self.source.is_none(), "the source error has been set");
        self.source = Some(src.into());
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub(crate) fn illegal_state(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalState, message)
    }

    pub(crate) fn index_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IndexOutOfRange, message)
    }

    pub(crate) fn unspecified(dimension: &'static str) -> Self {
        Self::illegal_state(format!(
            "{dimension} data have not yet been fully specified"
        ))
    }

    pub(crate) fn already_initialized() -> Self {
        Self::illegal_state("Builder has already been initialized")
    }

    pub(crate) fn unsupported(operation: &'static str) -> Self {
        Self::new(
            ErrorKind::UnsupportedOperation,
            format!("{operation} is not supported by an immutable sequence"),
        )
    }

    /// Checked element index in the manner of `[0, size)`.
    pub(crate) fn check_index(index: usize, size: usize, label: &'static str) -> Result<usize, Self> {
        if index < size {
            Ok(index)
        } else {
            Err(Self::index_out_of_range(format!(
                "{label} index [{index}] must be less than size [{size}]"
            )))
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            de.field("source", &self.source);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "Source:")?;
            writeln!(f, "   {source:#}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            write!(
                f,
                "{}",
                self.context
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        if let Some(source) = &self.source {
            write!(f, ", source: {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|v| v.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_context() {
        let err = Error::invalid_argument("Δ [3] > max - min [2]")
            .with_context("min", 0.0)
            .with_context("max", 2.0);
        assert_eq!(
            err.to_string(),
            "InvalidArgument, context: { min: 0, max: 2 } => Δ [3] > max - min [2]"
        );
    }

    #[test]
    fn test_check_index() {
        assert_eq!(Error::check_index(2, 3, "row").unwrap(), 2);
        let err = Error::check_index(3, 3, "row").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
        assert_eq!(err.message(), "row index [3] must be less than size [3]");
    }
}
