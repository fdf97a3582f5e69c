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

//! Time related utils.

use crate::Result;
use chrono::Utc;
use std::fmt::Debug;

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse time from RFC3339: `2022-03-13T07:20:04Z`
pub fn parse_rfc3339(s: &str) -> Result<DateTime> {
    Ok(chrono::DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

/// Timestamp holds both date representations used by SigV4, taken from
/// the same instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    full: String,
    date: String,
}

impl Timestamp {
    /// Create a new timestamp from given instant.
    pub fn new(t: DateTime) -> Self {
        Self {
            full: format_iso8601(t),
            date: format_date(t),
        }
    }

    /// The `x-amz-date` form: `20220313T072004Z`
    pub fn full(&self) -> &str {
        &self.full
    }

    /// The credential scope form: `20220313`
    pub fn datestamp(&self) -> &str {
        &self.date
    }
}

/// Clock is the source of the signing instant.
///
/// Signers read the clock exactly once per request. Tests pass a
/// [`FixedClock`] to make signatures reproducible.
pub trait Clock: Debug + Send + Sync + 'static {
    /// Current instant in UTC.
    fn now(&self) -> DateTime;
}

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime {
        now()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime);

impl FixedClock {
    /// Create a clock frozen at `t`.
    pub fn new(t: DateTime) -> Self {
        Self(t)
    }

    /// Create a clock frozen at the given RFC3339 instant.
    pub fn from_rfc3339(s: &str) -> Result<Self> {
        parse_rfc3339(s).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime {
        self.0
    }
}
