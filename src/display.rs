// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::default::Default;
use std::fmt::{Display, Formatter, Result};

use crate::FrequencyTable;

/// Options for displaying a [FrequencyTable] report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// A constant added to every count when it is printed. The table
    /// itself is never changed.
    pub count_offset: u64,
}

impl Options {
    pub fn with_count_offset(count_offset: u64) -> Self {
        Self { count_offset }
    }
}

/// The statistics section for a [FrequencyTable], created with
/// [FrequencyTable::report].
///
/// ```text
/// Dice roll statistics: 
/// 2's: <count>
/// ...
/// 12's: <count>
/// ```
pub struct Report<'a> {
    table: &'a FrequencyTable,
    options: Options,
}

impl<'a> Report<'a> {
    pub(crate) fn new(table: &'a FrequencyTable, options: Options) -> Self {
        Self { table, options }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Dice roll statistics: ")?;
        for (total, count) in self.table.iter() {
            writeln!(f, "{}'s: {}", total, count + self.options.count_offset)?;
        }
        Ok(())
    }
}
