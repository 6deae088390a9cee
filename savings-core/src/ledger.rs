//! Append-only list of calculated areas for one session.

use std::slice;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::CalculatedArea;
use crate::calculations::common::saturating_add;

/// Ordered record of every area calculated so far.
///
/// Entries are only ever added at the end; there is no way to remove or
/// reorder them. The total is derived on each call rather than stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaLedger {
    entries: Vec<CalculatedArea>,
}

impl AreaLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ledger with `area` added after all existing entries.
    #[must_use]
    pub fn append(
        mut self,
        area: CalculatedArea,
    ) -> Self {
        self.push(area);
        self
    }

    /// Adds `area` after all existing entries.
    pub fn push(
        &mut self,
        area: CalculatedArea,
    ) {
        info!(
            area = %area.area_name,
            net_savings = %area.net_savings,
            position = self.entries.len() + 1,
            "area added to ledger"
        );
        self.entries.push(area);
    }

    /// Sum of the net savings of every entry; zero when empty.
    /// A sum too large for [`Decimal`] is held at [`Decimal::MAX`].
    pub fn total_savings(&self) -> Decimal {
        self.entries
            .iter()
            .fold(Decimal::ZERO, |total, area| saturating_add(total, area.net_savings))
    }

    pub fn entries(&self) -> &[CalculatedArea] {
        &self.entries
    }

    pub fn iter(&self) -> slice::Iter<'_, CalculatedArea> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&CalculatedArea> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AreaLedger {
    type Item = &'a CalculatedArea;
    type IntoIter = slice::Iter<'a, CalculatedArea>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<CalculatedArea> for AreaLedger {
    fn extend<T: IntoIterator<Item = CalculatedArea>>(
        &mut self,
        iter: T,
    ) {
        for area in iter {
            self.push(area);
        }
    }
}

impl FromIterator<CalculatedArea> for AreaLedger {
    fn from_iter<T: IntoIterator<Item = CalculatedArea>>(iter: T) -> Self {
        let mut ledger = Self::new();
        ledger.extend(iter);
        ledger
    }
}
