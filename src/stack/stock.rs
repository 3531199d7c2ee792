use crate::config::StockEntry;
use crate::ingredient::IngredientId;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Remaining and maximum amount of a single ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub max: u32,
    pub current: u32,
}

impl Stock {
    pub fn full(max: u32) -> Self {
        Self { max, current: max }
    }

    pub fn has_stock(&self) -> bool {
        self.current > 0
    }
}

/// Per-ingredient inventory of the drop area.
///
/// `current` stays within `0..=max`: it only goes down through [`StockLedger::take`]
/// and only comes back up through [`StockLedger::replenish_all`] or a clamped
/// [`StockLedger::set_amount`].
#[derive(Debug, Clone, Default)]
pub struct StockLedger {
    entries: AHashMap<IngredientId, Stock>,
}

impl StockLedger {
    pub fn new(entries: &[StockEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|e| (e.ingredient, Stock::full(e.max_amount)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, ingredient: IngredientId) -> Option<Stock> {
        self.entries.get(&ingredient).copied()
    }

    /// Removes one unit. Returns the amount left, or `None` if nothing could be taken.
    pub(crate) fn take(&mut self, ingredient: IngredientId) -> Option<u32> {
        let stock = self.entries.get_mut(&ingredient)?;
        if stock.current == 0 {
            return None;
        }
        stock.current -= 1;
        Some(stock.current)
    }

    /// Overrides the current amount, clamped to the maximum. Returns the stored value.
    pub fn set_amount(&mut self, ingredient: IngredientId, amount: u32) -> Option<u32> {
        let stock = self.entries.get_mut(&ingredient)?;
        stock.current = amount.min(stock.max);
        Some(stock.current)
    }

    pub fn replenish_all(&mut self) {
        for stock in self.entries.values_mut() {
            stock.current = stock.max;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (IngredientId, Stock)> + '_ {
        self.entries.iter().map(|(id, stock)| (*id, *stock))
    }
}
