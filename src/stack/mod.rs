//! The drop area: where dragged ingredients land and pile up into a burger.

use crate::burger::AssembledBurger;
use crate::config::StackSettings;
use crate::error::DropError;
use crate::ingredient::IngredientId;
use serde::{Deserialize, Serialize};

mod stock;

pub use stock::{Stock, StockLedger};

/// One layer resting on the drop area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackedItem {
    pub ingredient: IngredientId,
    /// Height above the drop area origin.
    pub offset: f32,
}

/// Where an accepted ingredient should be placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Zero-based layer index.
    pub position: usize,
    pub offset: f32,
    /// Stock left after this drop. A host spawns its replacement sprite as
    /// draggable only while this is non-zero.
    pub remaining: u32,
}

/// Inventory plus the ordered pile of ingredients on the drop area.
///
/// Stock persists across orders; the pile is cleared by [`StackState::reset`] after
/// each evaluation.
#[derive(Debug, Clone)]
pub struct StackState {
    settings: StackSettings,
    stock: StockLedger,
    stacked: Vec<StackedItem>,
}

impl StackState {
    pub fn new(settings: StackSettings) -> Self {
        let stock = StockLedger::new(&settings.stock);
        Self {
            settings,
            stock,
            stacked: Vec::new(),
        }
    }

    /// Host-facing drop: resolves the object name and reports whether it was accepted.
    ///
    /// A rejected drop leaves the stack and inventory untouched.
    pub fn drop_ingredient(&mut self, name: &str) -> bool {
        let result = match IngredientId::lookup(name) {
            Some(ingredient) => self.try_drop(ingredient),
            None => Err(DropError::UnknownIngredient(name.to_string())),
        };

        match result {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Drop rejected: {}", e);
                false
            }
        }
    }

    /// Places one unit of `ingredient` on top of the stack.
    pub fn try_drop(&mut self, ingredient: IngredientId) -> Result<Placement, DropError> {
        if self.settings.lock_when_complete && self.is_complete() {
            return Err(DropError::BurgerSealed(ingredient));
        }

        if self.stock.get(ingredient).is_none() {
            return Err(DropError::UnknownIngredient(ingredient.to_string()));
        }
        let remaining = self
            .stock
            .take(ingredient)
            .ok_or(DropError::OutOfStock(ingredient))?;

        let position = self.stacked.len();
        let offset = position as f32 * self.settings.stack_offset;
        self.stacked.push(StackedItem { ingredient, offset });

        tracing::debug!(
            "Stacked {} at layer {} (offset {:.2}, {} left)",
            ingredient,
            position,
            offset,
            remaining
        );

        Ok(Placement {
            position,
            offset,
            remaining,
        })
    }

    /// The burger as it currently stands, bottom layer first.
    pub fn assembled(&self) -> AssembledBurger {
        self.stacked.iter().map(|item| item.ingredient).collect()
    }

    pub fn sequence(&self) -> Vec<IngredientId> {
        self.stacked.iter().map(|item| item.ingredient).collect()
    }

    pub fn stacked(&self) -> &[StackedItem] {
        &self.stacked
    }

    pub fn height(&self) -> usize {
        self.stacked.len()
    }

    /// True once enough closing ingredients are stacked for the burger to be served.
    pub fn is_complete(&self) -> bool {
        let closing = self
            .stacked
            .iter()
            .filter(|item| item.ingredient == self.settings.closing_ingredient)
            .count();
        closing >= self.settings.closing_count
    }

    /// Whether a host should let the player pick up this ingredient right now.
    pub fn can_drag(&self, ingredient: IngredientId) -> bool {
        let sealed = self.settings.lock_when_complete && self.is_complete();
        !sealed && self.stock.get(ingredient).is_some_and(|s| s.has_stock())
    }

    /// Clears the pile. Stock counts are left as they are.
    pub fn reset(&mut self) {
        tracing::debug!("Clearing {} stacked layers", self.stacked.len());
        self.stacked.clear();
    }

    pub fn replenish_all(&mut self) {
        self.stock.replenish_all();
    }

    pub fn stock(&self, ingredient: IngredientId) -> Option<Stock> {
        self.stock.get(ingredient)
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.stock
    }

    /// Overrides the remaining amount of an ingredient, clamped to its maximum.
    pub fn set_amount(&mut self, ingredient: IngredientId, amount: u32) -> Result<u32, DropError> {
        self.stock
            .set_amount(ingredient, amount)
            .ok_or_else(|| DropError::UnknownIngredient(ingredient.to_string()))
    }

    pub fn settings(&self) -> &StackSettings {
        &self.settings
    }
}

impl Default for StackState {
    fn default() -> Self {
        Self::new(StackSettings::default())
    }
}
