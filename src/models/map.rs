//! The map aggregate and its cross-reference checks

use super::colour::Colour;
use super::errors::ModelError;
use super::instances::Instance;
use super::stores::{ColourStore, InstanceStore, StoreChange, SymbolStore};
use super::symbols::Symbol;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A complete map document
///
/// Symbols reference colours and instances reference symbols by id only.
/// The `add_*` methods refuse a reference that does not resolve in this map,
/// so a map built through them is always reference-complete.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Map {
    pub title: String,
    pub colours: ColourStore,
    pub symbols: SymbolStore,
    pub instances: InstanceStore,
}

impl Map {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_colour(&mut self, colour: Colour) -> Result<StoreChange, ModelError> {
        self.colours.add(colour)
    }

    /// Add a symbol whose colours are already in the map
    pub fn add_symbol(&mut self, symbol: Symbol) -> Result<StoreChange, ModelError> {
        self.check_symbol(&symbol)?;
        self.symbols.add(symbol)
    }

    /// Add an instance whose symbol is in the map and of the matching kind
    pub fn add_instance(&mut self, instance: Instance) -> Result<StoreChange, ModelError> {
        self.check_instance(&instance)?;
        self.instances.add(instance)
    }

    /// The symbol an instance places
    pub fn symbol_of(&self, instance: &Instance) -> Result<&Symbol, ModelError> {
        self.symbols
            .get(instance.symbol_id)
            .ok_or(ModelError::UnresolvedSymbol {
                instance: instance.id,
                symbol: instance.symbol_id,
            })
    }

    /// Re-check every cross-reference in the map
    pub fn validate(&self) -> Result<(), ModelError> {
        for symbol in self.symbols.iter() {
            self.check_symbol(symbol)?;
        }
        for instance in self.instances.iter() {
            self.check_instance(instance)?;
        }
        Ok(())
    }

    fn check_symbol(&self, symbol: &Symbol) -> Result<(), ModelError> {
        match symbol.colour_ids().into_iter().find(|id| !self.colours.resolves(*id)) {
            Some(colour) => Err(ModelError::UnresolvedColour {
                owner: symbol.id,
                colour,
            }),
            None => Ok(()),
        }
    }

    fn check_instance(&self, instance: &Instance) -> Result<(), ModelError> {
        let symbol = self.symbol_of(instance)?;
        let expected = instance.required_symbol_type();
        let found = symbol.symbol_type();
        if expected != found {
            return Err(ModelError::SymbolKindMismatch {
                instance: instance.id,
                symbol: symbol.id,
                expected,
                found,
            });
        }
        Ok(())
    }
}
