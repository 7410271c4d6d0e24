//! Ordered, id-keyed stores
//!
//! Store order is meaningful: the colour store's order is the print-order
//! stack that decides z-index. Every mutation reports what it changed as a
//! [`StoreChange`] so an observer can schedule a redraw after the fact.

use super::colour::{Colour, TRANSPARENT_ID};
use super::errors::ModelError;
use super::instances::Instance;
use super::symbols::Symbol;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use uuid::Uuid;

/// Name of the layer every instance store starts with
pub const DEFAULT_LAYER: &str = "Main Layer";

/// Something a [`Store`] can hold
pub trait Storable {
    /// Used in error messages ("colour", "symbol", ...)
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

/// Storables that can be looked up by name
pub trait Named {
    fn name(&self) -> &str;
}

impl Storable for Colour {
    const KIND: &'static str = "colour";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Named for Colour {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Storable for Symbol {
    const KIND: &'static str = "symbol";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Named for Symbol {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Storable for Instance {
    const KIND: &'static str = "instance";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// A committed store mutation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum StoreChange {
    Added { index: usize },
    Removed { index: usize },
    Changed { index: usize },
    Moved { from: usize, to: usize },
    Reset,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Store<T> {
    items: Vec<T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Storable> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: Uuid) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Item by id, or `NotFound`
    pub fn require(&self, id: Uuid) -> Result<&T, ModelError> {
        self.get(id).ok_or(ModelError::NotFound { kind: T::KIND, id })
    }

    /// Append to the end of the store
    pub fn add(&mut self, item: T) -> Result<StoreChange, ModelError> {
        self.ensure_unique(item.id())?;
        self.items.push(item);
        Ok(StoreChange::Added {
            index: self.items.len() - 1,
        })
    }

    pub fn insert(&mut self, index: usize, item: T) -> Result<StoreChange, ModelError> {
        if index > self.items.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.ensure_unique(item.id())?;
        self.items.insert(index, item);
        Ok(StoreChange::Added { index })
    }

    pub fn remove(&mut self, id: Uuid) -> Result<(T, StoreChange), ModelError> {
        let index = self.index_of(id).ok_or(ModelError::NotFound { kind: T::KIND, id })?;
        let item = self.items.remove(index);
        Ok((item, StoreChange::Removed { index }))
    }

    /// Swap in a new value for the item with the same id, keeping its position
    pub fn replace(&mut self, item: T) -> Result<StoreChange, ModelError> {
        let id = item.id();
        let index = self.index_of(id).ok_or(ModelError::NotFound { kind: T::KIND, id })?;
        self.items[index] = item;
        Ok(StoreChange::Changed { index })
    }

    /// Move an item to a new position, shifting the items in between
    pub fn move_to(&mut self, id: Uuid, to: usize) -> Result<StoreChange, ModelError> {
        let from = self.index_of(id).ok_or(ModelError::NotFound { kind: T::KIND, id })?;
        if to >= self.items.len() {
            return Err(ModelError::IndexOutOfRange {
                index: to,
                len: self.items.len(),
            });
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(StoreChange::Moved { from, to })
    }

    pub fn clear(&mut self) -> StoreChange {
        self.items.clear();
        StoreChange::Reset
    }

    fn ensure_unique(&self, id: Uuid) -> Result<(), ModelError> {
        if self.contains(id) {
            return Err(ModelError::DuplicateId { kind: T::KIND, id });
        }
        Ok(())
    }
}

impl<T: Storable + Named> Store<T> {
    /// First item with this name
    pub fn get_by_name(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }
}

impl<'a, T> IntoIterator for &'a Store<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

pub type ColourStore = Store<Colour>;
pub type SymbolStore = Store<Symbol>;

impl Store<Colour> {
    /// Draw order derived from the colour stack
    ///
    /// The first colour paints on top: `z = (len - 1) - index`. Transparent
    /// sits beneath every stored colour at -1. `None` for an unknown id.
    pub fn z_index(&self, id: Uuid) -> Option<i32> {
        if id == TRANSPARENT_ID {
            return Some(-1);
        }
        let index = self.index_of(id)?;
        Some((self.items.len() - 1 - index) as i32)
    }

    /// Resolve a reference, accepting the Transparent sentinel
    pub fn resolves(&self, id: Uuid) -> bool {
        id == TRANSPARENT_ID || self.contains(id)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Layer {
    pub name: String,
    pub index: i32,
}

/// Instances plus the name to layer-index registry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InstanceStore {
    items: Store<Instance>,
    layers: Vec<Layer>,
}

impl Default for InstanceStore {
    fn default() -> Self {
        Self {
            items: Store::new(),
            layers: vec![Layer {
                name: DEFAULT_LAYER.to_string(),
                index: 0,
            }],
        }
    }
}

impl Deref for InstanceStore {
    type Target = Store<Instance>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl DerefMut for InstanceStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl InstanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Replace the layer registry wholesale
    pub fn set_layers(&mut self, layers: Vec<Layer>) {
        self.layers = layers;
    }

    /// Register a named layer above every existing one and return its index
    pub fn add_layer(&mut self, name: impl Into<String>) -> i32 {
        let name = name.into();
        if let Some(existing) = self.layer_index(&name) {
            return existing;
        }
        let index = self.layers.iter().map(|l| l.index).max().map_or(0, |max| max + 1);
        self.layers.push(Layer { name, index });
        index
    }

    pub fn layer_index(&self, name: &str) -> Option<i32> {
        self.layers.iter().find(|l| l.name == name).map(|l| l.index)
    }

    /// Exchange the instances of two layers
    ///
    /// Nothing happens when either layer is negative or above the highest
    /// layer any instance uses. Returns one `Changed` per moved instance.
    pub fn swap_layers(&mut self, a: i32, b: i32) -> Vec<StoreChange> {
        let Some(max) = self.items.iter().map(|i| i.layer).max() else {
            return Vec::new();
        };
        if a < 0 || b < 0 || a > max || b > max || a == b {
            return Vec::new();
        }

        let mut changes = Vec::new();
        for (index, instance) in self.items.iter_mut().enumerate() {
            if instance.layer == a {
                instance.layer = b;
            } else if instance.layer == b {
                instance.layer = a;
            } else {
                continue;
            }
            changes.push(StoreChange::Changed { index });
        }

        log::debug!("Swapped layers {} and {} ({} instances)", a, b, changes.len());
        changes
    }

    /// Set the opacity of every instance on a layer
    pub fn set_layer_opacity(&mut self, layer: i32, opacity: f32) -> Vec<StoreChange> {
        self.items
            .iter_mut()
            .enumerate()
            .filter(|(_, instance)| instance.layer == layer)
            .map(|(index, instance)| {
                instance.opacity = opacity;
                StoreChange::Changed { index }
            })
            .collect()
    }

    pub fn set_named_layer_opacity(&mut self, name: &str, opacity: f32) -> Result<Vec<StoreChange>, ModelError> {
        let layer = self
            .layer_index(name)
            .ok_or_else(|| ModelError::UnknownLayer(name.to_string()))?;
        Ok(self.set_layer_opacity(layer, opacity))
    }
}
