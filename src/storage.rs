//! Persistence of numbers as fixed-size blobs in an external key-value store.
//!
//! The store is addressed by [`Slot`]. Which slot a value lives in is decided
//! outside of this module (see [`Bindings`]) and passed in as `Option<Slot>`;
//! `None` means the value is not persisted, and saving or loading it is a no-op.
//!
//! Every save is exactly one [`Storage::set`] of [`Storable::STORAGE_BYTES`]
//! bytes, every load exactly one [`Storage::get`].

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::{Result, Unsigned};

/// Address of a blob in the store.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Slot(pub u32);

/// The backend contract.
///
/// Failures are reported as [`crate::Error::Storage`] and handed to the
/// caller unchanged.
pub trait Storage {
    /// The blob at `slot`, `None` if nothing was ever written there.
    fn get(&self, slot: Slot) -> Result<Option<Vec<u8>>>;

    fn set(&mut self, slot: Slot, bytes: &[u8]) -> Result<()>;
}

/// A value with a fixed-size blob encoding.
///
/// An absent blob loads as [`Default::default`].
pub trait Storable: Default + Sized {
    const STORAGE_BYTES: usize;

    /// Exactly `STORAGE_BYTES` bytes.
    fn to_storage_bytes(&self) -> Vec<u8>;

    /// Accepts any length, truncating or padding to the declared width.
    fn from_storage_bytes(bytes: &[u8]) -> Self;

    fn save<S: Storage + ?Sized>(&self, storage: &mut S, slot: Option<Slot>) -> Result<()> {
        let slot = match slot {
            Some(slot) => slot,
            None => return Ok(()),
        };
        let bytes = self.to_storage_bytes();
        debug_assert_eq!(bytes.len(), Self::STORAGE_BYTES);
        debug!("save slot {}: {}", slot.0, delog::hex_str!(&bytes[..]));
        storage.set(slot, &bytes)
    }

    /// `Ok(None)` if there is no slot, in which case the storage is not touched.
    fn load<S: Storage + ?Sized>(storage: &S, slot: Option<Slot>) -> Result<Option<Self>> {
        let slot = match slot {
            Some(slot) => slot,
            None => return Ok(None),
        };
        match storage.get(slot)? {
            Some(bytes) => {
                debug!("load slot {}: {}", slot.0, delog::hex_str!(&bytes[..]));
                Ok(Some(Self::from_storage_bytes(&bytes)))
            }
            None => {
                info!("slot {} is empty, loading zero", slot.0);
                Ok(Some(Self::default()))
            }
        }
    }
}

impl<const L: usize> Storable for Unsigned<L> {
    const STORAGE_BYTES: usize = Self::BYTES;

    fn to_storage_bytes(&self) -> Vec<u8> {
        self.to_fixed_be_bytes()
    }

    fn from_storage_bytes(bytes: &[u8]) -> Self {
        Self::from_be_bytes(bytes)
    }
}

/// A value that knows how to persist itself, given a slot.
///
/// [`Persisted::load`] replaces the value wholesale; there is no partial update.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Persisted<T: Storable> {
    value: T,
}

impl<T: Storable> Persisted<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn save<S: Storage + ?Sized>(&self, storage: &mut S, slot: Option<Slot>) -> Result<()> {
        self.value.save(storage, slot)
    }

    /// Unchanged if there is no slot, or on error.
    pub fn load<S: Storage + ?Sized>(&mut self, storage: &S, slot: Option<Slot>) -> Result<()> {
        if let Some(value) = T::load(storage, slot)? {
            self.value = value;
        }
        Ok(())
    }
}

/// Names of persistent variables and the slots they are bound to.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    slots: BTreeMap<String, Slot>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot previously bound to `name`, if any.
    pub fn bind(&mut self, name: &str, slot: Slot) -> Option<Slot> {
        self.slots.insert(String::from(name), slot)
    }

    pub fn slot_of(&self, name: &str) -> Option<Slot> {
        self.slots.get(name).copied()
    }

    pub fn unbind(&mut self, name: &str) -> Option<Slot> {
        self.slots.remove(name)
    }
}

/// [`Storage`] in memory, counting the calls made to it.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    blobs: BTreeMap<Slot, Vec<u8>>,
    gets: Cell<usize>,
    sets: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `get` calls so far.
    pub fn gets(&self) -> usize {
        self.gets.get()
    }

    /// Number of `set` calls so far.
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// The stored blob, without counting as a `get`.
    pub fn peek(&self, slot: Slot) -> Option<&[u8]> {
        self.blobs.get(&slot).map(|blob| blob.as_slice())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, slot: Slot) -> Result<Option<Vec<u8>>> {
        self.gets.set(self.gets.get() + 1);
        Ok(self.blobs.get(&slot).cloned())
    }

    fn set(&mut self, slot: Slot, bytes: &[u8]) -> Result<()> {
        self.sets += 1;
        self.blobs.insert(slot, bytes.to_vec());
        Ok(())
    }
}
