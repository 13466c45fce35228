pub mod follow;
pub mod post;
pub mod share;

use derive_where::derive_where;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, marker::PhantomData, num::ParseIntError, str::FromStr};
use thiserror::Error;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Error)]
pub enum ModelValidationError {
    #[error("Please select an image first!")]
    EmptyImageRef,
}

#[derive_where(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<Marker>(u64, #[serde(skip)] PhantomData<Marker>);

impl<Marker> Id<Marker> {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id, PhantomData)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }

    /// The id after this one, or `None` once the id space is used up.
    #[must_use]
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self::new)
    }
}

impl<Marker> Display for Id<Marker> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<Marker> FromStr for Id<Marker> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str(s).map(Self::new)
    }
}

impl<Marker> From<u64> for Id<Marker> {
    fn from(value: u64) -> Self {
        Id::new(value)
    }
}

impl<Marker> From<Id<Marker>> for u64 {
    fn from(value: Id<Marker>) -> Self {
        value.get()
    }
}
