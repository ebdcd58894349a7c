//! Offset/page-size bookkeeping for "load more".
//!
//! [`PaginationState`] is a plain value: callers hold it, ask it for the
//! next range and replace it with the advanced state. The dataset has no
//! known upper bound; ranges past its end come back from the provider as
//! not-found errors. The only hard limit is the ID space itself: a state is
//! never built whose next range holds an ID past `u32::MAX`.

use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::types::{PageRange, PokemonId};

/// Current pagination position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationState {
    offset: u32,
    page_size: usize,
}

impl PaginationState {
    /// Create a state starting at `offset` with pages of `page_size` records
    ///
    /// # Errors
    /// Returns a configuration error if `offset` is 0, `page_size` is 0, or
    /// the first page would run past the last representable ID.
    pub fn new(offset: u32, page_size: usize) -> Result<Self> {
        if offset == 0 {
            return Err(Error::config("start_offset", "must be at least 1"));
        }
        if page_size == 0 {
            return Err(Error::config("page_size", "must be greater than 0"));
        }
        if !PageRange::new(offset, page_size).fits() {
            return Err(Error::config(
                "page_size",
                format!("a page of {page_size} starting at {offset} exceeds the ID space"),
            ));
        }
        Ok(Self { offset, page_size })
    }

    /// Build the initial state from configuration
    pub fn from_config(config: &PaginationConfig) -> Result<Self> {
        Self::new(config.start_offset, config.page_size)
    }

    /// Next ID to request
    pub fn offset(&self) -> PokemonId {
        PokemonId(self.offset)
    }

    /// Records per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Range the next batch should request
    pub fn next_range(&self) -> PageRange {
        PageRange::new(self.offset, self.page_size)
    }

    /// State after consuming one page
    ///
    /// # Errors
    /// Returns [`Error::RangeOverflow`] when the following page would run
    /// past the last representable ID. The current state stays usable.
    pub fn advance(self) -> Result<Self> {
        let next = self
            .next_range()
            .end()
            .map(|offset| PageRange::new(offset.get(), self.page_size))
            .filter(PageRange::fits);

        match next {
            Some(range) => Ok(Self {
                offset: range.start.get(),
                ..self
            }),
            None => Err(Error::RangeOverflow {
                start: PokemonId(self.offset),
                count: self.page_size,
            }),
        }
    }
}
