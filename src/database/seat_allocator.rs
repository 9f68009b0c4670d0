use std::collections::HashMap;

use super::section_index::SectionIndex;
use crate::models::{Section, UserId};

/// Relação assento -> seção e as listas por seção.
///
/// The next section is derived from the number of active assignments, so
/// no counter is kept: an even count gives "A", an odd one "B".
#[derive(Debug, Default)]
pub struct SeatAllocator {
    seats: HashMap<UserId, Section>,
    index: SectionIndex,
}

impl SeatAllocator {
    pub fn new() -> Self {
        SeatAllocator {
            seats: HashMap::new(),
            index: SectionIndex::new(),
        }
    }

    /// Assigns a section to `id` and records it in the section index.
    ///
    /// Callers deallocate first when `id` already holds a seat; otherwise the
    /// previous membership would be left behind.
    pub fn allocate(&mut self, id: UserId) -> Section {
        let section = Section::for_active_count(self.seats.len());
        self.seats.insert(id, section);
        self.index.add(section, id);
        section
    }

    /// Frees the seat of `id`. Returns the section it was in.
    pub fn deallocate(&mut self, id: &UserId) -> Option<Section> {
        let section = self.seats.remove(id)?;
        self.index.remove(section, id);
        Some(section)
    }

    pub fn current_section(&self, id: &UserId) -> Option<Section> {
        self.seats.get(id).copied()
    }

    pub fn members(&self, section: Section) -> impl Iterator<Item = &UserId> {
        self.index.members(section).iter()
    }

    pub fn active_seats(&self) -> usize {
        self.seats.len()
    }

    pub fn section_size(&self, section: Section) -> usize {
        self.index.members(section).len()
    }

    #[cfg(test)]
    pub(crate) fn indexed_section(&self, id: &UserId) -> Option<Section> {
        self.index.section_of(id)
    }
}
