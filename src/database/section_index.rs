use std::collections::HashSet;

use crate::models::{Section, UserId};

/// Dois conjuntos disjuntos de ocupantes, um por seção.
#[derive(Debug, Default)]
pub struct SectionIndex {
    section_a: HashSet<UserId>,
    section_b: HashSet<UserId>,
}

impl SectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_mut(&mut self, section: Section) -> &mut HashSet<UserId> {
        match section {
            Section::A => &mut self.section_a,
            Section::B => &mut self.section_b,
        }
    }

    pub fn add(&mut self, section: Section, id: UserId) {
        self.set_mut(section).insert(id);
    }

    pub fn remove(&mut self, section: Section, id: &UserId) {
        self.set_mut(section).remove(id);
    }

    pub fn members(&self, section: Section) -> &HashSet<UserId> {
        match section {
            Section::A => &self.section_a,
            Section::B => &self.section_b,
        }
    }

    /// Which set holds `id`, if any.
    #[cfg(test)]
    pub(crate) fn section_of(&self, id: &UserId) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| self.members(*section).contains(id))
    }
}
