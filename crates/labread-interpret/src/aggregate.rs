use std::collections::HashMap;

use labread_core::models::interpretation::Section;
use labread_core::models::item::ResolvedItem;

/// A resolved item together with the section it belongs to.
#[derive(Debug, Clone)]
pub struct Placement {
    pub section: String,
    pub section_title: String,
    pub item: ResolvedItem,
}

/// Group items by section id.
///
/// Sections appear in the order their first item appears; items keep their
/// input order within a section. A section's title comes from its first
/// item.
pub fn group(placements: Vec<Placement>) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for placement in placements {
        let idx = *positions
            .entry(placement.section.clone())
            .or_insert_with(|| {
                sections.push(Section {
                    section: placement.section.clone(),
                    section_title: placement.section_title.clone(),
                    items: Vec::new(),
                });
                sections.len() - 1
            });
        sections[idx].items.push(placement.item);
    }

    sections
}
