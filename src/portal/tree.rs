//! Read-only family tree, grouped by generation.

use std::collections::BTreeMap;

use super::model::{FamilyMember, MemberId};

/// Generations the tree view lays out as fixed rows, with their headings.
pub const DISPLAYED_GENERATIONS: [(u32, &str); 3] = [
    (1, "Первое поколение"),
    (2, "Второе поколение"),
    (3, "Третье поколение"),
];

#[derive(Debug, Default)]
pub struct FamilyTree {
    members: Vec<FamilyMember>,
}

impl FamilyTree {
    pub fn new(members: Vec<FamilyMember>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[FamilyMember] {
        &self.members
    }

    pub fn get(&self, id: MemberId) -> Option<&FamilyMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn members_of_generation(&self, generation: u32) -> Vec<&FamilyMember> {
        self.members
            .iter()
            .filter(|m| m.generation == generation)
            .collect()
    }

    pub fn generations(&self) -> BTreeMap<u32, Vec<&FamilyMember>> {
        let mut groups: BTreeMap<u32, Vec<&FamilyMember>> = BTreeMap::new();
        for member in &self.members {
            groups.entry(member.generation).or_default().push(member);
        }
        groups
    }

    /// Parents of `id` that exist in the tree; unknown parent ids are skipped.
    pub fn parents_of(&self, id: MemberId) -> Vec<&FamilyMember> {
        self.get(id)
            .map(|m| m.parents.iter().filter_map(|p| self.get(*p)).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed::default_family;
    use std::collections::BTreeSet;

    fn names(members: &[&FamilyMember]) -> Vec<String> {
        members.iter().map(|m| m.name.clone()).collect()
    }

    #[test]
    fn test_generation_filters() {
        let tree = FamilyTree::new(default_family());
        assert_eq!(
            names(&tree.members_of_generation(1)),
            vec!["Александр Петрович", "Елена Ивановна"]
        );
        assert_eq!(
            names(&tree.members_of_generation(2)),
            vec!["Мария Александровна", "Дмитрий Александрович"]
        );
        assert_eq!(
            names(&tree.members_of_generation(3)),
            vec!["София Дмитриевна"]
        );
        assert!(tree.members_of_generation(4).is_empty());
    }

    #[test]
    fn test_displayed_generations_partition_seed() {
        let tree = FamilyTree::new(default_family());
        let mut seen = BTreeSet::new();
        let mut total = 0;
        for (generation, _) in DISPLAYED_GENERATIONS {
            for member in tree.members_of_generation(generation) {
                assert!(seen.insert(member.id), "member {} in two groups", member.id);
                total += 1;
            }
        }
        assert_eq!(total, tree.members().len());
    }

    #[test]
    fn test_generations_group_by() {
        let tree = FamilyTree::new(default_family());
        let groups = tree.generations();
        let sizes: Vec<_> = groups.iter().map(|(g, m)| (*g, m.len())).collect();
        assert_eq!(sizes, vec![(1, 2), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_parent_lookups() {
        let tree = FamilyTree::new(default_family());
        assert_eq!(names(&tree.parents_of(5)), vec!["Дмитрий Александрович"]);
        assert!(tree.parents_of(1).is_empty());
        assert!(tree.parents_of(99).is_empty());
        assert_eq!(
            names(&tree.parents_of(3)),
            vec!["Александр Петрович", "Елена Ивановна"]
        );
    }
}
