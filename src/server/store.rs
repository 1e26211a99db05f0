//! Hero store backing the in-memory API

use crate::hero::{Hero, NewHero};

/// Strength given to heroes created without one
pub const DEFAULT_STRENGTH: i32 = 10;

/// First id handed out when the store is empty
const FIRST_ID: u32 = 11;

/// Ordered collection of heroes with backend-side id assignment
#[derive(Debug, Clone, Default)]
pub struct HeroStore {
    heroes: Vec<Hero>,
}

impl HeroStore {
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }

    /// The classic roster, ids 11..=20
    pub fn seeded() -> Self {
        let roster = [
            ("Dr Nice", 7),
            ("Narco", 9),
            ("Bombasto", 12),
            ("Celeritas", 8),
            ("Magneta", 11),
            ("RubberMan", 6),
            ("Dynama", 10),
            ("Dr IQ", 5),
            ("Magma", 13),
            ("Tornado", 14),
        ];

        Self::new(
            roster
                .iter()
                .zip(FIRST_ID..)
                .map(|(&(name, strength), id)| Hero::new(id, name, strength))
                .collect(),
        )
    }

    pub fn list(&self) -> &[Hero] {
        &self.heroes
    }

    pub fn get(&self, id: u32) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.id == id)
    }

    /// Next id: one past the current maximum
    fn gen_id(&self) -> u32 {
        self.heroes
            .iter()
            .map(|h| h.id)
            .max()
            .map_or(FIRST_ID, |max| max + 1)
    }

    pub fn create(&mut self, hero: NewHero) -> Hero {
        let hero = Hero::new(
            self.gen_id(),
            hero.name,
            hero.strength.unwrap_or(DEFAULT_STRENGTH),
        );
        self.heroes.push(hero.clone());
        hero
    }

    /// Replace the hero with `id`. Returns false if there is none.
    pub fn update(&mut self, id: u32, name: String, strength: i32) -> bool {
        match self.heroes.iter_mut().find(|h| h.id == id) {
            Some(existing) => {
                existing.name = name;
                existing.strength = strength;
                true
            }
            None => false,
        }
    }

    /// Remove the hero with `id`. Returns false if there is none.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.heroes.len();
        self.heroes.retain(|h| h.id != id);
        self.heroes.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_roster() {
        let store = HeroStore::seeded();
        assert_eq!(store.list().len(), 10);
        assert_eq!(store.list()[0].id, 11);
        assert_eq!(store.list()[9].id, 20);
        assert_eq!(store.get(13).map(|h| h.name.as_str()), Some("Bombasto"));
    }

    #[test]
    fn test_create_assigns_next_id() {
        let mut store = HeroStore::seeded();
        let hero = store.create(NewHero::named("Hero Bro"));
        assert_eq!(hero.id, 21);
        assert_eq!(hero.strength, DEFAULT_STRENGTH);
        assert_eq!(store.list().last(), Some(&hero));
    }

    #[test]
    fn test_create_in_empty_store() {
        let mut store = HeroStore::default();
        let hero = store.create(NewHero {
            name: "First".to_string(),
            strength: Some(3),
        });
        assert_eq!(hero, Hero::new(11, "First", 3));
    }

    #[test]
    fn test_update_and_delete_missing() {
        let mut store = HeroStore::seeded();
        assert!(store.update(12, "Narcotic".to_string(), 1));
        assert_eq!(store.get(12), Some(&Hero::new(12, "Narcotic", 1)));

        assert!(!store.update(99, "Nobody".to_string(), 1));
        assert!(store.delete(12));
        assert!(!store.delete(12));
        assert_eq!(store.list().len(), 9);
    }
}
