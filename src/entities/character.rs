//! Character entity - a composite owning optional equipment and skills

use crate::clone::DeepClone;

/// Leaf entity: an equippable weapon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32) -> Self {
        Self {
            name: name.into(),
            damage,
        }
    }

    pub fn set_damage(&mut self, damage: u32) {
        self.damage = damage;
    }
}

impl DeepClone for Weapon {
    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            damage: self.damage,
        }
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.damage)
    }
}

/// Leaf entity: equippable armor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Armor {
    pub name: String,
    pub defense: u32,
}

impl Armor {
    pub fn new(name: impl Into<String>, defense: u32) -> Self {
        Self {
            name: name.into(),
            defense,
        }
    }
}

impl DeepClone for Armor {
    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            defense: self.defense,
        }
    }
}

/// School a skill belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    Magic,
    Melee,
    Support,
}

/// Leaf entity: a learned skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub kind: SkillKind,
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, kind: SkillKind, level: u8) -> Self {
        Self {
            name: name.into(),
            kind,
            level,
        }
    }
}

impl DeepClone for Skill {
    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind,
            level: self.level,
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name, self.level)
    }
}

/// Composite entity: a character owning its equipment and skill list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub health: u32,
    pub strength: u32,
    pub agility: u32,
    pub intelligence: u32,
    pub weapon: Option<Weapon>,
    pub armor: Option<Armor>,
    pub skills: Vec<Skill>,
}

impl Character {
    pub fn new(
        name: impl Into<String>,
        health: u32,
        strength: u32,
        agility: u32,
        intelligence: u32,
    ) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            agility,
            intelligence,
            weapon: None,
            armor: None,
            skills: Vec::new(),
        }
    }

    pub fn equip_weapon(&mut self, weapon: Weapon) {
        self.weapon = Some(weapon);
    }

    pub fn equip_armor(&mut self, armor: Armor) {
        self.armor = Some(armor);
    }

    pub fn learn(&mut self, skill: Skill) {
        self.skills.push(skill);
    }
}

impl DeepClone for Character {
    fn deep_clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            health: self.health,
            strength: self.strength,
            agility: self.agility,
            intelligence: self.intelligence,
            weapon: self.weapon.deep_clone(),
            armor: self.armor.deep_clone(),
            skills: self.skills.deep_clone(),
        }
    }
}
