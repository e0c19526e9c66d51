//! Fixed-capacity projectile arena.
//!
//! Slots are reused by availability flag: an inactive slot is reactivated
//! and repositioned rather than a new projectile being constructed. The
//! arena grows lazily up to its capacity and never shrinks, so slot indices
//! stay valid for the renderer across ticks.

use splud_core::enums::WeaponKind;
use splud_core::types::{Position, Velocity};

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub active: bool,
    pub weapon: WeaponKind,
    pub position: Position,
    pub velocity: Velocity,
    pub damage_multiplier: f64,
    pub tint: u32,
    /// Distance covered since the last launch (units).
    pub travelled: f64,
}

impl Projectile {
    fn inactive() -> Self {
        Self {
            active: false,
            weapon: WeaponKind::default(),
            position: Position::default(),
            velocity: Velocity::default(),
            damage_multiplier: 1.0,
            tint: 0xFFFFFF,
            travelled: 0.0,
        }
    }
}

/// Launch parameters for a projectile.
#[derive(Debug, Clone, Copy)]
pub struct Launch {
    pub weapon: WeaponKind,
    pub position: Position,
    pub velocity: Velocity,
    pub damage_multiplier: f64,
    pub tint: u32,
}

#[derive(Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
    capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Activate a projectile: reuse the first inactive slot, else grow.
    /// Returns `None` when every slot up to capacity is in flight.
    pub fn acquire(&mut self, launch: Launch) -> Option<usize> {
        let index = match self.slots.iter().position(|p| !p.active) {
            Some(index) => index,
            None if self.slots.len() < self.capacity => {
                self.slots.push(Projectile::inactive());
                self.slots.len() - 1
            }
            None => return None,
        };

        let slot = &mut self.slots[index];
        slot.active = true;
        slot.weapon = launch.weapon;
        slot.position = launch.position;
        slot.velocity = launch.velocity;
        slot.damage_multiplier = launch.damage_multiplier;
        slot.tint = launch.tint;
        slot.travelled = 0.0;
        Some(index)
    }

    /// Return a projectile to the pool. Returns false if it was not active.
    pub fn release(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(p) if p.active => {
                p.active = false;
                p.velocity = Velocity::default();
                true
            }
            _ => false,
        }
    }

    pub fn release_all(&mut self) {
        for p in &mut self.slots {
            p.active = false;
            p.velocity = Velocity::default();
        }
    }

    pub fn get(&self, index: usize) -> Option<&Projectile> {
        self.slots.get(index)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|p| p.active)
    }

    /// Active projectiles with their slot index.
    pub fn iter_active(&self) -> impl Iterator<Item = (usize, &Projectile)> {
        self.slots.iter().enumerate().filter(|(_, p)| p.active)
    }

    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (usize, &mut Projectile)> {
        self.slots.iter_mut().enumerate().filter(|(_, p)| p.active)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    /// Slots allocated so far (active or not).
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch() -> Launch {
        Launch {
            weapon: WeaponKind::Shuriken01,
            position: Position::new(5.0, 5.0),
            velocity: Velocity::new(400.0, 0.0),
            damage_multiplier: 1.5,
            tint: 0x3399FF,
        }
    }

    #[test]
    fn test_released_slot_is_reused() {
        let mut pool = ProjectilePool::new(4);
        let a = pool.acquire(launch()).unwrap();
        let b = pool.acquire(launch()).unwrap();
        assert_ne!(a, b);
        assert!(pool.release(a));
        let c = pool.acquire(launch()).unwrap();
        assert_eq!(c, a, "Inactive slot should be reactivated");
        assert_eq!(pool.allocated(), 2);
    }

    #[test]
    fn test_exhausted_pool_returns_none() {
        let mut pool = ProjectilePool::new(2);
        assert!(pool.acquire(launch()).is_some());
        assert!(pool.acquire(launch()).is_some());
        assert!(pool.acquire(launch()).is_none());
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_double_release_is_rejected() {
        let mut pool = ProjectilePool::new(2);
        let a = pool.acquire(launch()).unwrap();
        assert!(pool.release(a));
        assert!(!pool.release(a));
        assert!(!pool.release(99));
    }

    #[test]
    fn test_reactivation_resets_travel() {
        let mut pool = ProjectilePool::new(1);
        let a = pool.acquire(launch()).unwrap();
        for (_, p) in pool.iter_active_mut() {
            p.travelled = 900.0;
        }
        pool.release(a);
        pool.acquire(launch()).unwrap();
        assert_eq!(pool.get(a).unwrap().travelled, 0.0);
        assert_eq!(pool.get(a).unwrap().tint, 0x3399FF);
    }
}
