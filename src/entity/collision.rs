use crate::entity::Actor;

/// Decides whether two actors overlap.
///
/// The scene only decides when to ask and what a hit means; the shape test lives behind
/// this trait so a renderer with real outlines can supply its own.
pub trait CollisionProbe {
    fn collides(&self, a: &Actor, b: &Actor) -> bool;
}

/// Treats every actor as a circle of radius [`Actor::extent`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RadiusProbe;

impl CollisionProbe for RadiusProbe {
    fn collides(&self, a: &Actor, b: &Actor) -> bool {
        circles_overlap(a.position.distance(b.position), a.extent, b.extent)
    }
}

/// Two circles overlap when their centres are strictly closer than the sum of their radii.
pub fn circles_overlap(distance: f32, radius_a: f32, radius_b: f32) -> bool {
    distance < radius_a + radius_b
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(0.0, 1.0, 1.0));
        assert!(circles_overlap(1.9, 1.0, 1.0));
        assert!(!circles_overlap(2.0, 1.0, 1.0));
        assert!(!circles_overlap(5.0, 1.0, 1.0));
    }

    #[test]
    fn test_radius_probe() {
        let a = Actor::player(0, Vec2::ZERO, 16.0);
        let near = Actor::adversary(1, Vec2::new(20.0, 0.0), 16.0, Default::default());
        let far = Actor::adversary(2, Vec2::new(100.0, 0.0), 16.0, Default::default());
        assert!(RadiusProbe.collides(&a, &near));
        assert!(!RadiusProbe.collides(&a, &far));
    }
}
