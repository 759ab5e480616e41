//! Simulated cloth particle.
//!
//! Verlet state (current and previous position), pin state, friction and
//! the link handles it takes part in. A point only ever *references*
//! links: `links` are the ones it created, `incoming` are back-references
//! to links other points created toward it.

use weft_contact::{ContactHit, ContactQuery};
use weft_math::{reflect, Vec3};
use weft_types::constants::AIR_FRICTION;
use weft_types::{LinkId, ProxyHandle};

use crate::config::FrictionConfig;

/// A cloth point mass.
#[derive(Debug, Clone)]
pub struct Point {
    pub(crate) position: Vec3,
    pub(crate) last_position: Vec3,
    pub(crate) links: Vec<LinkId>,
    pub(crate) incoming: Vec<LinkId>,
    locked: bool,
    radius: f32,
    current_friction: f32,
    reset_next_unlocked_frame: bool,
    proxy: ProxyHandle,
}

impl Point {
    /// Creates a point at rest.
    pub fn new(position: Vec3, radius: f32, proxy: ProxyHandle, locked: bool) -> Self {
        Self {
            position,
            last_position: position,
            links: Vec::new(),
            incoming: Vec::new(),
            locked,
            radius,
            current_friction: AIR_FRICTION,
            reset_next_unlocked_frame: false,
            proxy,
        }
    }

    /// Creates a point whose collision radius is derived from its proxy's
    /// extent: half the mean of the three axis extents.
    pub fn from_extent(position: Vec3, extent: Vec3, proxy: ProxyHandle, locked: bool) -> Self {
        let radius = (extent.x + extent.y + extent.z) / 3.0 * 0.5;
        Self::new(position, radius, proxy, locked)
    }

    /// Sets the velocity retention used until the first collision pass.
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.current_friction = friction;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn last_position(&self) -> Vec3 {
        self.last_position
    }

    /// Displacement carried into the next step (before friction).
    pub fn velocity(&self) -> Vec3 {
        self.position - self.last_position
    }

    /// Moves the point, keeping its history (implies a velocity).
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Moves the point and its history (zero velocity).
    pub fn teleport(&mut self, position: Vec3) {
        self.position = position;
        self.last_position = position;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Velocity retention applied on the next integration.
    pub fn friction(&self) -> f32 {
        self.current_friction
    }

    pub fn proxy(&self) -> ProxyHandle {
        self.proxy
    }

    /// Links this point created.
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    /// Links other points created toward this one.
    pub fn incoming(&self) -> &[LinkId] {
        &self.incoming
    }

    /// Verlet step.
    ///
    /// A locked point does not move; it only remembers that the first
    /// unlocked step must start from rest, since its history is stale.
    pub fn integrate(&mut self, force: Vec3, dt: f32) {
        if self.locked {
            self.reset_next_unlocked_frame = true;
            return;
        }

        let before = self.position;
        let velocity = if self.reset_next_unlocked_frame {
            self.reset_next_unlocked_frame = false;
            Vec3::ZERO
        } else {
            (self.position - self.last_position) * self.current_friction
        };
        self.position += velocity;
        self.position += force * dt;
        self.last_position = before;
    }

    /// Resolves the point against `colliders` in order.
    ///
    /// Only the first collider reporting a hit is applied; later ones are
    /// not queried. Layered colliders rely on this ordering. Returns whether
    /// a hit occurred, which also selects the friction for the next step.
    pub fn resolve_collisions<C: ContactQuery>(
        &mut self,
        colliders: &[C],
        friction: &FrictionConfig,
    ) -> bool {
        let hit = colliders
            .iter()
            .find_map(|c| c.query(self.position, self.radius));

        match hit {
            Some(hit) => {
                self.reflect(&hit);
                self.current_friction = friction.contact;
                true
            }
            None => {
                self.current_friction = friction.air;
                false
            }
        }
    }

    /// Mirrors the incoming motion about the contact normal and snaps the
    /// point onto the contact surface.
    fn reflect(&mut self, hit: &ContactHit) {
        let incoming = self.last_position - self.position;
        let reflected = reflect(incoming, hit.normal);
        self.last_position = self.position
            + reflected * hit.reflect_bounce
            + hit.normal * incoming.length() * hit.normal_bounce;
        self.position = hit.contact_point;
    }
}
