//! Visual proxies.
//!
//! Every point owns an external renderable. The simulator creates one when
//! a point is added, destroys it when the point is removed, and writes the
//! point's pose to it at the end of every step.

use std::collections::BTreeMap;

use weft_math::{Quat, Vec3};
use weft_types::ProxyHandle;

/// Host of the renderables attached to cloth points.
pub trait ProxyHost {
    /// Creates a renderable at `position` and returns its handle.
    fn create(&mut self, position: Vec3) -> ProxyHandle;

    /// Axis-aligned size of the renderable. The point's collision radius
    /// is derived from it once, at creation.
    fn extent(&self, handle: ProxyHandle) -> Vec3 {
        let _ = handle;
        Vec3::ONE
    }

    /// Destroys the renderable.
    fn destroy(&mut self, handle: ProxyHandle);

    /// Writes the pose computed by the last step.
    fn set_pose(&mut self, handle: ProxyHandle, position: Vec3, rotation: Quat);
}

/// Proxy host that only hands out handles.
#[derive(Debug, Clone)]
pub struct NullProxies {
    next: u64,
    extent: Vec3,
}

impl NullProxies {
    pub fn new() -> Self {
        Self::with_extent(Vec3::ONE)
    }

    /// Every proxy reports `extent`.
    pub fn with_extent(extent: Vec3) -> Self {
        Self { next: 0, extent }
    }
}

impl Default for NullProxies {
    fn default() -> Self {
        Self::new()
    }
}

impl ProxyHost for NullProxies {
    fn create(&mut self, _position: Vec3) -> ProxyHandle {
        let handle = ProxyHandle(self.next);
        self.next += 1;
        handle
    }

    fn extent(&self, _handle: ProxyHandle) -> Vec3 {
        self.extent
    }

    fn destroy(&mut self, _handle: ProxyHandle) {}

    fn set_pose(&mut self, _handle: ProxyHandle, _position: Vec3, _rotation: Quat) {}
}

/// Last pose written to a proxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxyPose {
    pub position: Vec3,
    pub rotation: Quat,
}

/// Proxy host that keeps every live proxy's pose, for tests and export.
#[derive(Debug, Clone)]
pub struct RecordingProxies {
    next: u64,
    extent: Vec3,
    live: BTreeMap<u64, ProxyPose>,
    /// Number of proxies ever created.
    pub created: usize,
    /// Number of proxies destroyed.
    pub destroyed: usize,
}

impl RecordingProxies {
    pub fn new() -> Self {
        Self::with_extent(Vec3::ONE)
    }

    pub fn with_extent(extent: Vec3) -> Self {
        Self {
            next: 0,
            extent,
            live: BTreeMap::new(),
            created: 0,
            destroyed: 0,
        }
    }

    /// Number of proxies currently alive.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn pose(&self, handle: ProxyHandle) -> Option<ProxyPose> {
        self.live.get(&handle.0).copied()
    }

    pub fn is_live(&self, handle: ProxyHandle) -> bool {
        self.live.contains_key(&handle.0)
    }
}

impl Default for RecordingProxies {
    fn default() -> Self {
        Self::new()
    }
}

impl ProxyHost for RecordingProxies {
    fn create(&mut self, position: Vec3) -> ProxyHandle {
        let handle = ProxyHandle(self.next);
        self.next += 1;
        self.created += 1;
        self.live.insert(
            handle.0,
            ProxyPose {
                position,
                rotation: Quat::IDENTITY,
            },
        );
        handle
    }

    fn extent(&self, _handle: ProxyHandle) -> Vec3 {
        self.extent
    }

    fn destroy(&mut self, handle: ProxyHandle) {
        if self.live.remove(&handle.0).is_some() {
            self.destroyed += 1;
        }
    }

    fn set_pose(&mut self, handle: ProxyHandle, position: Vec3, rotation: Quat) {
        if let Some(pose) = self.live.get_mut(&handle.0) {
            *pose = ProxyPose { position, rotation };
        }
    }
}
