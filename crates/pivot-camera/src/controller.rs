//! Per-tick camera pose resolver for a yaw/pitch pivot rig.
//!
//! Each tick the controller integrates look input into a target state,
//! blends the current state toward it, and writes the result into the rig's
//! transforms. Position is never integrated: the target position is rebuilt
//! every tick from where the yaw pivot currently is.

use bevy_ecs::prelude::*;
use glam::{Quat, Vec3};
use pivot_ecs::{
    TimeRes, forward, set_local_rotation, set_world_position, set_world_rotation,
    transform_vector, world_position, world_rotation,
};
use pivot_input::{CursorControl, CursorMode, InputProvider, InputRegistry};
use pivot_math::{FORWARD, euler_degrees, pitch_rotation, wrap_signed, yaw_rotation};

use crate::rig::{RigNodes, RigRefs, RigTopology, label};
use crate::{CameraState, HandheldMotion, RigError, RigSettings};

/// Lifecycle of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// Constructed, `initialize` not yet called.
    Pending,
    /// Initialized; ticks resolve transforms.
    Active {
        nodes: RigNodes,
        topology: RigTopology,
    },
    /// Initialization failed. Ticks do nothing for the rest of the session.
    Disabled,
}

/// Drives a first-person camera rig from abstract look input.
///
/// # Usage
///
/// 1. Build with [`new`](Self::new) or [`with_registry`](Self::with_registry).
/// 2. Call [`initialize`](Self::initialize) once the rig nodes exist.
/// 3. Call [`tick`](Self::tick) exactly once per frame.
pub struct CameraRigController {
    rig: RigRefs,
    settings: RigSettings,
    input: Option<Box<dyn InputProvider>>,
    status: Status,
    current: CameraState,
    target: CameraState,
    motion: HandheldMotion,
    camera_position: Vec3,
    camera_forward: Vec3,
}

impl std::fmt::Debug for CameraRigController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraRigController")
            .field("status", &self.status)
            .field("has_input", &self.input.is_some())
            .field("current", &self.current)
            .field("target", &self.target)
            .field("motion", &self.motion)
            .finish_non_exhaustive()
    }
}

impl CameraRigController {
    /// Create a controller for `rig` reading look input from `input`.
    ///
    /// Without an input provider the rig still runs, with look input held at
    /// zero. Negative sensitivity in `settings` is floored at zero.
    pub fn new(
        rig: RigRefs,
        settings: RigSettings,
        input: Option<Box<dyn InputProvider>>,
    ) -> Self {
        let settings = settings.sanitized();
        Self {
            rig,
            motion: HandheldMotion::new(settings.noise_seed),
            settings,
            input,
            status: Status::Pending,
            current: CameraState::default(),
            target: CameraState::default(),
            camera_position: Vec3::ZERO,
            camera_forward: FORWARD,
        }
    }

    /// Create a controller that takes `input` if given, otherwise the first
    /// provider in `registry`.
    pub fn with_registry(
        rig: RigRefs,
        settings: RigSettings,
        input: Option<Box<dyn InputProvider>>,
        registry: &mut InputRegistry,
    ) -> Self {
        let input = input.or_else(|| registry.take_first());
        Self::new(rig, settings, input)
    }

    /// Validate the rig, pick the topology, and seed both states from the
    /// rig's present pose so the first tick does not snap.
    ///
    /// On [`RigError::MissingReferences`] the controller is disabled for good
    /// and every later tick is a no-op.
    pub fn initialize(
        &mut self,
        world: &mut World,
        cursor: &mut dyn CursorControl,
    ) -> Result<RigTopology, RigError> {
        if self.status != Status::Pending {
            return Err(RigError::AlreadyInitialized);
        }

        let nodes = match self.rig.resolve(world) {
            Ok(nodes) => nodes,
            Err(err) => {
                tracing::error!("Camera rig disabled: {err}. Assign yaw pivot, pitch pivot and camera.");
                self.status = Status::Disabled;
                return Err(err);
            }
        };

        if self.input.is_none() {
            tracing::warn!("Camera rig has no input provider; look input will stay at zero");
        }

        let topology = RigTopology::detect(world, &nodes);
        if topology == RigTopology::Composed {
            tracing::warn!(
                pitch_pivot = %label(world, nodes.pitch_pivot),
                yaw_pivot = %label(world, nodes.yaw_pivot),
                "Pitch pivot is not a child of the yaw pivot; composing yaw * pitch directly. \
                 Parenting pitch under yaw is recommended."
            );
        }

        let seed = self.seed_state(world, &nodes);
        self.current = seed;
        self.target = seed;
        self.camera_position = world_position(world, nodes.camera).unwrap_or(seed.pos);
        self.camera_forward = forward(world, nodes.camera).unwrap_or(FORWARD);
        self.status = Status::Active { nodes, topology };

        if self.settings.lock_cursor_on_start {
            self.set_cursor_lock(true, cursor);
        }

        tracing::info!(
            ?topology,
            yaw = seed.yaw,
            pitch = seed.pitch,
            "Camera rig initialized"
        );
        Ok(topology)
    }

    fn seed_state(&self, world: &World, nodes: &RigNodes) -> CameraState {
        let pos = world_position(world, nodes.yaw_pivot).unwrap_or(Vec3::ZERO);
        let yaw_world = world_rotation(world, nodes.yaw_pivot).unwrap_or(Quat::IDENTITY);
        let pitch_local = world
            .get::<pivot_ecs::Transform>(nodes.pitch_pivot)
            .map(|t| t.rotation)
            .unwrap_or(Quat::IDENTITY);

        let yaw = euler_degrees(yaw_world).y;
        let raw_pitch = wrap_signed(euler_degrees(pitch_local).x);
        let pitch = self.settings.clamp_pitch(raw_pitch);
        if pitch != raw_pitch {
            tracing::debug!(raw_pitch, pitch, "Initial pitch outside vertical clamp");
        }
        CameraState::new(yaw, pitch, pos)
    }

    /// Advance the rig by one tick, reading [`TimeRes`] from `world`.
    /// A world without the resource ticks with zero time.
    pub fn update(&mut self, world: &mut World) {
        let time = world.get_resource::<TimeRes>().copied().unwrap_or_default();
        self.tick(world, &time);
    }

    /// Advance the rig by one tick described by `time`.
    ///
    /// Does nothing before [`initialize`](Self::initialize) or after it
    /// failed.
    pub fn tick(&mut self, world: &mut World, time: &TimeRes) {
        let Status::Active { nodes, topology } = self.status else {
            return;
        };

        self.apply_look(time.delta);

        let additive = self.motion.sample(&self.settings, time);
        let rig_pos = world_position(world, nodes.yaw_pivot).unwrap_or(self.target.pos);
        let offset = transform_vector(world, nodes.yaw_pivot, self.settings.local_offset)
            .unwrap_or(Vec3::ZERO);
        self.target.pos = rig_pos + offset + additive;

        self.current.lerp_towards(
            &self.target,
            self.settings.position_lerp,
            self.settings.rotation_lerp,
        );
        // Rounding in the angle blend must not leak past the clamp.
        self.current.pitch = self.settings.clamp_pitch(self.current.pitch);

        set_world_rotation(world, nodes.yaw_pivot, yaw_rotation(self.current.yaw));
        let pitch = pitch_rotation(self.current.pitch);

        match topology {
            RigTopology::Nested => {
                set_local_rotation(world, nodes.pitch_pivot, pitch);
                let pivot_pos = world_position(world, nodes.pitch_pivot).unwrap_or(self.current.pos);
                let pivot_rot = world_rotation(world, nodes.pitch_pivot).unwrap_or(pitch);
                set_world_position(world, nodes.camera, pivot_pos);
                set_world_rotation(world, nodes.camera, pivot_rot);
            }
            RigTopology::Composed => {
                set_world_position(world, nodes.camera, self.current.pos);
                set_world_rotation(world, nodes.camera, self.current.rotation());
                set_local_rotation(world, nodes.pitch_pivot, pitch);
            }
        }

        self.camera_position = world_position(world, nodes.camera).unwrap_or(self.current.pos);
        self.camera_forward = forward(world, nodes.camera).unwrap_or(FORWARD);
    }

    fn apply_look(&mut self, delta_time: f32) {
        if let Some(input) = self.input.as_mut() {
            let mut delta = input.look_delta();
            if self.settings.scale_by_delta_time {
                delta *= delta_time;
            }
            let sens = self.settings.effective_sensitivity();
            self.target.yaw += delta.x * sens.x;
            self.target.pitch += delta.y * sens.y;
        }
        self.target.pitch = self.settings.clamp_pitch(self.target.pitch);
    }

    // ── Read API ────────────────────────────────────────────────────

    /// Smoothed yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.current.yaw
    }

    /// Smoothed pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.current.pitch
    }

    /// Camera world position as of the last tick.
    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    /// Camera forward direction as of the last tick.
    #[must_use]
    pub fn camera_forward(&self) -> Vec3 {
        self.camera_forward
    }

    /// The rendered state.
    #[must_use]
    pub fn current(&self) -> &CameraState {
        &self.current
    }

    /// The state input is accumulated into.
    #[must_use]
    pub fn target(&self) -> &CameraState {
        &self.target
    }

    /// Topology chosen at initialization, if it succeeded.
    #[must_use]
    pub fn topology(&self) -> Option<RigTopology> {
        match self.status {
            Status::Active { topology, .. } => Some(topology),
            _ => None,
        }
    }

    /// Whether ticks currently resolve transforms.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.status, Status::Active { .. })
    }

    /// Whether initialization failed and the controller is inert.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.status == Status::Disabled
    }

    /// Accumulated head-bob phase in radians.
    #[must_use]
    pub fn bob_phase(&self) -> f32 {
        self.motion.phase()
    }

    /// Active settings.
    #[must_use]
    pub fn settings(&self) -> &RigSettings {
        &self.settings
    }

    // ── Mutators ────────────────────────────────────────────────────

    /// Set look sensitivity. Negative components become zero.
    pub fn set_sensitivity(&mut self, x: f32, y: f32) {
        self.settings.set_sensitivity(x, y);
    }

    /// Replace all settings between ticks. Sensitivity is floored at zero;
    /// the bob phase carries over.
    pub fn set_settings(&mut self, settings: RigSettings) {
        self.settings = settings.sanitized();
        self.motion.reseed(self.settings.noise_seed);
    }

    /// Capture or release the cursor.
    pub fn set_cursor_lock(&self, locked: bool, cursor: &mut dyn CursorControl) {
        cursor.set_cursor_mode(CursorMode::from_locked(locked));
    }
}
