/// Fixed timestep accumulator.
/// Keeps the simulation rate constant regardless of how fast the host
/// delivers animation frames.
pub struct FixedTimestep {
    /// The fixed delta time per step.
    step: f32,
    /// Carried-over time from variable frame deltas.
    carry: f32,
}

/// Upper bound on steps run for a single frame, so a long stall does not
/// snowball into an ever-growing backlog.
const MAX_STEPS_PER_FRAME: u32 = 10;

impl FixedTimestep {
    pub fn new(step: f32) -> Self {
        Self { step, carry: 0.0 }
    }

    /// Feed a frame delta into the accumulator. Returns how many fixed
    /// steps to run this frame. Negative or non-finite deltas add nothing.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.carry += frame_dt;
        }
        self.carry = self.carry.min(self.step * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.carry / self.step) as u32;
        self.carry -= steps as f32 * self.step;
        steps
    }

    /// Interpolation alpha for rendering between steps (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.carry / self.step
    }

    /// The fixed delta time.
    pub fn step(&self) -> f32 {
        self.step
    }
}
