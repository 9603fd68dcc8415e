/// Time-driven sprite animation.
///
/// The clock turns elapsed seconds into a frame index for the current sprite
/// sheet and, while a round is being played, rotates between the idle, tail
/// and run sheets. It never looks at the renderer.
use crate::game::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimSet {
    Idle = 0,
    Tail = 1,
    Run = 2,
    Death = 3,
}

impl AnimSet {
    pub const COUNT: usize = 4;
    pub const ALL: [AnimSet; AnimSet::COUNT] =
        [AnimSet::Idle, AnimSet::Tail, AnimSet::Run, AnimSet::Death];

    /// Next set in the playing rotation. Death is not part of it.
    pub fn next_in_rotation(self) -> AnimSet {
        match self {
            AnimSet::Idle => AnimSet::Tail,
            AnimSet::Tail => AnimSet::Run,
            AnimSet::Run | AnimSet::Death => AnimSet::Idle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AnimSet::Idle => "idle",
            AnimSet::Tail => "tail",
            AnimSet::Run => "run",
            AnimSet::Death => "death",
        }
    }
}

/// Frame count and per-frame duration of one sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetTiming {
    pub frames: u32,
    pub frame_time: f32,
}

impl SetTiming {
    fn frame_count(&self) -> u32 {
        self.frames.max(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimTimings {
    pub sets: [SetTiming; AnimSet::COUNT],
    pub switch_interval: f32,
}

impl AnimTimings {
    pub fn get(&self, set: AnimSet) -> SetTiming {
        self.sets[set as usize]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClock {
    active_set: AnimSet,
    current_frame: u32,
    frame_time_acc: f64,
    set_switch_acc: f64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    pub fn new() -> Self {
        Self {
            active_set: AnimSet::Idle,
            current_frame: 0,
            frame_time_acc: 0.0,
            set_switch_acc: 0.0,
        }
    }

    pub fn active_set(&self) -> AnimSet {
        self.active_set
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// The set to draw: Death overrides the rotation while dead.
    pub fn displayed_set(&self, state: GameState) -> AnimSet {
        if state == GameState::Dead {
            AnimSet::Death
        } else {
            self.active_set
        }
    }

    /// Back to the first idle frame with both accumulators cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Restart the current sheet without touching the rotation.
    pub fn reset_frame(&mut self) {
        self.current_frame = 0;
        self.frame_time_acc = 0.0;
    }

    pub fn advance(&mut self, dt: f32, state: GameState, timings: &AnimTimings) {
        let timing = timings.get(self.displayed_set(state));
        let frames = timing.frame_count();

        self.frame_time_acc += f64::from(dt);
        let frame_time = f64::from(timing.frame_time);
        if frame_time > 0.0 && self.frame_time_acc >= frame_time {
            // Catch up every whole frame that elapsed during a slow tick.
            let steps = (self.frame_time_acc / frame_time).floor();
            self.frame_time_acc = (self.frame_time_acc - steps * frame_time).clamp(0.0, frame_time);
            let skipped = (steps % f64::from(frames)) as u32;
            self.current_frame = (self.current_frame % frames + skipped) % frames;
        }
        // The displayed sheet may have fewer frames than the one last shown.
        if self.current_frame >= frames {
            self.current_frame = 0;
        }

        let interval = f64::from(timings.switch_interval);
        if state == GameState::Play && interval > 0.0 {
            self.set_switch_acc += f64::from(dt);
            if self.set_switch_acc >= interval {
                self.active_set = self.active_set.next_in_rotation();
                self.current_frame = 0;
                self.set_switch_acc -= interval;
            }
        }
    }
}
