// "Run once per refresh" on top of macroquad's frame loop.

use macroquad::prelude::next_frame;

// What a frame task wants to happen after it ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    // Run again on the next refresh.
    Continue,
    // Leave the loop; `run_frames` returns.
    Stop,
}

// Something that runs exactly once per displayed frame.
pub trait FrameTask {
    fn frame(&mut self) -> Flow;
}

// Drive `task` once per refresh until it asks to stop.
// Each invocation finishes before the next frame is requested, so the task
// never runs concurrently with itself. Returns the number of frames run.
pub async fn run_frames<T: FrameTask>(task: &mut T) -> u64 {
    let mut frames = 0;
    loop {
        frames += 1;
        if task.frame() == Flow::Stop {
            return frames;
        }
        // End of frame: wait for the next vertical sync.
        next_frame().await;
    }
}
