use crate::buffer::PixelBuffer;
use crate::event::{EditorEvent, EventBus};
use crate::fill::FillJob;

/// Outcome of driving the scheduler for one display frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerStatus {
    /// No fill in flight
    Idle,
    /// The fill advanced but needs more frames
    Running,
    /// The fill ran to completion this frame
    Finished,
}

/// Drives the animated presentation of an in-progress fill.
///
/// One step-batch is performed per display frame; the caller re-presents
/// the buffer after each [`tick`](Self::tick) and schedules another frame
/// while the status is `Running`. This is the single cooperative yield
/// point in the system: the fill voluntarily hands control back to the
/// host's frame scheduler instead of running to completion, which keeps
/// the interface responsive during large fills. There is no cancellation;
/// a started fill always completes across however many frames it needs.
#[derive(Default)]
pub struct RenderScheduler {
    job: Option<FillJob>,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    /// Adopt a fill job. Refused while another job is in flight, the
    /// fill is exclusive.
    pub fn begin(&mut self, job: FillJob) -> bool {
        if self.job.is_some() {
            return false;
        }
        self.job = Some(job);
        true
    }

    /// Advance the in-flight job by one chunk and report whether the
    /// caller needs to schedule another frame.
    pub fn tick(&mut self, buffer: &mut PixelBuffer, bus: &EventBus) -> SchedulerStatus {
        let Some(job) = &mut self.job else {
            return SchedulerStatus::Idle;
        };

        if job.advance(buffer) {
            let pixels_painted = job.pixels_painted();
            self.job = None;
            log::debug!("fill completed, {pixels_painted} pixels painted");
            bus.emit(EditorEvent::FillCompleted { pixels_painted });
            SchedulerStatus::Finished
        } else {
            bus.emit(EditorEvent::FillStepped {
                pixels_painted: job.pixels_painted(),
            });
            SchedulerStatus::Running
        }
    }
}
