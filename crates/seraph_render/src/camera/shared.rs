//! Cross-thread camera state hand-off.
//!
//! The host's render hook captures a [`CameraFrame`] at an awkward moment
//! (mid-frame, inside foreign code), while the effect context reads it from
//! the render path. [`SharedCameraFrame`] is a triple buffer between the
//! two: the writer always has a free slot to fill, the reader always has a
//! complete frame to take, and neither ever waits on the other.
//!
//! Single producer, single consumer. The slot mutexes exist to satisfy the
//! no-unsafe rule; by construction each is only ever locked from one side,
//! so they never contend.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::camera::frame::CameraFrame;

const INDEX_MASK: usize = 0b011;
const FRESH_BIT: usize = 0b100;

/// Wait-free single-writer single-reader cell holding the latest camera frame.
#[derive(Debug)]
pub struct SharedCameraFrame {
    slots: [Mutex<CameraFrame>; 3],
    /// Most recently published slot index, plus a freshness bit.
    published: AtomicUsize,
    /// Slot the writer will fill next. Owned by the writer between publishes.
    write_index: AtomicUsize,
    /// Slot the reader last took. Owned by the reader between reads.
    read_index: AtomicUsize,
}

impl SharedCameraFrame {
    /// Create a cell seeded with the default frame in every slot.
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial(CameraFrame::default())
    }

    /// Create a cell seeded with a specific frame.
    #[must_use]
    pub fn with_initial(frame: CameraFrame) -> Self {
        Self {
            slots: [Mutex::new(frame), Mutex::new(frame), Mutex::new(frame)],
            published: AtomicUsize::new(0),
            write_index: AtomicUsize::new(1),
            read_index: AtomicUsize::new(2),
        }
    }

    /// Publish a new frame. Writer side; never blocks on the reader.
    pub fn publish(&self, frame: CameraFrame) {
        let w = self.write_index.load(Ordering::Relaxed);
        *self.slots[w].lock() = frame;
        // The previously published slot becomes the next write target; the
        // reader's slot is untouched, so the three stay disjoint.
        let prev = self.published.swap(w | FRESH_BIT, Ordering::AcqRel);
        self.write_index.store(prev & INDEX_MASK, Ordering::Relaxed);
    }

    /// Take the latest frame. Reader side; returns the previous frame again
    /// if nothing new was published since the last call.
    #[must_use]
    pub fn read(&self) -> CameraFrame {
        let published = self.published.load(Ordering::Acquire);
        if published & FRESH_BIT != 0 {
            let r = self.read_index.load(Ordering::Relaxed);
            // Swapping our old slot in clears the freshness bit and hands
            // the writer a new spare.
            let taken = self.published.swap(r, Ordering::AcqRel);
            self.read_index.store(taken & INDEX_MASK, Ordering::Relaxed);
        }
        *self.slots[self.read_index.load(Ordering::Relaxed)].lock()
    }

    /// Whether a publish has happened since the last `read`.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.published.load(Ordering::Acquire) & FRESH_BIT != 0
    }
}

impl Default for SharedCameraFrame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seraph_shared::Vec3;

    fn frame_at(x: f32) -> CameraFrame {
        CameraFrame::from_yaw_pitch(
            Vec3::new(x, 64.0, 0.0),
            0.0,
            0.0,
            70.0f32.to_radians(),
            16.0 / 9.0,
        )
    }

    #[test]
    fn test_read_before_publish_yields_initial() {
        let cell = SharedCameraFrame::with_initial(frame_at(7.0));
        assert!(!cell.is_fresh());
        assert_eq!(cell.read().position.x, 7.0);
    }

    #[test]
    fn test_reader_sees_latest_publish() {
        let cell = SharedCameraFrame::new();
        cell.publish(frame_at(1.0));
        cell.publish(frame_at(2.0));
        cell.publish(frame_at(3.0));
        assert!(cell.is_fresh());
        assert_eq!(cell.read().position.x, 3.0);
        assert!(!cell.is_fresh());
    }

    #[test]
    fn test_reread_without_publish_is_stable() {
        let cell = SharedCameraFrame::new();
        cell.publish(frame_at(5.0));
        assert_eq!(cell.read().position.x, 5.0);
        assert_eq!(cell.read().position.x, 5.0);
        cell.publish(frame_at(6.0));
        assert_eq!(cell.read().position.x, 6.0);
    }

    #[test]
    fn test_interleaved_publish_read() {
        let cell = SharedCameraFrame::new();
        for i in 0..32 {
            cell.publish(frame_at(i as f32));
            assert_eq!(cell.read().position.x, i as f32);
        }
    }

    #[test]
    fn test_concurrent_writer_and_reader() {
        use std::sync::Arc;

        let cell = Arc::new(SharedCameraFrame::new());
        let writer_cell = Arc::clone(&cell);
        let writer = std::thread::spawn(move || {
            for i in 1..=1000 {
                writer_cell.publish(frame_at(i as f32));
            }
        });

        let mut last = 0.0f32;
        for _ in 0..1000 {
            let x = cell.read().position.x;
            // Positions only ever move forward.
            assert!(x >= last);
            last = x;
        }
        writer.join().unwrap();
        assert_eq!(cell.read().position.x, 1000.0);
    }
}
