use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{info, warn};

use super::scheduler::Scheduler;
use crate::config::TypewriterTimings;
use crate::error::PageError;

/// Something that can display a page title.
pub trait TitleSink {
    fn set_title(&self, title: &str) -> Result<(), PageError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Output of one animation step: how many characters to show now and how
/// long to wait before the next step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub visible: usize,
    pub delay_ms: u32,
}

/// Pure type/delete state machine. `char_index` never leaves `0..=len`.
#[derive(Clone, Debug)]
pub struct Typewriter {
    len: usize,
    char_index: usize,
    phase: Phase,
    timings: TypewriterTimings,
}

impl Typewriter {
    pub fn new(len: usize, timings: TypewriterTimings) -> Self {
        Self {
            len,
            char_index: 0,
            phase: Phase::Typing,
            timings,
        }
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn step(&mut self) -> Frame {
        let visible = self.char_index;
        let delay_ms = match self.phase {
            Phase::Typing if self.char_index < self.len => {
                self.char_index += 1;
                self.timings.type_ms
            }
            Phase::Typing => {
                self.phase = Phase::Deleting;
                self.timings.hold_full_ms
            }
            Phase::Deleting if self.char_index > 0 => {
                self.char_index -= 1;
                self.timings.delete_ms
            }
            Phase::Deleting => {
                self.phase = Phase::Typing;
                self.timings.hold_empty_ms
            }
        };
        Frame { visible, delay_ms }
    }
}

struct Animation<S: Scheduler, T: TitleSink> {
    text: String,
    timings: TypewriterTimings,
    scheduler: S,
    sink: T,
    machine: RefCell<Typewriter>,
    pending: RefCell<Option<S::Handle>>,
    running: Cell<bool>,
}

/// Types and deletes `text` into the page title forever, once started.
///
/// Each step schedules the next one through `S`, so there is never more than
/// one pending step. [`TitleTypewriter::stop`] cancels it and puts the full
/// text back.
pub struct TitleTypewriter<S: Scheduler + 'static, T: TitleSink + 'static> {
    inner: Rc<Animation<S, T>>,
}

impl<S: Scheduler + 'static, T: TitleSink + 'static> TitleTypewriter<S, T> {
    pub fn new(text: impl Into<String>, timings: TypewriterTimings, scheduler: S, sink: T) -> Self {
        let text = text.into();
        let machine = Typewriter::new(text.chars().count(), timings);
        Self {
            inner: Rc::new(Animation {
                text,
                timings,
                scheduler,
                sink,
                machine: RefCell::new(machine),
                pending: RefCell::new(None),
                running: Cell::new(false),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Runs the first step immediately. No-op while already running.
    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        info!("Starting title animation for {:?}", self.inner.text);
        tick(&self.inner);
    }

    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        let inner = &self.inner;
        if let Some(handle) = inner.pending.borrow_mut().take() {
            inner.scheduler.cancel(handle);
        }
        *inner.machine.borrow_mut() = Typewriter::new(inner.text.chars().count(), inner.timings);
        inner.show(&inner.text);
    }
}

impl<S: Scheduler + 'static, T: TitleSink + 'static> Drop for TitleTypewriter<S, T> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<S: Scheduler, T: TitleSink> Animation<S, T> {
    fn show(&self, title: &str) {
        if let Err(err) = self.sink.set_title(title) {
            warn!("Could not update title: {}", err);
        }
    }
}

fn tick<S: Scheduler + 'static, T: TitleSink + 'static>(inner: &Rc<Animation<S, T>>) {
    if !inner.running.get() {
        return;
    }
    let frame = inner.machine.borrow_mut().step();
    let shown: String = inner.text.chars().take(frame.visible).collect();
    inner.show(&shown);

    let weak: Weak<Animation<S, T>> = Rc::downgrade(inner);
    let handle = inner.scheduler.schedule(
        frame.delay_ms,
        Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                tick(&inner);
            }
        }),
    );
    *inner.pending.borrow_mut() = Some(handle);
}
