// Lesson: Observer
// A subject keeps a registration list and fans every change out to it,
// synchronously and in registration order.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use tracing::debug;

use super::{Lesson, LessonContext, LessonKind};
use crate::error::Result;

pub const DESCRIPTION: &str = "\
Observer defines a one-to-many dependency: a subject keeps a list of observers \
and notifies each of them whenever its state changes. The subject knows \
nothing about its observers beyond the notification interface, so any number \
of them can be attached or detached without coupling the two sides.";

pub trait Observer {
    fn update(&mut self, value: i32, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(usize);

pub trait Subject {
    fn attach(&mut self, observer: Rc<RefCell<dyn Observer>>) -> ObserverId;
    fn detach(&mut self, id: ObserverId) -> bool;
    fn notify(&self, out: &mut dyn Write) -> io::Result<()>;
}

// ============================================================================
// Subject
// ============================================================================

#[derive(Default)]
pub struct ValueSubject {
    value: i32,
    next_id: usize,
    observers: Vec<(ObserverId, Rc<RefCell<dyn Observer>>)>,
}

impl ValueSubject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn set_value(&mut self, value: i32, out: &mut dyn Write) -> Result<()> {
        self.value = value;
        self.notify(out)?;
        Ok(())
    }
}

impl Subject for ValueSubject {
    fn attach(&mut self, observer: Rc<RefCell<dyn Observer>>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn notify(&self, out: &mut dyn Write) -> io::Result<()> {
        debug!(value = self.value, observers = self.observers.len(), "notifying");
        for (_, observer) in &self.observers {
            observer.borrow_mut().update(self.value, out)?;
        }
        Ok(())
    }
}

// ============================================================================
// Observers
// ============================================================================

fn notice(name: &str, value: i32) -> String {
    format!("{name}: notified about changes in Subject('value' changed to {value})")
}

/// Prints a one-line notice per change.
#[derive(Debug)]
pub struct NameObserver {
    name: String,
    history: Vec<i32>,
}

impl NameObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[i32] {
        &self.history
    }
}

impl Observer for NameObserver {
    fn update(&mut self, value: i32, out: &mut dyn Write) -> io::Result<()> {
        self.history.push(value);
        writeln!(out, "{}", notice(&self.name, value))
    }
}

/// Prints the notice followed by a bar of `*`, one per unit of value.
#[derive(Debug)]
pub struct BarObserver {
    name: String,
    history: Vec<i32>,
}

impl BarObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[i32] {
        &self.history
    }

    pub fn bar(value: i32) -> String {
        "*".repeat(value.max(0) as usize)
    }
}

impl Observer for BarObserver {
    fn update(&mut self, value: i32, out: &mut dyn Write) -> io::Result<()> {
        self.history.push(value);
        writeln!(out, "{}", notice(&self.name, value))?;
        writeln!(out, "{}", Self::bar(value))
    }
}

pub fn run(ctx: &mut LessonContext<'_>) -> Result<()> {
    let mut subject = ValueSubject::new();
    subject.attach(Rc::new(RefCell::new(NameObserver::new("Observer 1"))));
    subject.attach(Rc::new(RefCell::new(BarObserver::new("Observer 2"))));

    subject.set_value(3, ctx.out())?;
    subject.set_value(8, ctx.out())?;
    Ok(())
}

pub struct ObserverLesson;

impl Lesson for ObserverLesson {
    fn kind(&self) -> LessonKind {
        LessonKind::Observer
    }

    fn title(&self) -> &'static str {
        "Observer"
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn run(&self, ctx: &mut LessonContext<'_>) -> Result<()> {
        run(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Observer for Recorder {
        fn update(&mut self, value: i32, _out: &mut dyn Write) -> io::Result<()> {
            self.log.borrow_mut().push(format!("{}={}", self.tag, value));
            Ok(())
        }
    }

    #[test]
    fn test_fan_out_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = ValueSubject::new();
        for tag in ["a", "b", "c"] {
            subject.attach(Rc::new(RefCell::new(Recorder {
                tag,
                log: log.clone(),
            })));
        }

        subject.set_value(1, &mut io::sink()).unwrap();
        assert_eq!(*log.borrow(), vec!["a=1", "b=1", "c=1"]);
    }

    #[test]
    fn test_detached_observer_is_not_notified() {
        let first = Rc::new(RefCell::new(NameObserver::new("first")));
        let second = Rc::new(RefCell::new(NameObserver::new("second")));
        let mut subject = ValueSubject::new();
        let first_id = subject.attach(first.clone());
        subject.attach(second.clone());

        subject.set_value(3, &mut io::sink()).unwrap();
        assert!(subject.detach(first_id));
        assert!(!subject.detach(first_id));
        subject.set_value(8, &mut io::sink()).unwrap();

        assert_eq!(first.borrow().history(), &[3]);
        assert_eq!(second.borrow().history(), &[3, 8]);
        assert_eq!(subject.observer_count(), 1);
        assert_eq!(subject.value(), 8);
    }

    #[test]
    fn test_no_observers_is_fine() {
        let mut subject = ValueSubject::new();
        let mut buf: Vec<u8> = Vec::new();
        subject.set_value(5, &mut buf).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_bar_clamps_negative_values() {
        assert_eq!(BarObserver::bar(3), "***");
        assert_eq!(BarObserver::bar(-2), "");
    }

    #[test]
    fn test_run_output() {
        let mut buf: Vec<u8> = Vec::new();
        run(&mut LessonContext::new(&mut buf, None)).unwrap();
        let expected = "\
Observer 1: notified about changes in Subject('value' changed to 3)
Observer 2: notified about changes in Subject('value' changed to 3)
***
Observer 1: notified about changes in Subject('value' changed to 8)
Observer 2: notified about changes in Subject('value' changed to 8)
********
";
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}
