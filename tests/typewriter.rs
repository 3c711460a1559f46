// Integration tests (native) for the typewriter engine.
// These drive the engine through its public API with a recording display and
// a hand-cranked scheduler, so no browser is needed.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use portfolio_fx::{
    DisplayTarget, Phase, PhraseList, Runner, Scheduler, Typewriter, TypewriterConfig,
    TypewriterError, TypingState, advance,
};

/// Display stub that keeps every write.
#[derive(Clone, Default)]
struct Recording(Rc<RefCell<Vec<String>>>);

impl Recording {
    fn writes(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    fn last(&self) -> String {
        self.0.borrow().last().cloned().unwrap_or_default()
    }
}

impl DisplayTarget for Recording {
    fn set_text(&mut self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

type Task = (u64, u32, Box<dyn FnOnce()>);

#[derive(Clone, Default)]
struct ManualTimers {
    queue: Rc<RefCell<VecDeque<Task>>>,
    ids: Rc<Cell<u64>>,
}

impl ManualTimers {
    /// Run the next pending task; returns the delay it was scheduled with.
    fn fire(&self) -> Option<u32> {
        let (_, delay, task) = self.queue.borrow_mut().pop_front()?;
        task();
        Some(delay)
    }

    fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Scheduler for ManualTimers {
    type Token = u64;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<u64> {
        let id = self.ids.get() + 1;
        self.ids.set(id);
        self.queue.borrow_mut().push_back((id, delay_ms, task));
        Some(id)
    }

    fn cancel(&self, token: u64) {
        self.queue.borrow_mut().retain(|(id, _, _)| *id != token);
    }
}

fn start(phrases: &[&str], timers: &ManualTimers, display: &Recording) -> Runner<ManualTimers, Recording> {
    Runner::start(
        phrases.iter().copied(),
        display.clone(),
        TypewriterConfig::default(),
        timers.clone(),
    )
    .expect("valid phrases")
}

#[test]
fn hi_yo_scenario_through_runner() {
    let timers = ManualTimers::default();
    let display = Recording::default();
    let runner = start(&["Hi", "Yo"], &timers, &display);

    let mut delays = Vec::new();
    let mut indices = vec![runner.state().index];
    for _ in 0..7 {
        delays.push(timers.fire().unwrap());
        indices.push(runner.state().index);
    }

    assert_eq!(display.writes(), ["H", "Hi", "H", "", "Y", "Yo", "Y", ""]);
    assert_eq!(delays, [100, 2000, 50, 500, 100, 2000, 50]);
    assert_eq!(indices, [0, 0, 0, 1, 1, 1, 1, 0]);
    assert_eq!(timers.pending(), 1);
}

#[test]
fn empty_phrase_list_is_rejected_without_scheduling() {
    let timers = ManualTimers::default();
    let display = Recording::default();
    let res = Runner::start(
        Vec::<String>::new(),
        display.clone(),
        TypewriterConfig::default(),
        timers.clone(),
    );
    assert!(matches!(res, Err(TypewriterError::EmptyPhraseList)));
    assert_eq!(timers.pending(), 0);
    assert!(display.writes().is_empty());
}

#[test]
fn stop_prevents_further_writes() {
    let timers = ManualTimers::default();
    let display = Recording::default();
    let runner = start(&["Portfolio"], &timers, &display);
    timers.fire();
    let before = display.writes().len();
    let state = runner.state();

    runner.stop();

    assert_eq!(timers.pending(), 0);
    assert!(timers.fire().is_none());
    assert_eq!(display.writes().len(), before);
    assert_eq!(runner.state(), state);
    assert!(!runner.is_running());
}

#[test]
fn queued_callback_after_stop_is_a_no_op() {
    // A scheduler that cannot cancel: the callback still fires after stop.
    #[derive(Clone, Default)]
    struct Uncancellable(Rc<RefCell<Vec<Box<dyn FnOnce()>>>>);

    impl Scheduler for Uncancellable {
        type Token = ();
        fn schedule(&self, _delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<()> {
            self.0.borrow_mut().push(task);
            Some(())
        }
        fn cancel(&self, _token: ()) {}
    }

    let timers = Uncancellable::default();
    let display = Recording::default();
    let runner = Runner::start(["ab"], display.clone(), TypewriterConfig::default(), timers.clone())
        .unwrap();
    runner.stop();

    let queued = timers.0.borrow_mut().pop().unwrap();
    queued();

    assert_eq!(display.writes(), ["a"]);
    assert!(timers.0.borrow().is_empty());
}

#[test]
fn single_one_char_phrase_cycles_onto_itself() {
    let timers = ManualTimers::default();
    let display = Recording::default();
    let runner = start(&["x"], &timers, &display);

    assert_eq!(runner.state().phase, Phase::PausingAfterTyped);
    assert_eq!(timers.fire(), Some(2000));
    assert_eq!(display.last(), "");
    assert_eq!(runner.state().phase, Phase::PausingAfterDeleted);
    assert_eq!(runner.state().index, 0);
    assert_eq!(timers.fire(), Some(500));
    assert_eq!(display.last(), "x");
    assert_eq!(runner.state().phase, Phase::PausingAfterTyped);
}

#[test]
fn independent_engines_do_not_share_state() {
    let config = TypewriterConfig::default();
    let mut a = Typewriter::new(PhraseList::new(["abc"]).unwrap(), String::new(), config);
    let mut b = Typewriter::new(PhraseList::new(["xyz"]).unwrap(), String::new(), config);
    a.tick();
    a.tick();
    b.tick();
    assert_eq!(a.display(), "ab");
    assert_eq!(b.display(), "x");
}

#[test]
fn custom_delays_are_used() {
    let config = TypewriterConfig {
        typing_speed_ms: 7,
        deleting_speed_ms: 3,
        pause_ms: 11,
        next_delay_ms: 13,
    };
    let phrases = PhraseList::new(["ab"]).unwrap();
    let mut state = TypingState::new();
    let mut delays = Vec::new();
    for _ in 0..4 {
        state = advance(&phrases, &config, state);
        delays.push(state.delay_ms);
    }
    assert_eq!(delays, [7, 11, 3, 13]);
}

#[test]
fn refused_timer_mid_loop_stops_the_runner() {
    // Accepts the first timer, then refuses every later one.
    #[derive(Clone, Default)]
    struct Flaky(Rc<RefCell<Vec<Box<dyn FnOnce()>>>>);

    impl Scheduler for Flaky {
        type Token = ();
        fn schedule(&self, _delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<()> {
            let mut queue = self.0.borrow_mut();
            if queue.is_empty() {
                queue.push(task);
                Some(())
            } else {
                None
            }
        }
        fn cancel(&self, _token: ()) {}
    }

    let timers = Flaky::default();
    let display = Recording::default();
    let runner = Runner::start(["abc"], display.clone(), TypewriterConfig::default(), timers.clone())
        .unwrap();
    assert!(runner.is_running());

    // The queue keeps its one entry so the second arm is refused.
    let first = timers.0.borrow_mut().pop().unwrap();
    timers.0.borrow_mut().push(Box::new(|| {}));
    first();

    assert_eq!(display.writes(), ["a", "ab"]);
    assert!(!runner.is_running());
}
