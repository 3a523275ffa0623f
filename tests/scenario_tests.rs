//! Integration tests: tutorial flow through the public API
//! Covers the gate, terminal and exit rules plus narration reacting to them

use shirube::{
    AdvanceOutcome, AudioClip, AudioOutput, ExitOutcome, NarrationController, NarrationEntry,
    SlideChangedEvent, StartOutcome, TutorialController, ViewState,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const THREE_SLIDES: &str = r#"
{
  "slides": [
    { "id": "s1", "header": "One", "canContinue": true },
    { "id": "s2", "header": "Two", "canContinue": false },
    { "id": "s3", "header": "Three" }
  ]
}
"#;

/// Audio channel that records every call
#[derive(Debug, Default)]
struct RecordingAudio {
    calls: Vec<String>,
}

impl AudioOutput for RecordingAudio {
    fn stop(&mut self) {
        self.calls.push("stop".to_string());
    }

    fn set_clip(&mut self, clip: &AudioClip) {
        self.calls.push(format!("clip:{clip}"));
    }

    fn play(&mut self) {
        self.calls.push("play".to_string());
    }
}

fn record_events(tutorial: &mut TutorialController) -> Rc<RefCell<Vec<SlideChangedEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    tutorial.subscribe_fn(move |event| sink.borrow_mut().push(event.clone()));
    events
}

/// Scenario A: gated middle slide, unlocked by game logic, then terminal chrome
#[test]
fn scenario_gated_walkthrough() {
    let mut tutorial = TutorialController::from_json(THREE_SLIDES, ViewState::new());
    let events = record_events(&mut tutorial);

    assert_eq!(tutorial.start_tutorial(), StartOutcome::Started);
    assert_eq!(tutorial.current_slide().unwrap().id(), "s1");
    assert!(tutorial.view().next_visible);

    assert_eq!(tutorial.advance(), AdvanceOutcome::Advanced { index: 1 });
    assert_eq!(tutorial.current_slide().unwrap().id(), "s2");
    assert!(tutorial.view().next_visible);
    assert!(!tutorial.view().next_interactable);

    assert_eq!(tutorial.advance(), AdvanceOutcome::Gated);
    assert_eq!(tutorial.current_slide().unwrap().id(), "s2");

    tutorial.set_can_continue(true);
    assert!(tutorial.view().next_interactable);
    assert_eq!(tutorial.current_slide().unwrap().id(), "s2");

    assert_eq!(tutorial.advance(), AdvanceOutcome::Advanced { index: 2 });
    assert_eq!(tutorial.current_slide().unwrap().id(), "s3");
    assert!(!tutorial.view().next_visible);
    assert!(tutorial.view().retry_visible);
    assert!(tutorial.view().exit_visible);

    let ids: Vec<String> = events.borrow().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3"]);
}

/// Scenario B: narration only touches audio on slides with a clip
#[test]
fn scenario_narration_on_mapped_slide() {
    let mut tutorial = TutorialController::from_json(THREE_SLIDES, ViewState::new());
    let narration = Rc::new(RefCell::new(NarrationController::new(
        vec![NarrationEntry::new("s2", "clipA")],
        Some(RecordingAudio::default()),
    )));
    NarrationController::enable(&narration, &mut tutorial);

    tutorial.start_tutorial();
    assert!(narration.borrow().audio().unwrap().calls.is_empty());

    tutorial.advance();
    assert_eq!(
        narration.borrow().audio().unwrap().calls,
        vec!["stop", "clip:clipA", "play"]
    );

    tutorial.set_can_continue(true);
    tutorial.advance();
    assert_eq!(narration.borrow().audio().unwrap().calls.len(), 3);
}

/// Scenario C: exit off the last slide still reaches the host
#[test]
fn scenario_exit_off_terminal() {
    let exits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&exits);
    let mut tutorial = TutorialController::from_json(THREE_SLIDES, ViewState::new());
    tutorial.on_exit_requested(move || counter.set(counter.get() + 1));
    tutorial.start_tutorial();

    assert_eq!(tutorial.request_exit(), ExitOutcome::OffTerminal);
    assert_eq!(exits.get(), 1);
}

#[test]
fn start_emits_exactly_one_event() {
    let mut tutorial = TutorialController::from_json(THREE_SLIDES, ViewState::new());
    let events = record_events(&mut tutorial);

    tutorial.start_tutorial();

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        SlideChangedEvent {
            id: "s1".to_string(),
            header: "One".to_string(),
            body: String::new(),
            footer: String::new(),
        }
    );
}

#[test]
fn each_advance_is_one_step() {
    let deck = r#"{ "slides": [ { "id": "a" }, { "id": "b" }, { "id": "c" }, { "id": "d" } ] }"#;
    let mut tutorial = TutorialController::from_json(deck, ViewState::new());
    tutorial.start_tutorial();
    let events = record_events(&mut tutorial);

    assert_eq!(tutorial.advance(), AdvanceOutcome::Advanced { index: 1 });
    assert_eq!(tutorial.advance(), AdvanceOutcome::Advanced { index: 2 });
    assert_eq!(tutorial.advance(), AdvanceOutcome::Advanced { index: 3 });
    assert_eq!(tutorial.advance(), AdvanceOutcome::AtTerminal);

    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn terminal_ignores_gate_and_declared_buttons() {
    let deck = r#"
{
  "slides": [
    { "id": "a" },
    { "id": "b", "canContinue": false, "buttons": [ { "label": "Onward", "action": "next" } ] }
  ]
}
"#;
    let mut tutorial = TutorialController::from_json(deck, ViewState::new());
    tutorial.start_tutorial();
    tutorial.advance();

    assert_eq!(tutorial.advance(), AdvanceOutcome::Gated);
    tutorial.set_can_continue(true);
    assert_eq!(tutorial.advance(), AdvanceOutcome::AtTerminal);
    assert!(!tutorial.view().next_visible);
    assert!(tutorial.view().retry_visible && tutorial.view().exit_visible);
}

#[test]
fn exactly_one_button_group_per_slide() {
    let deck = r#"{ "slides": [ { "id": "a" }, { "id": "b" }, { "id": "c" } ] }"#;
    let mut tutorial = TutorialController::from_json(deck, ViewState::new());
    tutorial.start_tutorial();

    loop {
        let view = tutorial.view();
        let terminal = tutorial.is_on_terminal();
        assert_eq!(view.next_visible, !terminal);
        assert_eq!(view.retry_visible, terminal);
        assert_eq!(view.exit_visible, terminal);

        if tutorial.advance() == AdvanceOutcome::AtTerminal {
            break;
        }
    }
}

#[test]
fn empty_decks_stay_unloaded() {
    for deck in ["", "  \n", r#"{ "slides": [] }"#] {
        let mut tutorial = TutorialController::from_json(deck, ViewState::new());
        let events = record_events(&mut tutorial);

        assert_eq!(tutorial.start_tutorial(), StartOutcome::NoSlides);
        assert!(!tutorial.is_loaded());
        assert!(tutorial.view().is_blank());
        assert!(events.borrow().is_empty());
    }
}

#[test]
fn dropped_narration_is_not_called() {
    let mut tutorial = TutorialController::from_json(THREE_SLIDES, ViewState::new());
    let narration = Rc::new(RefCell::new(NarrationController::new(
        vec![NarrationEntry::new("s1", "intro")],
        Some(RecordingAudio::default()),
    )));
    NarrationController::enable(&narration, &mut tutorial);
    drop(narration);

    assert_eq!(tutorial.start_tutorial(), StartOutcome::Started);
    assert_eq!(tutorial.subscriber_count(), 0);
}
