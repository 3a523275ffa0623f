//! CUI player mode for running tutorials
//!
//! This module drives a [`TutorialController`] from the terminal. The
//! terminal stands in for the host application: it renders the panel,
//! plays narration as text, and rebuilds the session on Retry.

use crate::{
    cli::render::{clear_screen, render_delta, render_panel, TerminalAudio},
    config::TutorialConfig,
    controller::{AdvanceOutcome, StartOutcome, TutorialController},
    gate::ContinueGateSetter,
    narration::NarrationController,
    view::ViewState,
};
use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;

/// How a single session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    /// Retry was pressed; start a fresh session
    Restart,
    /// Exit was requested by the tutorial
    Exit,
    /// The user quit the player
    Quit,
}

/// Run the player mode
pub fn run_play(slides_json: &str, config: &TutorialConfig, debug: bool) -> anyhow::Result<()> {
    println!("=== shirube Tutorial Player ===");
    println!();
    println!("Controls:");
    println!("  Enter/n: next");
    println!("  c:       complete the slide's task (unlocks Next)");
    println!("  r:       retry (restart session)");
    println!("  x:       exit");
    println!("  q:       quit");
    println!();

    loop {
        match run_session(slides_json, config, debug)? {
            SessionEnd::Restart => {
                clear_screen();
                println!("(session restarted)");
                println!();
            }
            SessionEnd::Exit => {
                println!("== Tutorial finished ==");
                return Ok(());
            }
            SessionEnd::Quit => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}

fn run_session(slides_json: &str, config: &TutorialConfig, debug: bool) -> anyhow::Result<SessionEnd> {
    let restart_requested = Rc::new(Cell::new(false));
    let exit_requested = Rc::new(Cell::new(false));

    let reload_flag = Rc::clone(&restart_requested);
    let tutorial = TutorialController::from_json(slides_json, ViewState::new())
        .with_default_next_label(config.default_next_label.as_str())
        .with_reloader(move || reload_flag.set(true))
        .into_shared();

    let exit_flag = Rc::clone(&exit_requested);
    tutorial
        .borrow_mut()
        .on_exit_requested(move || exit_flag.set(true));

    let narration = Rc::new(RefCell::new(NarrationController::from_config(
        &config.narration,
        Some(TerminalAudio::default()),
    )));
    NarrationController::enable(&narration, &mut *tutorial.borrow_mut());

    let gate = ContinueGateSetter::new(&tutorial);

    if tutorial.borrow_mut().start_tutorial() == StartOutcome::NoSlides {
        println!("No slides to show.");
        return Ok(SessionEnd::Quit);
    }
    draw(&tutorial, debug, true);

    loop {
        let Some(input) = get_input(">")? else {
            return Ok(SessionEnd::Quit);
        };

        match input.as_str() {
            "" | "n" => match tutorial.borrow_mut().advance() {
                AdvanceOutcome::Gated => println!("(Next is locked until the task is done)"),
                AdvanceOutcome::AtTerminal => println!("(This is the last slide)"),
                AdvanceOutcome::Advanced { .. } | AdvanceOutcome::Unloaded => {}
            },
            "c" => {
                gate.allow_continue();
            }
            "r" => {
                tutorial.borrow_mut().retry();
            }
            "x" => {
                tutorial.borrow_mut().request_exit();
            }
            "q" => return Ok(SessionEnd::Quit),
            _ => println!("Unknown command. Use Enter/n, c, r, x or q."),
        }

        if restart_requested.get() {
            return Ok(SessionEnd::Restart);
        }
        if exit_requested.get() {
            return Ok(SessionEnd::Exit);
        }
        draw(&tutorial, debug, false);
    }
}

fn draw(tutorial: &Rc<RefCell<TutorialController>>, debug: bool, full: bool) {
    let mut tutorial = tutorial.borrow_mut();
    let delta = tutorial.view_mut().take_delta();
    if full {
        render_panel(tutorial.view());
    } else {
        render_delta(tutorial.view(), &delta);
    }

    if debug {
        display_debug_info(&tutorial);
    }
}

/// Display debug information (only when --debug is set)
fn display_debug_info(tutorial: &TutorialController) {
    println!("[debug]");
    match tutorial.current_slide() {
        Some(slide) => println!(
            "slide={}/{} id={} canContinue={} terminal={}",
            tutorial.current_index().map_or(0, |index| index + 1),
            tutorial.slide_count(),
            slide.id(),
            slide.can_continue(),
            tutorial.is_on_terminal()
        ),
        None => println!("slide=none"),
    }
    println!();
}

/// Get user input with a prompt; `None` once stdin is closed
fn get_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{} ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
