extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Event, Runtime};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    if let Err(error) = main_loop(interrupted) {
        eprintln!("{}", error);
    }
}

fn main_loop(interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let interface = Interface::new("srpn")?;
    let mut runtime = Runtime::default();
    interface.write_fmt(format_args!(
        "{}\n",
        Style::new().bold().paint("SRPN emulator")
    ))?;

    loop {
        if interrupted.load(Ordering::SeqCst) {
            break;
        }
        match runtime.execute() {
            Event::Print(line) => {
                interface.write_fmt(format_args!("{}\n", line))?;
            }
            Event::Errors(errors) => {
                for error in errors {
                    interface.write_fmt(format_args!("{}\n", error))?;
                }
            }
            Event::Stopped => match interface.read_line()? {
                ReadResult::Input(input) => {
                    runtime.enter(&input);
                    interface.add_history_unique(input);
                }
                ReadResult::Signal(_) | ReadResult::Eof => break,
            },
        }
    }
    Ok(())
}
