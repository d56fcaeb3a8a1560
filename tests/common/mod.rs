use srpn::mach::{Event, Runtime};

/// Drain every queued event into one string, diagnostics included, one
/// line each, exactly as the terminal would render them.
pub fn run(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => {
                break;
            }
            Event::Print(line) => {
                s.push_str(&line);
                s.push('\n');
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    s.push_str(&format!("{}\n", error));
                }
            }
        }
    }
    s
}

pub fn eval(runtime: &mut Runtime, line: &str) -> String {
    runtime.enter(line);
    run(runtime)
}
