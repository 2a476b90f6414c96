//! The menu-driven console loop.
//!
//! A thin shell over [`PlanRegistry`]: it collects validated or validatable
//! strings from the user, hands them to the registry, and renders the
//! registry's notifications through a [`ConsoleSink`]. All outcome reporting
//! happens through that sink; the loop itself only prints prompts, menus and
//! plan listings.

use std::io::{self, BufRead, Write};

use log::info;

use dayplan_core::{parse_time, Activity, ConsoleSink, PlanRegistry, Priority};

/// Run the menu loop until the user exits or input ends.
pub fn run(input: &mut dyn BufRead) -> io::Result<()> {
    let mut registry = PlanRegistry::new();
    registry.add_sink(Box::new(ConsoleSink));
    info!("console loop started");

    println!("=== Dayplan ===");
    loop {
        print_menu();
        let Some(choice) = read_line(input)? else {
            break;
        };

        match choice.trim() {
            "1" => add_plan(input, &mut registry)?,
            "2" => {
                let Some(name) = prompt(input, "Name to remove: ")? else {
                    break;
                };
                let _ = registry.remove(&name);
            }
            "3" => render(registry.list_all()),
            "4" => edit_plan(input, &mut registry)?,
            "5" => {
                let Some(name) = prompt(input, "Name: ")? else {
                    break;
                };
                let _ = registry.complete(&name);
            }
            "6" => {
                let Some(token) = prompt(input, "Priority: ")? else {
                    break;
                };
                if let Ok(matched) = registry.list_by_priority(&token) {
                    render(matched);
                }
            }
            "7" => break,
            _ => println!("Invalid!"),
        }
    }

    println!("Bye!");
    Ok(())
}

fn print_menu() {
    println!();
    println!("1. Add plan");
    println!("2. Remove plan");
    println!("3. View all");
    println!("4. Edit");
    println!("5. Mark done");
    println!("6. View by priority");
    println!("7. Exit");
    print!("Option: ");
    let _ = io::stdout().flush();
}

fn add_plan(input: &mut dyn BufRead, registry: &mut PlanRegistry) -> io::Result<()> {
    let (Some(name), Some(start), Some(end), Some(priority)) = (
        prompt(input, "Name: ")?,
        prompt(input, "Start (HH:MM): ")?,
        prompt(input, "End (HH:MM): ")?,
        prompt(input, "Priority (High/Medium/Low): ")?,
    ) else {
        return Ok(());
    };

    // The caller builds the Activity; the registry re-validates the interval
    // and checks conflicts.
    match (
        parse_time(&start),
        parse_time(&end),
        priority.parse::<Priority>(),
    ) {
        (Ok(start), Ok(end), Ok(priority)) => {
            let _ = registry.add(Activity::new(name, start, end, priority));
        }
        _ => println!("Invalid input."),
    }
    Ok(())
}

fn edit_plan(input: &mut dyn BufRead, registry: &mut PlanRegistry) -> io::Result<()> {
    let (Some(old_name), Some(new_name), Some(start), Some(end), Some(priority)) = (
        prompt(input, "Old name: ")?,
        prompt(input, "New name: ")?,
        prompt(input, "New start: ")?,
        prompt(input, "New end: ")?,
        prompt(input, "New priority: ")?,
    ) else {
        return Ok(());
    };
    let _ = registry.edit(&old_name, &new_name, &start, &end, &priority);
    Ok(())
}

fn render(plans: Vec<&Activity>) {
    for plan in plans {
        println!("{plan}");
    }
}

fn prompt(input: &mut dyn BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    read_line(input)
}

/// One input line, or `None` at end of input.
fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
