//! Interactive Pokedex manager.
//!
//! Numbered menus over stdin/stdout. Integer prompts re-ask until they get a
//! whole number; end of input leaves the program like choosing Exit.

use pokedex_manager::interface::*;
use pokedex_manager::{EventBus, Registry};
use std::io::{self, BufRead, Write};

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        if !text.is_empty() {
            writeln!(self.output, "{}", text.trim_end_matches('\n'))?;
        }
        Ok(())
    }

    fn report(&mut self, result: Result<String, String>) -> io::Result<()> {
        match result {
            Ok(text) | Err(text) => self.say(&text),
        }
    }

    /// One trimmed line, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompt until the line parses as an integer.
    fn read_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Invalid input.")?,
            }
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<()> {
    loop {
        console.say(
            "\n=== Main Menu ===\n\
             1. New Pokedex\n\
             2. Existing Pokedex\n\
             3. Delete a Pokedex\n\
             4. Merge Pokedexes\n\
             5. Sort Owners by Name\n\
             6. Print Owners in a direction X times\n\
             7. Exit",
        )?;
        let Some(choice) = console.read_int("Your choice: ")? else {
            break;
        };

        let flow = match choice {
            1 => new_pokedex(console, registry)?,
            2 => existing_pokedex(console, registry)?,
            3 => delete_pokedex_menu(console, registry)?,
            4 => merge_menu(console, registry)?,
            5 => {
                console.report(sort_owners(registry))?;
                Flow::Continue
            }
            6 => print_owners_menu(console, registry)?,
            7 => break,
            _ => {
                console.say("Invalid.")?;
                Flow::Continue
            }
        };
        if let Flow::Exit = flow {
            break;
        }
    }
    console.say("Goodbye!")
}

fn new_pokedex<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<Flow> {
    let Some(name) = console.read_line("Your name: ")? else {
        return Ok(Flow::Exit);
    };
    if registry.find_by_name(&name).is_some() {
        console.say(&format!(
            "Owner '{}' already exists. Not creating a new Pokedex.",
            name
        ))?;
        return Ok(Flow::Continue);
    }

    console.say(&display_starter_menu())?;
    let Some(choice) = console.read_int("Your choice: ")? else {
        return Ok(Flow::Exit);
    };
    console.report(create_pokedex(registry, &name, choice))?;
    Ok(Flow::Continue)
}

fn existing_pokedex<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<Flow> {
    if registry.is_empty() {
        console.say("No existing Pokedexes.")?;
        return Ok(Flow::Continue);
    }
    console.say(&format!("\n{}", display_owner_list(registry)))?;
    let Some(position) = console.read_int("Choose a Pokedex by number: ")? else {
        return Ok(Flow::Exit);
    };
    let owner = match owner_at(registry, position) {
        Ok(owner) => owner,
        Err(message) => {
            console.say(&message)?;
            return Ok(Flow::Continue);
        }
    };
    let name = match registry.get(owner) {
        Ok(owner) => owner.name().to_string(),
        Err(err) => {
            console.say(&err.to_string())?;
            return Ok(Flow::Continue);
        }
    };

    console.say(&format!("\nEntering {}'s Pokedex...", name))?;
    loop {
        console.say(&format!(
            "\n-- {}'s Pokedex Menu --\n\
             1. Add Pokemon\n\
             2. Display Pokedex\n\
             3. Release Pokemon (by ID)\n\
             4. Pokemon Fight!\n\
             5. Evolve Pokemon\n\
             6. Back to Main",
            name
        ))?;
        let Some(choice) = console.read_int("Your choice: ")? else {
            return Ok(Flow::Exit);
        };

        let result = match choice {
            1 => match console.read_int("Enter ID to add: ")? {
                Some(id) => add_pokemon(registry, owner, id),
                None => return Ok(Flow::Exit),
            },
            2 => {
                console.say(&display_traversal_menu())?;
                match console.read_int("Your choice: ")? {
                    Some(order) => display_pokedex(registry, owner, order),
                    None => return Ok(Flow::Exit),
                }
            }
            3 => match console.read_int("Enter Pokemon ID to release: ")? {
                Some(id) => release_pokemon(registry, owner, id),
                None => return Ok(Flow::Exit),
            },
            4 => {
                let first = console.read_int("Enter ID of the first Pokemon: ")?;
                let second = console.read_int("Enter ID of the second Pokemon: ")?;
                match (first, second) {
                    (Some(first), Some(second)) => pokemon_fight(registry, owner, first, second),
                    _ => return Ok(Flow::Exit),
                }
            }
            5 => match console.read_int("Enter ID of Pokemon to evolve: ")? {
                Some(id) => evolve_pokemon(registry, owner, id),
                None => return Ok(Flow::Exit),
            },
            6 => {
                console.say("Back to Main Menu.")?;
                return Ok(Flow::Continue);
            }
            _ => Err("Invalid choice.".to_string()),
        };
        console.report(result)?;
    }
}

fn delete_pokedex_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<Flow> {
    if registry.is_empty() {
        console.say("No existing Pokedexes to delete.")?;
        return Ok(Flow::Continue);
    }
    console.say("\n=== Delete a Pokedex ===")?;
    console.say(&display_owner_list(registry))?;
    let Some(position) = console.read_int("Choose a Pokedex to delete by number: ")? else {
        return Ok(Flow::Exit);
    };
    let result = owner_at(registry, position).and_then(|owner| delete_pokedex(registry, owner));
    console.report(result)?;
    Ok(Flow::Continue)
}

fn merge_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<Flow> {
    if registry.len() < 2 {
        console.say("Not enough owners to merge.")?;
        return Ok(Flow::Continue);
    }
    console.say("\n=== Merge Pokedexes ===")?;
    let Some(target) = console.read_line("Enter name of first owner: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(source) = console.read_line("Enter name of second owner: ")? else {
        return Ok(Flow::Exit);
    };
    console.report(merge_pokedexes(registry, &target, &source))?;
    Ok(Flow::Continue)
}

fn print_owners_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
) -> io::Result<Flow> {
    if registry.is_empty() {
        console.say("No owners.")?;
        return Ok(Flow::Continue);
    }
    let Some(direction) = console.read_line("Enter direction (F or B): ")? else {
        return Ok(Flow::Exit);
    };
    if pokedex_manager::Direction::parse(&direction).is_none() {
        console.say("Invalid direction.")?;
        return Ok(Flow::Continue);
    }
    let Some(times) = console.read_int("How many prints? ")? else {
        return Ok(Flow::Exit);
    };
    console.report(print_owners_directional(registry, &direction, times))?;
    Ok(Flow::Continue)
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut registry = Registry::new();

    let result = main_menu(&mut console, &mut registry);

    let mut bus = EventBus::new();
    registry.shutdown(&mut bus);
    if let Err(e) = &result {
        eprintln!("Pokedex manager stopped on an I/O error: {}", e);
    }
    result
}
