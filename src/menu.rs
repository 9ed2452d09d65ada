use crate::actions;
use crate::mutator::distinct_names;
use crate::pantry::Pantry;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Expiring,
    Remove,
    FindRecipes,
    Quit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Expiring,
        MenuChoice::Remove,
        MenuChoice::FindRecipes,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "1" | "add" => Some(MenuChoice::Add),
            "2" | "view" => Some(MenuChoice::View),
            "3" | "expiring" => Some(MenuChoice::Expiring),
            "4" | "remove" => Some(MenuChoice::Remove),
            "5" | "recipes" => Some(MenuChoice::FindRecipes),
            "q" | "quit" | "exit" => Some(MenuChoice::Quit),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add a New Ingredient",
            MenuChoice::View => "View All Ingredients",
            MenuChoice::Expiring => "Check Ingredients Expiring Soon",
            MenuChoice::Remove => "Remove an Ingredient",
            MenuChoice::FindRecipes => "Find Recipes",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Read one line; `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Recipe Finder")?;
    for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, choice.label())?;
    }
    writeln!(out, "  q. {}", MenuChoice::Quit.label())
}

/// Run the interactive menu until the user quits or input ends.
///
/// Every action finishes (and reports its own errors) before the next
/// choice is read.
pub async fn run<R: BufRead, W: Write>(
    pantry: &Pantry,
    input: &mut R,
    out: &mut W,
    today: NaiveDate,
) -> io::Result<()> {
    loop {
        print_menu(out)?;
        let Some(line) = prompt(input, out, "Choose an option: ")? else {
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Add) => {
                let Some(name) = prompt(input, out, "Ingredient name: ")? else {
                    return Ok(());
                };
                let Some(date) = prompt(input, out, "Expiration date (YYYY-MM-DD): ")? else {
                    return Ok(());
                };
                actions::add(pantry, out, &name, &date, today)?;
            }
            Some(MenuChoice::View) => actions::view(pantry, out, today)?,
            Some(MenuChoice::Expiring) => {
                actions::expiring(pantry, out, today, pantry.lookahead_days())?
            }
            Some(MenuChoice::Remove) => {
                if let Some(name) = pick_ingredient(pantry, input, out)? {
                    actions::remove(pantry, out, &name)?;
                }
            }
            Some(MenuChoice::FindRecipes) => actions::find_recipes(pantry, out).await?,
            Some(MenuChoice::Quit) => return Ok(()),
            None => writeln!(out, "Invalid selection.")?,
        }
    }
}

/// List the stored names and let the user pick one by number or name.
fn pick_ingredient<R: BufRead, W: Write>(
    pantry: &Pantry,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    let records = match pantry.ingredients() {
        Ok(records) => records,
        Err(e) => {
            actions::report(out, &e)?;
            return Ok(None);
        }
    };
    if records.is_empty() {
        writeln!(out, "No ingredients to remove.")?;
        return Ok(None);
    }

    let names: Vec<String> = distinct_names(&records).into_iter().collect();
    for (idx, name) in names.iter().enumerate() {
        writeln!(out, "  {}. {}", idx + 1, name)?;
    }
    let Some(answer) = prompt(input, out, "Ingredient to remove: ")? else {
        return Ok(None);
    };

    let picked = answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| names.get(idx).cloned())
        .unwrap_or(answer);
    Ok(Some(picked))
}
