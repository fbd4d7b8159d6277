//! Interactive pantry session.
//!
//! A thin stdin driver over the library: it owns all I/O and the two
//! in-memory stores, and delegates every interpretation to the core.

use anyhow::Result;
use log::info;
use std::io::{self, BufRead, Write};

use smart_pantry::aggregate::ShoppingList;
use smart_pantry::format::format_amount;
use smart_pantry::ingredient_parser::parse_ingredient;
use smart_pantry::matcher::compare_recipe_to_pantry;
use smart_pantry::pantry::Pantry;

const HELP: &str = "\
commands:
  add <line>          add an ingredient line to the pantry
  pantry              show pantry stock
  buy <line>          add a line to the shopping list
  shop                show the consolidated shopping list
  clearshop           empty the shopping list
  check <l1; l2; ..>  compare recipe lines to the pantry
  cook <l1; l2; ..>   deduct recipe lines from the pantry
  quit";

fn main() -> Result<()> {
    env_logger::init();
    info!("starting pantry session");

    let mut pantry = Pantry::new();
    let mut shopping = ShoppingList::new();

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "add" if !rest.is_empty() => {
                let parsed = pantry.add_line(rest);
                if parsed.has_quantity() {
                    println!("added {}", parsed);
                } else {
                    println!("no quantity recognized; counted 1 of '{}'", parsed.item);
                }
            }
            "pantry" => {
                if pantry.is_empty() {
                    println!("pantry is empty");
                }
                for (key, amount) in pantry.entries_sorted() {
                    match key.unit.as_deref() {
                        Some(unit) => {
                            println!("- {} {}", format_amount(amount, Some(unit)), key.item)
                        }
                        None => println!("- {} (x{})", key.item, amount),
                    }
                }
            }
            "buy" if !rest.is_empty() => {
                shopping.push(rest);
                println!("{} lines on the list", shopping.len());
            }
            "shop" => {
                if shopping.is_empty() {
                    println!("shopping list is empty");
                }
                for (key, amount) in shopping.consolidate() {
                    match key.unit.as_deref() {
                        Some(unit) => {
                            println!("- {} {}", format_amount(amount, Some(unit)), key.item)
                        }
                        None => println!("- {} (x{})", key.item, amount),
                    }
                }
            }
            "clearshop" => {
                shopping.clear();
                println!("shopping list cleared");
            }
            "check" if !rest.is_empty() => {
                let lines: Vec<&str> = rest.split(';').map(str::trim).collect();
                let result = compare_recipe_to_pantry(lines, &pantry);
                for line in &result.matched {
                    println!("ok      {}", line);
                }
                for line in &result.short {
                    println!("short   {}", line);
                }
                for line in &result.missing {
                    println!("missing {}", line);
                }
                println!("score: {}", result.score());
            }
            "cook" if !rest.is_empty() => {
                let lines: Vec<&str> = rest.split(';').map(str::trim).collect();
                pantry.deduct_for_recipe(lines);
                println!("cooked; pantry updated");
            }
            "quit" | "exit" => break,
            "" => {}
            _ => {
                // Bare ingredient text is the common case; show how it reads.
                println!("parsed as: {:?}", parse_ingredient(input));
                println!("{}", HELP);
            }
        }

        print!("> ");
        io::stdout().flush()?;
    }

    info!("session ended");
    Ok(())
}
