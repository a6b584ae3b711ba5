//! Insert a batch of generated records, remove one, and show the tree before
//! and after.

use std::io::Write;

use streak::Streak;
use streak_random::{RecordGen, RecordGenOptions};

use crate::args::DemoOptions;
use crate::CliError;

fn write_listing<W: Write>(out: &mut W, streak: &Streak, json: bool) -> Result<(), CliError> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &streak.list_in_order())?;
        writeln!(out)?;
    } else {
        for animal in streak {
            writeln!(out, "{animal}")?;
        }
    }
    Ok(())
}

/// Runs the demonstration and returns the id that was removed, if any
/// records were drawn.
pub fn run_demo<W: Write>(opts: &DemoOptions, out: &mut W) -> Result<Option<u32>, CliError> {
    let mut records = RecordGen::new(RecordGenOptions {
        seed: opts.seed,
        ..RecordGenOptions::default()
    });

    let mut streak = Streak::new();
    let mut picked = None;
    for i in 0..opts.size {
        let animal = records.next_animal();
        if i == opts.size / 2 {
            picked = Some(animal.id);
        }
        streak.insert(animal);
    }

    writeln!(out, "Dump after inserting {} nodes:\n", opts.size)?;
    writeln!(out, "{}\n", streak.dump())?;
    writeln!(out, "List of animals after inserting {} nodes:", opts.size)?;
    write_listing(out, &streak, opts.json)?;

    if let Some(id) = picked {
        streak.remove(id);
        writeln!(out, "\nDump after removing the node with ID: {id}\n")?;
        writeln!(out, "{}\n", streak.dump())?;
        writeln!(out, "List of animals after removing the node with ID: {id}")?;
        write_listing(out, &streak, opts.json)?;
    }

    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_removes_the_middle_draw() {
        let opts = DemoOptions::default();
        let mut out = Vec::new();
        let removed = run_demo(&opts, &mut out).unwrap().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Dump after inserting 10 nodes:"));
        assert!(text.contains(&format!("Dump after removing the node with ID: {removed}")));

        let tail = text.split("List of animals after removing").nth(1).unwrap();
        assert!(!tail.contains(&format!("\n{removed}:")));
    }

    #[test]
    fn demo_json_listing_parses() {
        let opts = DemoOptions {
            size: 4,
            json: true,
            ..DemoOptions::default()
        };
        let mut out = Vec::new();
        run_demo(&opts, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let start = text.find('[').unwrap();
        let end = text.find(']').unwrap();
        let listed: Vec<streak::Animal> = serde_json::from_str(&text[start..=end]).unwrap();
        assert!(!listed.is_empty());
        assert!(listed.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn empty_demo_removes_nothing() {
        let opts = DemoOptions {
            size: 0,
            ..DemoOptions::default()
        };
        let mut out = Vec::new();
        assert_eq!(run_demo(&opts, &mut out).unwrap(), None);
    }
}
